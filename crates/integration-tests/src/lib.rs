//! Integration test harness for Order Desk.
//!
//! Builds the full application router over an in-memory SQLite database and
//! drives it with `tower::ServiceExt::oneshot`, so the tests exercise the
//! complete stack (extractors, validation, repositories, error mapping)
//! without binding a socket.

#![cfg_attr(not(test), forbid(unsafe_code))]

use std::str::FromStr;

use axum::Router;
use axum::body::Body;
use axum::http::{Method, Request, StatusCode, header};
use http_body_util::BodyExt;
use serde_json::Value;
use sqlx::sqlite::{SqliteConnectOptions, SqlitePoolOptions};
use tower::ServiceExt;

use order_desk_server::db;
use order_desk_server::routes;
use order_desk_server::state::AppState;

/// Build the application over a fresh in-memory database.
///
/// The pool is limited to a single connection so every statement sees the
/// same in-memory store.
///
/// # Panics
///
/// Panics if the pool or schema cannot be set up; tests cannot proceed then.
pub async fn test_app() -> Router {
    let options = SqliteConnectOptions::from_str("sqlite::memory:")
        .expect("valid sqlite url")
        .foreign_keys(true);
    let pool = SqlitePoolOptions::new()
        .max_connections(1)
        .connect_with(options)
        .await
        .expect("in-memory pool");

    db::init_schema(&pool).await.expect("schema bootstrap");

    routes::app(AppState::new(pool))
}

/// Send a JSON request to the app and decode the JSON response.
///
/// # Panics
///
/// Panics if the request cannot be built or the response body is not JSON.
pub async fn send_json(
    app: &Router,
    method: Method,
    uri: &str,
    body: Option<Value>,
) -> (StatusCode, Value) {
    let request = match body {
        Some(json) => Request::builder()
            .method(method)
            .uri(uri)
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(json.to_string()))
            .expect("valid request"),
        None => Request::builder()
            .method(method)
            .uri(uri)
            .body(Body::empty())
            .expect("valid request"),
    };

    let response = app
        .clone()
        .oneshot(request)
        .await
        .expect("router is infallible");
    let status = response.status();

    let bytes = response
        .into_body()
        .collect()
        .await
        .expect("body collects")
        .to_bytes();
    let value = serde_json::from_slice(&bytes).expect("JSON response body");

    (status, value)
}

/// Send a request and return only the status plus raw body text.
///
/// # Panics
///
/// Panics if the request cannot be built or the body is not UTF-8.
pub async fn send_raw(app: &Router, method: Method, uri: &str) -> (StatusCode, String) {
    let request = Request::builder()
        .method(method)
        .uri(uri)
        .body(Body::empty())
        .expect("valid request");

    let response = app
        .clone()
        .oneshot(request)
        .await
        .expect("router is infallible");
    let status = response.status();

    let bytes = response
        .into_body()
        .collect()
        .await
        .expect("body collects")
        .to_bytes();
    let text = String::from_utf8(bytes.to_vec()).expect("UTF-8 body");

    (status, text)
}

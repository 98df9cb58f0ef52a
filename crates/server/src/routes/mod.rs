//! HTTP route handlers.
//!
//! # Route Structure
//!
//! ```text
//! GET    /health          - Liveness check
//! GET    /health/ready    - Readiness check (verifies the store)
//!
//! # Customers
//! GET    /customers       - List all customers
//! POST   /customers       - Create a customer
//! GET    /customer/{id}   - Customer plus its orders
//! PUT    /customer/{id}   - Replace all customer fields
//! DELETE /customer/{id}   - Delete (blocked while orders reference it)
//!
//! # Orders
//! GET    /orders          - List all orders
//! POST   /orders          - Create an order (customer must exist)
//! GET    /order/{id}      - Order by id
//! PUT    /order/{id}      - Replace all order fields
//! DELETE /order/{id}      - Delete unconditionally
//! ```
//!
//! Every success is HTTP 200; every validation or integrity failure is
//! HTTP 400 with an `{"Error": "<message>"}` body.

pub mod customers;
pub mod orders;

use axum::extract::State;
use axum::http::StatusCode;
use axum::{Json, Router, routing::get};
use serde_json::{Value, json};
use tower_http::trace::TraceLayer;

use crate::state::AppState;

/// Success marker returned by every mutating endpoint.
pub(crate) fn success() -> Json<Value> {
    Json(json!({ "status": "success" }))
}

/// Create the customer routes router.
pub fn customer_routes() -> Router<AppState> {
    Router::new()
        .route(
            "/customers",
            get(customers::index).post(customers::create),
        )
        .route(
            "/customer/{id}",
            get(customers::show)
                .put(customers::update)
                .delete(customers::remove),
        )
}

/// Create the order routes router.
pub fn order_routes() -> Router<AppState> {
    Router::new()
        .route("/orders", get(orders::index).post(orders::create))
        .route(
            "/order/{id}",
            get(orders::show).put(orders::update).delete(orders::remove),
        )
}

/// Create the full API router.
pub fn routes() -> Router<AppState> {
    Router::new().merge(customer_routes()).merge(order_routes())
}

/// Build the complete application with health endpoints, request tracing,
/// and state applied. This is what `main` serves and what the integration
/// tests drive directly.
pub fn app(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health))
        .route("/health/ready", get(readiness))
        .merge(routes())
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

/// Liveness health check endpoint.
///
/// Returns "ok" if the server is running. Does not check dependencies.
async fn health() -> &'static str {
    "ok"
}

/// Readiness health check endpoint.
///
/// Verifies database connectivity before returning OK.
/// Returns 503 Service Unavailable if the store is not reachable.
async fn readiness(State(state): State<AppState>) -> StatusCode {
    match sqlx::query("SELECT 1").fetch_one(state.pool()).await {
        Ok(_) => StatusCode::OK,
        Err(_) => StatusCode::SERVICE_UNAVAILABLE,
    }
}

#[cfg(test)]
mod tests {
    use std::str::FromStr;

    use sqlx::sqlite::{SqliteConnectOptions, SqlitePoolOptions};

    use super::*;

    async fn test_state() -> AppState {
        let options = SqliteConnectOptions::from_str("sqlite::memory:")
            .expect("valid url")
            .foreign_keys(true);
        let pool = SqlitePoolOptions::new()
            .max_connections(1)
            .connect_with(options)
            .await
            .expect("in-memory pool");

        AppState::new(pool)
    }

    #[tokio::test]
    async fn test_readiness_reports_unavailable_store() {
        let state = test_state().await;
        assert_eq!(readiness(State(state.clone())).await, StatusCode::OK);

        state.pool().close().await;
        assert_eq!(
            readiness(State(state)).await,
            StatusCode::SERVICE_UNAVAILABLE
        );
    }
}

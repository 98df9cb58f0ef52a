//! Health endpoint tests.

use axum::http::{Method, StatusCode};

use order_desk_integration_tests::{send_raw, test_app};

#[tokio::test]
async fn test_liveness() {
    let app = test_app().await;

    let (status, body) = send_raw(&app, Method::GET, "/health").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, "ok");
}

#[tokio::test]
async fn test_readiness_with_live_store() {
    let app = test_app().await;

    let (status, _) = send_raw(&app, Method::GET, "/health/ready").await;
    assert_eq!(status, StatusCode::OK);
}

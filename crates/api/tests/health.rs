//! Health endpoint smoke tests.

mod common;

use axum::http::StatusCode;
use common::{body_json, build_test_app, get};

#[tokio::test]
async fn health_reports_ok_with_reachable_storage() {
    let app = build_test_app(Vec::new());

    let response = get(app, "/health").await;
    assert_eq!(response.status(), StatusCode::OK);

    let json = body_json(response).await;
    assert_eq!(json["status"], "ok");
    assert_eq!(json["storage_healthy"], true);
    assert!(json["version"].is_string());
}

#[tokio::test]
async fn unknown_route_is_404() {
    let app = build_test_app(Vec::new());
    let response = get(app, "/api/v1/nope").await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

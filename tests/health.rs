use axum::http::StatusCode;

mod common;

#[tokio::test]
async fn test_health_and_ready() {
    let app = common::create_test_app();

    let response = app.get("/health").await;
    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(common::body_json(response).await["status"], "ok");

    let response = app.get("/ready").await;
    assert_eq!(response.status(), StatusCode::OK);

    let body = common::body_json(response).await;
    assert_eq!(body["status"], "ready");
    assert_eq!(body["storage"], "memory");
}

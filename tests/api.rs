use axum::http::StatusCode;
use serde_json::json;

mod common;

#[tokio::test]
async fn test_api_contact_returns_stored_inquiry() -> anyhow::Result<()> {
    let app = common::create_test_app();

    let response = app
        .post_json(
            "/api/contact",
            json!({
                "name": "Amit Joshi",
                "email": "amit@example.com",
                "service": "CRM Systems",
                "message": "Our sales team needs a lead tracker."
            })
            .to_string(),
        )
        .await;
    assert_eq!(response.status(), StatusCode::OK);

    let body = common::body_json(response).await;
    assert_eq!(body["success"], true);
    assert_eq!(body["data"]["name"], "Amit Joshi");
    assert_eq!(body["data"]["service"], "CRM Systems");
    assert!(body["data"]["phone"].is_null());
    assert!(body["data"]["createdAt"].as_i64().unwrap() > 0);

    let id = body["data"]["id"].as_str().unwrap();
    let stored = app.state.command.find(id).await?;
    assert!(stored.is_some());

    Ok(())
}

#[tokio::test]
async fn test_api_contact_rejects_invalid_input() {
    let app = common::create_test_app();

    let response = app
        .post_json(
            "/api/contact",
            json!({
                "name": "",
                "email": "amit@example.com",
                "service": "Blockchain",
                "message": "Our sales team needs a lead tracker."
            })
            .to_string(),
        )
        .await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);

    let body = common::body_json(response).await;
    assert_eq!(body["success"], false);
    let error = body["error"].as_str().unwrap();
    assert!(error.starts_with("Name is required"), "{error}");
    assert!(error.contains("; "), "{error}");
}

#[tokio::test]
async fn test_api_contact_rejects_malformed_json() {
    let app = common::create_test_app();

    let response = app.post_json("/api/contact", "{\"name\": ").await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);

    let body = common::body_json(response).await;
    assert_eq!(body["success"], false);
    assert!(body["error"].is_string());
}

#[tokio::test]
async fn test_api_contact_list_is_most_recent_first() -> anyhow::Result<()> {
    let app = common::create_test_app();

    for name in ["First Client", "Second Client"] {
        let response = app
            .post_json(
                "/api/contact",
                json!({
                    "name": name,
                    "email": "client@example.com",
                    "phone": "0253 245 6789",
                    "service": "Custom Software",
                    "message": "Please call me back about a quote."
                })
                .to_string(),
            )
            .await;
        assert_eq!(response.status(), StatusCode::OK);
    }

    let inquiries = app.state.command.list(10).await?;
    let names: Vec<&str> = inquiries.iter().map(|i| i.name.as_str()).collect();
    assert_eq!(names, ["Second Client", "First Client"]);

    Ok(())
}

use axum::http::{StatusCode, header};

mod common;

#[tokio::test]
async fn test_brochure_downloads_as_pdf() {
    let app = common::create_test_app();

    let response = app.get("/api/download-brochure").await;
    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(response.headers()[header::CONTENT_TYPE], "application/pdf");
    assert_eq!(
        response.headers()[header::CONTENT_DISPOSITION],
        "attachment; filename=\"Nashik-Web-Dev-Services.pdf\""
    );

    let body = common::body_bytes(response).await;
    assert!(body.starts_with(b"%PDF-"));
}

#[tokio::test]
async fn test_brochure_downloads_as_html() {
    let app = common::create_test_app();

    let response = app.get("/api/download-brochure?format=html").await;
    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(
        response.headers()[header::CONTENT_DISPOSITION],
        "attachment; filename=\"Nashik-Web-Dev-Services.html\""
    );

    let body = common::body_string(response).await;
    assert!(body.contains("Our Development Process"));
    assert!(body.contains("Founded by Aniket Rane, Rushi Pagar, Dev Pawar, and Viraj"));
}

#[tokio::test]
async fn test_brochure_rejects_unknown_format() {
    let app = common::create_test_app();

    let response = app.get("/api/download-brochure?format=docx").await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

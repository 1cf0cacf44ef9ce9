use axum::{
    body::Body,
    http::{HeaderValue, Request, Response, header},
    middleware::Next,
};

const STATIC_EXTENSIONS: [&str; 12] = [
    ".png", ".jpg", ".jpeg", ".gif", ".svg", ".webp", ".ico", ".css", ".js", ".woff", ".woff2",
    ".ttf",
];

fn is_static_file(path: &str) -> bool {
    path.starts_with("/static/") || STATIC_EXTENSIONS.iter().any(|ext| path.ends_with(ext))
}

/// Middleware to set cache control headers
/// - Static files: cached for a year
/// - Pages, API responses and downloads: never cached
pub async fn cache_control_middleware(req: Request<Body>, next: Next) -> Response<Body> {
    let is_static = is_static_file(req.uri().path());
    let mut response = next.run(req).await;

    let success = response.status().is_success();
    let headers = response.headers_mut();

    if is_static && success {
        headers.insert(
            header::CACHE_CONTROL,
            HeaderValue::from_static("public, max-age=31536000, immutable"),
        );
    } else {
        headers.insert(
            header::CACHE_CONTROL,
            HeaderValue::from_static("no-store, no-cache, must-revalidate, proxy-revalidate"),
        );
        headers.insert(header::PRAGMA, HeaderValue::from_static("no-cache"));
        headers.insert(header::EXPIRES, HeaderValue::from_static("0"));
    }

    response
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::{Router, http::StatusCode, routing::get};
    use tower::ServiceExt;

    fn app() -> Router {
        Router::new()
            .route("/", get(|| async { "home" }))
            .route("/static/css/site.css", get(|| async { "body {}" }))
            .layer(axum::middleware::from_fn(cache_control_middleware))
    }

    async fn cache_header(uri: &str) -> (StatusCode, String) {
        let response = app()
            .oneshot(Request::get(uri).body(Body::empty()).unwrap())
            .await
            .unwrap();

        let value = response
            .headers()
            .get(header::CACHE_CONTROL)
            .and_then(|v| v.to_str().ok())
            .unwrap_or_default()
            .to_owned();

        (response.status(), value)
    }

    #[tokio::test]
    async fn static_assets_are_immutable() {
        let (status, value) = cache_header("/static/css/site.css").await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(value, "public, max-age=31536000, immutable");
    }

    #[tokio::test]
    async fn pages_are_not_cached() {
        let (_, value) = cache_header("/").await;

        assert!(value.starts_with("no-store"));
    }

    #[tokio::test]
    async fn missing_assets_are_not_cached() {
        let (status, value) = cache_header("/static/missing.js").await;

        assert_eq!(status, StatusCode::NOT_FOUND);
        assert!(value.starts_with("no-store"));
    }

    #[test]
    fn static_paths() {
        assert!(is_static_file("/static/js/site.js"));
        assert!(is_static_file("/favicon.ico"));
        assert!(!is_static_file("/api/download-brochure"));
        assert!(!is_static_file("/portfolio"));
    }
}

pub mod assets;
pub mod cli;
pub mod config;
pub mod email;
pub mod error;
pub mod middleware;
pub mod observability;
pub mod routes;
pub mod storage;
pub mod template;

pub use routes::AppState;

use axum::Router;
use tower_http::{compression::CompressionLayer, trace::TraceLayer};

/// Router with every route and the response middleware stack.
pub fn create_app(state: AppState) -> Router {
    routes::router(state)
        .layer(axum::middleware::from_fn(
            middleware::cache_control_middleware,
        ))
        // Minify HTML responses before compression
        .layer(axum::middleware::map_response(
            middleware::minify_html_middleware,
        ))
        .layer(CompressionLayer::new().br(true).gzip(true))
        .layer(TraceLayer::new_for_http())
}

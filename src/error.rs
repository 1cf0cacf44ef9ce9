use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use nashikweb_brochure::BrochureError;
use serde_json::json;
use thiserror::Error;

use crate::template::SERVER_ERROR_MESSAGE;

/// Errors surfaced by the JSON API.
#[derive(Error, Debug)]
pub enum AppError {
    #[error(transparent)]
    Contact(#[from] nashikweb_contact::Error),

    #[error("Brochure error: {0}")]
    Brochure(#[from] BrochureError),

    #[error("{0}")]
    BadRequest(String),

    #[error("Internal server error")]
    Internal(#[from] anyhow::Error),
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        match self {
            AppError::Contact(err) if err.is_validation() => (
                StatusCode::BAD_REQUEST,
                Json(json!({ "success": false, "error": err.to_string() })),
            )
                .into_response(),
            AppError::BadRequest(message) => (
                StatusCode::BAD_REQUEST,
                Json(json!({ "success": false, "error": message })),
            )
                .into_response(),
            AppError::Contact(err) => {
                tracing::error!(err = %err, "failed to store contact inquiry");

                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    Json(json!({ "success": false, "error": SERVER_ERROR_MESSAGE })),
                )
                    .into_response()
            }
            AppError::Brochure(err) => {
                tracing::error!(err = %err, "failed to generate brochure");

                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    Json(json!({ "error": "Failed to generate brochure" })),
                )
                    .into_response()
            }
            AppError::Internal(err) => {
                tracing::error!(err = %err, "internal error");

                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    Json(json!({ "success": false, "error": SERVER_ERROR_MESSAGE })),
                )
                    .into_response()
            }
        }
    }
}

use axum::{
    Json,
    extract::{State, rejection::JsonRejection},
};
use nashikweb_contact::{ContactInquiry, ContactInquiryInput};
use serde::Serialize;

use crate::{error::AppError, routes::AppState};

#[derive(Serialize)]
pub struct Submitted {
    pub success: bool,
    pub data: ContactInquiry,
}

/// POST /api/contact
pub async fn submit(
    State(app): State<AppState>,
    payload: Result<Json<ContactInquiryInput>, JsonRejection>,
) -> Result<Json<Submitted>, AppError> {
    let Json(input) = payload.map_err(|rejection| AppError::BadRequest(rejection.body_text()))?;
    let inquiry = app.submit(input).await?;

    Ok(Json(Submitted {
        success: true,
        data: inquiry,
    }))
}

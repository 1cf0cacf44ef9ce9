use axum::{
    extract::Query,
    http::header,
    response::{IntoResponse, Response},
};
use nashikweb_brochure::{Brochure, Format};
use serde::Deserialize;

use crate::{error::AppError, template::current_year};

#[derive(Deserialize, Default)]
pub struct DownloadQuery {
    #[serde(default)]
    pub format: Format,
}

/// GET /api/download-brochure
pub async fn download(Query(query): Query<DownloadQuery>) -> Result<Response, AppError> {
    let format = query.format;
    let body = Brochure::new(current_year()).render(format)?;

    tracing::info!(%format, bytes = body.len(), "brochure generated");

    Ok((
        [
            (header::CONTENT_TYPE, format.content_type().to_owned()),
            (
                header::CONTENT_DISPOSITION,
                format!("attachment; filename=\"{}\"", format.filename()),
            ),
        ],
        body,
    )
        .into_response())
}

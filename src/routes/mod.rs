use axum::{
    Router,
    http::StatusCode,
    response::IntoResponse,
    routing::{get, post},
};
use nashikweb_contact::{ContactInquiry, ContactInquiryInput};

use crate::{
    config::Config,
    email::EmailService,
    template::{NotFoundTemplate, Template},
};

mod about;
mod api;
mod brochure;
mod contact;
mod health;
mod index;
mod portfolio;
mod services;

#[derive(Clone)]
pub struct AppState {
    pub config: Config,
    pub command: nashikweb_contact::Command,
    pub email: Option<EmailService>,
}

impl AppState {
    pub fn new(config: Config, command: nashikweb_contact::Command) -> Self {
        Self {
            config,
            command,
            email: None,
        }
    }

    pub fn with_email(mut self, email: EmailService) -> Self {
        self.email = Some(email);
        self
    }

    /// Stores the inquiry, then notifies the studio in the background.
    pub async fn submit(&self, input: ContactInquiryInput) -> nashikweb_contact::Result<ContactInquiry> {
        let inquiry = self.command.submit(input).await?;

        if let Some(email) = self.email.clone() {
            let inquiry = inquiry.clone();
            tokio::spawn(async move {
                if let Err(err) = email.send_contact_notification(&inquiry).await {
                    tracing::error!(inquiry.id = %inquiry.id, err = %err, "failed to send contact notification");
                }
            });
        }

        Ok(inquiry)
    }
}

pub async fn fallback(template: Template) -> impl IntoResponse {
    template.render_status(StatusCode::NOT_FOUND, NotFoundTemplate)
}

pub fn router(app_state: AppState) -> Router {
    Router::new()
        .route("/health", get(health::health))
        .route("/ready", get(health::ready))
        .route("/", get(index::page))
        .route("/about", get(about::page))
        .route("/services", get(services::page))
        .route("/portfolio", get(portfolio::page))
        .route("/contact", get(contact::page).post(contact::action))
        .route("/api/contact", post(api::contact::submit))
        .route("/api/download-brochure", get(brochure::download))
        .nest_service("/static", crate::assets::AssetsService::new())
        .fallback(fallback)
        .with_state(app_state)
}

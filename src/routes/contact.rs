use axum::{
    extract::{Form, Query, State},
    http::StatusCode,
    response::IntoResponse,
};
use nashikweb_contact::{ContactInquiry, ContactInquiryInput, FieldError, ServiceKind};
use nashikweb_content::{self as content, Studio};
use serde::Deserialize;
use strum::VariantArray;

use crate::{
    routes::AppState,
    template::{Template, filters},
};

pub struct ServiceOption {
    pub label: &'static str,
    pub selected: bool,
}

#[derive(askama::Template)]
#[template(path = "contact.html")]
pub struct ContactTemplate {
    pub studio: &'static Studio,
    pub options: Vec<ServiceOption>,
    pub form: ContactInquiryInput,
    pub errors: Vec<FieldError>,
    pub submitted: Option<ContactInquiry>,
    pub failed: bool,
}

impl ContactTemplate {
    pub fn new(form: ContactInquiryInput) -> Self {
        let options = ServiceKind::VARIANTS
            .iter()
            .map(|kind| ServiceOption {
                label: kind.as_ref(),
                selected: form.service == kind.as_ref(),
            })
            .collect();

        Self {
            studio: content::studio(),
            options,
            form,
            errors: vec![],
            submitted: None,
            failed: false,
        }
    }

    fn error_for(&self, field: &str) -> Option<&str> {
        self.errors
            .iter()
            .find(|e| e.field == field)
            .map(|e| e.message.as_str())
    }

    fn phone(&self) -> &str {
        self.form.phone.as_deref().unwrap_or_default()
    }
}

#[derive(Deserialize, Default)]
pub struct PageQuery {
    /// Service label or its slug, preselected in the form.
    pub service: Option<String>,
}

fn preselected_service(query: &str) -> Option<&'static str> {
    ServiceKind::VARIANTS
        .iter()
        .map(|kind| kind.as_ref())
        .find(|label| label.eq_ignore_ascii_case(query) || content::slugify(label) == query)
}

pub async fn page(template: Template, Query(query): Query<PageQuery>) -> impl IntoResponse {
    let service = query
        .service
        .as_deref()
        .and_then(preselected_service)
        .unwrap_or_default();

    template.render(ContactTemplate::new(ContactInquiryInput {
        service: service.to_owned(),
        ..Default::default()
    }))
}

pub async fn action(
    template: Template,
    State(app): State<AppState>,
    Form(input): Form<ContactInquiryInput>,
) -> impl IntoResponse {
    let mut page = ContactTemplate::new(input.clone());

    match app.submit(input).await {
        Ok(inquiry) => {
            let mut page = ContactTemplate::new(ContactInquiryInput::default());
            page.submitted = Some(inquiry);

            template.render(page)
        }
        Err(err) if err.is_validation() => {
            page.errors = err.field_errors().to_vec();

            template.render_status(StatusCode::UNPROCESSABLE_ENTITY, page)
        }
        Err(err) => {
            tracing::error!(err = %err, "failed to submit contact form");
            page.failed = true;

            template.render_status(StatusCode::INTERNAL_SERVER_ERROR, page)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn preselects_by_label_or_slug() {
        assert_eq!(preselected_service("crm-systems"), Some("CRM Systems"));
        assert_eq!(preselected_service("custom software"), Some("Custom Software"));
        assert_eq!(preselected_service("plumbing"), None);
    }

    #[test]
    fn reports_first_error_per_field() {
        let mut page = ContactTemplate::new(ContactInquiryInput::default());
        page.errors = vec![FieldError::new("email", "Please enter a valid email address")];

        assert_eq!(
            page.error_for("email"),
            Some("Please enter a valid email address")
        );
        assert_eq!(page.error_for("name"), None);
        assert_eq!(page.phone(), "");
    }
}

use axum::{
    extract::FromRequestParts,
    http::{StatusCode, request::Parts},
    response::{Html, IntoResponse, Response},
};
use std::{collections::HashMap, convert::Infallible};

pub const SERVER_ERROR_MESSAGE: &str = "Something went wrong, please retry later";

pub(crate) mod filters {
    /// `"active"` when the link points at the page being rendered.
    #[askama::filter_fn]
    pub fn active(href: &str, values: &dyn askama::Values) -> askama::Result<String> {
        let is_current = askama::get_value::<String>(values, "current_path")
            .is_ok_and(|path| path.as_str() == href);

        Ok(if is_current { "active" } else { "" }.to_owned())
    }

    /// Percent-encodes a value for use inside a query string.
    #[askama::filter_fn]
    pub fn query_param(value: &str, _values: &dyn askama::Values) -> askama::Result<String> {
        Ok(urlencoding::encode(value).into_owned())
    }

    /// Lowercase, dash separated form of a label, used for element ids.
    #[askama::filter_fn]
    pub fn slug(value: &str, _values: &dyn askama::Values) -> askama::Result<String> {
        Ok(nashikweb_content::slugify(value))
    }
}

pub fn current_year() -> i32 {
    time::OffsetDateTime::now_utc().year()
}

/// Request scoped renderer: exposes the current path to the shared layout.
pub struct Template {
    current_path: String,
}

impl Template {
    pub fn new(current_path: impl Into<String>) -> Self {
        Self {
            current_path: current_path.into(),
        }
    }

    fn render_with_values<T: askama::Template>(
        &self,
        template: T,
    ) -> Result<String, askama::Error> {
        let mut values: HashMap<&str, Box<dyn std::any::Any>> = HashMap::new();
        values.insert("current_path", Box::new(self.current_path.to_owned()));

        template.render_with_values(&values)
    }

    pub fn render<T: askama::Template>(&self, template: T) -> Response {
        match self.render_with_values(template) {
            Ok(html) => Html(html).into_response(),
            Err(err) => {
                tracing::error!(err = %err, path = %self.current_path, "failed to render template");

                match self.render_with_values(ServerTemplate) {
                    Ok(html) => (StatusCode::INTERNAL_SERVER_ERROR, Html(html)).into_response(),
                    Err(_) => (StatusCode::INTERNAL_SERVER_ERROR, SERVER_ERROR_MESSAGE).into_response(),
                }
            }
        }
    }

    pub fn render_status<T: askama::Template>(&self, status: StatusCode, template: T) -> Response {
        let mut response = self.render(template);
        if response.status().is_success() {
            *response.status_mut() = status;
        }

        response
    }
}

impl<S: Send + Sync> FromRequestParts<S> for Template {
    type Rejection = Infallible;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        Ok(Template::new(parts.uri.path()))
    }
}

#[derive(askama::Template)]
#[template(path = "404.html")]
pub struct NotFoundTemplate;

#[derive(askama::Template)]
#[template(path = "500.html")]
pub struct ServerTemplate;

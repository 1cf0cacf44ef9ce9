use axum::response::IntoResponse;
use nashikweb_content::{self as content, Benefit, Service, Stat, Studio, TeamMember};

use crate::template::{Template, filters};

#[derive(askama::Template)]
#[template(path = "index.html")]
pub struct IndexTemplate {
    pub studio: &'static Studio,
    pub stats: &'static [Stat],
    pub services: &'static [Service],
    pub advantages: &'static [Benefit],
    pub founders: Vec<&'static TeamMember>,
}

impl Default for IndexTemplate {
    fn default() -> Self {
        Self {
            studio: content::studio(),
            stats: content::stats(),
            services: content::services(),
            advantages: content::advantages(),
            founders: content::founders().collect(),
        }
    }
}

pub async fn page(template: Template) -> impl IntoResponse {
    template.render(IndexTemplate::default())
}

use axum::response::IntoResponse;
use nashikweb_content::{self as content, PricingTier, ProcessStep, Service};

use crate::template::{Template, filters};

#[derive(askama::Template)]
#[template(path = "services.html")]
pub struct ServicesTemplate {
    pub services: &'static [Service],
    pub process: &'static [ProcessStep],
    pub technologies: &'static [&'static str],
    pub pricing: &'static [PricingTier],
    pub pricing_footnote: &'static str,
}

pub async fn page(template: Template) -> impl IntoResponse {
    template.render(ServicesTemplate {
        services: content::services(),
        process: content::process(),
        technologies: content::tech_highlights(),
        pricing: content::pricing(),
        pricing_footnote: content::PRICING_FOOTNOTE,
    })
}

use axum::response::IntoResponse;
use nashikweb_content::{self as content, Milestone, TeamMember, Value};

use crate::template::{Template, filters};

#[derive(askama::Template)]
#[template(path = "about.html")]
pub struct AboutTemplate {
    pub values: &'static [Value],
    pub founders: Vec<&'static TeamMember>,
    pub milestones: &'static [Milestone],
}

pub async fn page(template: Template) -> impl IntoResponse {
    template.render(AboutTemplate {
        values: content::values(),
        founders: content::founders().collect(),
        milestones: content::milestones(),
    })
}

use axum::{extract::Query, response::IntoResponse};
use nashikweb_content::{self as content, Project};
use serde::Deserialize;

use crate::template::{Template, filters};

#[derive(askama::Template)]
#[template(path = "portfolio.html")]
pub struct PortfolioTemplate {
    pub categories: Vec<&'static str>,
    pub selected: Option<String>,
    pub projects: Vec<&'static Project>,
}

impl PortfolioTemplate {
    fn is_selected(&self, category: &str) -> bool {
        self.selected
            .as_deref()
            .is_some_and(|selected| selected.eq_ignore_ascii_case(category))
    }
}

#[derive(Deserialize, Default)]
pub struct PortfolioQuery {
    pub category: Option<String>,
}

pub async fn page(template: Template, Query(query): Query<PortfolioQuery>) -> impl IntoResponse {
    let selected = query
        .category
        .map(|c| c.trim().to_owned())
        .filter(|c| !c.is_empty() && !c.eq_ignore_ascii_case("all"));

    template.render(PortfolioTemplate {
        categories: content::project_categories(),
        projects: content::projects_in(selected.as_deref()),
        selected,
    })
}

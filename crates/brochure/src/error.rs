#[derive(Debug, thiserror::Error)]
pub enum BrochureError {
    #[error("failed to render brochure template: {0}")]
    Template(#[from] askama::Error),
}

pub type Result<T, E = BrochureError> = std::result::Result<T, E>;

//! Hardcoded studio content shared by the site pages and the brochure.

mod company;
mod portfolio;
mod service;
mod team;

pub use company::*;
pub use portfolio::*;
pub use service::*;
pub use team::*;

/// Lowercase, dash separated form of a label, used for anchors and links.
pub fn slugify(value: &str) -> String {
    value
        .split(|c: char| !c.is_ascii_alphanumeric())
        .filter(|part| !part.is_empty())
        .map(str::to_ascii_lowercase)
        .collect::<Vec<_>>()
        .join("-")
}

use std::path::Path;

use nashikweb_contact::{ContactInquiryInput, store::SqliteStore};

pub async fn setup_sqlite_store(dir: &Path) -> anyhow::Result<SqliteStore> {
    let path = dir.join("inquiries.db");
    let url = format!("sqlite:{}", path.to_str().unwrap());
    let store = SqliteStore::connect(&url, 1).await?;
    store.migrate().await?;

    Ok(store)
}

#[allow(dead_code)]
pub fn input(name: impl Into<String>, service: &str) -> ContactInquiryInput {
    let name = name.into();
    ContactInquiryInput {
        email: format!("{}@example.com", name.to_lowercase().replace(' ', ".")),
        name,
        phone: None,
        service: service.to_owned(),
        message: "Looking for a quote for a new project.".to_owned(),
    }
}

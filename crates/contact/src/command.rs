use std::sync::Arc;

use time::OffsetDateTime;
use uuid::Uuid;

use crate::{ContactInquiry, ContactInquiryInput, Result, store::InquiryStore};

#[derive(Clone)]
pub struct Command(pub Arc<dyn InquiryStore>);

impl Command {
    pub fn new(store: impl InquiryStore + 'static) -> Self {
        Self(Arc::new(store))
    }

    /// Validates `input` and stores it as a new inquiry.
    pub async fn submit(&self, input: ContactInquiryInput) -> Result<ContactInquiry> {
        let valid = input.check()?;
        let inquiry = ContactInquiry::new(
            valid,
            Uuid::new_v4().to_string(),
            OffsetDateTime::now_utc().unix_timestamp(),
        );

        self.0.insert(&inquiry).await?;

        tracing::info!(
            inquiry.id = %inquiry.id,
            inquiry.service = %inquiry.service,
            store = self.0.backend(),
            "contact inquiry stored"
        );

        Ok(inquiry)
    }

    pub async fn list(&self, limit: usize) -> Result<Vec<ContactInquiry>> {
        self.0.list(limit).await
    }

    pub async fn find(&self, id: &str) -> Result<Option<ContactInquiry>> {
        self.0.find(id).await
    }

    pub async fn ping(&self) -> Result<()> {
        self.0.ping().await
    }

    pub fn backend(&self) -> &'static str {
        self.0.backend()
    }
}

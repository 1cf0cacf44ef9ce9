use tokio::sync::RwLock;

use super::InquiryStore;
use crate::{ContactInquiry, Result};

/// Keeps inquiries for the lifetime of the process.
#[derive(Default)]
pub struct MemoryStore {
    inquiries: RwLock<Vec<ContactInquiry>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub async fn len(&self) -> usize {
        self.inquiries.read().await.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.inquiries.read().await.is_empty()
    }
}

#[async_trait::async_trait]
impl InquiryStore for MemoryStore {
    async fn insert(&self, inquiry: &ContactInquiry) -> Result<()> {
        self.inquiries.write().await.push(inquiry.clone());

        Ok(())
    }

    async fn list(&self, limit: usize) -> Result<Vec<ContactInquiry>> {
        let inquiries = self.inquiries.read().await;

        Ok(inquiries.iter().rev().take(limit).cloned().collect())
    }

    async fn find(&self, id: &str) -> Result<Option<ContactInquiry>> {
        let inquiries = self.inquiries.read().await;

        Ok(inquiries.iter().find(|i| i.id == id).cloned())
    }

    async fn ping(&self) -> Result<()> {
        Ok(())
    }

    fn backend(&self) -> &'static str {
        "memory"
    }
}

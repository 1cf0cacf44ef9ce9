mod memory;
mod sqlite;

pub use memory::MemoryStore;
pub use sqlite::SqliteStore;

use crate::{ContactInquiry, Result};

/// Persistence for submitted inquiries.
#[async_trait::async_trait]
pub trait InquiryStore: Send + Sync {
    async fn insert(&self, inquiry: &ContactInquiry) -> Result<()>;

    /// Most recent first.
    async fn list(&self, limit: usize) -> Result<Vec<ContactInquiry>>;

    async fn find(&self, id: &str) -> Result<Option<ContactInquiry>>;

    async fn ping(&self) -> Result<()>;

    fn backend(&self) -> &'static str;
}

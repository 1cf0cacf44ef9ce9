use anyhow::Result;

use crate::config::{Config, StorageBackend};

/// Prints stored inquiries, most recent first.
pub async fn list(config: Config, limit: usize) -> Result<()> {
    if config.storage.backend != StorageBackend::Sqlite {
        tracing::warn!("storage backend is memory, inquiries only live inside a running server");
        return Ok(());
    }

    let store = crate::storage::open_sqlite(&config.storage).await?;
    let command = nashikweb_contact::Command::new(store.clone());
    let inquiries = command.list(limit).await?;

    if inquiries.is_empty() {
        println!("No inquiries yet.");
    }

    for inquiry in &inquiries {
        println!(
            "{}  {}  {:<22}  {} <{}>",
            inquiry.created_at_rfc3339(),
            inquiry.id,
            inquiry.service,
            inquiry.name,
            inquiry.email
        );
        if let Some(phone) = &inquiry.phone {
            println!("    phone: {phone}");
        }
        println!("    {}", inquiry.message.replace('\n', "\n    "));
    }

    store.close().await;

    Ok(())
}

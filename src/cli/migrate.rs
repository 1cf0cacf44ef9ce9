use anyhow::Result;

use crate::config::{Config, StorageBackend};

#[tracing::instrument(skip(config))]
pub async fn migrate(config: Config) -> Result<()> {
    if config.storage.backend != StorageBackend::Sqlite {
        tracing::warn!("storage backend is memory, nothing to migrate");
        return Ok(());
    }

    tracing::info!(url = %config.storage.url, "Running database migrations...");

    let store = crate::storage::open_sqlite(&config.storage).await?;
    store.close().await;

    tracing::info!("Migrations completed successfully");

    Ok(())
}

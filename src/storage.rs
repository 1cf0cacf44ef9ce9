use anyhow::{Context, Result};
use nashikweb_contact::{
    Command,
    store::{MemoryStore, SqliteStore},
};

use crate::config::{StorageBackend, StorageConfig};

/// Opens the SQLite store and makes sure its schema exists.
pub async fn open_sqlite(config: &StorageConfig) -> Result<SqliteStore> {
    let store = SqliteStore::connect(&config.url, config.max_connections)
        .await
        .with_context(|| format!("failed to open {}", config.url))?;

    store.migrate().await.context("failed to migrate inquiry schema")?;

    Ok(store)
}

/// Builds the inquiry command for the configured backend.
pub async fn open(config: &StorageConfig) -> Result<Command> {
    let command = match config.backend {
        StorageBackend::Memory => Command::new(MemoryStore::new()),
        StorageBackend::Sqlite => Command::new(open_sqlite(config).await?),
    };

    tracing::info!(backend = command.backend(), "inquiry storage ready");

    Ok(command)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn opens_sqlite_backend() {
        let dir = temp_dir::TempDir::new().unwrap();
        let config = StorageConfig {
            backend: StorageBackend::Sqlite,
            url: format!("sqlite:{}", dir.child("site.db").display()),
            max_connections: 1,
        };

        let command = open(&config).await.unwrap();

        assert_eq!(command.backend(), "sqlite");
        assert!(command.ping().await.is_ok());
        assert!(command.list(10).await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn defaults_to_memory() {
        let config = crate::config::Config::default().storage;
        let command = open(&config).await.unwrap();

        assert_eq!(command.backend(), "memory");
    }
}

//! Application state - shared across all handlers.

use std::sync::Arc;

use serde::Serialize;

use folio_core::domain::BlogPost;
use folio_core::ports::BlogRepository;
use folio_infra::InMemoryBlogRepository;
use folio_infra::seed::{self, SeedError};

use crate::config::AppConfig;

/// Which backend the blog store runs on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum StorageKind {
    Memory,
    Postgres,
}

/// Shared application state.
#[derive(Clone)]
pub struct AppState {
    pub blogs: Arc<dyn BlogRepository>,
    pub storage: StorageKind,
}

impl AppState {
    /// State backed by an in-memory store holding `seed`.
    pub fn in_memory(seed: Vec<BlogPost>) -> Self {
        Self {
            blogs: Arc::new(InMemoryBlogRepository::new(seed)),
            storage: StorageKind::Memory,
        }
    }

    /// Build the application state with the configured store.
    ///
    /// A database that cannot be reached is logged and replaced by the
    /// in-memory store. An unreadable seed file is fatal.
    pub async fn new(config: &AppConfig) -> Result<Self, SeedError> {
        let seed = seed::load(config.seed_file.as_deref()).await?;

        if let Some(state) = Self::with_database(config, &seed).await {
            return Ok(state);
        }

        tracing::info!(posts = seed.len(), "Application state initialized (memory store)");
        Ok(Self::in_memory(seed))
    }

    #[cfg(feature = "postgres")]
    async fn with_database(config: &AppConfig, seed: &[BlogPost]) -> Option<Self> {
        let db_config = config.database.as_ref()?;

        match folio_infra::database::connect(db_config).await {
            Ok(conn) => {
                let repo = folio_infra::PostgresBlogRepository::new(conn);
                if let Err(e) = repo.seed_if_empty(seed.to_vec()).await {
                    tracing::error!("Failed to seed blog database: {}", e);
                }
                tracing::info!("Application state initialized (postgres store)");
                Some(Self {
                    blogs: Arc::new(repo),
                    storage: StorageKind::Postgres,
                })
            }
            Err(e) => {
                tracing::error!(
                    "Failed to connect to database: {}. Using in-memory fallback.",
                    e
                );
                None
            }
        }
    }

    #[cfg(not(feature = "postgres"))]
    async fn with_database(config: &AppConfig, _seed: &[BlogPost]) -> Option<Self> {
        if config.database.is_some() {
            tracing::warn!("DATABASE_URL set but postgres feature is disabled. Using in-memory store.");
        }
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_default_config_uses_seeded_memory_store() {
        let config = AppConfig {
            host: "127.0.0.1".to_string(),
            port: 0,
            database: None,
            seed_file: None,
        };

        let state = AppState::new(&config).await.unwrap();
        assert_eq!(state.storage, StorageKind::Memory);
        assert_eq!(state.blogs.count().await.unwrap(), 2);
    }

    #[tokio::test]
    async fn test_missing_seed_file_is_fatal() {
        let config = AppConfig {
            host: "127.0.0.1".to_string(),
            port: 0,
            database: None,
            seed_file: Some("/nonexistent/posts.json".into()),
        };

        assert!(AppState::new(&config).await.is_err());
    }
}

//! Application configuration loaded from environment variables.

use std::env;
use std::path::PathBuf;

use folio_infra::DatabaseConfig;

/// Application configuration.
#[derive(Debug, Clone, PartialEq)]
pub struct AppConfig {
    pub host: String,
    pub port: u16,
    /// Set when `DATABASE_URL` is present; otherwise the in-memory store is used.
    pub database: Option<DatabaseConfig>,
    /// JSON file replacing the built-in seed posts.
    pub seed_file: Option<PathBuf>,
}

impl AppConfig {
    /// Load configuration from environment variables.
    pub fn from_env() -> Self {
        Self::from_vars(|key| env::var(key).ok())
    }

    fn from_vars(var: impl Fn(&str) -> Option<String>) -> Self {
        let database = var("DATABASE_URL")
            .filter(|url| !url.is_empty())
            .map(|url| {
                let mut db = DatabaseConfig::new(url);
                if let Some(max) = var("DB_MAX_CONNECTIONS").and_then(|s| s.parse().ok()) {
                    db.max_connections = max;
                }
                if let Some(min) = var("DB_MIN_CONNECTIONS").and_then(|s| s.parse().ok()) {
                    db.min_connections = min;
                }
                db
            });

        Self {
            host: var("HOST").unwrap_or_else(|| "127.0.0.1".to_string()),
            port: var("PORT").and_then(|p| p.parse().ok()).unwrap_or(8080),
            database,
            seed_file: var("BLOG_SEED_FILE")
                .filter(|p| !p.is_empty())
                .map(PathBuf::from),
        }
    }
}

//! Seed list - the posts a fresh store starts with.

use std::collections::HashSet;
use std::path::{Path, PathBuf};

use folio_core::domain::BlogPost;

const BUILTIN_SEED: &str = include_str!("../seed/posts.json");

/// Seed loading errors.
#[derive(Debug, thiserror::Error)]
pub enum SeedError {
    #[error("Failed to read seed file {path}: {source}")]
    Io {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("Invalid seed data: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("Duplicate {field} in seed data: {value}")]
    Duplicate { field: &'static str, value: String },
}

/// The built-in seed posts.
pub fn builtin() -> Result<Vec<BlogPost>, SeedError> {
    parse(BUILTIN_SEED)
}

/// Load seed posts from `path`, or the built-in list when `path` is `None`.
pub async fn load(path: Option<&Path>) -> Result<Vec<BlogPost>, SeedError> {
    let Some(path) = path else {
        return builtin();
    };

    let raw = tokio::fs::read_to_string(path)
        .await
        .map_err(|source| SeedError::Io {
            path: path.to_path_buf(),
            source,
        })?;

    let posts = parse(&raw)?;
    tracing::info!(path = %path.display(), count = posts.len(), "Loaded seed file");
    Ok(posts)
}

/// Parse a JSON array of posts, rejecting repeated ids or slugs.
pub fn parse(raw: &str) -> Result<Vec<BlogPost>, SeedError> {
    let posts: Vec<BlogPost> = serde_json::from_str(raw)?;

    let mut ids = HashSet::new();
    let mut slugs = HashSet::new();
    for post in &posts {
        if !ids.insert(post.id.as_str()) {
            return Err(SeedError::Duplicate {
                field: "id",
                value: post.id.clone(),
            });
        }
        if !slugs.insert(post.slug.as_str()) {
            return Err(SeedError::Duplicate {
                field: "slug",
                value: post.slug.clone(),
            });
        }
    }

    Ok(posts)
}

use chrono::{DateTime, Duration, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::slug::slugify;
use crate::error::DomainError;

/// Thumbnail used when a post is created without one.
pub const DEFAULT_THUMBNAIL: &str = "/placeholder.svg?height=400&width=600";

/// BlogPost entity - a single article in the store.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BlogPost {
    pub id: String,
    pub title: String,
    pub slug: String,
    pub description: String,
    pub content: String,
    pub thumbnail: String,
    pub tags: Vec<String>,
    pub published_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Input for creating a post. Empty strings count as missing.
#[derive(Debug, Clone, Default)]
pub struct NewBlogPost {
    pub title: String,
    pub content: String,
    pub description: String,
    pub slug: Option<String>,
    pub thumbnail: Option<String>,
    pub tags: Option<Vec<String>>,
}

/// Fields to overwrite on an existing post. `None` keeps the current value.
#[derive(Debug, Clone, Default)]
pub struct BlogPostPatch {
    pub title: Option<String>,
    pub slug: Option<String>,
    pub description: Option<String>,
    pub content: Option<String>,
    pub thumbnail: Option<String>,
    pub tags: Option<Vec<String>>,
}

impl BlogPost {
    /// Create a new post with a fresh id and both timestamps set to now.
    ///
    /// Fails when the title, content or description is blank, or when the
    /// title has nothing to build a slug from and no slug was supplied.
    pub fn new(draft: NewBlogPost) -> Result<Self, DomainError> {
        let missing = |s: &str| s.trim().is_empty();
        if missing(&draft.title) || missing(&draft.content) || missing(&draft.description) {
            return Err(DomainError::Validation(
                "Title, content, and description are required".to_string(),
            ));
        }

        let slug = match draft.slug.filter(|s| !s.is_empty()) {
            Some(slug) => slug,
            None => slugify(&draft.title),
        };
        if slug.is_empty() {
            return Err(DomainError::Validation(
                "Title must contain at least one letter or digit".to_string(),
            ));
        }

        let now = Utc::now();
        Ok(Self {
            id: Uuid::new_v4().to_string(),
            title: draft.title,
            slug,
            description: draft.description,
            content: draft.content,
            thumbnail: draft
                .thumbnail
                .filter(|t| !t.is_empty())
                .unwrap_or_else(|| DEFAULT_THUMBNAIL.to_string()),
            tags: draft.tags.unwrap_or_default(),
            published_at: now,
            updated_at: now,
        })
    }

    /// Shallow-merge `patch` over this post and refresh `updated_at`.
    ///
    /// `id` and `published_at` never change. Slug uniqueness is not checked here.
    pub fn apply(&mut self, patch: BlogPostPatch) {
        if let Some(title) = patch.title {
            self.title = title;
        }
        if let Some(slug) = patch.slug {
            self.slug = slug;
        }
        if let Some(description) = patch.description {
            self.description = description;
        }
        if let Some(content) = patch.content {
            self.content = content;
        }
        if let Some(thumbnail) = patch.thumbnail {
            self.thumbnail = thumbnail;
        }
        if let Some(tags) = patch.tags {
            self.tags = tags;
        }
        self.touch();
    }

    // updated_at must move forward even when the clock has not ticked.
    fn touch(&mut self) {
        let now = Utc::now();
        self.updated_at = if now > self.updated_at {
            now
        } else {
            self.updated_at + Duration::microseconds(1)
        };
    }
}

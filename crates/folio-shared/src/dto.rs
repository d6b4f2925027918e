//! Data Transfer Objects - request types for the blog API.
//!
//! Every field is optional on the wire; presence rules are enforced by the
//! handlers and the domain, so a missing field yields a 400 and not a parse error.

use serde::{Deserialize, Serialize};

/// Body of `POST /api/blogs`.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CreateBlogRequest {
    pub title: Option<String>,
    pub content: Option<String>,
    pub description: Option<String>,
    pub slug: Option<String>,
    pub thumbnail: Option<String>,
    pub tags: Option<Vec<String>>,
}

/// Body of `PUT /api/blogs`.
///
/// Unknown fields (including `publishedAt` and `updatedAt`) are ignored.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct UpdateBlogRequest {
    pub id: Option<String>,
    pub title: Option<String>,
    pub slug: Option<String>,
    pub description: Option<String>,
    pub content: Option<String>,
    pub thumbnail: Option<String>,
    pub tags: Option<Vec<String>>,
}

/// Query string of `GET /api/blogs`.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct BlogQuery {
    pub slug: Option<String>,
}

/// Query string of `DELETE /api/blogs`.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct DeleteBlogQuery {
    pub id: Option<String>,
}

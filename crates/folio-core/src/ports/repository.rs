use async_trait::async_trait;

use crate::domain::{BlogPost, BlogPostPatch};
use crate::error::RepoError;

/// Blog post repository - the store behind the blog API.
///
/// Every method is a single atomic operation against the backing store.
#[async_trait]
pub trait BlogRepository: Send + Sync {
    /// All posts in collection order.
    async fn list(&self) -> Result<Vec<BlogPost>, RepoError>;

    /// Find a post by its slug.
    async fn find_by_slug(&self, slug: &str) -> Result<Option<BlogPost>, RepoError>;

    /// Find a post by its identifier.
    async fn find_by_id(&self, id: &str) -> Result<Option<BlogPost>, RepoError>;

    /// Append a post.
    ///
    /// Fails with [`RepoError::Constraint`] if the slug or id is already taken.
    async fn create(&self, post: BlogPost) -> Result<BlogPost, RepoError>;

    /// Merge `patch` over the post with `id` and return the result.
    ///
    /// Fails with [`RepoError::NotFound`] if no such post exists.
    async fn update(&self, id: &str, patch: BlogPostPatch) -> Result<BlogPost, RepoError>;

    /// Remove the post with `id`.
    ///
    /// Fails with [`RepoError::NotFound`] if no such post exists.
    async fn delete(&self, id: &str) -> Result<(), RepoError>;

    /// Number of stored posts.
    async fn count(&self) -> Result<usize, RepoError>;
}

/// Message carried by [`RepoError::Constraint`] on a slug collision.
pub const DUPLICATE_SLUG: &str = "A blog with this slug already exists";

/// Message carried by [`RepoError::Constraint`] on an id collision.
pub const DUPLICATE_ID: &str = "A blog with this id already exists";

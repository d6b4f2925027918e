//! In-memory blog repository - the default store.

use async_trait::async_trait;
use tokio::sync::RwLock;

use folio_core::domain::{BlogPost, BlogPostPatch};
use folio_core::error::RepoError;
use folio_core::ports::{BlogRepository, DUPLICATE_ID, DUPLICATE_SLUG};

/// Blog store holding posts in a `Vec` behind an async RwLock.
///
/// Collection order is insertion order. Data is lost on process restart;
/// the store starts again from whatever seed list it is built with.
pub struct InMemoryBlogRepository {
    posts: RwLock<Vec<BlogPost>>,
}

impl InMemoryBlogRepository {
    pub fn new(seed: Vec<BlogPost>) -> Self {
        Self {
            posts: RwLock::new(seed),
        }
    }
}

impl Default for InMemoryBlogRepository {
    fn default() -> Self {
        Self::new(Vec::new())
    }
}

#[async_trait]
impl BlogRepository for InMemoryBlogRepository {
    async fn list(&self) -> Result<Vec<BlogPost>, RepoError> {
        Ok(self.posts.read().await.clone())
    }

    async fn find_by_slug(&self, slug: &str) -> Result<Option<BlogPost>, RepoError> {
        let posts = self.posts.read().await;
        Ok(posts.iter().find(|p| p.slug == slug).cloned())
    }

    async fn find_by_id(&self, id: &str) -> Result<Option<BlogPost>, RepoError> {
        let posts = self.posts.read().await;
        Ok(posts.iter().find(|p| p.id == id).cloned())
    }

    async fn create(&self, post: BlogPost) -> Result<BlogPost, RepoError> {
        // Check and append under one write lock so concurrent creates cannot
        // both claim the same slug.
        let mut posts = self.posts.write().await;

        if posts.iter().any(|p| p.slug == post.slug) {
            return Err(RepoError::Constraint(DUPLICATE_SLUG.to_string()));
        }
        if posts.iter().any(|p| p.id == post.id) {
            return Err(RepoError::Constraint(DUPLICATE_ID.to_string()));
        }

        posts.push(post.clone());
        Ok(post)
    }

    async fn update(&self, id: &str, patch: BlogPostPatch) -> Result<BlogPost, RepoError> {
        let mut posts = self.posts.write().await;
        let post = posts
            .iter_mut()
            .find(|p| p.id == id)
            .ok_or(RepoError::NotFound)?;

        post.apply(patch);
        Ok(post.clone())
    }

    async fn delete(&self, id: &str) -> Result<(), RepoError> {
        let mut posts = self.posts.write().await;
        let index = posts
            .iter()
            .position(|p| p.id == id)
            .ok_or(RepoError::NotFound)?;

        posts.remove(index);
        Ok(())
    }

    async fn count(&self) -> Result<usize, RepoError> {
        Ok(self.posts.read().await.len())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use folio_core::domain::NewBlogPost;

    fn post(title: &str) -> BlogPost {
        BlogPost::new(NewBlogPost {
            title: title.to_string(),
            content: "content".to_string(),
            description: "description".to_string(),
            ..Default::default()
        })
        .unwrap()
    }

    #[tokio::test]
    async fn test_create_appends_in_order() {
        let repo = InMemoryBlogRepository::new(crate::seed::builtin().unwrap());
        let created = repo.create(post("Hi There")).await.unwrap();

        let all = repo.list().await.unwrap();
        assert_eq!(all.len(), 3);
        assert_eq!(all.last().unwrap().id, created.id);
        assert_eq!(all[0].id, "1");
    }

    #[tokio::test]
    async fn test_duplicate_slug_is_rejected() {
        let repo = InMemoryBlogRepository::default();
        repo.create(post("Hi There")).await.unwrap();

        let err = repo.create(post("Hi There")).await.unwrap_err();
        assert!(matches!(err, RepoError::Constraint(ref msg) if msg == DUPLICATE_SLUG));
        assert_eq!(repo.count().await.unwrap(), 1);
    }

    #[tokio::test]
    async fn test_duplicate_id_is_rejected() {
        let repo = InMemoryBlogRepository::default();
        let first = repo.create(post("First")).await.unwrap();

        let mut clash = post("Second");
        clash.id = first.id;
        let err = repo.create(clash).await.unwrap_err();
        assert!(matches!(err, RepoError::Constraint(ref msg) if msg == DUPLICATE_ID));
        assert_eq!(repo.count().await.unwrap(), 1);
    }

    #[tokio::test]
    async fn test_find_by_slug() {
        let repo = InMemoryBlogRepository::default();
        let created = repo.create(post("Hi There")).await.unwrap();

        assert_eq!(repo.find_by_slug("hi-there").await.unwrap(), Some(created));
        assert_eq!(repo.find_by_slug("missing").await.unwrap(), None);
    }

    #[tokio::test]
    async fn test_update_merges_and_refreshes_timestamp() {
        let repo = InMemoryBlogRepository::default();
        let created = repo.create(post("Hi There")).await.unwrap();

        let updated = repo
            .update(
                &created.id,
                BlogPostPatch {
                    content: Some("new content".to_string()),
                    ..Default::default()
                },
            )
            .await
            .unwrap();

        assert_eq!(updated.content, "new content");
        assert_eq!(updated.title, created.title);
        assert!(updated.updated_at > created.updated_at);
        assert_eq!(
            repo.find_by_id(&created.id).await.unwrap(),
            Some(updated)
        );
    }

    #[tokio::test]
    async fn test_update_does_not_recheck_slug() {
        let repo = InMemoryBlogRepository::default();
        let first = repo.create(post("First")).await.unwrap();
        let second = repo.create(post("Second")).await.unwrap();

        let updated = repo
            .update(
                &second.id,
                BlogPostPatch {
                    slug: Some(first.slug.clone()),
                    ..Default::default()
                },
            )
            .await
            .unwrap();
        assert_eq!(updated.slug, first.slug);
    }

    #[tokio::test]
    async fn test_update_unknown_id() {
        let repo = InMemoryBlogRepository::default();
        let err = repo
            .update("nope", BlogPostPatch::default())
            .await
            .unwrap_err();
        assert!(matches!(err, RepoError::NotFound));
    }

    #[tokio::test]
    async fn test_delete_removes_exactly_one() {
        let repo = InMemoryBlogRepository::default();
        let a = repo.create(post("a")).await.unwrap();
        let b = repo.create(post("b")).await.unwrap();

        repo.delete(&a.id).await.unwrap();
        let remaining = repo.list().await.unwrap();
        assert_eq!(remaining, vec![b]);

        assert!(matches!(
            repo.delete(&a.id).await.unwrap_err(),
            RepoError::NotFound
        ));
        assert_eq!(repo.count().await.unwrap(), 1);
    }

    #[tokio::test]
    async fn test_concurrent_creates_keep_slug_unique() {
        let repo = std::sync::Arc::new(InMemoryBlogRepository::default());
        let tasks: Vec<_> = (0..8)
            .map(|_| {
                let repo = repo.clone();
                tokio::spawn(async move { repo.create(post("Same Title")).await })
            })
            .collect();

        let mut created = 0;
        for task in tasks {
            if task.await.unwrap().is_ok() {
                created += 1;
            }
        }
        assert_eq!(created, 1);
        assert_eq!(repo.count().await.unwrap(), 1);
    }
}

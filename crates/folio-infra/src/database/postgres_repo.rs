//! PostgreSQL blog repository.

use async_trait::async_trait;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, DbConn, DbErr, EntityTrait, PaginatorTrait, QueryFilter,
    QueryOrder, Select, SqlErr,
};

use folio_core::domain::{BlogPost, BlogPostPatch};
use folio_core::error::RepoError;
use folio_core::ports::{BlogRepository, DUPLICATE_ID, DUPLICATE_SLUG};

use super::entity::blog_post::{self, ActiveModel, Entity as BlogPostEntity};

/// Blog store backed by the `blog_posts` table.
///
/// Listing follows the `position` sequence, so posts come back in the order
/// they were inserted, seed list first.
pub struct PostgresBlogRepository {
    db: DbConn,
}

impl PostgresBlogRepository {
    pub fn new(db: DbConn) -> Self {
        Self { db }
    }

    /// Insert `seed` if the table is empty. Returns how many posts were inserted.
    pub async fn seed_if_empty(&self, seed: Vec<BlogPost>) -> Result<usize, RepoError> {
        if seed.is_empty() || self.count().await? > 0 {
            return Ok(0);
        }

        let inserted = seed.len();
        BlogPostEntity::insert_many(seed.into_iter().map(ActiveModel::from))
            .exec(&self.db)
            .await
            .map_err(write_error)?;

        tracing::info!(count = inserted, "Seeded blog_posts table");
        Ok(inserted)
    }
}

fn query_error(e: DbErr) -> RepoError {
    RepoError::Query(e.to_string())
}

fn write_error(e: DbErr) -> RepoError {
    // UPDATE ... RETURNING matched nothing: the row was deleted underneath us.
    if matches!(e, DbErr::RecordNotUpdated) {
        return RepoError::NotFound;
    }

    match e.sql_err() {
        Some(SqlErr::UniqueConstraintViolation(message)) => unique_violation(&message),
        _ => RepoError::Query(e.to_string()),
    }
}

/// Map a unique violation to the key it names. Postgres calls the primary key
/// constraint `blog_posts_pkey`. `position` is assigned by the database, so any
/// other violation is on the slug.
pub(crate) fn unique_violation(message: &str) -> RepoError {
    if message.contains("blog_posts_pkey") {
        RepoError::Constraint(DUPLICATE_ID.to_string())
    } else {
        RepoError::Constraint(DUPLICATE_SLUG.to_string())
    }
}

pub(crate) fn in_collection_order() -> Select<BlogPostEntity> {
    BlogPostEntity::find().order_by_asc(blog_post::Column::Position)
}

#[async_trait]
impl BlogRepository for PostgresBlogRepository {
    async fn list(&self) -> Result<Vec<BlogPost>, RepoError> {
        let models = in_collection_order()
            .all(&self.db)
            .await
            .map_err(query_error)?;

        Ok(models.into_iter().map(Into::into).collect())
    }

    async fn find_by_slug(&self, slug: &str) -> Result<Option<BlogPost>, RepoError> {
        tracing::debug!(slug = %slug, "Finding blog post by slug");

        let result = BlogPostEntity::find()
            .filter(blog_post::Column::Slug.eq(slug))
            .one(&self.db)
            .await
            .map_err(query_error)?;

        Ok(result.map(Into::into))
    }

    async fn find_by_id(&self, id: &str) -> Result<Option<BlogPost>, RepoError> {
        let result = BlogPostEntity::find_by_id(id.to_owned())
            .one(&self.db)
            .await
            .map_err(query_error)?;

        Ok(result.map(Into::into))
    }

    async fn create(&self, post: BlogPost) -> Result<BlogPost, RepoError> {
        if self.find_by_slug(&post.slug).await?.is_some() {
            return Err(RepoError::Constraint(DUPLICATE_SLUG.to_string()));
        }

        let model = ActiveModel::from(post)
            .insert(&self.db)
            .await
            .map_err(write_error)?;

        Ok(model.into())
    }

    async fn update(&self, id: &str, patch: BlogPostPatch) -> Result<BlogPost, RepoError> {
        let mut post = self.find_by_id(id).await?.ok_or(RepoError::NotFound)?;
        post.apply(patch);

        let model = ActiveModel::from(post)
            .update(&self.db)
            .await
            .map_err(write_error)?;

        Ok(model.into())
    }

    async fn delete(&self, id: &str) -> Result<(), RepoError> {
        let result = BlogPostEntity::delete_by_id(id.to_owned())
            .exec(&self.db)
            .await
            .map_err(query_error)?;

        if result.rows_affected == 0 {
            return Err(RepoError::NotFound);
        }

        Ok(())
    }

    async fn count(&self) -> Result<usize, RepoError> {
        let count = BlogPostEntity::find()
            .count(&self.db)
            .await
            .map_err(query_error)?;

        Ok(count as usize)
    }
}

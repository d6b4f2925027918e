//! Blog CRUD handlers, all mounted on `/api/blogs`.

use actix_web::{HttpResponse, web};

use folio_core::domain::{BlogPost, BlogPostPatch, NewBlogPost};
use folio_shared::SuccessResponse;
use folio_shared::dto::{BlogQuery, CreateBlogRequest, DeleteBlogQuery, UpdateBlogRequest};

use crate::middleware::error::{AppError, AppResult};
use crate::state::AppState;

fn require_id(id: Option<String>) -> AppResult<String> {
    id.filter(|id| !id.is_empty())
        .ok_or_else(|| AppError::BadRequest("Blog ID is required".to_string()))
}

/// GET /api/blogs and GET /api/blogs?slug=...
pub async fn list_or_get(
    state: web::Data<AppState>,
    query: web::Query<BlogQuery>,
) -> AppResult<HttpResponse> {
    match query.into_inner().slug.filter(|s| !s.is_empty()) {
        Some(slug) => {
            let post = state
                .blogs
                .find_by_slug(&slug)
                .await?
                .ok_or(AppError::NotFound)?;
            Ok(HttpResponse::Ok().json(post))
        }
        None => Ok(HttpResponse::Ok().json(state.blogs.list().await?)),
    }
}

/// POST /api/blogs
pub async fn create(
    state: web::Data<AppState>,
    body: web::Json<CreateBlogRequest>,
) -> AppResult<HttpResponse> {
    let req = body.into_inner();

    let post = BlogPost::new(NewBlogPost {
        title: req.title.unwrap_or_default(),
        content: req.content.unwrap_or_default(),
        description: req.description.unwrap_or_default(),
        slug: req.slug,
        thumbnail: req.thumbnail,
        tags: req.tags,
    })?;

    let created = state.blogs.create(post).await?;
    tracing::info!(id = %created.id, slug = %created.slug, "Blog post created");

    Ok(HttpResponse::Created().json(created))
}

/// PUT /api/blogs
pub async fn update(
    state: web::Data<AppState>,
    body: web::Json<UpdateBlogRequest>,
) -> AppResult<HttpResponse> {
    let req = body.into_inner();
    let id = require_id(req.id)?;

    let patch = BlogPostPatch {
        title: req.title,
        slug: req.slug,
        description: req.description,
        content: req.content,
        thumbnail: req.thumbnail,
        tags: req.tags,
    };

    let updated = state.blogs.update(&id, patch).await?;
    tracing::info!(id = %updated.id, slug = %updated.slug, "Blog post updated");

    Ok(HttpResponse::Ok().json(updated))
}

/// DELETE /api/blogs?id=...
pub async fn delete(
    state: web::Data<AppState>,
    query: web::Query<DeleteBlogQuery>,
) -> AppResult<HttpResponse> {
    let id = require_id(query.into_inner().id)?;

    state.blogs.delete(&id).await?;
    tracing::info!(id = %id, "Blog post deleted");

    Ok(HttpResponse::Ok().json(SuccessResponse::ok()))
}

//! Domain entities - the core business objects.

mod blog_post;
mod slug;

pub use blog_post::{BlogPost, BlogPostPatch, DEFAULT_THUMBNAIL, NewBlogPost};
pub use slug::slugify;

//! Blog repository implementations - in-memory and PostgreSQL.

mod memory;

pub use memory::InMemoryBlogRepository;

#[cfg(feature = "postgres")]
pub use crate::database::PostgresBlogRepository;

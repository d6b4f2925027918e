//! # Folio Infrastructure
//!
//! Concrete implementations of the ports defined in `folio-core`.
//!
//! ## Feature Flags
//!
//! - `full` (default) - All features enabled
//! - `minimal` - No external dependencies, in-memory store only
//! - `postgres` - PostgreSQL blog store via SeaORM

pub mod blog;
pub mod database;
pub mod seed;

pub use blog::InMemoryBlogRepository;
pub use database::DatabaseConfig;

#[cfg(feature = "postgres")]
pub use blog::PostgresBlogRepository;

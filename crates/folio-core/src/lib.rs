//! # Folio Core
//!
//! The domain layer of the Folio blog service.
//! This crate contains the blog post rules with zero infrastructure dependencies.

pub mod domain;
pub mod error;
pub mod ports;

pub use error::DomainError;

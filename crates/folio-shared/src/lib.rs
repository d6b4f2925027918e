//! # Folio Shared
//!
//! Wire types shared by the blog API and its clients.

pub mod dto;
pub mod response;

pub use response::{ErrorResponse, SuccessResponse};

//! Standardized API response bodies.

use serde::{Deserialize, Serialize};

/// Error body returned with every non-2xx status: `{"error": "..."}`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub error: String,
}

impl ErrorResponse {
    pub fn new(error: impl Into<String>) -> Self {
        Self {
            error: error.into(),
        }
    }

    // Common error constructors
    pub fn not_found() -> Self {
        Self::new("Blog not found")
    }

    pub fn internal_error() -> Self {
        Self::new("Internal server error")
    }
}

/// Acknowledgment body for operations with nothing else to return.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SuccessResponse {
    pub success: bool,
}

impl SuccessResponse {
    pub fn ok() -> Self {
        Self { success: true }
    }
}

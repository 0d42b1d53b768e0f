//! # Handler Errors
//!
//! Domain failures raised by [`super::ItemHandler`]. Each kind has a fixed
//! HTTP status and error tag, and remembers the identifier that caused it.

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Result type for handler operations
pub type ItemResult<T> = Result<T, ItemError>;

/// Handler-level errors
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ItemError {
    /// The requested item is not found
    #[error("The requested item ({item_id}) is not found.")]
    NotFound { item_id: String },

    /// The requested item is found
    #[error("The requested item ({item_id}) is found.")]
    Found { item_id: String },
}

impl ItemError {
    pub fn not_found(item_id: impl Into<String>) -> Self {
        ItemError::NotFound {
            item_id: item_id.into(),
        }
    }

    pub fn found(item_id: impl Into<String>) -> Self {
        ItemError::Found {
            item_id: item_id.into(),
        }
    }

    /// HTTP status code for this error
    pub fn status_code(&self) -> u16 {
        match self {
            ItemError::NotFound { .. } => 404,
            ItemError::Found { .. } => 409,
        }
    }

    /// Machine-readable error tag
    pub fn error_tag(&self) -> &'static str {
        match self {
            ItemError::NotFound { .. } => "ItemNotFound",
            ItemError::Found { .. } => "ItemFound",
        }
    }

    /// Human description with the identifier interpolated
    pub fn description(&self) -> String {
        self.to_string()
    }

    /// The identifier that triggered the error
    pub fn item_id(&self) -> &str {
        match self {
            ItemError::NotFound { item_id } | ItemError::Found { item_id } => item_id,
        }
    }
}

/// Wire form of an error: `{ "error", "description", "item_id" }`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ErrorBody {
    pub error: String,
    pub description: String,
    pub item_id: String,
}

impl From<&ItemError> for ErrorBody {
    fn from(err: &ItemError) -> Self {
        Self {
            error: err.error_tag().to_string(),
            description: err.description(),
            item_id: err.item_id().to_string(),
        }
    }
}

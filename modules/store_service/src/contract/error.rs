//! Contract error types for store service
//!
//! These errors are transport-agnostic and used for inter-module communication.

/// Store service domain errors
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum StoreError {
    /// Product or order not found
    #[error("{resource} not found: {id}")]
    NotFound {
        /// Resource type (product, order)
        resource: String,
        /// Resource identifier
        id: String,
    },
    /// Request failed validation
    #[error("Validation error: {message}")]
    Validation {
        /// Validation error message
        message: String,
    },
    /// Write was rejected or had no effect
    #[error("Conflict: {reason}")]
    Conflict {
        /// Conflict reason
        reason: String,
    },
    /// Storage or other unexpected failure
    #[error("Internal error: {detail}")]
    Internal {
        /// Underlying cause, only shown to clients in development
        detail: String,
    },
}

impl StoreError {
    pub fn not_found(resource: &str, id: impl ToString) -> Self {
        Self::NotFound {
            resource: resource.to_string(),
            id: id.to_string(),
        }
    }

    pub fn validation(message: impl Into<String>) -> Self {
        Self::Validation {
            message: message.into(),
        }
    }

    /// Wrap a repository failure, keeping its full context chain
    pub fn internal(error: &anyhow::Error) -> Self {
        Self::Internal {
            detail: format!("{error:#}"),
        }
    }
}

//! Error types for the coordination layer

use thiserror::Error;

use crate::userdb::UserError;

/// Errors surfaced by the user operations
#[derive(Error, Debug)]
pub enum CoordinationError {
    /// Required fields are missing from the request payload
    #[error("Validation error: {0}")]
    Validation(String),

    /// Resource not found with context
    #[error("Resource not found: {resource_type} {resource_id}")]
    ResourceNotFound {
        resource_type: String,
        resource_id: String,
    },

    /// Error from the user database operations
    #[error("User error: {0}")]
    UserError(UserError),
}

impl CoordinationError {
    pub(crate) fn user_not_found(user_id: i64) -> Self {
        Self::ResourceNotFound {
            resource_type: "User".to_string(),
            resource_id: user_id.to_string(),
        }
    }

    /// Whether this error reports an absent resource
    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::ResourceNotFound { .. })
    }

    /// Log the error and return self
    ///
    /// Client mistakes log at warn, storage failures at error.
    pub fn log(self) -> Self {
        match &self {
            Self::Validation(msg) => tracing::warn!("Validation error: {}", msg),
            Self::ResourceNotFound {
                resource_type,
                resource_id,
            } => tracing::warn!("Resource not found: {} {}", resource_type, resource_id),
            Self::UserError(err) => tracing::error!("User error: {}", err),
        }
        self
    }
}

impl From<UserError> for CoordinationError {
    fn from(err: UserError) -> Self {
        let error = Self::UserError(err);
        tracing::error!("{}", error);
        error
    }
}

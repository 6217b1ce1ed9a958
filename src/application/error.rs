// src/application/error.rs
use crate::domain::errors::DomainError;
use thiserror::Error;

pub type ApplicationResult<T> = Result<T, ApplicationError>;

/// Failures surfaced by the command and query services.
///
/// `NotFound` and `BadRequest` are the expected outcomes of business rules
/// (missing references, self-comments, duplicate likes). Store failures arrive
/// as `Domain(DomainError::Persistence)` and are passed through untouched.
#[derive(Debug, Error)]
pub enum ApplicationError {
    #[error(transparent)]
    Domain(#[from] DomainError),

    #[error("validation error: {0}")]
    Validation(String),

    #[error("{0}")]
    BadRequest(String),

    #[error("{0}")]
    NotFound(String),
}

impl ApplicationError {
    pub fn validation(msg: impl Into<String>) -> Self {
        Self::Validation(msg.into())
    }

    pub fn bad_request(msg: impl Into<String>) -> Self {
        Self::BadRequest(msg.into())
    }

    pub fn not_found(msg: impl Into<String>) -> Self {
        Self::NotFound(msg.into())
    }

    /// True for store failures the caller cannot act on.
    pub const fn is_internal(&self) -> bool {
        matches!(self, Self::Domain(err) if err.is_persistence())
    }
}

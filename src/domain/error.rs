use thiserror::Error;

#[derive(Debug, Error)]
pub enum DomainError {
    /// Missing or malformed required input (400)
    #[error("{0}")]
    Validation(String),

    /// Missing/invalid/expired token or bad credentials (401)
    #[error("{0}")]
    Unauthorized(String),

    /// Uniqueness violation, e.g. duplicate email (409)
    #[error("{0}")]
    Conflict(String),

    /// Unknown item, cart line or id (404)
    #[error("{0}")]
    NotFound(String),

    /// Unexpected failure, e.g. persistence I/O (500); details are logged,
    /// never sent to clients
    #[error("{0}")]
    Internal(String),
}

/// Result type for domain operations
pub type DomainResult<T> = Result<T, DomainError>;

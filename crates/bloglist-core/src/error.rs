//! Domain-level error types.

use thiserror::Error;
use uuid::Uuid;

use crate::ports::AuthError;

/// Message returned when a bearer credential is missing or cannot be resolved.
pub const INVALID_TOKEN: &str = "invalid token";

/// Message returned when someone other than the owner tries to delete a post.
pub const ONLY_CREATOR_MAY_DELETE: &str = "a blog can only be deleted by it's creator";

/// Message returned when login fails for any reason.
pub const INVALID_LOGIN: &str = "invalid username or password";

/// Message returned when a username is already taken.
pub const USERNAME_TAKEN: &str = "expected `username` to be unique";

/// Message returned when a registration secret is too short.
pub const PASSWORD_TOO_SHORT: &str = "password must be at least 3 characters long";

/// Domain errors - business logic failures.
#[derive(Debug, Error)]
pub enum DomainError {
    #[error("Entity not found: {entity_type} with id {id}")]
    NotFound { entity_type: &'static str, id: Uuid },

    #[error("{0}")]
    Validation(String),

    #[error("{0}")]
    Duplicate(String),

    #[error("{0}")]
    Unauthorized(String),

    #[error("{}", INVALID_LOGIN)]
    InvalidCredentials,

    /// A paired post/author write only partially succeeded.
    #[error("Consistency failure: {0}")]
    Consistency(String),

    #[error(transparent)]
    Repository(#[from] RepoError),

    #[error("Internal error: {0}")]
    Internal(String),
}

impl DomainError {
    pub fn invalid_token() -> Self {
        Self::Unauthorized(INVALID_TOKEN.to_string())
    }
}

impl From<AuthError> for DomainError {
    fn from(err: AuthError) -> Self {
        match err {
            AuthError::MissingToken | AuthError::InvalidToken(_) => Self::invalid_token(),
            AuthError::InvalidCredentials => Self::InvalidCredentials,
            AuthError::HashingError(msg) => Self::Internal(msg),
        }
    }
}

/// Repository-level errors.
#[derive(Debug, Error)]
pub enum RepoError {
    #[error("Database connection failed: {0}")]
    Connection(String),

    #[error("Query execution failed: {0}")]
    Query(String),

    #[error("Entity not found")]
    NotFound,

    #[error("Constraint violation: {0}")]
    Constraint(String),
}

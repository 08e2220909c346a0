//! Authentication ports.

use uuid::Uuid;

/// Claims carried by a bearer token.
#[derive(Debug, Clone)]
pub struct TokenClaims {
    pub author_id: Uuid,
    pub username: String,
    pub issued_at: i64,
    pub exp: i64,
}

/// Token service trait for signing and verifying bearer credentials.
pub trait TokenService: Send + Sync {
    /// Generate a signed token for an author.
    fn generate_token(&self, author_id: Uuid, username: &str) -> Result<String, AuthError>;

    /// Validate and decode a token.
    ///
    /// A token that verifies but carries no author id is an `InvalidToken`.
    fn validate_token(&self, token: &str) -> Result<TokenClaims, AuthError>;
}

/// Password hashing service.
pub trait PasswordService: Send + Sync {
    /// Hash a plain text password.
    fn hash(&self, password: &str) -> Result<String, AuthError>;

    /// Verify a password against a hash.
    fn verify(&self, password: &str, hash: &str) -> Result<bool, AuthError>;
}

/// Authentication errors.
#[derive(Debug, thiserror::Error)]
pub enum AuthError {
    #[error("Invalid credentials")]
    InvalidCredentials,

    #[error("Invalid token: {0}")]
    InvalidToken(String),

    #[error("Missing authorization token")]
    MissingToken,

    #[error("Hashing error: {0}")]
    HashingError(String),
}

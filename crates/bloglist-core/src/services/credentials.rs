use std::sync::Arc;

use uuid::Uuid;

use crate::error::DomainError;
use crate::ports::{AuthorRepository, PasswordService, TokenService};

/// Result of a successful login.
#[derive(Debug, Clone)]
pub struct IssuedCredential {
    pub token: String,
    pub author_id: Uuid,
    pub username: String,
    pub name: Option<String>,
}

/// Verifies username/secret pairs and mints bearer tokens.
#[derive(Clone)]
pub struct CredentialIssuer {
    authors: Arc<dyn AuthorRepository>,
    passwords: Arc<dyn PasswordService>,
    tokens: Arc<dyn TokenService>,
    /// Verified against when the username is unknown, so both failures cost
    /// one hash verification.
    decoy_hash: Option<String>,
}

impl CredentialIssuer {
    pub fn new(
        authors: Arc<dyn AuthorRepository>,
        passwords: Arc<dyn PasswordService>,
        tokens: Arc<dyn TokenService>,
    ) -> Self {
        let decoy_hash = passwords
            .hash(&Uuid::new_v4().to_string())
            .inspect_err(|e| tracing::warn!(error = %e, "Could not prepare decoy hash"))
            .ok();

        Self {
            authors,
            passwords,
            tokens,
            decoy_hash,
        }
    }

    /// Unknown usernames and wrong secrets both yield `InvalidCredentials`.
    pub async fn issue(
        &self,
        username: &str,
        secret: &str,
    ) -> Result<IssuedCredential, DomainError> {
        let Some(author) = self.authors.find_by_username(username).await? else {
            if let Some(decoy) = &self.decoy_hash {
                let _ = self.passwords.verify(secret, decoy);
            }
            tracing::warn!("Login rejected: unknown username");
            return Err(DomainError::InvalidCredentials);
        };

        if !self.passwords.verify(secret, &author.secret_hash)? {
            tracing::warn!(author_id = %author.id, "Login rejected: wrong secret");
            return Err(DomainError::InvalidCredentials);
        }

        let token = self
            .tokens
            .generate_token(author.id, &author.username)
            .map_err(|e| DomainError::Internal(e.to_string()))?;

        tracing::info!(author_id = %author.id, "Credential issued");

        Ok(IssuedCredential {
            token,
            author_id: author.id,
            username: author.username,
            name: author.name,
        })
    }
}

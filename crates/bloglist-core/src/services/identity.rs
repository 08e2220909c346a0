use std::sync::Arc;

use uuid::Uuid;

use crate::ports::{AuthError, TokenService};

/// Turns a raw bearer credential into the caller's author id.
///
/// The resolved id is not checked against the author store; callers that
/// need the author must load it and handle its absence.
#[derive(Clone)]
pub struct IdentityResolver {
    tokens: Arc<dyn TokenService>,
}

impl IdentityResolver {
    pub fn new(tokens: Arc<dyn TokenService>) -> Self {
        Self { tokens }
    }

    pub fn resolve(&self, raw: Option<&str>) -> Result<Uuid, AuthError> {
        let token = raw
            .map(str::trim)
            .filter(|t| !t.is_empty())
            .ok_or(AuthError::MissingToken)?;

        let claims = self.tokens.validate_token(token)?;
        if claims.author_id.is_nil() {
            return Err(AuthError::InvalidToken("token carries no identity".to_string()));
        }

        Ok(claims.author_id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::StaticTokens;

    fn resolver() -> IdentityResolver {
        IdentityResolver::new(Arc::new(StaticTokens))
    }

    #[test]
    fn test_missing_token() {
        assert!(matches!(resolver().resolve(None), Err(AuthError::MissingToken)));
        assert!(matches!(
            resolver().resolve(Some("  ")),
            Err(AuthError::MissingToken)
        ));
    }

    #[test]
    fn test_undecodable_token() {
        assert!(matches!(
            resolver().resolve(Some("garbage")),
            Err(AuthError::InvalidToken(_))
        ));
    }

    #[test]
    fn test_token_without_identity() {
        let token = StaticTokens::token_for(Uuid::nil());
        assert!(matches!(
            resolver().resolve(Some(&token)),
            Err(AuthError::InvalidToken(_))
        ));
    }

    #[test]
    fn test_resolves_unknown_author_id() {
        let id = Uuid::new_v4();
        let token = StaticTokens::token_for(id);
        assert_eq!(resolver().resolve(Some(&token)).unwrap(), id);
    }
}

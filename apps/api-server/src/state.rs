//! Application state - shared across all handlers.

use std::sync::Arc;

use bloglist_core::ports::{AuthorRepository, PasswordService, PostRepository, TokenService};
use bloglist_core::services::{AuthorService, CredentialIssuer, PostService};
use bloglist_infra::{
    Argon2PasswordService, InMemoryAuthorRepository, InMemoryPostRepository, JwtTokenService,
};

#[cfg(feature = "postgres")]
use bloglist_infra::database::{
    DatabaseConnections, PostgresAuthorRepository, PostgresPostRepository,
};

use crate::config::AppConfig;

/// Shared application state.
///
/// Cloning is cheap; every clone shares the same repositories and the same
/// per-author write locks.
#[derive(Clone)]
pub struct AppState {
    pub posts: Arc<PostService>,
    pub authors: AuthorService,
    pub credentials: CredentialIssuer,
}

type Repositories = (Arc<dyn PostRepository>, Arc<dyn AuthorRepository>);

fn in_memory_repositories() -> Repositories {
    (
        Arc::new(InMemoryPostRepository::new()),
        Arc::new(InMemoryAuthorRepository::new()),
    )
}

impl AppState {
    /// Wire the services on top of the given adapters.
    pub fn build(
        posts: Arc<dyn PostRepository>,
        authors: Arc<dyn AuthorRepository>,
        tokens: Arc<dyn TokenService>,
        passwords: Arc<dyn PasswordService>,
    ) -> Self {
        Self {
            posts: Arc::new(PostService::new(
                posts.clone(),
                authors.clone(),
                tokens.clone(),
            )),
            authors: AuthorService::new(authors.clone(), posts, passwords.clone()),
            credentials: CredentialIssuer::new(authors, passwords, tokens),
        }
    }

    /// Build the application state with appropriate implementations.
    pub async fn new(config: &AppConfig) -> Self {
        let tokens: Arc<dyn TokenService> = Arc::new(JwtTokenService::new(config.jwt.clone()));
        let passwords: Arc<dyn PasswordService> = Arc::new(Argon2PasswordService::from_env());

        #[cfg(feature = "postgres")]
        let (posts, authors): Repositories = {
            if let Some(db_config) = &config.database {
                match DatabaseConnections::init(db_config).await {
                    Ok(connections) => (
                        Arc::new(PostgresPostRepository::new(connections.main.clone())),
                        Arc::new(PostgresAuthorRepository::new(connections.main)),
                    ),
                    Err(e) => {
                        tracing::error!(
                            "Failed to connect to database: {}. Using in-memory fallback.",
                            e
                        );
                        in_memory_repositories()
                    }
                }
            } else {
                tracing::warn!("DATABASE_URL not set. Running without database (in-memory mode).");
                in_memory_repositories()
            }
        };

        #[cfg(not(feature = "postgres"))]
        let (posts, authors): Repositories = {
            if config.database.is_some() {
                tracing::warn!("DATABASE_URL ignored: built without the postgres feature");
            }
            tracing::info!("Running without postgres feature - using in-memory repositories");
            in_memory_repositories()
        };

        tracing::info!("Application state initialized");

        Self::build(posts, authors, tokens, passwords)
    }
}

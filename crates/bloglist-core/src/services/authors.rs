use std::collections::HashMap;
use std::sync::Arc;

use crate::domain::{Author, Post};
use crate::error::{DomainError, PASSWORD_TOO_SHORT, RepoError, USERNAME_TAKEN};
use crate::ports::{AuthorRepository, BaseRepository, PasswordService, PostRepository};

/// Minimum length of a username.
pub const MIN_USERNAME_LEN: usize = 3;

/// Minimum length of a registration secret.
pub const MIN_SECRET_LEN: usize = 3;

/// Registration input.
#[derive(Debug, Clone, Default)]
pub struct RegisterAuthor {
    pub username: Option<String>,
    pub name: Option<String>,
    pub secret: Option<String>,
}

/// An author together with the posts its `post_ids` resolve to.
#[derive(Debug, Clone)]
pub struct AuthorWithPosts {
    pub author: Author,
    pub posts: Vec<Post>,
}

/// Registration and listing of authors.
#[derive(Clone)]
pub struct AuthorService {
    authors: Arc<dyn AuthorRepository>,
    posts: Arc<dyn PostRepository>,
    passwords: Arc<dyn PasswordService>,
}

impl AuthorService {
    pub fn new(
        authors: Arc<dyn AuthorRepository>,
        posts: Arc<dyn PostRepository>,
        passwords: Arc<dyn PasswordService>,
    ) -> Self {
        Self {
            authors,
            posts,
            passwords,
        }
    }

    pub async fn register(&self, req: RegisterAuthor) -> Result<Author, DomainError> {
        // Checked here because only the hash reaches the store.
        let secret = req
            .secret
            .filter(|s| s.chars().count() >= MIN_SECRET_LEN)
            .ok_or_else(|| DomainError::Validation(PASSWORD_TOO_SHORT.to_string()))?;

        let username = req.username.unwrap_or_default();
        if username.chars().count() < MIN_USERNAME_LEN {
            return Err(DomainError::Validation(format!(
                "username must be at least {MIN_USERNAME_LEN} characters long"
            )));
        }

        if self.authors.find_by_username(&username).await?.is_some() {
            return Err(DomainError::Duplicate(USERNAME_TAKEN.to_string()));
        }

        let secret_hash = self.passwords.hash(&secret)?;
        let author = Author::new(username, req.name, secret_hash);

        let saved = self.authors.save(author).await.map_err(|e| match e {
            // Lost a race with a concurrent registration of the same username.
            RepoError::Constraint(_) => DomainError::Duplicate(USERNAME_TAKEN.to_string()),
            other => DomainError::Repository(other),
        })?;

        tracing::info!(author_id = %saved.id, "Author registered");
        Ok(saved)
    }

    /// Every author with its posts. Ids that no longer resolve are skipped.
    pub async fn list_with_posts(&self) -> Result<Vec<AuthorWithPosts>, DomainError> {
        let authors = self.authors.find_all().await?;
        let mut posts: HashMap<_, _> = self
            .posts
            .find_all()
            .await?
            .into_iter()
            .map(|p| (p.id, p))
            .collect();

        Ok(authors
            .into_iter()
            .map(|author| {
                let owned = author
                    .post_ids
                    .iter()
                    .filter_map(|id| posts.remove(id))
                    .collect();
                AuthorWithPosts {
                    author,
                    posts: owned,
                }
            })
            .collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::{MemoryAuthors, MemoryPosts, PlainPasswords};

    fn service() -> (AuthorService, Arc<MemoryAuthors>, Arc<MemoryPosts>) {
        let authors = Arc::new(MemoryAuthors::default());
        let posts = Arc::new(MemoryPosts::default());
        let service = AuthorService::new(authors.clone(), posts.clone(), Arc::new(PlainPasswords));
        (service, authors, posts)
    }

    fn root() -> RegisterAuthor {
        RegisterAuthor {
            username: Some("root".into()),
            name: Some("admin".into()),
            secret: Some("sekret".into()),
        }
    }

    #[tokio::test]
    async fn test_register_hashes_secret() {
        let (service, _, _) = service();

        let author = service.register(root()).await.unwrap();

        assert_eq!(author.username, "root");
        assert_ne!(author.secret_hash, "sekret");
        assert!(PlainPasswords.verify("sekret", &author.secret_hash).unwrap());
        assert!(author.post_ids.is_empty());
    }

    #[tokio::test]
    async fn test_register_rejects_short_secret() {
        let (service, authors, _) = service();

        let err = service
            .register(RegisterAuthor {
                secret: Some("p".into()),
                ..root()
            })
            .await
            .unwrap_err();

        assert!(matches!(&err, DomainError::Validation(msg) if msg == PASSWORD_TOO_SHORT));
        assert!(authors.find_all().await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_register_rejects_short_username() {
        let (service, _, _) = service();

        let err = service
            .register(RegisterAuthor {
                username: Some("ro".into()),
                ..root()
            })
            .await
            .unwrap_err();

        assert!(matches!(err, DomainError::Validation(_)));
    }

    #[tokio::test]
    async fn test_register_duplicate_username() {
        let (service, authors, _) = service();
        service.register(root()).await.unwrap();

        let err = service
            .register(RegisterAuthor {
                name: Some("superUser".into()),
                ..root()
            })
            .await
            .unwrap_err();

        assert!(matches!(&err, DomainError::Duplicate(msg) if msg.contains("unique")));
        assert_eq!(authors.find_all().await.unwrap().len(), 1);
    }

    #[tokio::test]
    async fn test_list_with_posts_skips_dangling_ids() {
        let (service, authors, posts) = service();
        let mut author = service.register(root()).await.unwrap();

        let post = crate::domain::PostInput {
            title: Some("React patterns".into()),
            url: Some("https://reactpatterns.com/".into()),
            ..Default::default()
        }
        .into_post(author.id)
        .unwrap();
        posts.save(post.clone()).await.unwrap();

        author.attach_post(post.id);
        author.attach_post(uuid::Uuid::new_v4());
        authors.save(author).await.unwrap();

        let listed = service.list_with_posts().await.unwrap();
        assert_eq!(listed.len(), 1);
        assert_eq!(listed[0].posts, vec![post]);
    }
}

//! In-process test doubles for the ports.

use std::sync::atomic::{AtomicBool, Ordering};

use async_trait::async_trait;
use tokio::sync::RwLock;
use uuid::Uuid;

use crate::domain::{Author, Post};
use crate::error::RepoError;
use crate::ports::{
    AuthError, AuthorRepository, BaseRepository, PasswordService, PostRepository, TokenClaims,
    TokenService,
};

#[derive(Default)]
pub struct MemoryPosts {
    store: RwLock<Vec<Post>>,
}

#[async_trait]
impl BaseRepository<Post, Uuid> for MemoryPosts {
    async fn find_by_id(&self, id: Uuid) -> Result<Option<Post>, RepoError> {
        tokio::task::yield_now().await;
        Ok(self.store.read().await.iter().find(|p| p.id == id).cloned())
    }

    async fn find_all(&self) -> Result<Vec<Post>, RepoError> {
        Ok(self.store.read().await.clone())
    }

    async fn save(&self, post: Post) -> Result<Post, RepoError> {
        tokio::task::yield_now().await;
        let mut store = self.store.write().await;
        match store.iter_mut().find(|p| p.id == post.id) {
            Some(existing) => *existing = post.clone(),
            None => store.push(post.clone()),
        }
        Ok(post)
    }

    async fn delete(&self, id: Uuid) -> Result<(), RepoError> {
        let mut store = self.store.write().await;
        let before = store.len();
        store.retain(|p| p.id != id);
        if store.len() == before {
            return Err(RepoError::NotFound);
        }
        Ok(())
    }
}

impl PostRepository for MemoryPosts {}

/// Author store whose writes can be switched to fail.
#[derive(Default)]
pub struct MemoryAuthors {
    store: RwLock<Vec<Author>>,
    fail_saves: AtomicBool,
}

impl MemoryAuthors {
    pub fn fail_saves(&self, fail: bool) {
        self.fail_saves.store(fail, Ordering::SeqCst);
    }
}

#[async_trait]
impl BaseRepository<Author, Uuid> for MemoryAuthors {
    async fn find_by_id(&self, id: Uuid) -> Result<Option<Author>, RepoError> {
        tokio::task::yield_now().await;
        Ok(self.store.read().await.iter().find(|a| a.id == id).cloned())
    }

    async fn find_all(&self) -> Result<Vec<Author>, RepoError> {
        Ok(self.store.read().await.clone())
    }

    async fn save(&self, author: Author) -> Result<Author, RepoError> {
        tokio::task::yield_now().await;
        if self.fail_saves.load(Ordering::SeqCst) {
            return Err(RepoError::Connection("author store unavailable".to_string()));
        }

        let mut store = self.store.write().await;
        if store
            .iter()
            .any(|a| a.username == author.username && a.id != author.id)
        {
            return Err(RepoError::Constraint("username".to_string()));
        }
        match store.iter_mut().find(|a| a.id == author.id) {
            Some(existing) => *existing = author.clone(),
            None => store.push(author.clone()),
        }
        Ok(author)
    }

    async fn delete(&self, id: Uuid) -> Result<(), RepoError> {
        self.store.write().await.retain(|a| a.id != id);
        Ok(())
    }
}

#[async_trait]
impl AuthorRepository for MemoryAuthors {
    async fn find_by_username(&self, username: &str) -> Result<Option<Author>, RepoError> {
        Ok(self
            .store
            .read()
            .await
            .iter()
            .find(|a| a.username == username)
            .cloned())
    }
}

/// Unsigned tokens of the form `token:<author id>`.
pub struct StaticTokens;

impl StaticTokens {
    pub fn token_for(author_id: Uuid) -> String {
        format!("token:{author_id}")
    }
}

impl TokenService for StaticTokens {
    fn generate_token(&self, author_id: Uuid, _username: &str) -> Result<String, AuthError> {
        Ok(Self::token_for(author_id))
    }

    fn validate_token(&self, token: &str) -> Result<TokenClaims, AuthError> {
        let author_id = token
            .strip_prefix("token:")
            .and_then(|id| Uuid::parse_str(id).ok())
            .ok_or_else(|| AuthError::InvalidToken("malformed".to_string()))?;

        Ok(TokenClaims {
            author_id,
            username: String::new(),
            issued_at: 0,
            exp: i64::MAX,
        })
    }
}

/// Reversible "hash" so tests stay fast.
pub struct PlainPasswords;

impl PasswordService for PlainPasswords {
    fn hash(&self, password: &str) -> Result<String, AuthError> {
        Ok(format!("plain${password}"))
    }

    fn verify(&self, password: &str, hash: &str) -> Result<bool, AuthError> {
        Ok(hash.strip_prefix("plain$") == Some(password))
    }
}

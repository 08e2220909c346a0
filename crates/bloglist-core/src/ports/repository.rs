use async_trait::async_trait;
use uuid::Uuid;

use crate::domain::{Author, Post};
use crate::error::RepoError;

/// Generic repository trait defining standard CRUD operations.
#[async_trait]
pub trait BaseRepository<T, ID>: Send + Sync {
    /// Find an entity by its unique ID.
    async fn find_by_id(&self, id: ID) -> Result<Option<T>, RepoError>;

    /// Return every stored entity in insertion order.
    async fn find_all(&self) -> Result<Vec<T>, RepoError>;

    /// Save an entity (create or update).
    async fn save(&self, entity: T) -> Result<T, RepoError>;

    /// Delete an entity by its ID.
    async fn delete(&self, id: ID) -> Result<(), RepoError>;
}

/// Author repository with domain-specific methods.
#[async_trait]
pub trait AuthorRepository: BaseRepository<Author, Uuid> {
    /// Find an author by username. Usernames are unique.
    async fn find_by_username(&self, username: &str) -> Result<Option<Author>, RepoError>;
}

/// Post repository. Ownership lookups go through `Author::post_ids`.
pub trait PostRepository: BaseRepository<Post, Uuid> {}

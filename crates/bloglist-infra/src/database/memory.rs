//! In-memory repositories - used when no database is configured.

use std::collections::HashMap;

use async_trait::async_trait;
use tokio::sync::RwLock;
use uuid::Uuid;

use bloglist_core::domain::{Author, Post};
use bloglist_core::error::RepoError;
use bloglist_core::ports::{AuthorRepository, BaseRepository, PostRepository};

/// A value that can live in an [`InMemoryRepository`].
pub trait Record: Clone + Send + Sync + 'static {
    fn id(&self) -> Uuid;

    /// Whether storing `self` next to `other` would break a uniqueness rule.
    fn conflicts_with(&self, _other: &Self) -> bool {
        false
    }
}

impl Record for Post {
    fn id(&self) -> Uuid {
        self.id
    }
}

impl Record for Author {
    fn id(&self) -> Uuid {
        self.id
    }

    fn conflicts_with(&self, other: &Self) -> bool {
        self.id != other.id && self.username == other.username
    }
}

struct Table<T> {
    rows: HashMap<Uuid, T>,
    /// Insertion order, so scans are stable.
    order: Vec<Uuid>,
}

/// Keyed store behind an async `RwLock`.
///
/// Data is lost on process restart.
pub struct InMemoryRepository<T> {
    table: RwLock<Table<T>>,
}

/// In-memory post repository.
pub type InMemoryPostRepository = InMemoryRepository<Post>;

/// In-memory author repository. Enforces unique usernames.
pub type InMemoryAuthorRepository = InMemoryRepository<Author>;

impl<T> InMemoryRepository<T> {
    pub fn new() -> Self {
        Self {
            table: RwLock::new(Table {
                rows: HashMap::new(),
                order: Vec::new(),
            }),
        }
    }
}

impl<T> Default for InMemoryRepository<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Record> InMemoryRepository<T> {
    async fn scan(&self, pred: impl Fn(&T) -> bool) -> Vec<T> {
        let table = self.table.read().await;
        table
            .order
            .iter()
            .filter_map(|id| table.rows.get(id))
            .filter(|row| pred(row))
            .cloned()
            .collect()
    }
}

#[async_trait]
impl<T: Record> BaseRepository<T, Uuid> for InMemoryRepository<T> {
    async fn find_by_id(&self, id: Uuid) -> Result<Option<T>, RepoError> {
        Ok(self.table.read().await.rows.get(&id).cloned())
    }

    async fn find_all(&self) -> Result<Vec<T>, RepoError> {
        Ok(self.scan(|_| true).await)
    }

    async fn save(&self, entity: T) -> Result<T, RepoError> {
        let mut table = self.table.write().await;

        if table.rows.values().any(|row| entity.conflicts_with(row)) {
            return Err(RepoError::Constraint("Entity already exists".to_string()));
        }

        let id = entity.id();
        if table.rows.insert(id, entity.clone()).is_none() {
            table.order.push(id);
        }

        Ok(entity)
    }

    async fn delete(&self, id: Uuid) -> Result<(), RepoError> {
        let mut table = self.table.write().await;

        if table.rows.remove(&id).is_none() {
            return Err(RepoError::NotFound);
        }
        table.order.retain(|row_id| *row_id != id);

        Ok(())
    }
}

#[async_trait]
impl AuthorRepository for InMemoryAuthorRepository {
    async fn find_by_username(&self, username: &str) -> Result<Option<Author>, RepoError> {
        Ok(self
            .scan(|a| a.username == username)
            .await
            .into_iter()
            .next())
    }
}

impl PostRepository for InMemoryPostRepository {}

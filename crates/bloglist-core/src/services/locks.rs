use std::collections::HashMap;
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

use tokio::sync::{Mutex as AsyncMutex, OwnedMutexGuard};
use uuid::Uuid;

type LockTable = HashMap<Uuid, Arc<AsyncMutex<()>>>;

/// Per-author write locks.
///
/// Holding an author's guard serializes every read-modify-write of that
/// author's `post_ids` within this process. Different authors never contend.
/// An entry lives only while someone holds or waits for it.
#[derive(Default)]
pub struct AuthorLocks {
    locks: Mutex<LockTable>,
}

/// Exclusive access to one author's post set. Released on drop.
pub struct AuthorGuard<'a> {
    locks: &'a AuthorLocks,
    author_id: Uuid,
    guard: Option<OwnedMutexGuard<()>>,
}

impl AuthorLocks {
    pub fn new() -> Self {
        Self::default()
    }

    fn table(&self) -> MutexGuard<'_, LockTable> {
        // The table is only touched in short, non-panicking sections.
        self.locks.lock().unwrap_or_else(PoisonError::into_inner)
    }

    /// Wait for exclusive access to the author's post set.
    pub async fn lock(&self, author_id: Uuid) -> AuthorGuard<'_> {
        let lock = self.table().entry(author_id).or_default().clone();

        AuthorGuard {
            locks: self,
            author_id,
            guard: Some(lock.lock_owned().await),
        }
    }

    #[cfg(test)]
    fn len(&self) -> usize {
        self.table().len()
    }
}

impl Drop for AuthorGuard<'_> {
    fn drop(&mut self) {
        let mut table = self.locks.table();
        self.guard.take();

        // Waiters hold their own clone, so a count of one means only the
        // table still refers to the lock.
        let idle = table
            .get(&self.author_id)
            .is_some_and(|lock| Arc::strong_count(lock) == 1);
        if idle {
            table.remove(&self.author_id);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Duration;

    #[tokio::test]
    async fn test_same_author_is_serialized() {
        let locks = AuthorLocks::new();
        let author = Uuid::new_v4();

        let _guard = locks.lock(author).await;
        let second = tokio::time::timeout(Duration::from_millis(20), locks.lock(author)).await;
        assert!(second.is_err());
    }

    #[tokio::test]
    async fn test_different_authors_do_not_contend() {
        let locks = AuthorLocks::new();

        let _first = locks.lock(Uuid::new_v4()).await;
        let second =
            tokio::time::timeout(Duration::from_millis(20), locks.lock(Uuid::new_v4())).await;
        assert!(second.is_ok());
    }

    #[tokio::test]
    async fn test_released_locks_are_forgotten() {
        let locks = AuthorLocks::new();

        for _ in 0..10 {
            drop(locks.lock(Uuid::new_v4()).await);
        }

        assert_eq!(locks.len(), 0);
    }

    #[tokio::test]
    async fn test_lock_kept_while_another_task_waits() {
        let locks = Arc::new(AuthorLocks::new());
        let author = Uuid::new_v4();

        let first = locks.lock(author).await;
        let waiter = {
            let locks = locks.clone();
            tokio::spawn(async move {
                let _guard = locks.lock(author).await;
            })
        };
        tokio::time::sleep(Duration::from_millis(20)).await;

        drop(first);
        assert_eq!(locks.len(), 1);

        waiter.await.unwrap();
        assert_eq!(locks.len(), 0);
    }
}

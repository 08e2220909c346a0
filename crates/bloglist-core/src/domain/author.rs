use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Author entity - a registered identity that owns posts.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Author {
    pub id: Uuid,
    pub username: String,
    pub name: Option<String>,
    pub secret_hash: String,
    /// Ids of the posts whose `owner_id` is this author.
    pub post_ids: Vec<Uuid>,
    pub created_at: DateTime<Utc>,
}

impl Author {
    /// Create a new author with a generated ID and no posts.
    pub fn new(username: String, name: Option<String>, secret_hash: String) -> Self {
        Self {
            id: Uuid::new_v4(),
            username,
            name,
            secret_hash,
            post_ids: Vec::new(),
            created_at: Utc::now(),
        }
    }

    pub fn owns(&self, post_id: Uuid) -> bool {
        self.post_ids.contains(&post_id)
    }

    /// Record ownership of a post. Appending an id already present is a no-op.
    pub fn attach_post(&mut self, post_id: Uuid) {
        if !self.owns(post_id) {
            self.post_ids.push(post_id);
        }
    }

    /// Drop a post id. Returns whether it was present.
    pub fn detach_post(&mut self, post_id: Uuid) -> bool {
        let before = self.post_ids.len();
        self.post_ids.retain(|id| *id != post_id);
        self.post_ids.len() != before
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_attach_and_detach_post() {
        let mut author = Author::new("root".into(), None, "hash".into());
        let first = Uuid::new_v4();
        let second = Uuid::new_v4();

        author.attach_post(first);
        author.attach_post(second);
        author.attach_post(first);
        assert_eq!(author.post_ids, vec![first, second]);

        assert!(author.detach_post(first));
        assert!(!author.detach_post(first));
        assert_eq!(author.post_ids, vec![second]);
    }
}

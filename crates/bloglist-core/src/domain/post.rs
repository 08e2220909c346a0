use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::error::DomainError;

/// Byline used when a post is created without one.
pub const DEFAULT_BYLINE: &str = "unknown";

/// Largest like count a post may carry. Stores keep likes as a signed 64-bit
/// integer.
pub const MAX_LIKES: u64 = i64::MAX as u64;

/// Post entity - a bookmarked blog entry owned by the author who created it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Post {
    pub id: Uuid,
    pub title: String,
    /// Free-text byline. Not related to `owner_id`.
    pub author: String,
    pub url: String,
    pub likes: u64,
    pub owner_id: Uuid,
}

/// Fields supplied when creating a post.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct PostInput {
    pub title: Option<String>,
    pub author: Option<String>,
    pub url: Option<String>,
    pub likes: Option<u64>,
}

/// Fields supplied when editing a post.
///
/// A field replaces the stored value only when it is present and truthy, so
/// `likes: Some(0)` and `title: Some("")` leave the post unchanged.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct PostEdits {
    pub title: Option<String>,
    pub author: Option<String>,
    pub url: Option<String>,
    pub likes: Option<u64>,
}

fn truthy(value: Option<String>) -> Option<String> {
    value.filter(|s| !s.is_empty())
}

fn check_likes(likes: Option<u64>) -> Result<Option<u64>, DomainError> {
    match likes {
        Some(likes) if likes > MAX_LIKES => Err(DomainError::Validation(format!(
            "`likes` must not exceed {MAX_LIKES}"
        ))),
        likes => Ok(likes),
    }
}

impl PostInput {
    /// Validate the input and build a post owned by `owner_id`.
    pub fn into_post(self, owner_id: Uuid) -> Result<Post, DomainError> {
        let title = truthy(self.title)
            .ok_or_else(|| DomainError::Validation("`title` is required".to_string()))?;
        let url = truthy(self.url)
            .ok_or_else(|| DomainError::Validation("`url` is required".to_string()))?;
        let likes = check_likes(self.likes)?;

        Ok(Post {
            id: Uuid::new_v4(),
            title,
            author: truthy(self.author).unwrap_or_else(|| DEFAULT_BYLINE.to_string()),
            url,
            likes: likes.unwrap_or(0),
            owner_id,
        })
    }
}

impl Post {
    /// Merge edits into the post. `id` and `owner_id` never change.
    ///
    /// Rejected edits leave the post untouched.
    pub fn apply(&mut self, edits: PostEdits) -> Result<(), DomainError> {
        let likes = check_likes(edits.likes)?;

        if let Some(title) = truthy(edits.title) {
            self.title = title;
        }
        if let Some(author) = truthy(edits.author) {
            self.author = author;
        }
        if let Some(url) = truthy(edits.url) {
            self.url = url;
        }
        if let Some(likes) = likes.filter(|l| *l != 0) {
            self.likes = likes;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn input() -> PostInput {
        PostInput {
            title: Some("React patterns".into()),
            author: Some("Michael Chan".into()),
            url: Some("https://reactpatterns.com/".into()),
            likes: Some(7),
        }
    }

    #[test]
    fn test_into_post_keeps_fields() {
        let owner = Uuid::new_v4();
        let post = input().into_post(owner).unwrap();

        assert_eq!(post.title, "React patterns");
        assert_eq!(post.author, "Michael Chan");
        assert_eq!(post.url, "https://reactpatterns.com/");
        assert_eq!(post.likes, 7);
        assert_eq!(post.owner_id, owner);
    }

    #[test]
    fn test_into_post_defaults() {
        let post = PostInput {
            author: None,
            likes: None,
            ..input()
        }
        .into_post(Uuid::new_v4())
        .unwrap();

        assert_eq!(post.author, DEFAULT_BYLINE);
        assert_eq!(post.likes, 0);
    }

    #[test]
    fn test_into_post_requires_title_and_url() {
        let missing_title = PostInput {
            title: None,
            ..input()
        };
        assert!(matches!(
            missing_title.into_post(Uuid::new_v4()),
            Err(DomainError::Validation(_))
        ));

        let empty_url = PostInput {
            url: Some(String::new()),
            ..input()
        };
        assert!(matches!(
            empty_url.into_post(Uuid::new_v4()),
            Err(DomainError::Validation(_))
        ));
    }

    #[test]
    fn test_apply_ignores_falsy_edits() {
        let mut post = input().into_post(Uuid::new_v4()).unwrap();
        let before = post.clone();

        post.apply(PostEdits {
            title: Some(String::new()),
            author: None,
            url: None,
            likes: Some(0),
        })
        .unwrap();

        assert_eq!(post, before);
    }

    #[test]
    fn test_apply_overrides_truthy_edits() {
        let mut post = input().into_post(Uuid::new_v4()).unwrap();
        let id = post.id;
        let owner = post.owner_id;

        post.apply(PostEdits {
            title: Some("Clean code".into()),
            likes: Some(8),
            ..Default::default()
        })
        .unwrap();

        assert_eq!(post.title, "Clean code");
        assert_eq!(post.likes, 8);
        assert_eq!(post.author, "Michael Chan");
        assert_eq!(post.id, id);
        assert_eq!(post.owner_id, owner);
    }

    #[test]
    fn test_likes_beyond_storable_range() {
        let too_many = PostInput {
            likes: Some(MAX_LIKES + 1),
            ..input()
        };
        assert!(matches!(
            too_many.into_post(Uuid::new_v4()),
            Err(DomainError::Validation(_))
        ));

        let at_limit = PostInput {
            likes: Some(MAX_LIKES),
            ..input()
        };
        assert_eq!(at_limit.into_post(Uuid::new_v4()).unwrap().likes, MAX_LIKES);

        let mut post = input().into_post(Uuid::new_v4()).unwrap();
        let before = post.clone();
        let result = post.apply(PostEdits {
            title: Some("Clean code".into()),
            likes: Some(u64::MAX),
            ..Default::default()
        });

        assert!(matches!(result, Err(DomainError::Validation(_))));
        assert_eq!(post, before);
    }
}

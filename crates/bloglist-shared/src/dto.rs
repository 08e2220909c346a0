//! Data Transfer Objects - request/response types for the API.
//!
//! Every entity leaves the server with a public `id` and never with its
//! secret hash.

use serde::{Deserialize, Serialize};

/// Request to register a new author.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct RegisterAuthorRequest {
    #[serde(default)]
    pub username: Option<String>,
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default, alias = "secret")]
    pub password: Option<String>,
}

/// Request to login.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct LoginRequest {
    #[serde(default)]
    pub username: String,
    #[serde(default, alias = "secret")]
    pub password: String,
}

/// Response to a successful login.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoginResponse {
    pub token: String,
    pub username: String,
    pub name: Option<String>,
}

/// A freshly registered author. `posts` holds post ids.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AuthorResponse {
    pub id: String,
    pub username: String,
    pub name: Option<String>,
    pub posts: Vec<String>,
}

/// Projection of a post embedded in an author listing.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PostSummary {
    pub id: String,
    pub title: String,
    pub author: String,
    pub url: String,
}

/// An author with its posts expanded.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AuthorWithPostsResponse {
    pub id: String,
    pub username: String,
    pub name: Option<String>,
    pub posts: Vec<PostSummary>,
}

/// Request to create a post.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CreatePostRequest {
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default)]
    pub author: Option<String>,
    #[serde(default)]
    pub url: Option<String>,
    #[serde(default)]
    pub likes: Option<u64>,
}

/// Request to edit a post. Absent, empty or zero fields are left alone.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct UpdatePostRequest {
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default)]
    pub author: Option<String>,
    #[serde(default)]
    pub url: Option<String>,
    #[serde(default)]
    pub likes: Option<u64>,
}

/// A post. `user` is the owning author's id.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PostResponse {
    pub id: String,
    pub title: String,
    pub author: String,
    pub url: String,
    pub likes: u64,
    pub user: String,
}

/// Owner projection embedded in a post listing.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OwnerSummary {
    pub id: String,
    pub username: String,
    pub name: Option<String>,
}

/// A post with its owner expanded. `user` is absent if the owner is gone.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PostWithOwnerResponse {
    pub id: String,
    pub title: String,
    pub author: String,
    pub url: String,
    pub likes: u64,
    pub user: Option<OwnerSummary>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_register_accepts_secret_alias() {
        let req: RegisterAuthorRequest =
            serde_json::from_str(r#"{"username":"root","secret":"sekret"}"#).unwrap();
        assert_eq!(req.password.as_deref(), Some("sekret"));
        assert_eq!(req.name, None);
    }

    #[test]
    fn test_create_post_likes_optional() {
        let req: CreatePostRequest =
            serde_json::from_str(r#"{"title":"t","url":"u"}"#).unwrap();
        assert_eq!(req.likes, None);
        assert_eq!(req.author, None);
    }
}

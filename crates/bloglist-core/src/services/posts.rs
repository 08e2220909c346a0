use std::collections::HashMap;
use std::sync::Arc;

use uuid::Uuid;

use crate::domain::{Author, Post, PostEdits, PostInput};
use crate::error::{DomainError, ONLY_CREATOR_MAY_DELETE};
use crate::ports::{AuthorRepository, BaseRepository, PostRepository, TokenService};

use super::identity::IdentityResolver;
use super::locks::AuthorLocks;

/// A post paired with its owner, if the owner still exists.
#[derive(Debug, Clone)]
pub struct PostWithOwner {
    pub post: Post,
    pub owner: Option<Author>,
}

/// Creates, edits and deletes posts.
///
/// Every write that touches an author's `post_ids` runs under that author's
/// lock and is paired with the post write, so at rest `author.post_ids`
/// matches the posts whose `owner_id` is the author.
pub struct PostService {
    posts: Arc<dyn PostRepository>,
    authors: Arc<dyn AuthorRepository>,
    identity: IdentityResolver,
    locks: AuthorLocks,
}

impl PostService {
    pub fn new(
        posts: Arc<dyn PostRepository>,
        authors: Arc<dyn AuthorRepository>,
        tokens: Arc<dyn TokenService>,
    ) -> Self {
        Self {
            posts,
            authors,
            identity: IdentityResolver::new(tokens),
            locks: AuthorLocks::new(),
        }
    }

    /// Create a post owned by the caller.
    pub async fn create(
        &self,
        credential: Option<&str>,
        input: PostInput,
    ) -> Result<Post, DomainError> {
        let author_id = self.identity.resolve(credential).map_err(|e| {
            tracing::warn!(error = %e, "Post creation rejected");
            DomainError::invalid_token()
        })?;

        let _guard = self.locks.lock(author_id).await;

        let author = self.authors.find_by_id(author_id).await?;
        if author.is_none() {
            tracing::warn!(%author_id, "Token resolves to a missing author, creating post anyway");
        }

        let post = input.into_post(author_id)?;
        let post = self.posts.save(post).await?;

        if let Some(mut author) = author {
            author.attach_post(post.id);
            if let Err(e) = self.authors.save(author).await {
                tracing::error!(
                    post_id = %post.id,
                    %author_id,
                    error = %e,
                    "Author write failed after post creation"
                );
                self.undo_create(&post).await;
                return Err(DomainError::Consistency(format!(
                    "post {} could not be attached to author {}: {}",
                    post.id, author_id, e
                )));
            }
        }

        tracing::info!(post_id = %post.id, %author_id, "Post created");
        Ok(post)
    }

    async fn undo_create(&self, post: &Post) {
        if let Err(e) = self.posts.delete(post.id).await {
            tracing::error!(post_id = %post.id, error = %e, "Rollback failed, post is orphaned");
        }
    }

    /// Edit a post. Anyone may edit any post; only truthy fields apply.
    pub async fn update(&self, id: Uuid, edits: PostEdits) -> Result<Post, DomainError> {
        let owner_id = self.get(id).await?.owner_id;

        // `save` upserts, so the read-modify-write must not interleave with
        // the owner's delete.
        let _guard = self.locks.lock(owner_id).await;

        let mut post = self.get(id).await?;
        post.apply(edits)?;
        let post = self.posts.save(post).await?;

        tracing::info!(post_id = %post.id, "Post updated");
        Ok(post)
    }

    /// Delete a post. Only its owner may do so.
    pub async fn delete(&self, credential: Option<&str>, id: Uuid) -> Result<(), DomainError> {
        let author_id = self.identity.resolve(credential).map_err(|e| {
            tracing::warn!(error = %e, "Post deletion rejected");
            DomainError::invalid_token()
        })?;

        let _guard = self.locks.lock(author_id).await;

        let author = self.authors.find_by_id(author_id).await?;
        let post = self.posts.find_by_id(id).await?;

        let (mut author, post) = match (author, post) {
            (Some(author), Some(post)) if post.owner_id == author.id => (author, post),
            _ => {
                tracing::warn!(post_id = %id, %author_id, "Post deletion by non-owner");
                return Err(DomainError::Unauthorized(ONLY_CREATOR_MAY_DELETE.to_string()));
            }
        };

        self.posts.delete(post.id).await?;

        author.detach_post(post.id);
        if let Err(e) = self.authors.save(author).await {
            tracing::error!(
                post_id = %post.id,
                %author_id,
                error = %e,
                "Author write failed after post deletion"
            );
            let post_id = post.id;
            if let Err(restore) = self.posts.save(post).await {
                tracing::error!(
                    %post_id,
                    error = %restore,
                    "Rollback failed, author references a deleted post"
                );
            }
            return Err(DomainError::Consistency(format!(
                "post {post_id} could not be detached from author {author_id}: {e}"
            )));
        }

        tracing::info!(post_id = %id, %author_id, "Post deleted");
        Ok(())
    }

    pub async fn get(&self, id: Uuid) -> Result<Post, DomainError> {
        self.posts.find_by_id(id).await?.ok_or(DomainError::NotFound {
            entity_type: "post",
            id,
        })
    }

    pub async fn list(&self) -> Result<Vec<Post>, DomainError> {
        Ok(self.posts.find_all().await?)
    }

    /// Every post with its owning author.
    pub async fn list_with_owners(&self) -> Result<Vec<PostWithOwner>, DomainError> {
        let posts = self.posts.find_all().await?;
        let authors: HashMap<_, _> = self
            .authors
            .find_all()
            .await?
            .into_iter()
            .map(|a| (a.id, a))
            .collect();

        Ok(posts
            .into_iter()
            .map(|post| PostWithOwner {
                owner: authors.get(&post.owner_id).cloned(),
                post,
            })
            .collect())
    }
}

//! Post handlers.

use actix_web::{HttpResponse, web};
use uuid::Uuid;

use bloglist_core::domain::{Post, PostEdits, PostInput};
use bloglist_core::stats;
use bloglist_shared::dto::{
    CreatePostRequest, OwnerSummary, PostResponse, PostWithOwnerResponse, UpdatePostRequest,
};

use crate::middleware::auth::BearerToken;
use crate::middleware::error::{AppError, AppResult};
use crate::state::AppState;

fn parse_id(raw: &str) -> AppResult<Uuid> {
    Uuid::parse_str(raw).map_err(|_| AppError::BadRequest("malformatted id".to_string()))
}

fn post_response(post: Post) -> PostResponse {
    PostResponse {
        id: post.id.to_string(),
        title: post.title,
        author: post.author,
        url: post.url,
        likes: post.likes,
        user: post.owner_id.to_string(),
    }
}

/// GET /api/posts
pub async fn list(state: web::Data<AppState>) -> AppResult<HttpResponse> {
    let posts: Vec<_> = state
        .posts
        .list_with_owners()
        .await?
        .into_iter()
        .map(|entry| PostWithOwnerResponse {
            id: entry.post.id.to_string(),
            title: entry.post.title,
            author: entry.post.author,
            url: entry.post.url,
            likes: entry.post.likes,
            user: entry.owner.map(|owner| OwnerSummary {
                id: owner.id.to_string(),
                username: owner.username,
                name: owner.name,
            }),
        })
        .collect();

    Ok(HttpResponse::Ok().json(posts))
}

/// GET /api/posts/{id}
pub async fn get(state: web::Data<AppState>, path: web::Path<String>) -> AppResult<HttpResponse> {
    let id = parse_id(&path)?;
    let post = state.posts.get(id).await?;
    Ok(HttpResponse::Ok().json(post_response(post)))
}

/// GET /api/posts/stats
pub async fn summary(state: web::Data<AppState>) -> AppResult<HttpResponse> {
    let posts = state.posts.list().await?;
    Ok(HttpResponse::Ok().json(stats::summarize(&posts)))
}

/// POST /api/posts - requires a bearer token
pub async fn create(
    state: web::Data<AppState>,
    token: BearerToken,
    body: web::Json<CreatePostRequest>,
) -> AppResult<HttpResponse> {
    let req = body.into_inner();
    let input = PostInput {
        title: req.title,
        author: req.author,
        url: req.url,
        likes: req.likes,
    };

    let post = state.posts.create(token.as_deref(), input).await?;

    Ok(HttpResponse::Created().json(post_response(post)))
}

/// PUT /api/posts/{id} - no authentication
pub async fn update(
    state: web::Data<AppState>,
    path: web::Path<String>,
    body: web::Json<UpdatePostRequest>,
) -> AppResult<HttpResponse> {
    let id = parse_id(&path)?;
    let req = body.into_inner();
    let edits = PostEdits {
        title: req.title,
        author: req.author,
        url: req.url,
        likes: req.likes,
    };

    let post = state.posts.update(id, edits).await?;

    Ok(HttpResponse::Ok().json(post_response(post)))
}

/// DELETE /api/posts/{id} - owner only
pub async fn delete(
    state: web::Data<AppState>,
    token: BearerToken,
    path: web::Path<String>,
) -> AppResult<HttpResponse> {
    let id = parse_id(&path)?;

    state.posts.delete(token.as_deref(), id).await?;

    Ok(HttpResponse::NoContent().finish())
}

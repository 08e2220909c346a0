//! Author registration, listing and login.

use actix_web::{HttpResponse, web};

use bloglist_core::domain::Author;
use bloglist_core::services::RegisterAuthor;
use bloglist_shared::dto::{
    AuthorResponse, AuthorWithPostsResponse, LoginRequest, LoginResponse, PostSummary,
    RegisterAuthorRequest,
};

use crate::middleware::error::AppResult;
use crate::state::AppState;

fn author_response(author: Author) -> AuthorResponse {
    AuthorResponse {
        id: author.id.to_string(),
        username: author.username,
        name: author.name,
        posts: author.post_ids.iter().map(ToString::to_string).collect(),
    }
}

/// POST /api/authors
pub async fn register(
    state: web::Data<AppState>,
    body: web::Json<RegisterAuthorRequest>,
) -> AppResult<HttpResponse> {
    let req = body.into_inner();

    let author = state
        .authors
        .register(RegisterAuthor {
            username: req.username,
            name: req.name,
            secret: req.password,
        })
        .await?;

    Ok(HttpResponse::Ok().json(author_response(author)))
}

/// GET /api/authors
pub async fn list(state: web::Data<AppState>) -> AppResult<HttpResponse> {
    let authors: Vec<_> = state
        .authors
        .list_with_posts()
        .await?
        .into_iter()
        .map(|entry| AuthorWithPostsResponse {
            id: entry.author.id.to_string(),
            username: entry.author.username,
            name: entry.author.name,
            posts: entry
                .posts
                .into_iter()
                .map(|post| PostSummary {
                    id: post.id.to_string(),
                    title: post.title,
                    author: post.author,
                    url: post.url,
                })
                .collect(),
        })
        .collect();

    Ok(HttpResponse::Ok().json(authors))
}

/// POST /api/login
pub async fn login(
    state: web::Data<AppState>,
    body: web::Json<LoginRequest>,
) -> AppResult<HttpResponse> {
    let req = body.into_inner();

    let issued = state.credentials.issue(&req.username, &req.password).await?;

    Ok(HttpResponse::Ok().json(LoginResponse {
        token: issued.token,
        username: issued.username,
        name: issued.name,
    }))
}

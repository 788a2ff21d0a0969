//! Blog post handlers.

use actix_web::{HttpResponse, web};

use blog_core::domain::{Post, PostDraft, PostId};
use blog_core::ports::Page;
use blog_shared::MessageResponse;
use blog_shared::dto::{CreatePostRequest, ListPostsQuery, PostResponse};

use crate::middleware::error::{AppError, AppResult, POST_NOT_FOUND};
use crate::state::AppState;

fn to_response(post: Post) -> PostResponse {
    PostResponse {
        id: post.id.to_string(),
        title: post.title,
        summary: post.summary,
        content: post.content,
        image_url: post.image_url,
        date: post.date,
    }
}

/// POST /api/posts
pub async fn create_post(
    state: web::Data<AppState>,
    body: web::Json<CreatePostRequest>,
) -> AppResult<HttpResponse> {
    let req = body.into_inner();
    let new_post = PostDraft {
        title: req.title,
        summary: req.summary,
        content: req.content,
        image_url: req.image_url,
        date: req.date,
    }
    .validate()?;

    // Any failure to persist is reported as bad input.
    let post = state.posts.create(new_post).await.map_err(|e| {
        tracing::error!("Failed to create post: {}", e);
        AppError::InvalidData
    })?;

    tracing::info!(post_id = %post.id, "Post created");
    Ok(HttpResponse::Created().json(to_response(post)))
}

/// GET /api/posts
///
/// Newest first. `limit` and `offset` are optional; without them every post is returned.
pub async fn list_posts(
    state: web::Data<AppState>,
    query: web::Query<ListPostsQuery>,
) -> AppResult<HttpResponse> {
    let ListPostsQuery { limit, offset } = query.into_inner();
    if limit == Some(0) {
        return Err(AppError::InvalidData);
    }

    let posts = state
        .posts
        .list(Page::new(offset.unwrap_or(0), limit))
        .await
        .map_err(|e| AppError::internal("Error retrieving posts.", e))?;

    Ok(HttpResponse::Ok().json(posts.into_iter().map(to_response).collect::<Vec<_>>()))
}

/// GET /api/posts/{id}
pub async fn get_post(
    state: web::Data<AppState>,
    path: web::Path<String>,
) -> AppResult<HttpResponse> {
    let id = PostId::new(path.into_inner());

    let post = state
        .posts
        .find_by_id(&id)
        .await
        .map_err(|e| AppError::internal("Error retrieving post.", e))?
        .ok_or(AppError::NotFound(POST_NOT_FOUND))?;

    Ok(HttpResponse::Ok().json(to_response(post)))
}

/// DELETE /api/posts/{id}
pub async fn delete_post(
    state: web::Data<AppState>,
    path: web::Path<String>,
) -> AppResult<HttpResponse> {
    let id = PostId::new(path.into_inner());

    state
        .posts
        .delete(&id)
        .await
        .map_err(|e| AppError::internal("Error deleting post.", e))?
        .ok_or(AppError::NotFound(POST_NOT_FOUND))?;

    tracing::info!(post_id = %id, "Post deleted");
    Ok(HttpResponse::Ok().json(MessageResponse::new("Post deleted successfully")))
}

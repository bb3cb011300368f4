//! Blog HTTP Handlers
//!
//! Every handler here runs behind the authentication gate and takes the
//! author from the verified identity.

use axum::{
    extract::{
        rejection::{JsonRejection, QueryRejection},
        Path, Query, State,
    },
    http::StatusCode,
    Json,
};
use sqlx::SqlitePool;

use super::db;
use super::types::{BlogListResponse, BlogResponse, BlogWriteResponse, PageQuery};
use crate::backend::auth::users::is_foreign_key_violation;
use crate::backend::error::BackendError;
use crate::backend::middleware::AuthUser;
use crate::shared::{CreatePostInput, UpdatePostInput};

const POST_NOT_FOUND: &str = "Blog post not found";

/// Create a post owned by the caller
///
/// `POST /api/v1/blog` → 201 `{id, message}`
pub async fn create_blog(
    State(pool): State<SqlitePool>,
    auth: AuthUser,
    payload: Result<Json<CreatePostInput>, JsonRejection>,
) -> Result<(StatusCode, Json<BlogWriteResponse>), BackendError> {
    let author_id = auth.user_id()?;
    let Json(input) = payload?;
    input.validate()?;

    let id = db::create_blog(&pool, author_id, input.title.trim(), &input.content)
        .await
        .map_err(|err| {
            if is_foreign_key_violation(&err) {
                tracing::warn!(author_id, "post for unknown author");
                BackendError::not_found("User not found")
            } else {
                err.into()
            }
        })?;
    tracing::info!(blog_id = id, author_id, "blog post created");

    Ok((
        StatusCode::CREATED,
        Json(BlogWriteResponse {
            id,
            message: format!("Blog post created successfully for user {}", author_id),
        }),
    ))
}

/// Edit a post the caller owns
///
/// `PUT /api/v1/blog` → 200 `{id, message}`, 404 if missing, 403 if owned
/// by someone else
pub async fn update_blog(
    State(pool): State<SqlitePool>,
    auth: AuthUser,
    payload: Result<Json<UpdatePostInput>, JsonRejection>,
) -> Result<Json<BlogWriteResponse>, BackendError> {
    let author_id = auth.user_id()?;
    let Json(input) = payload?;
    input.validate()?;

    match db::get_blog_author(&pool, input.id).await? {
        None => return Err(BackendError::not_found(POST_NOT_FOUND)),
        Some(owner) if owner != author_id => {
            tracing::warn!(blog_id = input.id, author_id, owner, "edit of another author's post");
            return Err(BackendError::forbidden("You can only edit your own posts"));
        }
        Some(_) => {}
    }

    let title = input.title.as_deref().map(str::trim);
    let updated = db::update_blog(&pool, input.id, author_id, title, input.content.as_deref()).await?;
    if !updated {
        // Deleted between the ownership check and the update.
        return Err(BackendError::not_found(POST_NOT_FOUND));
    }

    tracing::info!(blog_id = input.id, author_id, "blog post updated");

    Ok(Json(BlogWriteResponse {
        id: input.id,
        message: format!("Blog post updated successfully for user {}", author_id),
    }))
}

/// `GET /api/v1/blog/bulk?page=&limit=`
pub async fn list_blogs(
    State(pool): State<SqlitePool>,
    _auth: AuthUser,
    query: Result<Query<PageQuery>, QueryRejection>,
) -> Result<Json<BlogListResponse>, BackendError> {
    let Query(query) = query?;
    let pagination = query.resolve()?;

    let blogs = db::list_blogs(&pool, pagination).await?;
    let total_items = db::count_blogs(&pool).await?;

    Ok(Json(BlogListResponse {
        blogs,
        total_items,
        page: pagination.page,
        limit: pagination.limit,
    }))
}

/// `GET /api/v1/blog/{id}`
pub async fn get_blog(
    State(pool): State<SqlitePool>,
    _auth: AuthUser,
    Path(raw_id): Path<String>,
) -> Result<Json<BlogResponse>, BackendError> {
    let id: i64 = raw_id
        .parse()
        .map_err(|_| BackendError::bad_request("Invalid blog ID format"))?;

    let blog = db::get_blog(&pool, id)
        .await?
        .ok_or_else(|| BackendError::not_found(POST_NOT_FOUND))?;

    Ok(Json(BlogResponse { blog }))
}

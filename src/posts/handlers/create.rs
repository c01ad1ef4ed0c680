/**
 * Post Creation Handler
 *
 * POST /api/posts inserts a post, bumps the author's posts_count, and
 * answers 201 with the created post and the author embedded.
 *
 * The insert and the counter update are separate statements with no
 * transaction around them; a failure between the two leaves the post
 * row committed and the counter stale. The author lookup afterwards
 * errors (500) when the referenced user does not exist.
 */

use axum::{extract::State, http::StatusCode, response::Json};
use sqlx::PgPool;

use crate::error::ApiError;
use crate::middleware::decode_json;
use crate::posts::db::{author_profile, increment_posts_count, insert_post};
use crate::posts::handlers::types::{CreatePostRequest, CreatePostResponse, PostResponse};

/// POST /api/posts - create a post
///
/// # Errors
///
/// * `400 Bad Request` - Missing `user_id` or empty `content`
/// * `500 Internal Server Error` - Missing database configuration,
///   malformed body, unknown author, or store failure
pub async fn create_post(
    State(pool): State<Option<PgPool>>,
    body: String,
) -> Result<(StatusCode, Json<CreatePostResponse>), ApiError> {
    let pool = pool.ok_or_else(|| ApiError::config("Database URL not configured"))?;
    let mut conn = pool.acquire().await?;

    let request: CreatePostRequest = decode_json(&body)?;

    let content = request
        .content
        .as_deref()
        .map(str::trim)
        .filter(|content| !content.is_empty());

    // Id 0 counts as missing, same as an absent field
    let (user_id, content) = match (request.user_id.filter(|id| *id != 0), content) {
        (Some(user_id), Some(content)) => (user_id, content),
        _ => {
            tracing::warn!("Rejected post creation with missing fields");
            return Err(ApiError::validation("User ID and content are required"));
        }
    };

    let post = insert_post(&mut conn, user_id, content, request.image_url.as_deref()).await?;

    increment_posts_count(&mut conn, user_id).await?;

    let author = author_profile(&mut conn, user_id).await?;

    tracing::info!("Post {} created by user {}", post.id, user_id);

    Ok((
        StatusCode::CREATED,
        Json(CreatePostResponse {
            success: true,
            post: PostResponse::from_post(post, author),
        }),
    ))
}

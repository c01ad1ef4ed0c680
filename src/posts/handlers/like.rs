/**
 * Like/Unlike Handler
 *
 * PUT /api/posts toggles a like on a post:
 *
 * - `like` (the default action): 400 "Already liked" if a like row for
 *   the pair exists; otherwise insert the row and increment the
 *   counter.
 * - `unlike`: delete any like row for the pair and decrement the
 *   counter unconditionally. There is no check that a like existed, so
 *   repeated unlikes keep decrementing - possibly below zero. That is
 *   the published contract, not an oversight (see DESIGN.md).
 * - any other action: no mutation.
 *
 * The response carries the post's likes_count read back after the
 * update; a missing post surfaces there as a 500.
 */

use axum::{extract::State, response::Json};
use sqlx::PgPool;

use crate::error::ApiError;
use crate::middleware::decode_json;
use crate::posts::db::{
    decrement_likes_count, delete_like, increment_likes_count, insert_like, like_exists,
    likes_count,
};
use crate::posts::handlers::types::{LikeRequest, LikeResponse};

/// PUT /api/posts - like or unlike a post
///
/// # Errors
///
/// * `400 Bad Request` - Missing `post_id`/`user_id`, or the pair has
///   already liked the post
/// * `500 Internal Server Error` - Missing database configuration,
///   malformed body, unknown post, or store failure
pub async fn update_likes(
    State(pool): State<Option<PgPool>>,
    body: String,
) -> Result<Json<LikeResponse>, ApiError> {
    let pool = pool.ok_or_else(|| ApiError::config("Database URL not configured"))?;
    let mut conn = pool.acquire().await?;

    let request: LikeRequest = decode_json(&body)?;

    // Id 0 counts as missing, same as an absent field
    let (post_id, user_id) = match (
        request.post_id.filter(|id| *id != 0),
        request.user_id.filter(|id| *id != 0),
    ) {
        (Some(post_id), Some(user_id)) => (post_id, user_id),
        _ => {
            tracing::warn!("Rejected like update with missing ids");
            return Err(ApiError::validation("Post ID and User ID are required"));
        }
    };

    let action = request.action.as_deref().unwrap_or("like");

    match action {
        "like" => {
            if like_exists(&mut conn, user_id, post_id).await? {
                tracing::warn!("User {} already liked post {}", user_id, post_id);
                return Err(ApiError::validation("Already liked"));
            }
            insert_like(&mut conn, user_id, post_id).await?;
            increment_likes_count(&mut conn, post_id).await?;
            tracing::info!("User {} liked post {}", user_id, post_id);
        }
        "unlike" => {
            delete_like(&mut conn, user_id, post_id).await?;
            decrement_likes_count(&mut conn, post_id).await?;
            tracing::info!("User {} unliked post {}", user_id, post_id);
        }
        // Unknown actions mutate nothing but still report the count
        _ => {
            tracing::warn!("Like update with unknown action {:?}", action);
        }
    }

    let likes_count = likes_count(&mut conn, post_id).await?;

    Ok(Json(LikeResponse {
        success: true,
        likes_count,
    }))
}

/**
 * Feed Handler
 *
 * GET /api/posts returns the most recent posts joined with their
 * authors, newest first, paginated by `limit` (default 20) and
 * `offset` (default 0).
 *
 * Non-numeric `limit`/`offset` values are an uncaught failure (500),
 * not a validation error - clients already observe that status for
 * bad pagination values, and the contract is kept.
 */

use std::collections::HashMap;

use axum::{
    extract::{Query, State},
    response::Json,
};
use sqlx::PgPool;

use crate::error::ApiError;
use crate::posts::db::list_feed;
use crate::posts::handlers::types::{FeedResponse, PostResponse};

/// Parse a pagination parameter, falling back to a default when absent
fn pagination_param(
    params: &HashMap<String, String>,
    key: &str,
    default: i64,
) -> Result<i64, ApiError> {
    match params.get(key) {
        Some(raw) => raw
            .parse::<i64>()
            .map_err(|e| ApiError::internal(format!("Server error: {}", e))),
        None => Ok(default),
    }
}

/// GET /api/posts - paginated feed
///
/// # Errors
///
/// * `500 Internal Server Error` - Missing database configuration,
///   unparseable pagination parameters, or store failure
pub async fn feed(
    State(pool): State<Option<PgPool>>,
    Query(params): Query<HashMap<String, String>>,
) -> Result<Json<FeedResponse>, ApiError> {
    let pool = pool.ok_or_else(|| ApiError::config("Database URL not configured"))?;
    let mut conn = pool.acquire().await?;

    let limit = pagination_param(&params, "limit", 20)?;
    let offset = pagination_param(&params, "offset", 0)?;

    let rows = list_feed(&mut conn, limit, offset).await?;

    tracing::info!("Feed request returned {} posts (limit {}, offset {})", rows.len(), limit, offset);

    let posts: Vec<PostResponse> = rows.into_iter().map(PostResponse::from).collect();
    let total = posts.len();

    Ok(Json(FeedResponse { posts, total }))
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::http::StatusCode;

    #[test]
    fn test_pagination_defaults() {
        let params = HashMap::new();
        assert_eq!(pagination_param(&params, "limit", 20).unwrap(), 20);
        assert_eq!(pagination_param(&params, "offset", 0).unwrap(), 0);
    }

    #[test]
    fn test_pagination_parses_values() {
        let mut params = HashMap::new();
        params.insert("limit".to_string(), "2".to_string());
        assert_eq!(pagination_param(&params, "limit", 20).unwrap(), 2);
    }

    #[test]
    fn test_unparseable_pagination_is_internal_error() {
        let mut params = HashMap::new();
        params.insert("limit".to_string(), "abc".to_string());
        let err = pagination_param(&params, "limit", 20).unwrap_err();
        assert_eq!(err.status_code(), StatusCode::INTERNAL_SERVER_ERROR);
        assert!(err.message().starts_with("Server error: "));
    }
}

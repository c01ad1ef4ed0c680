/**
 * Auth HTTP Handlers
 *
 * `/api/auth` exposes a single POST endpoint that dispatches on the
 * `action` field of the JSON body (`login` or `register`), plus a GET
 * token presence check. Each request checks database configuration
 * first, then checks out one pooled connection that is released on
 * every exit path when the guard drops.
 */

use axum::{extract::State, response::Response};
use sqlx::PgPool;
use uuid::Uuid;

use crate::error::ApiError;
use crate::middleware::decode_json;

/// Request/response types
pub mod types;

/// Login action
pub mod login;

/// Registration action
pub mod register;

/// Token presence check
pub mod validate;

pub use validate::check_token;

use types::AuthRequest;

/// POST /api/auth - dispatch on the `action` body field
///
/// # Errors
///
/// * `400 Bad Request` - Unknown or missing action, or missing fields
/// * `401 Unauthorized` - Bad credentials (login)
/// * `409 Conflict` - Duplicate username or email (register)
/// * `500 Internal Server Error` - Missing database configuration,
///   malformed body, or store failure
pub async fn authenticate(
    State(pool): State<Option<PgPool>>,
    body: String,
) -> Result<Response, ApiError> {
    let pool = pool.ok_or_else(|| ApiError::config("Database URL not configured"))?;
    let mut conn = pool.acquire().await?;

    // Stand-in for the invoking runtime's request id; feeds the token
    let request_id = Uuid::new_v4();

    let request: AuthRequest = decode_json(&body)?;

    match request.action.as_deref() {
        Some("login") => login::login(&mut conn, request, request_id).await,
        Some("register") => register::register(&mut conn, request, request_id).await,
        other => {
            tracing::warn!("Rejected auth request with action {:?}", other);
            Err(ApiError::validation("Invalid action"))
        }
    }
}

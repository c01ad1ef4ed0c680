/**
 * Login Action
 *
 * # Authentication Process
 *
 * 1. Trim username and password; either empty is a 400
 * 2. Hash the password (unsalted SHA-256, matching stored hashes)
 * 3. Look up the user by (username, hash) in a single query
 * 4. Issue a token and return the public profile
 *
 * # Security
 *
 * Invalid credentials answer 401 "Invalid credentials" without
 * distinguishing unknown usernames from wrong passwords.
 */

use axum::{http::StatusCode, response::IntoResponse, response::Json, response::Response};
use sqlx::PgConnection;
use uuid::Uuid;

use crate::auth::handlers::types::{AuthRequest, AuthResponse};
use crate::auth::password::hash_password;
use crate::auth::tokens::issue_token;
use crate::auth::users::find_by_credentials;
use crate::error::ApiError;

/// Handle `action = "login"`
pub async fn login(
    conn: &mut PgConnection,
    request: AuthRequest,
    request_id: Uuid,
) -> Result<Response, ApiError> {
    let username = AuthRequest::trimmed(&request.username);
    let password = AuthRequest::trimmed(&request.password);

    let (username, password) = match (username, password) {
        (Some(username), Some(password)) => (username, password),
        _ => return Err(ApiError::validation("Username and password required")),
    };

    tracing::info!("Login request for: {}", username);

    let password_hash = hash_password(password);

    let user = find_by_credentials(conn, username, &password_hash)
        .await?
        .ok_or_else(|| {
            tracing::warn!("Invalid credentials for: {}", username);
            ApiError::unauthorized("Invalid credentials")
        })?;

    let token = issue_token(user.id, request_id);

    tracing::info!("User logged in successfully: {} (id {})", user.username, user.id);

    Ok((
        StatusCode::OK,
        Json(AuthResponse {
            success: true,
            token,
            user,
        }),
    )
        .into_response())
}

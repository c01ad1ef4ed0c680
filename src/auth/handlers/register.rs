/**
 * Registration Action
 *
 * # Registration Process
 *
 * 1. Trim username, email, password, display name; any empty is a 400
 * 2. Reject if a user with that username or email already exists (409)
 * 3. Hash the password and generate the avatar URL from the username
 * 4. Insert the user and return 201 with the profile and a token
 *
 * Counter columns start at their database defaults (zero) and
 * `is_verified` starts false.
 */

use axum::{http::StatusCode, response::IntoResponse, response::Json, response::Response};
use sqlx::PgConnection;
use uuid::Uuid;

use crate::auth::handlers::types::{AuthRequest, AuthResponse};
use crate::auth::password::hash_password;
use crate::auth::tokens::issue_token;
use crate::auth::users::{avatar_url_for, create_user, user_exists, NewUser};
use crate::error::ApiError;

/// Handle `action = "register"`
pub async fn register(
    conn: &mut PgConnection,
    request: AuthRequest,
    request_id: Uuid,
) -> Result<Response, ApiError> {
    let username = AuthRequest::trimmed(&request.username);
    let email = AuthRequest::trimmed(&request.email);
    let password = AuthRequest::trimmed(&request.password);
    let display_name = AuthRequest::trimmed(&request.display_name);

    let (username, email, password, display_name) =
        match (username, email, password, display_name) {
            (Some(username), Some(email), Some(password), Some(display_name)) => {
                (username, email, password, display_name)
            }
            _ => return Err(ApiError::validation("All fields are required")),
        };

    tracing::info!("Signup request for username: {}, email: {}", username, email);

    if user_exists(conn, username, email).await? {
        tracing::warn!("User already exists: {} / {}", username, email);
        return Err(ApiError::conflict("User already exists"));
    }

    let user = create_user(
        conn,
        NewUser {
            username: username.to_string(),
            email: email.to_string(),
            password_hash: hash_password(password),
            display_name: display_name.to_string(),
            avatar_url: avatar_url_for(username),
        },
    )
    .await?;

    let token = issue_token(user.id, request_id);

    tracing::info!("User created successfully: {} (id {})", user.username, user.id);

    Ok((
        StatusCode::CREATED,
        Json(AuthResponse {
            success: true,
            token,
            user,
        }),
    )
        .into_response())
}

/**
 * User Model and Database Operations
 *
 * This module handles user data and database operations. The `User`
 * struct carries only the public profile columns - `password_hash`
 * never leaves the database layer except as a lookup argument.
 */

use serde::{Deserialize, Serialize};
use sqlx::PgConnection;

/// Public user profile as returned by the auth endpoints
#[derive(Debug, Clone, Serialize, Deserialize, sqlx::FromRow)]
pub struct User {
    /// Unique user id (assigned by the database)
    pub id: i32,
    /// Username (unique)
    pub username: String,
    /// Email address (unique)
    pub email: String,
    /// Display name shown in the UI
    pub display_name: String,
    /// Profile bio
    pub bio: Option<String>,
    /// Avatar image URL (generated at registration)
    pub avatar_url: Option<String>,
    /// Follower count
    pub followers_count: i32,
    /// Following count
    pub following_count: i32,
    /// Post count (maintained by the posts endpoints)
    pub posts_count: i32,
    /// Verified-account flag
    pub is_verified: bool,
}

/// Columns selected for the public profile
const PROFILE_COLUMNS: &str = "id, username, email, display_name, bio, avatar_url, \
                               followers_count, following_count, posts_count, is_verified";

/// New user data for registration
#[derive(Debug)]
pub struct NewUser {
    pub username: String,
    pub email: String,
    pub password_hash: String,
    pub display_name: String,
    pub avatar_url: String,
}

/// Build the generated avatar URL for a username
///
/// The seed is the raw username, unencoded, matching the URLs already
/// stored for existing accounts.
pub fn avatar_url_for(username: &str) -> String {
    format!("https://api.dicebear.com/7.x/avataaars/svg?seed={}", username)
}

/// Look up a user by username and password hash
///
/// The hash comparison happens in the query itself; a wrong password
/// and an unknown username are indistinguishable to the caller.
///
/// # Returns
/// The matching user's public profile, or `None`
pub async fn find_by_credentials(
    conn: &mut PgConnection,
    username: &str,
    password_hash: &str,
) -> Result<Option<User>, sqlx::Error> {
    let user = sqlx::query_as::<_, User>(&format!(
        r#"
        SELECT {PROFILE_COLUMNS}
        FROM users
        WHERE username = $1 AND password_hash = $2
        "#
    ))
    .bind(username)
    .bind(password_hash)
    .fetch_optional(conn)
    .await?;

    Ok(user)
}

/// Check whether a user with the given username or email exists
pub async fn user_exists(
    conn: &mut PgConnection,
    username: &str,
    email: &str,
) -> Result<bool, sqlx::Error> {
    let row: Option<(i32,)> =
        sqlx::query_as("SELECT id FROM users WHERE username = $1 OR email = $2")
            .bind(username)
            .bind(email)
            .fetch_optional(conn)
            .await?;

    Ok(row.is_some())
}

/// Create a new user
///
/// Counter columns and `is_verified` take their database defaults.
///
/// # Returns
/// The created user's public profile
pub async fn create_user(conn: &mut PgConnection, new_user: NewUser) -> Result<User, sqlx::Error> {
    let user = sqlx::query_as::<_, User>(&format!(
        r#"
        INSERT INTO users (username, email, password_hash, display_name, avatar_url)
        VALUES ($1, $2, $3, $4, $5)
        RETURNING {PROFILE_COLUMNS}
        "#
    ))
    .bind(&new_user.username)
    .bind(&new_user.email)
    .bind(&new_user.password_hash)
    .bind(&new_user.display_name)
    .bind(&new_user.avatar_url)
    .fetch_one(conn)
    .await?;

    Ok(user)
}

/**
 * Database Operations for Posts and Likes
 *
 * Plain query functions over a checked-out connection. The counter
 * updates here (`posts_count`, `likes_count`) run as separate
 * statements from the row mutations they accompany - there is no
 * transaction spanning the pair. A failure between the two statements
 * leaves the counter and the rows diverged; that consistency gap is
 * a deliberate part of the contract (see DESIGN.md).
 */

use chrono::{DateTime, Utc};
use serde::Serialize;
use sqlx::PgConnection;

/// A post row as stored
#[derive(Debug, Clone, Serialize, sqlx::FromRow)]
pub struct Post {
    pub id: i32,
    pub user_id: i32,
    pub content: String,
    pub image_url: Option<String>,
    pub likes_count: i32,
    pub comments_count: i32,
    /// Server-assigned creation time; nullable in the schema
    pub created_at: Option<DateTime<Utc>>,
}

/// Author columns embedded in post responses
#[derive(Debug, Clone, Serialize, sqlx::FromRow)]
pub struct PostAuthor {
    pub username: String,
    pub display_name: String,
    pub avatar_url: Option<String>,
    pub is_verified: bool,
}

/// A feed row: post columns joined with the author columns
#[derive(Debug, Clone, sqlx::FromRow)]
pub struct FeedRow {
    pub id: i32,
    pub user_id: i32,
    pub content: String,
    pub image_url: Option<String>,
    pub likes_count: i32,
    pub comments_count: i32,
    pub created_at: Option<DateTime<Utc>>,
    pub username: String,
    pub display_name: String,
    pub avatar_url: Option<String>,
    pub is_verified: bool,
}

/// List the most recent posts with their authors
///
/// Ordered by creation time descending, paginated by limit/offset.
pub async fn list_feed(
    conn: &mut PgConnection,
    limit: i64,
    offset: i64,
) -> Result<Vec<FeedRow>, sqlx::Error> {
    sqlx::query_as::<_, FeedRow>(
        r#"
        SELECT p.id, p.user_id, p.content, p.image_url, p.likes_count,
               p.comments_count, p.created_at,
               u.username, u.display_name, u.avatar_url, u.is_verified
        FROM posts p
        JOIN users u ON p.user_id = u.id
        ORDER BY p.created_at DESC
        LIMIT $1 OFFSET $2
        "#,
    )
    .bind(limit)
    .bind(offset)
    .fetch_all(conn)
    .await
}

/// Insert a new post
///
/// Counter columns take their database defaults and `created_at` its
/// server default.
pub async fn insert_post(
    conn: &mut PgConnection,
    user_id: i32,
    content: &str,
    image_url: Option<&str>,
) -> Result<Post, sqlx::Error> {
    sqlx::query_as::<_, Post>(
        r#"
        INSERT INTO posts (user_id, content, image_url)
        VALUES ($1, $2, $3)
        RETURNING id, user_id, content, image_url, likes_count, comments_count, created_at
        "#,
    )
    .bind(user_id)
    .bind(content)
    .bind(image_url)
    .fetch_one(conn)
    .await
}

/// Increment a user's posts_count
pub async fn increment_posts_count(
    conn: &mut PgConnection,
    user_id: i32,
) -> Result<(), sqlx::Error> {
    sqlx::query("UPDATE users SET posts_count = posts_count + 1 WHERE id = $1")
        .bind(user_id)
        .execute(conn)
        .await?;
    Ok(())
}

/// Fetch the author columns embedded in a post response
///
/// Errors (surfaced as 500) if the user does not exist.
pub async fn author_profile(
    conn: &mut PgConnection,
    user_id: i32,
) -> Result<PostAuthor, sqlx::Error> {
    sqlx::query_as::<_, PostAuthor>(
        "SELECT username, display_name, avatar_url, is_verified FROM users WHERE id = $1",
    )
    .bind(user_id)
    .fetch_one(conn)
    .await
}

/// Check whether a like row exists for (user, post)
pub async fn like_exists(
    conn: &mut PgConnection,
    user_id: i32,
    post_id: i32,
) -> Result<bool, sqlx::Error> {
    let row: Option<(i32,)> =
        sqlx::query_as("SELECT id FROM likes WHERE user_id = $1 AND post_id = $2")
            .bind(user_id)
            .bind(post_id)
            .fetch_optional(conn)
            .await?;
    Ok(row.is_some())
}

/// Insert a like row for (user, post)
pub async fn insert_like(
    conn: &mut PgConnection,
    user_id: i32,
    post_id: i32,
) -> Result<(), sqlx::Error> {
    sqlx::query("INSERT INTO likes (user_id, post_id) VALUES ($1, $2)")
        .bind(user_id)
        .bind(post_id)
        .execute(conn)
        .await?;
    Ok(())
}

/// Delete any like row for (user, post)
pub async fn delete_like(
    conn: &mut PgConnection,
    user_id: i32,
    post_id: i32,
) -> Result<(), sqlx::Error> {
    sqlx::query("DELETE FROM likes WHERE user_id = $1 AND post_id = $2")
        .bind(user_id)
        .bind(post_id)
        .execute(conn)
        .await?;
    Ok(())
}

/// Increment a post's likes_count
pub async fn increment_likes_count(
    conn: &mut PgConnection,
    post_id: i32,
) -> Result<(), sqlx::Error> {
    sqlx::query("UPDATE posts SET likes_count = likes_count + 1 WHERE id = $1")
        .bind(post_id)
        .execute(conn)
        .await?;
    Ok(())
}

/// Decrement a post's likes_count
///
/// Unconditional: no clamping at zero and no check that a like row was
/// actually removed. Repeated unlikes keep decrementing.
pub async fn decrement_likes_count(
    conn: &mut PgConnection,
    post_id: i32,
) -> Result<(), sqlx::Error> {
    sqlx::query("UPDATE posts SET likes_count = likes_count - 1 WHERE id = $1")
        .bind(post_id)
        .execute(conn)
        .await?;
    Ok(())
}

/// Read a post's current likes_count
///
/// Errors (surfaced as 500) if the post does not exist.
pub async fn likes_count(conn: &mut PgConnection, post_id: i32) -> Result<i32, sqlx::Error> {
    let (count,): (i32,) = sqlx::query_as("SELECT likes_count FROM posts WHERE id = $1")
        .bind(post_id)
        .fetch_one(conn)
        .await?;
    Ok(count)
}

/**
 * Posts Handler Types
 *
 * Request and response types for the `/api/posts` endpoint. As with
 * the auth types, request fields are optional at the serde level and
 * validated by the handlers.
 */

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::posts::db::{FeedRow, Post, PostAuthor};

/// A post as returned by the API, with the author embedded
#[derive(Debug, Serialize)]
pub struct PostResponse {
    pub id: i32,
    pub user_id: i32,
    pub content: String,
    pub image_url: Option<String>,
    pub likes_count: i32,
    pub comments_count: i32,
    /// RFC 3339 timestamp, or null when the row has none
    pub created_at: Option<DateTime<Utc>>,
    pub user: PostAuthor,
}

impl From<FeedRow> for PostResponse {
    fn from(row: FeedRow) -> Self {
        Self {
            id: row.id,
            user_id: row.user_id,
            content: row.content,
            image_url: row.image_url,
            likes_count: row.likes_count,
            comments_count: row.comments_count,
            created_at: row.created_at,
            user: PostAuthor {
                username: row.username,
                display_name: row.display_name,
                avatar_url: row.avatar_url,
                is_verified: row.is_verified,
            },
        }
    }
}

impl PostResponse {
    /// Combine a stored post with its author's embed columns
    pub fn from_post(post: Post, user: PostAuthor) -> Self {
        Self {
            id: post.id,
            user_id: post.user_id,
            content: post.content,
            image_url: post.image_url,
            likes_count: post.likes_count,
            comments_count: post.comments_count,
            created_at: post.created_at,
            user,
        }
    }
}

/// GET /api/posts response
#[derive(Debug, Serialize)]
pub struct FeedResponse {
    pub posts: Vec<PostResponse>,
    /// Count of posts in this page, not the total available
    pub total: usize,
}

/// POST /api/posts request body
#[derive(Debug, Default, Deserialize)]
pub struct CreatePostRequest {
    #[serde(default)]
    pub user_id: Option<i32>,
    #[serde(default)]
    pub content: Option<String>,
    #[serde(default)]
    pub image_url: Option<String>,
}

/// POST /api/posts response
#[derive(Debug, Serialize)]
pub struct CreatePostResponse {
    pub success: bool,
    pub post: PostResponse,
}

/// PUT /api/posts request body
#[derive(Debug, Default, Deserialize)]
pub struct LikeRequest {
    #[serde(default)]
    pub post_id: Option<i32>,
    #[serde(default)]
    pub user_id: Option<i32>,
    /// "like" (default) or "unlike"
    #[serde(default)]
    pub action: Option<String>,
}

/// PUT /api/posts response
#[derive(Debug, Serialize)]
pub struct LikeResponse {
    pub success: bool,
    /// The post's likes_count after the update
    pub likes_count: i32,
}

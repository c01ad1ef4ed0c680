//! Post and Like Management
//!
//! Database operations and HTTP handlers for `/api/posts`: the
//! paginated feed, post creation, and like/unlike.

/// Post and like database operations
pub mod db;

/// HTTP handlers for `/api/posts`
pub mod handlers;

pub use handlers::{create_post, feed, update_likes};

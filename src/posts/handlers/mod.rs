/**
 * Posts HTTP Handlers
 *
 * `/api/posts` exposes the paginated feed (GET), post creation (POST),
 * and like/unlike (PUT). Each request checks database configuration
 * first, then checks out one pooled connection released when its guard
 * drops.
 */

/// Request/response types
pub mod types;

/// GET - paginated feed
pub mod feed;

/// POST - post creation
pub mod create;

/// PUT - like/unlike
pub mod like;

pub use create::create_post;
pub use feed::feed;
pub use like::update_likes;

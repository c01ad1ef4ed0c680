/**
 * API Route Handlers
 *
 * This module wires the API endpoints onto the router:
 *
 * ## Auth
 * - `OPTIONS /api/auth` - CORS preflight
 * - `POST /api/auth` - Login or registration (dispatched on `action`)
 * - `GET /api/auth` - Token presence check
 *
 * ## Posts
 * - `OPTIONS /api/posts` - CORS preflight
 * - `GET /api/posts` - Paginated feed
 * - `POST /api/posts` - Create a post
 * - `PUT /api/posts` - Like/unlike a post
 *
 * Any other method on either endpoint answers 405 via the per-route
 * method fallback.
 */

use axum::{routing, Router};

use crate::auth::handlers::{authenticate, check_token};
use crate::error::ApiError;
use crate::middleware::cors::{auth_preflight, posts_preflight};
use crate::posts::handlers::{create_post, feed, update_likes};
use crate::server::state::AppState;

/// 405 handler for unsupported methods on known endpoints
async fn method_not_allowed() -> ApiError {
    ApiError::MethodNotAllowed
}

/// Configure API routes
///
/// # Arguments
///
/// * `router` - The router to add routes to
///
/// # Returns
///
/// Router with API routes configured
pub fn configure_api_routes(router: Router<AppState>) -> Router<AppState> {
    router
        .route(
            "/api/auth",
            routing::get(check_token)
                .post(authenticate)
                .options(auth_preflight)
                .fallback(method_not_allowed),
        )
        .route(
            "/api/posts",
            routing::get(feed)
                .post(create_post)
                .put(update_likes)
                .options(posts_preflight)
                .fallback(method_not_allowed),
        )
}

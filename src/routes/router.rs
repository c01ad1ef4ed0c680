/**
 * Router Configuration
 *
 * This module provides the main router creation function. API routes
 * are added first, then the 404 fallback, and finally the CORS
 * response layer - the layer wraps everything so the
 * `Access-Control-Allow-Origin` header lands on every response,
 * including errors and the fallback.
 */

use axum::{http::StatusCode, response::IntoResponse, response::Json, Router};

use crate::middleware::cors::apply_cors;
use crate::routes::api_routes::configure_api_routes;
use crate::server::state::AppState;

/// 404 handler for unknown paths
async fn not_found() -> impl IntoResponse {
    (
        StatusCode::NOT_FOUND,
        Json(serde_json::json!({ "error": "Not found" })),
    )
}

/// Create the Axum router with all routes configured
///
/// # Arguments
///
/// * `app_state` - Application state containing the database pool
///
/// # Returns
///
/// Configured Axum Router ready to serve requests
pub fn create_router(app_state: AppState) -> Router<()> {
    let router = configure_api_routes(Router::new());

    router
        .fallback(not_found)
        .layer(axum::middleware::map_response(apply_cors))
        .with_state(app_state)
}

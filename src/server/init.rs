/**
 * Server Initialization
 *
 * This module handles the initialization and setup of the Axum HTTP
 * server: loading the database pool and assembling the router.
 *
 * # Initialization Process
 *
 * 1. Load the database connection pool (optional)
 * 2. Create the application state
 * 3. Create and configure the router
 */

use axum::Router;

use crate::routes::router::create_router;
use crate::server::config::load_database;
use crate::server::state::AppState;

/// Create and configure the Axum application
///
/// # Returns
///
/// Configured Axum Router ready to serve requests
///
/// # Error Handling
///
/// The function is resilient: a missing or unreachable database does
/// not prevent startup. Handlers report the missing configuration on
/// each request instead.
pub async fn create_app() -> Router<()> {
    tracing::info!("Initializing PulseFeed backend server");

    let db_pool = load_database().await;

    let app_state = AppState { db_pool };

    create_router(app_state)
}

/**
 * Application State Management
 *
 * This module defines the application state structure and implements
 * the necessary `FromRef` traits for Axum state extraction.
 *
 * # Architecture
 *
 * The handlers are stateless apart from the database pool; `AppState`
 * therefore only carries the optional `PgPool`. Keeping the pool
 * optional lets the server start without a database and report the
 * missing configuration per request instead of refusing to boot.
 */

use axum::extract::FromRef;
use sqlx::PgPool;

/// Application state shared across all request handlers
///
/// # Fields
///
/// * `db_pool` - Optional PostgreSQL database connection pool
///
/// # Thread Safety
///
/// `PgPool` is internally reference-counted and safe to clone across
/// handlers; each handler checks out one connection per request.
#[derive(Clone)]
pub struct AppState {
    /// Database connection pool
    ///
    /// This is `None` if the database is not configured (e.g., if the
    /// `DATABASE_URL` environment variable is not set). Handlers check
    /// for `None` and answer 500 "Database URL not configured".
    pub db_pool: Option<PgPool>,
}

/// Implement FromRef for Option<PgPool>
///
/// This allows Axum handlers to extract the optional database pool
/// directly from `AppState` using `State(Option<PgPool>)`.
impl FromRef<AppState> for Option<PgPool> {
    fn from_ref(app_state: &AppState) -> Self {
        app_state.db_pool.clone()
    }
}

/**
 * Server Configuration
 *
 * This module handles loading of server configuration, focusing on the
 * PostgreSQL database connection.
 *
 * # Error Handling
 *
 * Configuration errors are logged but do not prevent server startup.
 * If the database cannot be configured the pool is set to `None` and
 * every data-touching request answers 500 "Database URL not configured".
 */

use sqlx::PgPool;

/// Database configuration result
///
/// Contains the database connection pool if successfully configured,
/// or `None` if the database is not available.
pub type DatabaseConfig = Option<PgPool>;

/// Load and initialize database connection pool
///
/// This function:
/// 1. Reads `DATABASE_URL` from environment
/// 2. Creates a PostgreSQL connection pool
/// 3. Runs database migrations
///
/// # Returns
///
/// - `Some(PgPool)` if database is successfully configured
/// - `None` if `DATABASE_URL` is not set or connection fails
///
/// # Errors
///
/// Errors are logged but do not prevent server startup. The function
/// returns `None` on any error; handlers surface the missing database
/// as an error response per request.
pub async fn load_database() -> DatabaseConfig {
    let database_url = match std::env::var("DATABASE_URL") {
        Ok(url) => url,
        Err(_) => {
            tracing::warn!("DATABASE_URL not set. All data requests will be rejected.");
            return None;
        }
    };

    tracing::info!("Connecting to database...");

    let pool = match PgPool::connect(&database_url).await {
        Ok(pool) => pool,
        Err(e) => {
            tracing::error!("Failed to create database connection pool: {:?}", e);
            return None;
        }
    };

    tracing::info!("Database connection pool created successfully");

    // Run migrations
    match sqlx::migrate!().run(&pool).await {
        Ok(_) => {
            tracing::info!("Database migrations completed successfully");
        }
        Err(e) => {
            // Continue anyway - the schema may already be in place
            tracing::error!("Failed to run database migrations: {:?}", e);
            tracing::warn!("Continuing without migrations - database might not be up to date");
        }
    }

    Some(pool)
}

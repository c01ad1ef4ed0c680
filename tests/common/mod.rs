//! Shared test fixtures
//!
//! Provides the test server builder and a database fixture that
//! connects, migrates, and truncates between tests. Database-backed
//! tests read `DATABASE_URL` and are `#[ignore]`d by default so the
//! suite runs without a PostgreSQL instance.

#![allow(dead_code)]

use axum_test::TestServer;
use pulsefeed::routes::create_router;
use pulsefeed::server::state::AppState;
use sqlx::PgPool;

/// Build a test server over the API router with the given pool
pub fn test_server(db_pool: Option<PgPool>) -> TestServer {
    let app = create_router(AppState { db_pool });
    TestServer::new(app).expect("Failed to start test server")
}

/// Test database fixture
///
/// Connects using `DATABASE_URL`, runs migrations, and truncates all
/// tables so each test starts from an empty store.
pub struct TestDatabase {
    pool: PgPool,
}

impl TestDatabase {
    pub async fn new() -> Self {
        let database_url =
            std::env::var("DATABASE_URL").expect("DATABASE_URL must be set for database tests");

        let pool = PgPool::connect(&database_url)
            .await
            .expect("Failed to create test database pool");

        sqlx::migrate!("./migrations")
            .run(&pool)
            .await
            .expect("Failed to run migrations");

        sqlx::query("TRUNCATE TABLE likes, posts, users RESTART IDENTITY CASCADE")
            .execute(&pool)
            .await
            .expect("Failed to truncate test tables");

        Self { pool }
    }

    pub fn pool(&self) -> &PgPool {
        &self.pool
    }
}

/// Register a user through the API and return the response JSON
pub async fn register_user(server: &TestServer, username: &str) -> serde_json::Value {
    let response = server
        .post("/api/auth")
        .json(&serde_json::json!({
            "action": "register",
            "username": username,
            "email": format!("{}@example.com", username),
            "password": "password123",
            "display_name": format!("{} Display", username),
        }))
        .await;
    assert_eq!(response.status_code().as_u16(), 201);
    response.json()
}

/// Create a post through the API and return the response JSON
pub async fn create_post(server: &TestServer, user_id: i64, content: &str) -> serde_json::Value {
    let response = server
        .post("/api/posts")
        .json(&serde_json::json!({
            "user_id": user_id,
            "content": content,
        }))
        .await;
    assert_eq!(response.status_code().as_u16(), 201);
    response.json()
}

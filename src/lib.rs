//! PulseFeed - Social Network Backend
//!
//! PulseFeed is a small HTTP backend for a social-network application,
//! built with Axum and PostgreSQL. It exposes two endpoint groups:
//!
//! - **`/api/auth`** - Login, registration, and token presence checks
//! - **`/api/posts`** - Feed retrieval, post creation, like/unlike
//!
//! # Module Structure
//!
//! - **`server`** - Server initialization, application state, configuration
//! - **`routes`** - HTTP route configuration and router assembly
//! - **`auth`** - Credential hashing, token generation, user queries, auth handlers
//! - **`posts`** - Post and like queries, feed/create/like handlers
//! - **`middleware`** - CORS response layer and JSON body decoding
//! - **`error`** - API error types and HTTP response conversion
//!
//! # Design Notes
//!
//! Every handler is stateless: it checks that the database is configured,
//! acquires one pooled connection for the duration of the request, and
//! runs its statements without an explicit transaction. Coordination
//! (username/email uniqueness, like-count accuracy) relies on the
//! database's own guarantees.
//!
//! # Usage
//!
//! ```rust,no_run
//! use pulsefeed::server::init::create_app;
//!
//! # async fn example() {
//! let app = create_app().await;
//! // Use app with an Axum server
//! # }
//! ```

/// Server setup and configuration
pub mod server;

/// Route configuration
pub mod routes;

/// Authentication and user management
pub mod auth;

/// Post and like management
pub mod posts;

/// Middleware for request and response processing
pub mod middleware;

/// API error types
pub mod error;

/// Re-export commonly used types
pub use error::ApiError;
pub use server::init::create_app;
pub use server::state::AppState;

//! Authentication and User Management
//!
//! Credential hashing, token generation, user queries, and the
//! `/api/auth` HTTP handlers.

/// Password hashing
pub mod password;

/// Token generation
pub mod tokens;

/// User model and database operations
pub mod users;

/// HTTP handlers for `/api/auth`
pub mod handlers;

pub use handlers::{authenticate, check_token};
pub use users::User;

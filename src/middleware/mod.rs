//! Middleware for Request and Response Processing

/// CORS response layer and preflight handlers
pub mod cors;

/// JSON request body decoding
pub mod body;

pub use body::decode_json;
pub use cors::{apply_cors, auth_preflight, posts_preflight};

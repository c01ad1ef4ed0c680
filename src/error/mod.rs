//! API Error Types
//!
//! Error types used by the HTTP handlers, split the same way the rest
//! of the crate is: `types` defines the error enum and its accessors,
//! `conversion` turns errors into HTTP responses.

/// Error type definitions
pub mod types;

/// Conversions to HTTP responses
pub mod conversion;

pub use types::ApiError;

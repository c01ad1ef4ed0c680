//! Route Configuration
//!
//! Router assembly for the API endpoints.

/// Main router creation
pub mod router;

/// API route configuration
pub mod api_routes;

pub use router::create_router;

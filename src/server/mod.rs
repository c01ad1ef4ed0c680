//! Server Setup
//!
//! Server initialization, application state, and configuration loading.

/// Configuration loading (database pool)
pub mod config;

/// Application state shared across handlers
pub mod state;

/// Application initialization
pub mod init;

pub use init::create_app;
pub use state::AppState;

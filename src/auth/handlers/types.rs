/**
 * Auth Handler Types
 *
 * Request and response types for the `/api/auth` endpoint. All request
 * fields are optional at the serde level; the handlers decide which
 * are required for the requested action and answer 400 themselves.
 */

use serde::{Deserialize, Serialize};

use crate::auth::users::User;

/// POST /api/auth request body
#[derive(Debug, Default, Deserialize)]
pub struct AuthRequest {
    /// Requested action: "login" or "register"
    #[serde(default)]
    pub action: Option<String>,
    /// Username (login + register)
    #[serde(default)]
    pub username: Option<String>,
    /// Email address (register)
    #[serde(default)]
    pub email: Option<String>,
    /// Plaintext password (hashed before any lookup or storage)
    #[serde(default)]
    pub password: Option<String>,
    /// Display name (register)
    #[serde(default)]
    pub display_name: Option<String>,
}

impl AuthRequest {
    /// Read a field trimmed, treating whitespace-only values as absent
    pub fn trimmed(field: &Option<String>) -> Option<&str> {
        field
            .as_deref()
            .map(str::trim)
            .filter(|value| !value.is_empty())
    }
}

/// Successful login/registration response
#[derive(Debug, Serialize)]
pub struct AuthResponse {
    /// Always true on the success path
    pub success: bool,
    /// Bearer token (md5 of user id + request id, not persisted)
    pub token: String,
    /// Public profile of the authenticated user
    pub user: User,
}

/// GET /api/auth response
#[derive(Debug, Serialize)]
pub struct TokenCheckResponse {
    /// Presence-only check; always true when a token was supplied
    pub valid: bool,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_trimmed_strips_whitespace() {
        let field = Some("  ada  ".to_string());
        assert_eq!(AuthRequest::trimmed(&field), Some("ada"));
    }

    #[test]
    fn test_trimmed_rejects_blank() {
        assert_eq!(AuthRequest::trimmed(&Some("   ".to_string())), None);
        assert_eq!(AuthRequest::trimmed(&Some(String::new())), None);
        assert_eq!(AuthRequest::trimmed(&None), None);
    }

    #[test]
    fn test_request_defaults() {
        let request: AuthRequest = serde_json::from_str("{}").unwrap();
        assert!(request.action.is_none());
        assert!(request.username.is_none());
    }
}

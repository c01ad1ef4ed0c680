/**
 * JSON Request Body Decoding
 *
 * Handlers take the raw request body as a `String` and decode it here
 * rather than using the `Json` extractor, because the contract is more
 * lenient and more strict than the extractor at the same time:
 *
 * - An absent or empty body decodes as an empty object, so missing
 *   fields fall through to the handlers' own validation (400), not to
 *   a framework-level rejection.
 * - A malformed body is an uncaught failure and answers 500 with the
 *   parse detail, not 400/422.
 */

use serde::de::DeserializeOwned;

use crate::error::ApiError;

/// Decode a JSON request body into the given type
///
/// An empty body is treated as `{}`. Parse failures map to the
/// internal-error variant (500 `Server error: {detail}`).
pub fn decode_json<T: DeserializeOwned>(body: &str) -> Result<T, ApiError> {
    let raw = if body.trim().is_empty() { "{}" } else { body };
    serde_json::from_str(raw).map_err(ApiError::from)
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::http::StatusCode;
    use serde::Deserialize;

    #[derive(Debug, Deserialize, Default)]
    struct Probe {
        #[serde(default)]
        name: Option<String>,
    }

    #[test]
    fn test_empty_body_decodes_as_empty_object() {
        let probe: Probe = decode_json("").unwrap();
        assert!(probe.name.is_none());

        let probe: Probe = decode_json("   ").unwrap();
        assert!(probe.name.is_none());
    }

    #[test]
    fn test_valid_body_decodes() {
        let probe: Probe = decode_json(r#"{"name": "ada"}"#).unwrap();
        assert_eq!(probe.name.as_deref(), Some("ada"));
    }

    #[test]
    fn test_malformed_body_is_internal_error() {
        let err = decode_json::<Probe>("{not json").unwrap_err();
        assert_eq!(err.status_code(), StatusCode::INTERNAL_SERVER_ERROR);
        assert!(err.message().starts_with("Server error: "));
    }

    #[test]
    fn test_wrong_type_is_internal_error() {
        // A non-string name fails deserialization, like any other
        // uncaught failure
        let err = decode_json::<Probe>(r#"{"name": 7}"#).unwrap_err();
        assert_eq!(err.status_code(), StatusCode::INTERNAL_SERVER_ERROR);
    }
}

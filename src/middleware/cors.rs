/**
 * CORS Handling
 *
 * The API contract requires `Access-Control-Allow-Origin: *` on every
 * response - successes, errors, and method-not-allowed responses alike.
 * A `map_response` layer applies the header unconditionally instead of
 * each handler setting it.
 *
 * Preflight `OPTIONS` requests answer 200 with an empty body and the
 * full preflight header set. The allowed-methods list differs per
 * endpoint group, so each group has its own preflight handler.
 */

use axum::{
    body::Body,
    http::{header, HeaderValue, StatusCode},
    response::{IntoResponse, Response},
};

/// Maximum preflight cache age in seconds (24 hours)
const CORS_MAX_AGE: &str = "86400";

/// Headers a browser may send with a request
const CORS_ALLOW_HEADERS: &str = "Content-Type, Authorization";

/// Apply `Access-Control-Allow-Origin: *` to every response
///
/// Used as `axum::middleware::map_response(apply_cors)` on the router,
/// so every response - including error responses and fallbacks -
/// carries the header.
pub async fn apply_cors(mut response: Response) -> Response {
    response.headers_mut().insert(
        header::ACCESS_CONTROL_ALLOW_ORIGIN,
        HeaderValue::from_static("*"),
    );
    response
}

/// Build a preflight response for the given allowed-methods list
fn preflight(allow_methods: &'static str) -> Response {
    (
        StatusCode::OK,
        [
            (header::ACCESS_CONTROL_ALLOW_METHODS, allow_methods),
            (header::ACCESS_CONTROL_ALLOW_HEADERS, CORS_ALLOW_HEADERS),
            (header::ACCESS_CONTROL_MAX_AGE, CORS_MAX_AGE),
        ],
        Body::empty(),
    )
        .into_response()
}

/// CORS preflight handler for `/api/auth`
pub async fn auth_preflight() -> Response {
    preflight("GET, POST, OPTIONS")
}

/// CORS preflight handler for `/api/posts`
pub async fn posts_preflight() -> Response {
    preflight("GET, POST, PUT, DELETE, OPTIONS")
}

/**
 * Error Conversion
 *
 * This module provides the `IntoResponse` implementation for
 * `ApiError`, allowing errors to be returned directly from handlers.
 *
 * # Response Format
 *
 * Error responses are returned as JSON:
 * ```json
 * {
 *   "error": "Error message"
 * }
 * ```
 *
 * The `Access-Control-Allow-Origin` header is applied by the CORS
 * response layer, so it is present on error responses as well.
 */

use axum::{
    body::Body,
    http::StatusCode,
    response::{IntoResponse, Response},
};

use crate::error::types::ApiError;

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status_code();
        let message = self.message();

        let body = serde_json::json!({ "error": message });

        Response::builder()
            .status(status)
            .header("Content-Type", "application/json")
            .body(Body::from(body.to_string()))
            .unwrap_or_else(|_| {
                Response::builder()
                    .status(StatusCode::INTERNAL_SERVER_ERROR)
                    .body(Body::from("Internal Server Error"))
                    .unwrap()
            })
    }
}

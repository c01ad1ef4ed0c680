/**
 * Token Generation
 *
 * Login and registration answer with a bearer token computed as the
 * md5 hex digest of `"{user_id}_{request_id}"`, where the request id
 * is unique per invocation. The token is not persisted and carries no
 * claims, so it cannot be verified later - the GET token check only
 * tests for presence. Existing clients depend on this exact token
 * format; replacing it with a signed token scheme would be an
 * observable contract change.
 */

use uuid::Uuid;

/// Generate a token for a freshly authenticated user
///
/// # Arguments
/// * `user_id` - Database id of the user
/// * `request_id` - Unique per-request identifier
///
/// # Returns
/// 32-character lowercase hex token
pub fn issue_token(user_id: i32, request_id: Uuid) -> String {
    format!("{:x}", md5::compute(format!("{}_{}", user_id, request_id)))
}

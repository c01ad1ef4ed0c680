/**
 * Password Hashing
 *
 * Passwords are stored as the lowercase hex SHA-256 digest of the
 * plaintext, without a salt. This matches the credential hashes
 * already in the users table; switching to a salted scheme (bcrypt,
 * argon2) would invalidate every stored credential, so the format is
 * kept as-is. The weakness is documented in DESIGN.md.
 */

use sha2::{Digest, Sha256};

/// Hash a plaintext password for storage or lookup
///
/// # Returns
///
/// Lowercase hex SHA-256 digest (64 characters)
pub fn hash_password(password: &str) -> String {
    hex::encode(Sha256::digest(password.as_bytes()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_known_digest() {
        // sha256("password123")
        assert_eq!(
            hash_password("password123"),
            "ef92b778bafe771e89245b89ecbc08a44a4e166c06659911881f383d4473e94f"
        );
    }

    #[test]
    fn test_digest_shape() {
        let digest = hash_password("secret");
        assert_eq!(digest.len(), 64);
        assert!(digest.chars().all(|c| c.is_ascii_hexdigit()));
        assert_eq!(digest, digest.to_lowercase());
    }

    #[test]
    fn test_deterministic() {
        assert_eq!(hash_password("secret"), hash_password("secret"));
        assert_ne!(hash_password("secret"), hash_password("secret2"));
    }
}

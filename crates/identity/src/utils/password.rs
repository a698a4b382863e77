//! Password hashing and verification.

use crate::types::IdentityError;

/// bcrypt cost factor used when hashing new passwords.
pub const DEFAULT_HASH_COST: u32 = 10;

/// Hash a plaintext password at the given bcrypt cost.
///
/// A cost outside the range the algorithm supports surfaces as
/// [`IdentityError::Hash`].
pub fn hash_password(password: &str, cost: u32) -> Result<String, IdentityError> {
    bcrypt::hash(password, cost).map_err(IdentityError::Hash)
}

/// Verify a plaintext password against a stored hash.
///
/// A malformed hash counts as a mismatch; verification never raises.
pub fn verify_password(hash: &str, password: &str) -> bool {
    bcrypt::verify(password, hash).unwrap_or(false)
}

#[cfg(test)]
mod tests {
    use super::*;

    // The minimum bcrypt cost keeps the suite fast.
    const TEST_COST: u32 = 4;

    #[test]
    fn hash_then_verify() {
        let hash = hash_password("password1", TEST_COST).unwrap();

        assert_ne!(hash, "password1");
        assert!(verify_password(&hash, "password1"));
        assert!(!verify_password(&hash, "password2"));
    }

    #[test]
    fn hashes_are_salted() {
        let a = hash_password("password1", TEST_COST).unwrap();
        let b = hash_password("password1", TEST_COST).unwrap();
        assert_ne!(a, b);
    }

    #[test]
    fn malformed_hash_is_a_mismatch() {
        assert!(!verify_password("not a bcrypt hash", "password1"));
        assert!(!verify_password("", "password1"));
    }

    #[test]
    fn out_of_range_cost_is_rejected() {
        assert!(hash_password("password1", 2).is_err());
    }
}

//! Password hashing and verification.
//!
//! Wraps bcrypt with the crate's fixed default work factor. Verification is
//! constant-time within bcrypt itself.

use crate::errors::{ServiceError, ServiceResult};
use bcrypt::{DEFAULT_COST, hash, verify};

/// Hashes a plain text password before storing it in the database.
pub fn hash_password(password: &str) -> ServiceResult<String> {
    hash(password, DEFAULT_COST)
        .map_err(|e| ServiceError::internal(format!("Password hashing failed: {}", e)))
}

/// Verifies a plain text password against a stored hash.
pub fn verify_password(password: &str, hash: &str) -> ServiceResult<bool> {
    verify(password, hash)
        .map_err(|e| ServiceError::internal(format!("Password verification failed: {}", e)))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_hash_and_verify_roundtrip() {
        let hashed = hash_password("Passw0rd").unwrap();
        assert_ne!(hashed, "Passw0rd");
        assert!(verify_password("Passw0rd", &hashed).unwrap());
        assert!(!verify_password("wrong-password", &hashed).unwrap());
    }

    #[test]
    fn test_same_password_hashes_differently() {
        let first = hash_password("Passw0rd").unwrap();
        let second = hash_password("Passw0rd").unwrap();
        assert_ne!(first, second);
    }
}

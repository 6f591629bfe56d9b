//! Password hashing port and its argon2 implementation.

use argon2::{Argon2, PasswordHasher as _, PasswordVerifier as _};
use password_hash::{PasswordHash, SaltString};

/// Hashing collaborator used by the credential verifier.
///
/// `verify` must be constant-time with respect to the supplied password.
pub trait PasswordHasher: Send + Sync {
    /// Hash a plaintext password into a PHC-format string.
    fn hash(&self, password: &str) -> Result<String, password_hash::Error>;

    /// Verify a plaintext password against a stored PHC hash.
    ///
    /// Fails closed: a malformed stored hash verifies as `false`.
    fn verify(&self, password: &str, stored_hash: &str) -> bool;
}

/// Argon2id with default parameters.
#[derive(Debug, Default, Clone, Copy)]
pub struct Argon2PasswordHasher;

impl PasswordHasher for Argon2PasswordHasher {
    fn hash(&self, password: &str) -> Result<String, password_hash::Error> {
        let mut salt_bytes = [0u8; 16];
        getrandom::getrandom(&mut salt_bytes).map_err(|_| password_hash::Error::Crypto)?;
        let salt = SaltString::encode_b64(&salt_bytes)?;
        let phc = Argon2::default()
            .hash_password(password.as_bytes(), &salt)?
            .to_string();
        Ok(phc)
    }

    fn verify(&self, password: &str, stored_hash: &str) -> bool {
        match PasswordHash::new(stored_hash) {
            Ok(parsed) => Argon2::default()
                .verify_password(password.as_bytes(), &parsed)
                .is_ok(),
            Err(_) => false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn hash_then_verify() {
        let hasher = Argon2PasswordHasher;
        let phc = hasher.hash("pass_word").unwrap();
        assert!(hasher.verify("pass_word", &phc));
        assert!(!hasher.verify("wrong", &phc));
    }

    #[test]
    fn malformed_hash_verifies_false() {
        let hasher = Argon2PasswordHasher;
        assert!(!hasher.verify("pass_word", "not-a-phc-string"));
    }
}

//! Password Hashing and Verification
//!
//! One-way password hashing with:
//! - Argon2id hashing (memory-hard, recommended by OWASP)
//! - Constant-time comparison
//!
//! Hashes are stored in PHC string format, which embeds the algorithm,
//! parameters, and salt alongside the digest.

use std::fmt;

use argon2::{Argon2, PasswordHash, PasswordHasher, PasswordVerifier, password_hash::SaltString};
use rand::rngs::OsRng;
use thiserror::Error;

/// Password hashing errors
#[derive(Debug, Error)]
pub enum PasswordHashError {
    /// Hashing operation failed
    #[error("Password hashing failed: {0}")]
    HashingFailed(String),

    /// Invalid hash format
    #[error("Invalid password hash format")]
    InvalidHashFormat,
}

/// Hash a plaintext password with Argon2id
///
/// Generates a fresh random 128-bit salt per call. Never fails for
/// non-empty input under normal operation; a failure is fatal to the
/// enclosing request.
pub fn hash_password(plaintext: &str) -> Result<HashedPassword, PasswordHashError> {
    let salt = SaltString::generate(OsRng);

    // Argon2::default() uses the OWASP-recommended Argon2id parameters:
    // m=19456 (19 MiB), t=2, p=1
    let argon2 = Argon2::default();

    let hash = argon2
        .hash_password(plaintext.as_bytes(), &salt)
        .map_err(|e| PasswordHashError::HashingFailed(e.to_string()))?;

    Ok(HashedPassword {
        hash: hash.to_string(),
    })
}

/// Verify a plaintext password against a stored PHC string
///
/// A stored hash that fails to parse is reported as a mismatch, not an
/// error; callers only learn "matches" or "does not match".
pub fn verify_password(stored_hash: &str, plaintext: &str) -> bool {
    match HashedPassword::from_phc_string(stored_hash) {
        Ok(hash) => hash.verify(plaintext),
        Err(_) => false,
    }
}

/// Hashed password in PHC string format
///
/// Safe to store; the raw password never appears in this type.
#[derive(Clone, PartialEq, Eq)]
pub struct HashedPassword {
    hash: String,
}

impl HashedPassword {
    /// Create from a PHC string (e.g. loaded from the database)
    pub fn from_phc_string(s: impl Into<String>) -> Result<Self, PasswordHashError> {
        let hash = s.into();

        PasswordHash::new(&hash).map_err(|_| PasswordHashError::InvalidHashFormat)?;

        Ok(Self { hash })
    }

    /// Get the PHC string for storage
    pub fn as_phc_string(&self) -> &str {
        &self.hash
    }

    /// Verify a plaintext password against this hash
    ///
    /// Returns `false` for a wrong password. A stored hash that does not
    /// even parse also counts as "does not match" rather than an error.
    pub fn verify(&self, plaintext: &str) -> bool {
        let parsed_hash = match PasswordHash::new(&self.hash) {
            Ok(h) => h,
            Err(_) => return false,
        };

        // Argon2 uses constant-time comparison internally
        Argon2::default()
            .verify_password(plaintext.as_bytes(), &parsed_hash)
            .is_ok()
    }
}

impl fmt::Debug for HashedPassword {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("HashedPassword")
            .field("hash", &"[HASH]")
            .finish()
    }
}

//! Password hashing (bcrypt)
//!
//! bcrypt only reads the first 72 bytes of its input. The non-truncating
//! variants refuse longer passwords instead of silently ignoring the tail.

use bcrypt::{non_truncating_hash, non_truncating_verify, BcryptError};

/// Hash a password with a fresh random salt
pub fn hash_password(password: &str, cost: u32) -> Result<String, BcryptError> {
    non_truncating_hash(password, cost)
}

/// Check a password against a stored bcrypt hash
///
/// Returns `Ok(false)` on mismatch; `Err` when the stored hash is unusable or
/// the password is longer than bcrypt can read.
pub fn verify_password(password: &str, password_hash: &str) -> Result<bool, BcryptError> {
    non_truncating_verify(password, password_hash)
}

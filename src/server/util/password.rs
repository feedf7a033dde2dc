//! Argon2 password hashing.

use argon2::{
    password_hash::{
        rand_core::OsRng, PasswordHash, PasswordHasher, PasswordVerifier, SaltString,
    },
    Argon2,
};

use crate::server::error::AppError;

/// Hashes `password` with Argon2id and a random salt.
///
/// # Returns
/// - `Ok(String)` - PHC-formatted hash suitable for storing in `hashed_password`
/// - `Err(AppError::PasswordHashErr)` - Hashing failed
pub fn hash_password(password: &str) -> Result<String, AppError> {
    let salt = SaltString::generate(&mut OsRng);
    let hash = Argon2::default().hash_password(password.as_bytes(), &salt)?;

    Ok(hash.to_string())
}

/// Checks `password` against a stored PHC hash.
///
/// A hash that cannot be parsed never verifies, so accounts with a placeholder hash cannot
/// be logged into.
pub fn verify_password(password: &str, hash: &str) -> bool {
    let Ok(parsed) = PasswordHash::new(hash) else {
        return false;
    };

    Argon2::default()
        .verify_password(password.as_bytes(), &parsed)
        .is_ok()
}

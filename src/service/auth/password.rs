use argon2::{
    password_hash::{self, rand_core::OsRng, PasswordHash, PasswordHasher, PasswordVerifier,
        SaltString},
    Argon2,
};

use crate::error::Error;

/// Hash a plaintext password with Argon2id, returning a PHC format string.
pub fn hash_password(password: &str) -> Result<String, Error> {
    let salt = SaltString::generate(&mut OsRng);

    let password_hash = Argon2::default()
        .hash_password(password.as_bytes(), &salt)
        .map_err(|e| Error::InternalError(format!("Failed to hash password: {}", e)))?;

    Ok(password_hash.to_string())
}

/// Verify a plaintext password against a stored PHC hash string.
///
/// A mismatch returns `Ok(false)`; a hash that cannot be parsed or any other
/// hasher failure is an internal error, since stored hashes are only ever
/// produced by [`hash_password`].
pub fn verify_password(password: &str, password_hash: &str) -> Result<bool, Error> {
    let parsed_hash = PasswordHash::new(password_hash)
        .map_err(|e| Error::InternalError(format!("Failed to parse stored password hash: {}", e)))?;

    match Argon2::default().verify_password(password.as_bytes(), &parsed_hash) {
        Ok(()) => Ok(true),
        Err(password_hash::Error::Password) => Ok(false),
        Err(e) => Err(Error::InternalError(format!(
            "Failed to verify password: {}",
            e
        ))),
    }
}

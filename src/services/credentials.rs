//! Password hashing and verification.
//!
//! Argon2id with a per-password random salt. The cost is the point: a
//! leaked table of these digests is expensive to brute-force, which a plain
//! general-purpose digest would not be.

use anyhow::{Context, Result, anyhow};
use argon2::{
    Argon2,
    password_hash::{PasswordHash, PasswordHasher, PasswordVerifier, SaltString, rand_core::OsRng},
};
use tokio::task;
use tracing::warn;

/// Hashes a password into a PHC-format string (algorithm, parameters, salt
/// and digest all encoded together).
pub fn hash(password: &str) -> Result<String> {
    let salt = SaltString::generate(&mut OsRng);
    let digest = Argon2::default()
        .hash_password(password.as_bytes(), &salt)
        .map_err(|e| anyhow!("failed to hash password: {e}"))?;
    Ok(digest.to_string())
}

/// Checks a password against a stored digest. A digest that does not parse
/// as a PHC string counts as a mismatch rather than an error; it can never
/// have been produced by [`hash`].
#[must_use]
pub fn verify(password: &str, digest: &str) -> bool {
    let Ok(parsed) = PasswordHash::new(digest) else {
        warn!("stored password digest is not a valid PHC string");
        return false;
    };
    Argon2::default()
        .verify_password(password.as_bytes(), &parsed)
        .is_ok()
}

/// [`hash`] on a blocking thread. Argon2 is CPU-heavy on purpose and would
/// stall the async runtime if run inline.
pub async fn hash_blocking(password: &str) -> Result<String> {
    let password = password.to_string();
    task::spawn_blocking(move || hash(&password))
        .await
        .context("password hashing task panicked")?
}

/// [`verify`] on a blocking thread.
pub async fn verify_blocking(password: &str, digest: &str) -> Result<bool> {
    let password = password.to_string();
    let digest = digest.to_string();
    task::spawn_blocking(move || verify(&password, &digest))
        .await
        .context("password verification task panicked")
}

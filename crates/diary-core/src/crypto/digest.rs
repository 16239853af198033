//! Hashing, salts, and session key derivation.
//!
//! Password digests are SHA-256 over `password || salt`. Session keys are
//! derived deterministically from a seed so that content sealed at logout
//! can be opened again at the next login.

use sha2::{Digest, Sha256};
use zeroize::ZeroizeOnDrop;

use crate::error::{DiaryError, Result};

/// Salt length in bytes.
pub const SALT_LENGTH: usize = 16;

/// A symmetric key used to seal entry content for one session.
///
/// Key material is zeroized from memory when dropped.
#[derive(Clone, PartialEq, Eq, ZeroizeOnDrop)]
pub struct SessionKey {
    key: String,
}

impl SessionKey {
    /// Raw key bytes for the keystream transform.
    ///
    /// Avoid storing or logging this value.
    pub fn as_bytes(&self) -> &[u8] {
        self.key.as_bytes()
    }
}

impl std::fmt::Debug for SessionKey {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SessionKey")
            .field("key", &"[REDACTED]")
            .finish()
    }
}

/// SHA-256 of `input` as a 64-character lowercase hex string.
pub fn hash(input: impl AsRef<[u8]>) -> String {
    hex::encode(Sha256::digest(input.as_ref()))
}

/// Digest of a password concatenated with its salt.
pub fn hash_password(password: &str, salt: &[u8]) -> String {
    let mut hasher = Sha256::new();
    hasher.update(password.as_bytes());
    hasher.update(salt);
    hex::encode(hasher.finalize())
}

/// Generate a fresh random salt from the operating system.
pub fn generate_salt() -> Result<[u8; SALT_LENGTH]> {
    let mut salt = [0u8; SALT_LENGTH];
    getrandom::getrandom(&mut salt)
        .map_err(|e| DiaryError::Crypto(format!("Failed to generate salt: {}", e)))?;
    Ok(salt)
}

/// Derive a session key from `seed`.
///
/// The same seed always yields the same key.
pub fn derive_key(seed: &str) -> SessionKey {
    SessionKey { key: hash(seed) }
}

/// Derive a single-use key from `seed` mixed with fresh randomness.
///
/// This is the legacy session-key scheme, kept for callers that want a
/// throwaway key. The archive does not use it. Two calls with the same seed
/// produce different keys, so anything sealed with one of these cannot be
/// opened after the key is dropped. Use [`derive_key`] for content that must
/// survive a logout.
pub fn derive_ephemeral_key(seed: &str) -> Result<SessionKey> {
    let mut nonce = [0u8; 4];
    getrandom::getrandom(&mut nonce)
        .map_err(|e| DiaryError::Crypto(format!("Failed to generate nonce: {}", e)))?;
    let nonce = u32::from_le_bytes(nonce);
    Ok(SessionKey {
        key: hash(format!("{}{}", seed, nonce)),
    })
}

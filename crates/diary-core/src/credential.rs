//! Account credentials and session state.
//!
//! A [`Credential`] holds the salted password digest that persists across
//! sessions and the session key that exists only while authenticated.

use crate::crypto::{derive_key, generate_salt, hash_password, SessionKey, SALT_LENGTH};
use crate::error::{DiaryError, Result};

/// One account's authentication and key-derivation state.
///
/// Invariant: `session_key` is `Some` exactly when the credential is
/// authenticated.
#[derive(Clone)]
pub struct Credential {
    username: String,
    password_hash: String,
    salt: [u8; SALT_LENGTH],
    session_key: Option<SessionKey>,
}

impl Credential {
    /// Create a credential for a new account.
    ///
    /// The returned credential is not authenticated; call [`Credential::login`].
    ///
    /// # Errors
    ///
    /// Returns `DiaryError::InvalidInput` if the username is empty or spans
    /// more than one line, or `DiaryError::Crypto` if no salt can be generated.
    pub fn register(username: &str, password: &str) -> Result<Self> {
        validate_username(username)?;
        let salt = generate_salt()?;
        Ok(Self {
            username: username.to_string(),
            password_hash: hash_password(password, &salt),
            salt,
            session_key: None,
        })
    }

    /// Verify `password` and open a session.
    ///
    /// On failure nothing changes. Logging in again while authenticated
    /// rederives the same session key.
    pub fn login(&mut self, password: &str) -> bool {
        if !self.verify_password(password) {
            return false;
        }
        self.session_key = Some(self.derive_session_key());
        true
    }

    /// Close the session and drop the session key.
    pub fn logout(&mut self) {
        self.session_key = None;
    }

    /// Replace the password after verifying the current one.
    ///
    /// Returns `Ok(false)` without touching anything when `old_password`
    /// does not verify. On success the salt is rotated and, for an open
    /// session, the session key is rederived from the new digest.
    pub fn change_password(&mut self, old_password: &str, new_password: &str) -> Result<bool> {
        if !self.verify_password(old_password) {
            return Ok(false);
        }

        let salt = generate_salt()?;
        self.password_hash = hash_password(new_password, &salt);
        self.salt = salt;
        if self.session_key.is_some() {
            self.session_key = Some(self.derive_session_key());
        }
        Ok(true)
    }

    pub fn is_authenticated(&self) -> bool {
        self.session_key.is_some()
    }

    pub fn username(&self) -> &str {
        &self.username
    }

    pub fn password_hash(&self) -> &str {
        &self.password_hash
    }

    pub fn salt(&self) -> &[u8; SALT_LENGTH] {
        &self.salt
    }

    /// The current session key, if authenticated.
    pub fn session_key(&self) -> Option<&SessionKey> {
        self.session_key.as_ref()
    }

    /// Serialize to the `user.dat` layout: username, digest, hex salt.
    pub fn serialize(&self) -> String {
        format!(
            "{}\n{}\n{}\n",
            self.username,
            self.password_hash,
            hex::encode(self.salt)
        )
    }

    /// Parse the `user.dat` layout. The result is never authenticated.
    ///
    /// # Errors
    ///
    /// Returns `DiaryError::CorruptRecord` when a line is missing, the digest
    /// is not 64 hex characters, or the salt does not decode to 16 bytes.
    pub fn deserialize(data: &str) -> Result<Self> {
        let mut lines = data.lines();
        let username = lines
            .next()
            .filter(|line| !line.is_empty())
            .ok_or_else(|| DiaryError::corrupt("user record is missing the username"))?;
        let password_hash = lines
            .next()
            .ok_or_else(|| DiaryError::corrupt("user record is missing the password hash"))?;
        let salt_hex = lines
            .next()
            .ok_or_else(|| DiaryError::corrupt("user record is missing the salt"))?;

        if password_hash.len() != 64 || !password_hash.chars().all(|c| c.is_ascii_hexdigit()) {
            return Err(DiaryError::corrupt("user record has a malformed password hash"));
        }

        let salt_bytes = hex::decode(salt_hex.trim())
            .map_err(|e| DiaryError::corrupt(format!("user record salt is not hex: {}", e)))?;
        let salt: [u8; SALT_LENGTH] = salt_bytes.try_into().map_err(|bytes: Vec<u8>| {
            DiaryError::corrupt(format!(
                "user record salt has {} bytes (expected {})",
                bytes.len(),
                SALT_LENGTH
            ))
        })?;

        Ok(Self {
            username: username.to_string(),
            password_hash: password_hash.to_ascii_lowercase(),
            salt,
            session_key: None,
        })
    }

    fn verify_password(&self, password: &str) -> bool {
        hash_password(password, &self.salt) == self.password_hash
    }

    fn derive_session_key(&self) -> SessionKey {
        derive_key(&format!("{}{}", self.username, self.password_hash))
    }
}

impl std::fmt::Debug for Credential {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Credential")
            .field("username", &self.username)
            .field("authenticated", &self.is_authenticated())
            .finish_non_exhaustive()
    }
}

fn validate_username(username: &str) -> Result<()> {
    if username.trim().is_empty() {
        return Err(DiaryError::InvalidInput(
            "Username cannot be empty".to_string(),
        ));
    }
    if username.contains(['\n', '\r']) {
        return Err(DiaryError::InvalidInput(
            "Username cannot contain line breaks".to_string(),
        ));
    }
    Ok(())
}

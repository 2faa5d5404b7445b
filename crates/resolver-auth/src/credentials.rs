//! Credentials used to sign and to verify requests.
//!
//! A client holds its own [`SigningCredentials`] and passes them by reference
//! to [`authorization_header`](crate::authorization_header). A server resolves
//! security keys through a [`CredentialProvider`]; usernames are matched
//! case-insensitively, security keys are case-sensitive.

use std::collections::HashMap;
use std::fmt;

use crate::error::AuthError;

/// A username and its security key, owned by the caller.
///
/// The security key is hashed as its UTF-8 bytes.
///
/// # Examples
///
/// ```
/// use resolver_auth::SigningCredentials;
///
/// let credentials = SigningCredentials::new("device-42", "s3cr3t");
/// assert_eq!(credentials.username(), "device-42");
/// assert_eq!(credentials.key_bytes(), b"s3cr3t");
/// assert!(!format!("{credentials:?}").contains("s3cr3t"));
/// ```
#[derive(Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SigningCredentials {
    username: String,
    security_key: String,
}

impl SigningCredentials {
    /// Create credentials from a username and security key.
    pub fn new(username: impl Into<String>, security_key: impl Into<String>) -> Self {
        Self {
            username: username.into(),
            security_key: security_key.into(),
        }
    }

    /// The username sent in the `Authorization` header.
    #[must_use]
    pub fn username(&self) -> &str {
        &self.username
    }

    /// The security key as HMAC key bytes.
    #[must_use]
    pub fn key_bytes(&self) -> &[u8] {
        self.security_key.as_bytes()
    }

    /// Whether the username is non-blank and the security key non-empty.
    ///
    /// Whitespace is valid key material, so a whitespace-only key is accepted.
    #[must_use]
    pub fn is_complete(&self) -> bool {
        !self.username.trim().is_empty() && !self.security_key.is_empty()
    }
}

impl fmt::Debug for SigningCredentials {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SigningCredentials")
            .field("username", &self.username)
            .field("security_key", &"<redacted>")
            .finish()
    }
}

/// Trait for looking up security keys by username.
///
/// Implementations may back this with a database, configuration file,
/// or any other credential store.
pub trait CredentialProvider: Send + Sync {
    /// Retrieve the security key for the given username.
    ///
    /// # Errors
    ///
    /// Returns [`AuthError::UserNotFound`] if the username is not recognized.
    fn get_security_key(&self, username: &str) -> Result<String, AuthError>;
}

/// A simple in-memory credential provider backed by a `HashMap`.
///
/// Usernames are stored lower-cased so lookups ignore ASCII case.
#[derive(Clone)]
pub struct StaticCredentialProvider {
    credentials: HashMap<String, String>,
}

impl StaticCredentialProvider {
    /// Create a new provider from an iterable of (username, security_key) pairs.
    pub fn new(credentials: impl IntoIterator<Item = (String, String)>) -> Self {
        Self {
            credentials: credentials
                .into_iter()
                .map(|(username, key)| (username.to_ascii_lowercase(), key))
                .collect(),
        }
    }
}

impl fmt::Debug for StaticCredentialProvider {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("StaticCredentialProvider")
            .field("users", &self.credentials.len())
            .finish()
    }
}

impl From<SigningCredentials> for StaticCredentialProvider {
    fn from(credentials: SigningCredentials) -> Self {
        Self::new([(credentials.username, credentials.security_key)])
    }
}

impl CredentialProvider for StaticCredentialProvider {
    fn get_security_key(&self, username: &str) -> Result<String, AuthError> {
        self.credentials
            .get(&username.to_ascii_lowercase())
            .cloned()
            .ok_or_else(|| AuthError::UserNotFound(username.to_owned()))
    }
}

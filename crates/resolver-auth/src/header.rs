//! `Authorization` header token encoding.
//!
//! The token has the format:
//!
//! ```text
//! <username>:<signature>
//! ```
//!
//! It is split on the first `:` only, so usernames must not contain a colon.

use crate::error::AuthError;

/// Delimiter between the username and the signature.
const AUTH_DELIMITER: char = ':';

/// Join a username and a signature into an `Authorization` header value.
///
/// # Errors
///
/// Returns [`AuthError::InvalidCredentials`] if either part is empty or
/// whitespace-only.
///
/// # Examples
///
/// ```
/// use resolver_auth::{format_auth_header, parse_auth_header};
///
/// let header = format_auth_header("device-42", "c2lnbmF0dXJl").unwrap();
/// assert_eq!(header, "device-42:c2lnbmF0dXJl");
///
/// let (username, signature) = parse_auth_header(&header).unwrap();
/// assert_eq!(username, "device-42");
/// assert_eq!(signature, "c2lnbmF0dXJl");
/// ```
pub fn format_auth_header(username: &str, signature: &str) -> Result<String, AuthError> {
    if username.trim().is_empty() || signature.trim().is_empty() {
        return Err(AuthError::InvalidCredentials);
    }

    Ok(format!("{username}{AUTH_DELIMITER}{signature}"))
}

/// Split an `Authorization` header value into `(username, signature)`.
///
/// Everything after the first `:` belongs to the signature.
///
/// # Errors
///
/// Returns [`AuthError::MalformedCredentials`] if the header has no `:`.
pub fn parse_auth_header(header: &str) -> Result<(String, String), AuthError> {
    let (username, signature) = header
        .split_once(AUTH_DELIMITER)
        .ok_or(AuthError::MalformedCredentials)?;

    Ok((username.to_owned(), signature.to_owned()))
}

//! Error types for Resolver HMAC authentication.
//!
//! Every failure in this crate is a local validation error. Nothing here is
//! retried; callers reject the request before it is sent (or answered).

/// Errors that can occur while signing or verifying a Resolver request.
#[derive(Debug, thiserror::Error)]
pub enum AuthError {
    /// The username or signature is empty or whitespace-only.
    #[error("Credentials required")]
    InvalidCredentials,

    /// The authorization token has no `:` delimiter.
    #[error("Malformed credentials")]
    MalformedCredentials,

    /// The `Authorization` header is missing from the request.
    #[error("Missing Authorization header")]
    MissingAuthHeader,

    /// The `Authorization` header is not valid visible ASCII.
    #[error("Invalid Authorization header format")]
    InvalidAuthHeader,

    /// The HTTP verb could not be parsed as a method token.
    #[error("Invalid HTTP verb: {0}")]
    InvalidVerb(String),

    /// The username was not found in the credential store.
    #[error("User not found: {0}")]
    UserNotFound(String),

    /// The computed signature does not match the provided signature.
    #[error("Signature does not match")]
    SignatureDoesNotMatch,

    /// The request date is not a valid RFC 822 timestamp.
    #[error("Invalid request date: {0}")]
    InvalidDate(String),

    /// The request date lies outside the allowed clock skew window.
    #[error("Request has expired")]
    RequestExpired,
}

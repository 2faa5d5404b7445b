//! Client-side request signing.

use tracing::debug;

use crate::canonical::build_string_to_sign;
use crate::credentials::SigningCredentials;
use crate::error::AuthError;
use crate::header::format_auth_header;
use crate::request::RequestDetails;
use crate::signature::sign;

/// Produce the `Authorization` header value for a request.
///
/// # Errors
///
/// Returns [`AuthError::InvalidCredentials`] if the username is blank or the
/// security key is empty. No signature is computed in that case.
///
/// # Examples
///
/// ```
/// use resolver_auth::{RequestDetails, SigningCredentials, authorization_header};
///
/// let credentials = SigningCredentials::new("device-42", "secret-key");
/// let details = RequestDetails::new("http://host/api/v1.1/payoffs/?payload=122&type=5", "POST")
///     .unwrap()
///     .with_content("application/json", "237")
///     .with_date("Sun, 20 Sep 2009 20:36:40 GMT");
///
/// let header = authorization_header(&details, &credentials).unwrap();
/// assert!(header.starts_with("device-42:"));
/// ```
pub fn authorization_header(
    details: &RequestDetails,
    credentials: &SigningCredentials,
) -> Result<String, AuthError> {
    if !credentials.is_complete() {
        return Err(AuthError::InvalidCredentials);
    }

    let string_to_sign = build_string_to_sign(details);
    debug!(details = %details, string_to_sign = ?string_to_sign, "Signing request");

    let signature = sign(credentials.key_bytes(), &string_to_sign);
    format_auth_header(credentials.username(), &signature)
}

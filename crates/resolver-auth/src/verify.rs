//! Server-side verification of signed requests.
//!
//! The verification flow mirrors signing:
//!
//! 1. Split the `Authorization` header into username and signature.
//! 2. Resolve the security key for the username (case-insensitive).
//! 3. Rebuild the string to sign from the request details.
//! 4. Compare the expected signature to the provided one in constant time.
//! 5. Reject requests whose date falls outside the allowed clock skew.
//!
//! The main entry points are [`verify_request`] and [`verify_parts`].

use chrono::{DateTime, TimeDelta, Utc};
use tracing::debug;

use crate::canonical::build_string_to_sign;
use crate::credentials::CredentialProvider;
use crate::error::AuthError;
use crate::header::parse_auth_header;
use crate::request::{RequestDetails, parse_rfc822};
use crate::signature::{sign, signatures_match};

/// Default allowed difference between the request date and the server clock.
const DEFAULT_MAX_CLOCK_SKEW_SECS: u64 = 15 * 60;

/// Verification settings.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct VerifyConfig {
    /// Whether to reject requests whose date is outside the skew window.
    pub check_clock_skew: bool,
    /// Maximum allowed difference, in seconds, between the request date and now.
    pub max_clock_skew_secs: u64,
}

impl Default for VerifyConfig {
    fn default() -> Self {
        Self {
            check_clock_skew: true,
            max_clock_skew_secs: DEFAULT_MAX_CLOCK_SKEW_SECS,
        }
    }
}

/// The result of a successful verification.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AuthResult {
    /// The username as sent by the caller.
    pub username: String,
    /// The signed request date, when it could be parsed.
    pub signed_at: Option<DateTime<Utc>>,
}

/// Verify a signed request described by `details`.
///
/// # Errors
///
/// Returns an [`AuthError`] if the header is malformed, the user is unknown,
/// the signature does not match, or the request date is invalid or stale.
///
/// # Examples
///
/// ```
/// use chrono::{TimeZone, Utc};
/// use resolver_auth::{
///     RequestDetails, SigningCredentials, StaticCredentialProvider, VerifyConfig,
///     authorization_header, verify_request,
/// };
///
/// let credentials = SigningCredentials::new("device-42", "secret-key");
/// let now = Utc.with_ymd_and_hms(2009, 9, 20, 20, 36, 40).unwrap();
/// let details = RequestDetails::new("http://host/api/v2/isavailable", "GET")
///     .unwrap()
///     .with_date_time(now);
///
/// let header = authorization_header(&details, &credentials).unwrap();
/// let provider = StaticCredentialProvider::from(credentials);
///
/// let result = verify_request(&details, &header, &provider, &VerifyConfig::default(), now).unwrap();
/// assert_eq!(result.username, "device-42");
/// ```
pub fn verify_request(
    details: &RequestDetails,
    auth_header: &str,
    credential_provider: &dyn CredentialProvider,
    config: &VerifyConfig,
    now: DateTime<Utc>,
) -> Result<AuthResult, AuthError> {
    let (username, provided_signature) = parse_auth_header(auth_header)?;

    debug!(username = %username, details = %details, "Verifying request signature");

    let security_key = credential_provider.get_security_key(&username)?;

    let string_to_sign = build_string_to_sign(details);

    debug!(string_to_sign = ?string_to_sign, "Built string to sign");

    let expected_signature = sign(security_key.as_bytes(), &string_to_sign);

    if !signatures_match(&provided_signature, &expected_signature) {
        debug!(username = %username, "Signature mismatch");
        return Err(AuthError::SignatureDoesNotMatch);
    }

    let signed_at = parse_rfc822(details.date()).ok();

    if config.check_clock_skew {
        let signed_at =
            signed_at.ok_or_else(|| AuthError::InvalidDate(details.date().to_owned()))?;
        check_clock_skew(signed_at, now, config.max_clock_skew_secs)?;
    }

    debug!(username = %username, "Verification succeeded");

    Ok(AuthResult {
        username,
        signed_at,
    })
}

/// Verify a signed HTTP request from its parts.
///
/// # Errors
///
/// Returns [`AuthError::MissingAuthHeader`] if there is no `Authorization`
/// header, [`AuthError::InvalidAuthHeader`] if it is not visible ASCII, and
/// otherwise the errors of [`verify_request`].
pub fn verify_parts(
    parts: &http::request::Parts,
    credential_provider: &dyn CredentialProvider,
    config: &VerifyConfig,
    now: DateTime<Utc>,
) -> Result<AuthResult, AuthError> {
    let auth_header = parts
        .headers
        .get(http::header::AUTHORIZATION)
        .ok_or(AuthError::MissingAuthHeader)?
        .to_str()
        .map_err(|_| AuthError::InvalidAuthHeader)?;

    let details = RequestDetails::from_parts(parts)?;

    verify_request(&details, auth_header, credential_provider, config, now)
}

/// Reject `signed_at` when it differs from `now` by more than `max_skew_secs`.
fn check_clock_skew(
    signed_at: DateTime<Utc>,
    now: DateTime<Utc>,
    max_skew_secs: u64,
) -> Result<(), AuthError> {
    let max_skew = i64::try_from(max_skew_secs)
        .ok()
        .and_then(TimeDelta::try_seconds)
        .unwrap_or(TimeDelta::MAX);

    if (now - signed_at).abs() > max_skew {
        debug!(signed_at = %signed_at, now = %now, "Request date outside clock skew window");
        return Err(AuthError::RequestExpired);
    }

    Ok(())
}

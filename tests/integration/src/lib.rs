//! End-to-end tests for Resolver request signing and response formatting.
//!
//! These tests play both sides of an exchange in-process: a client signs a
//! request, a server verifies it from the raw HTTP parts, and the response
//! body is formatted for display. No network is involved.

use std::sync::Once;

use chrono::{DateTime, TimeZone, Utc};
use resolver_auth::{RequestDetails, SigningCredentials, authorization_header};
use tracing::debug;

static INIT: Once = Once::new();

/// Content type sent with resolver POST requests.
pub const CONTENT_TYPE: &str = "application/json; charset=utf-8";

/// Initialize tracing (once).
pub fn init_tracing() {
    INIT.call_once(|| {
        tracing_subscriber::fmt()
            .with_env_filter(
                tracing_subscriber::EnvFilter::try_from_default_env()
                    .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("warn")),
            )
            .with_test_writer()
            .init();
    });
}

/// A fixed server clock for deterministic tests.
#[must_use]
pub fn server_now() -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2026, 2, 28, 12, 0, 0).unwrap()
}

/// Credentials of the test device.
#[must_use]
pub fn device_credentials() -> SigningCredentials {
    SigningCredentials::new("Device-42", "kX9#secret/key")
}

/// Build a signed HTTP request the way a resolver client does.
///
/// POST requests carry `body` with its byte length; other verbs send no body
/// and sign only the verb, date and resource. Signing failures surface as
/// [`resolver_auth::AuthError`], request building failures as [`http::Error`].
pub fn signed_request(
    method: &str,
    url: &str,
    body: &str,
    credentials: &SigningCredentials,
    date: DateTime<Utc>,
) -> anyhow::Result<http::Request<String>> {
    let mut details = RequestDetails::new(url, method)?.with_date_time(date);
    if *details.verb() == http::Method::POST {
        details = details.with_body(CONTENT_TYPE, body.as_bytes());
    }

    let authorization = authorization_header(&details, credentials)?;
    debug!(details = %details, "built signed request");

    let mut builder = http::Request::builder()
        .method(details.verb().clone())
        .uri(url)
        .header(http::header::DATE, details.date())
        .header(http::header::AUTHORIZATION, authorization);
    if *details.verb() == http::Method::POST {
        builder = builder
            .header(http::header::CONTENT_TYPE, details.content_type())
            .header(http::header::CONTENT_LENGTH, details.content_length());
    }

    Ok(builder.body(body.to_owned())?)
}

mod test_auth;
mod test_format;

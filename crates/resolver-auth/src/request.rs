//! Request metadata that takes part in the signature.
//!
//! [`RequestDetails`] is an immutable value describing one outgoing (or
//! incoming) request: the upper-cased verb, the RFC 822 date, the content type
//! and length, and the path + query portion of the URL.

use std::fmt;

use chrono::{DateTime, Utc};
use http::Method;

use crate::error::AuthError;

/// Custom date header. When present on an incoming request it is signed
/// instead of the standard `Date` header.
pub const CUSTOM_DATE_HEADER: &str = "x-dmrc-date";

/// RFC 822 date layout, always in GMT with a four digit year.
const RFC822_FORMAT: &str = "%a, %d %b %Y %H:%M:%S GMT";

/// Details of a request to sign or to authorize.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RequestDetails {
    uri_path: String,
    verb: Method,
    content_type: String,
    content_length: String,
    date: String,
}

impl RequestDetails {
    /// Create request details for `verb` against the full `url`.
    ///
    /// The verb is upper-cased. A malformed or relative `url` yields an empty
    /// URI path rather than an error.
    ///
    /// # Examples
    ///
    /// ```
    /// use resolver_auth::RequestDetails;
    ///
    /// let details = RequestDetails::new("http://resolver.example.com/api/v2/payoff/1/2?clientdata=x", "post")
    ///     .unwrap()
    ///     .with_content("application/json; charset=utf-8", "237")
    ///     .with_date("Sun, 20 Sep 2009 20:36:40 GMT");
    ///
    /// assert_eq!(details.verb().as_str(), "POST");
    /// assert_eq!(details.uri_path(), "/api/v2/payoff/1/2?clientdata=x");
    /// ```
    pub fn new(url: &str, verb: &str) -> Result<Self, AuthError> {
        Ok(Self {
            uri_path: uri_path(url),
            verb: parse_verb(verb)?,
            content_type: String::new(),
            content_length: String::new(),
            date: String::new(),
        })
    }

    /// Build request details from the parts of an incoming HTTP request.
    ///
    /// The `x-dmrc-date` header is used when present, otherwise `Date`.
    /// Missing headers become empty strings.
    pub fn from_parts(parts: &http::request::Parts) -> Result<Self, AuthError> {
        let date = if parts.headers.contains_key(CUSTOM_DATE_HEADER) {
            header_value(parts, CUSTOM_DATE_HEADER)
        } else {
            header_value(parts, http::header::DATE.as_str())
        };

        Ok(Self {
            uri_path: normalized_path_and_query(&parts.uri),
            verb: parse_verb(parts.method.as_str())?,
            content_type: header_value(parts, http::header::CONTENT_TYPE.as_str()),
            content_length: header_value(parts, http::header::CONTENT_LENGTH.as_str()),
            date,
        })
    }

    /// Set the content type and content length fields verbatim.
    #[must_use]
    pub fn with_content(
        mut self,
        content_type: impl Into<String>,
        content_length: impl Into<String>,
    ) -> Self {
        self.content_type = content_type.into();
        self.content_length = content_length.into();
        self
    }

    /// Set the content type, taking the content length from the byte length
    /// of `body`.
    #[must_use]
    pub fn with_body(self, content_type: impl Into<String>, body: &[u8]) -> Self {
        self.with_content(content_type, body.len().to_string())
    }

    /// Set the pre-formatted RFC 822 date verbatim.
    #[must_use]
    pub fn with_date(mut self, date: impl Into<String>) -> Self {
        self.date = date.into();
        self
    }

    /// Set the date from a timestamp, formatted as RFC 822.
    #[must_use]
    pub fn with_date_time(self, date: DateTime<Utc>) -> Self {
        self.with_date(format_rfc822(date))
    }

    /// Path and query portion of the URL, starting with `/`, or empty.
    #[must_use]
    pub fn uri_path(&self) -> &str {
        &self.uri_path
    }

    /// Upper-cased HTTP verb.
    #[must_use]
    pub fn verb(&self) -> &Method {
        &self.verb
    }

    /// Content type header value.
    #[must_use]
    pub fn content_type(&self) -> &str {
        &self.content_type
    }

    /// Content length header value.
    #[must_use]
    pub fn content_length(&self) -> &str {
        &self.content_length
    }

    /// RFC 822 date.
    #[must_use]
    pub fn date(&self) -> &str {
        &self.date
    }
}

impl fmt::Display for RequestDetails {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Verb: {}, Type: {}, Len: {}, Date: {}, Uri: '{}'",
            self.verb, self.content_type, self.content_length, self.date, self.uri_path
        )
    }
}

/// Extract the path and query of an absolute URL, stripping scheme and host.
///
/// Returns an empty string when `url` cannot be parsed or is not absolute.
/// Dot segments and percent escapes are kept as written; callers must sign the
/// same string the server will see in its request target.
///
/// # Examples
///
/// ```
/// use resolver_auth::request::uri_path;
///
/// assert_eq!(uri_path("https://host:8080/api/v1.1/action/token=3287.6832"), "/api/v1.1/action/token=3287.6832");
/// assert_eq!(uri_path("http://host"), "/");
/// assert_eq!(uri_path("not a url"), "");
/// ```
#[must_use]
pub fn uri_path(url: &str) -> String {
    let Ok(uri) = url.parse::<http::Uri>() else {
        return String::new();
    };

    if uri.scheme().is_none() || uri.authority().is_none() {
        return String::new();
    }

    normalized_path_and_query(&uri)
}

/// Format a timestamp as an RFC 822 date in GMT, e.g. `Sun, 20 Sep 2009 20:36:40 GMT`.
#[must_use]
pub fn format_rfc822(date: DateTime<Utc>) -> String {
    date.format(RFC822_FORMAT).to_string()
}

/// Parse an RFC 822 date header value.
pub fn parse_rfc822(date: &str) -> Result<DateTime<Utc>, AuthError> {
    DateTime::parse_from_rfc2822(date)
        .map(|parsed| parsed.with_timezone(&Utc))
        .map_err(|_| AuthError::InvalidDate(date.to_owned()))
}

/// Parse and upper-case an HTTP verb.
fn parse_verb(verb: &str) -> Result<Method, AuthError> {
    Method::from_bytes(verb.trim().to_ascii_uppercase().as_bytes())
        .map_err(|_| AuthError::InvalidVerb(verb.to_owned()))
}

/// Path and query of `uri`, always starting with `/`.
fn normalized_path_and_query(uri: &http::Uri) -> String {
    let path_and_query = uri.path_and_query().map_or("", http::uri::PathAndQuery::as_str);

    if path_and_query.starts_with('/') {
        path_and_query.to_owned()
    } else {
        format!("/{path_and_query}")
    }
}

/// Extract a header value as a string, returning empty string if missing.
fn header_value(parts: &http::request::Parts, name: &str) -> String {
    parts
        .headers
        .get(name)
        .and_then(|v| v.to_str().ok())
        .unwrap_or("")
        .to_owned()
}

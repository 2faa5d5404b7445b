//! String-to-sign construction.
//!
//! The string to sign is built from the request details in a fixed field
//! order, joined by `\n`, with no trailing newline:
//!
//! ```text
//! POST:     VERB\nDate\nContent-Type\nContent-Length\nUriPath
//! otherwise VERB\nDate\nUriPath
//! ```
//!
//! POST requests bind the signature to the body's media type and size; other
//! verbs carry no body and sign only the verb, date and resource. Fields are
//! inserted verbatim.

use http::Method;

use crate::request::RequestDetails;

/// Build the string to sign for a request.
///
/// # Examples
///
/// ```
/// use resolver_auth::{RequestDetails, build_string_to_sign};
///
/// let details = RequestDetails::new("http://host/api/v1.1/payoffs/?payload=122&type=5", "POST")
///     .unwrap()
///     .with_content("application/json", "237")
///     .with_date("Sun, 20 Sep 2009 20:36:40 GMT");
///
/// assert_eq!(
///     build_string_to_sign(&details),
///     "POST\nSun, 20 Sep 2009 20:36:40 GMT\napplication/json\n237\n/api/v1.1/payoffs/?payload=122&type=5"
/// );
/// ```
#[must_use]
pub fn build_string_to_sign(details: &RequestDetails) -> String {
    let verb = details.verb().as_str();
    let date = details.date();
    let uri_path = details.uri_path();

    if *details.verb() == Method::POST {
        let content_type = details.content_type();
        let content_length = details.content_length();
        format!("{verb}\n{date}\n{content_type}\n{content_length}\n{uri_path}")
    } else {
        format!("{verb}\n{date}\n{uri_path}")
    }
}

//! HMAC-SHA512 request authentication for the Resolver service.
//!
//! Every request to the resolver is signed with a keyed hash (HMAC) using
//! SHA-512. Each caller is assigned a username and a security key; the key
//! signs a canonical string built from the request, and the username and
//! signature travel in the HTTP `Authorization` header as
//! `{username}:{signature}`.
//!
//! # Overview
//!
//! The string to sign is
//!
//! ```text
//! POST:     VERB\nDate\nContent-Type\nContent-Length\nUriPath
//! otherwise VERB\nDate\nUriPath
//! ```
//!
//! where the verb is upper case, the date is RFC 822 in GMT, and the URI path
//! is the path and query of the full URL, starting with `/`.
//!
//! # Usage
//!
//! ```rust
//! use resolver_auth::{RequestDetails, SigningCredentials, authorization_header};
//!
//! let credentials = SigningCredentials::new("device-42", "secret-key");
//! let details = RequestDetails::new("http://host/api/v2/payoff/122/5", "POST")
//!     .unwrap()
//!     .with_body("application/json; charset=utf-8", b"{}")
//!     .with_date("Sun, 20 Sep 2009 20:36:40 GMT");
//!
//! let header = authorization_header(&details, &credentials).unwrap();
//! // Send `header` as the `Authorization` header value. The server calls
//! // `verify_parts` (or `verify_request`) with a credential provider.
//! ```
//!
//! # Modules
//!
//! - [`canonical`] - String-to-sign construction
//! - [`client`] - Client-side `Authorization` header generation
//! - [`credentials`] - Signing credentials and the credential provider trait
//! - [`error`] - Authentication error types
//! - [`header`] - `username:signature` token encoding and decoding
//! - [`request`] - Request details that take part in the signature
//! - [`signature`] - HMAC-SHA512 signing and comparison
//! - [`verify`] - Server-side verification

pub mod canonical;
pub mod client;
pub mod credentials;
pub mod error;
pub mod header;
pub mod request;
pub mod signature;
pub mod verify;

pub use canonical::build_string_to_sign;
pub use client::authorization_header;
pub use credentials::{CredentialProvider, SigningCredentials, StaticCredentialProvider};
pub use error::AuthError;
pub use header::{format_auth_header, parse_auth_header};
pub use request::RequestDetails;
pub use signature::{sign, signatures_match};
pub use verify::{AuthResult, VerifyConfig, verify_parts, verify_request};

//! HMAC-SHA512 request signatures.
//!
//! `Signature = Base64(HMAC-SHA512(SecurityKey, StringToSign))`
//!
//! The signature carries no nonce, so it is deterministic for a given key and
//! message. Freshness comes from the date inside the string to sign.

use base64::Engine;
use base64::engine::general_purpose::STANDARD as BASE64;
use hmac::{Hmac, KeyInit, Mac};
use sha2::Sha512;
use subtle::ConstantTimeEq;

type HmacSha512 = Hmac<Sha512>;

/// Compute `Base64(HMAC-SHA512(key, message))` over the UTF-8 bytes of `message`.
///
/// # Examples
///
/// ```
/// use resolver_auth::sign;
///
/// let signature = sign(b"Jefe", "what do ya want for nothing?");
/// assert_eq!(signature.len(), 88);
/// assert_eq!(signature, sign(b"Jefe", "what do ya want for nothing?"));
/// ```
#[must_use]
pub fn sign(key: &[u8], message: &str) -> String {
    let mut mac = HmacSha512::new_from_slice(key).expect("HMAC can accept any key length");
    mac.update(message.as_bytes());
    let result = mac.finalize().into_bytes();
    BASE64.encode(result)
}

/// Compare two encoded signatures in constant time.
#[must_use]
pub fn signatures_match(provided: &str, expected: &str) -> bool {
    provided.as_bytes().ct_eq(expected.as_bytes()).into()
}

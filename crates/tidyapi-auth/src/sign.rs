//! Canonical signature computation.
//!
//! A TidyApi signature binds an endpoint, a body, a timestamp, and a
//! key/secret pair:
//!
//! ```text
//! SigningKey := SHA256(EndPointName + ";" + UnixSeconds + ";" + AccessSecret)
//! Signature  := Base64(HMAC_SHA256(SigningKey, ContentToSign))
//! ContentToSign :=
//!     "HS256" + ";" +
//!     EndPointName + ";" +
//!     SHA256(body) + ";" +          (raw 32 bytes, not encoded)
//!     UnixSeconds + ";" +
//!     AccessKey + ";" +
//!     AccessSecret
//! ```
//!
//! The timestamp is always its canonical base-10 string, matching what
//! appears in the authorization header. Hashing the body instead of
//! including it bounds the signed content; including both the access key and
//! the secret binds the signature to exactly one credential pair even though
//! the secret also seeds the key. The byte layout above, separators
//! included, is the wire contract.

use base64::Engine;
use base64::engine::general_purpose::STANDARD as BASE64;
use hmac::{Hmac, KeyInit, Mac};
use sha2::{Digest, Sha256};

/// The signing algorithm tag. Process-wide, immutable.
pub const SIGN_ALGORITHM: &str = "HS256";

type HmacSha256 = Hmac<Sha256>;

/// Compute the SHA-256 digest of arbitrary content.
///
/// Used standalone to hash the request body and, via HMAC, for the signature
/// itself. Returns the raw 32 bytes.
///
/// # Examples
///
/// ```
/// use tidyapi_auth::hash_content;
///
/// assert_eq!(hash_content(b"").len(), 32);
/// ```
#[must_use]
pub fn hash_content(content: &[u8]) -> Vec<u8> {
    Sha256::digest(content).to_vec()
}

/// Derive the per-request signing key.
///
/// `unix_seconds` must be the canonical decimal form of the timestamp (no
/// sign, no leading zeros) or independently written peers will disagree on
/// the key.
#[must_use]
pub fn derive_signing_key(endpoint_name: &str, unix_seconds: &str, access_secret: &str) -> Vec<u8> {
    hash_content(format!("{endpoint_name};{unix_seconds};{access_secret}").as_bytes())
}

/// Compute the base64 signature for a request.
///
/// # Examples
///
/// ```
/// use tidyapi_auth::compute_signature;
///
/// let sig = compute_signature("status", b"{}", "1700000000", "key", "secret");
/// // 32 HMAC bytes, base64 with padding.
/// assert_eq!(sig.len(), 44);
/// ```
#[must_use]
pub fn compute_signature(
    endpoint_name: &str,
    body: &[u8],
    unix_seconds: &str,
    access_key: &str,
    access_secret: &str,
) -> String {
    let key = derive_signing_key(endpoint_name, unix_seconds, access_secret);
    let mut mac =
        HmacSha256::new_from_slice(&key).expect("HMAC can accept keys of any length");
    mac.update(SIGN_ALGORITHM.as_bytes());
    mac.update(b";");
    mac.update(endpoint_name.as_bytes());
    mac.update(b";");
    mac.update(&hash_content(body));
    mac.update(b";");
    mac.update(unix_seconds.as_bytes());
    mac.update(b";");
    mac.update(access_key.as_bytes());
    mac.update(b";");
    mac.update(access_secret.as_bytes());
    BASE64.encode(mac.finalize().into_bytes())
}

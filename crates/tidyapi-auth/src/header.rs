//! Authorization header encoding and parsing.
//!
//! The header value has four space-separated fields (ASCII, case-sensitive):
//!
//! ```text
//! HS256 <unixSecondsDecimal> <accessKey> <base64Signature>
//! ```
//!
//! Parsing validates structure and freshness only; signature comparison and
//! envelope decoding happen later in the pipeline so that malformed input
//! never costs a secret lookup.

use chrono::Utc;

use tidyapi_model::ApiError;

use crate::sign::{SIGN_ALGORITHM, compute_signature};

/// Default freshness window, in seconds, between the header timestamp and
/// the validation-time wall clock.
pub const DEFAULT_MAX_SECONDS_GAP: i64 = 300;

/// Build the authorization header a client attaches to a signed request.
///
/// # Examples
///
/// ```
/// use tidyapi_auth::build_authorization_header;
///
/// let header = build_authorization_header("orders", "{}", 1_700_000_000, "ak1", "s3cr3t");
/// assert!(header.starts_with("HS256 1700000000 ak1 "));
/// ```
#[must_use]
pub fn build_authorization_header(
    endpoint_name: &str,
    body: &str,
    unix_seconds: i64,
    access_key: &str,
    access_secret: &str,
) -> String {
    let unix_seconds = unix_seconds.to_string();
    let signature = compute_signature(
        endpoint_name,
        body.as_bytes(),
        &unix_seconds,
        access_key,
        access_secret,
    );
    format!("{SIGN_ALGORITHM} {unix_seconds} {access_key} {signature}")
}

/// Parsed components of an authorization header.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParsedAuthorization {
    /// The header timestamp, already checked against the freshness window.
    pub unix_seconds: i64,
    /// The caller's access key. Never empty.
    pub access_key: String,
    /// The base64 signature as it appeared in the header. Never empty.
    pub signature: String,
}

/// Parse an authorization header value and enforce the freshness window.
///
/// The timestamp field must be a canonical decimal integer: it has to
/// re-serialize to the exact token, which rejects leading zeros, a `+` sign,
/// surrounding whitespace, and trailing garbage that lenient parsers accept.
/// Freshness is measured against the wall clock at call time; peers with
/// skewed clocks will see spurious `Invalid Time` failures, so deployments
/// are expected to keep clocks reasonably synchronized.
///
/// # Errors
///
/// Returns [`ApiError::InvalidAuthorizationFormat`] for anything other than
/// exactly four fields, [`ApiError::InvalidAlgorithm`] when the first field
/// is not `HS256`, [`ApiError::InvalidTime`] for a malformed or stale
/// timestamp, and [`ApiError::MissingAccessKey`]/[`ApiError::MissingSignature`]
/// for empty fields.
pub fn parse_authorization(
    value: &str,
    max_seconds_gap: i64,
) -> Result<ParsedAuthorization, ApiError> {
    parse_authorization_at(value, max_seconds_gap, Utc::now().timestamp())
}

/// Parse against an explicit clock. Non-test callers go through
/// [`parse_authorization`].
fn parse_authorization_at(
    value: &str,
    max_seconds_gap: i64,
    now_seconds: i64,
) -> Result<ParsedAuthorization, ApiError> {
    let parts: Vec<&str> = value.split(' ').collect();
    if parts.len() != 4 {
        return Err(ApiError::InvalidAuthorizationFormat);
    }

    let algorithm = parts[0];
    if algorithm != SIGN_ALGORITHM {
        return Err(ApiError::InvalidAlgorithm(algorithm.to_owned()));
    }

    let unix_text = parts[1];
    let unix_seconds = unix_text
        .parse::<i64>()
        .ok()
        .filter(|n| n.to_string() == unix_text)
        .filter(|n| now_seconds.abs_diff(*n) <= max_seconds_gap.unsigned_abs())
        .ok_or_else(|| ApiError::InvalidTime(unix_text.to_owned()))?;

    let access_key = parts[2];
    if access_key.is_empty() {
        return Err(ApiError::MissingAccessKey);
    }

    let signature = parts[3];
    if signature.is_empty() {
        return Err(ApiError::MissingSignature);
    }

    Ok(ParsedAuthorization {
        unix_seconds,
        access_key: access_key.to_owned(),
        signature: signature.to_owned(),
    })
}

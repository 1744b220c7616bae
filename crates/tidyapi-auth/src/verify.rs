//! Server-side validation pipeline.
//!
//! Validation is a straight line with four checkpoints, each of which may
//! short-circuit to an error:
//!
//! 1. Parse the authorization header and enforce the freshness window.
//! 2. Resolve the caller's secret (the only step that may suspend).
//! 3. Recompute the signature and compare in constant time.
//! 4. Decode and validate the request envelope.
//!
//! Format and freshness checks run before the secret lookup so malformed
//! input never costs an external call, and the signature is verified before
//! the body is parsed so callers without a valid signature learn nothing
//! about the envelope's expected shape.
//!
//! [`verify_request`] and [`verify_request_async`] differ only in how the
//! secret is resolved; all other steps are shared.

use subtle::ConstantTimeEq;
use tracing::debug;

use tidyapi_model::{ApiError, ApiRequest};

use crate::header::{ParsedAuthorization, parse_authorization};
use crate::secrets::{AsyncSecretProvider, SecretProvider};
use crate::sign::compute_signature;

/// A fully validated request.
#[derive(Debug, Clone)]
pub struct VerifiedRequest {
    /// The decoded request envelope.
    pub request: ApiRequest,
    /// The endpoint the request was signed for.
    pub endpoint_name: String,
    /// The header timestamp.
    pub unix_seconds: i64,
    /// The access key that signed the request.
    pub access_key: String,
}

/// Validate a signed request with a synchronous secret provider.
///
/// # Examples
///
/// ```
/// use tidyapi_auth::{
///     DEFAULT_MAX_SECONDS_GAP, StaticSecretProvider, build_authorization_header,
///     verify_request,
/// };
///
/// let body = r#"{"tidyapi":1,"method":"ping","id":"42"}"#;
/// let now = chrono::Utc::now().timestamp();
/// let header = build_authorization_header("status", body, now, "ak1", "s3cr3t");
///
/// let secrets = StaticSecretProvider::new(vec![("ak1".to_owned(), "s3cr3t".to_owned())]);
/// let verified =
///     verify_request("status", &header, body, &secrets, DEFAULT_MAX_SECONDS_GAP).unwrap();
/// assert_eq!(verified.request.method, "ping");
/// ```
///
/// # Errors
///
/// Returns the first [`ApiError`] produced by header parsing, secret
/// resolution, signature comparison, or envelope decoding.
pub fn verify_request(
    endpoint_name: &str,
    authorization: &str,
    body: &str,
    secrets: &dyn SecretProvider,
    max_seconds_gap: i64,
) -> Result<VerifiedRequest, ApiError> {
    let parsed = parse_authorization(authorization, max_seconds_gap)?;
    let secret = secrets.get_secret(&parsed.access_key)?;
    verify_with_secret(parsed, endpoint_name, body, &secret)
}

/// Validate a signed request with an asynchronous secret provider.
///
/// Identical to [`verify_request`] except that the pipeline suspends on the
/// secret lookup. Cancelling the lookup cancels the whole validation; no
/// partial verdict is produced.
///
/// # Errors
///
/// Returns the first [`ApiError`] produced by header parsing, secret
/// resolution, signature comparison, or envelope decoding.
pub async fn verify_request_async(
    endpoint_name: &str,
    authorization: &str,
    body: &str,
    secrets: &dyn AsyncSecretProvider,
    max_seconds_gap: i64,
) -> Result<VerifiedRequest, ApiError> {
    let parsed = parse_authorization(authorization, max_seconds_gap)?;
    let secret = secrets.get_secret(&parsed.access_key).await?;
    verify_with_secret(parsed, endpoint_name, body, &secret)
}

/// Shared tail of the pipeline: signature comparison and envelope decoding.
fn verify_with_secret(
    parsed: ParsedAuthorization,
    endpoint_name: &str,
    body: &str,
    access_secret: &str,
) -> Result<VerifiedRequest, ApiError> {
    debug!(
        endpoint_name,
        access_key = %parsed.access_key,
        unix_seconds = parsed.unix_seconds,
        "Verifying TidyApi signature"
    );

    let expected = compute_signature(
        endpoint_name,
        body.as_bytes(),
        &parsed.unix_seconds.to_string(),
        &parsed.access_key,
        access_secret,
    );

    if !bool::from(parsed.signature.as_bytes().ct_eq(expected.as_bytes())) {
        debug!(
            expected = %expected,
            provided = %parsed.signature,
            "Signature mismatch"
        );
        return Err(ApiError::SignatureMismatch);
    }

    let request = ApiRequest::from_body(body)?;

    debug!(
        endpoint_name,
        access_key = %parsed.access_key,
        method = %request.method,
        "Request validated"
    );

    Ok(VerifiedRequest {
        request,
        endpoint_name: endpoint_name.to_owned(),
        unix_seconds: parsed.unix_seconds,
        access_key: parsed.access_key,
    })
}

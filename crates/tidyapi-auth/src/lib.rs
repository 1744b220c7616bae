//! Symmetric-key request authentication for TidyApi.
//!
//! A client signs an outgoing API request with a shared secret and attaches
//! an authorization header; the server independently recomputes the expected
//! signature to check authenticity, integrity, and freshness before touching
//! the request payload. The header value is:
//!
//! ```text
//! HS256 <unixSecondsDecimal> <accessKey> <base64Signature>
//! ```
//!
//! This crate implements both sides: [`build_authorization_header`] for
//! clients, and [`verify_request`]/[`verify_request_async`] for servers. The
//! two verification entry points differ only in how the caller's secret is
//! resolved; everything else is shared, pure computation.
//!
//! # Usage
//!
//! ```
//! use tidyapi_auth::{
//!     DEFAULT_MAX_SECONDS_GAP, StaticSecretProvider, build_authorization_header,
//!     verify_request,
//! };
//!
//! // Client side: sign the request.
//! let body = r#"{"tidyapi":1,"method":"create","id":"r1","params":{"qty":3}}"#;
//! let now = chrono::Utc::now().timestamp();
//! let header = build_authorization_header("orders", body, now, "ak1", "s3cr3t");
//!
//! // Server side: validate it.
//! let secrets = StaticSecretProvider::new(vec![("ak1".to_owned(), "s3cr3t".to_owned())]);
//! let verified =
//!     verify_request("orders", &header, body, &secrets, DEFAULT_MAX_SECONDS_GAP).unwrap();
//! assert_eq!(verified.request.method, "create");
//! ```
//!
//! # Modules
//!
//! - [`sign`] - Digest primitive, key derivation, and canonical signature
//!   computation
//! - [`header`] - Authorization header encoding and parsing, including the
//!   freshness window
//! - [`secrets`] - Secret-provider traits (sync and async) and an in-memory
//!   implementation
//! - [`verify`] - The validation pipeline

pub mod header;
pub mod secrets;
pub mod sign;
pub mod verify;

pub use header::{
    DEFAULT_MAX_SECONDS_GAP, ParsedAuthorization, build_authorization_header, parse_authorization,
};
pub use secrets::{AsyncSecretProvider, SecretProvider, StaticSecretProvider};
pub use sign::{SIGN_ALGORITHM, compute_signature, derive_signing_key, hash_content};
pub use verify::{VerifiedRequest, verify_request, verify_request_async};

//! Validation errors and their wire-stable numeric codes.
//!
//! Every validation failure is represented by [`ApiError`], whose display
//! string is the exact message sent back to callers. Each variant maps to one
//! of the numeric codes in [`ErrorCode`]; the codes are part of the wire
//! contract and are never renumbered.

use serde::{Deserialize, Serialize};

/// Numeric error codes returned to callers.
///
/// The discriminants are wire-visible: clients branch on them
/// programmatically, so new kinds must never renumber existing ones.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorCode {
    /// The authorization header is malformed or the signature does not match.
    InvalidAuthorization = 102,
    /// The request body is not a valid TidyApi request envelope.
    InvalidRequestObject = 103,
    /// The header timestamp is malformed or outside the freshness window.
    InvalidTime = 104,
}

impl ErrorCode {
    /// Returns the numeric code carried on the wire.
    #[must_use]
    pub const fn as_u16(self) -> u16 {
        self as u16
    }
}

/// Errors produced while validating a signed TidyApi request.
///
/// The `Display` strings are the wire-visible messages. They may echo
/// untrusted input (the raw timestamp token, member values, the request
/// body) for diagnosability; they never echo secrets.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ApiError {
    /// The authorization header does not have exactly four space-separated
    /// fields.
    #[error("Invalid Authorization Format")]
    InvalidAuthorizationFormat,

    /// The algorithm field is not `HS256`.
    #[error("Invalid Algorithm:{0}")]
    InvalidAlgorithm(String),

    /// The timestamp field is not a canonical decimal integer, or lies
    /// outside the freshness window.
    #[error("Invalid Time:{0}")]
    InvalidTime(String),

    /// The access-key field is empty.
    #[error("Missing AccessKey")]
    MissingAccessKey,

    /// The signature field is empty.
    #[error("Missing Signature")]
    MissingSignature,

    /// The secret provider does not know the access key.
    #[error("Unknown AccessKey:{0}")]
    UnknownAccessKey(String),

    /// The recomputed signature does not match the one in the header.
    #[error("Invalid Signature")]
    SignatureMismatch,

    /// The request body is not valid JSON.
    #[error("Invalid Request Body, error: {0}")]
    InvalidRequestBody(String),

    /// The request body parsed, but is not a JSON object.
    #[error("Invalid type of Request Body: {0}")]
    InvalidRequestBodyType(String),

    /// A required envelope member is missing or has the wrong value.
    #[error("Invalid Request member: {name}={value}")]
    InvalidRequestMember {
        /// The envelope member that failed validation.
        name: &'static str,
        /// The offending value, rendered for diagnostics.
        value: String,
    },
}

impl ApiError {
    /// The wire-stable numeric code for this error.
    #[must_use]
    pub fn code(&self) -> ErrorCode {
        match self {
            Self::InvalidAuthorizationFormat
            | Self::InvalidAlgorithm(_)
            | Self::MissingAccessKey
            | Self::MissingSignature
            | Self::UnknownAccessKey(_)
            | Self::SignatureMismatch => ErrorCode::InvalidAuthorization,
            Self::InvalidRequestBody(_)
            | Self::InvalidRequestBodyType(_)
            | Self::InvalidRequestMember { .. } => ErrorCode::InvalidRequestObject,
            Self::InvalidTime(_) => ErrorCode::InvalidTime,
        }
    }
}

/// Serializable error object returned to callers.
///
/// # Examples
///
/// ```
/// use tidyapi_model::{ApiError, ErrorBody};
///
/// let body = ErrorBody::from(&ApiError::SignatureMismatch);
/// assert_eq!(body.code, 102);
/// assert_eq!(body.message, "Invalid Signature");
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ErrorBody {
    /// Numeric error code (see [`ErrorCode`]).
    pub code: u16,
    /// Human-readable message.
    pub message: String,
    /// Optional structured detail.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub data: Option<serde_json::Value>,
}

impl From<&ApiError> for ErrorBody {
    fn from(err: &ApiError) -> Self {
        Self {
            code: err.code().as_u16(),
            message: err.to_string(),
            data: None,
        }
    }
}

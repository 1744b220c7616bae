//! The TidyApi request envelope.
//!
//! The request body carried on the wire is a UTF-8 JSON object:
//!
//! ```text
//! { "tidyapi": 1, "method": "<string>", "id": "<string>", "params": <any> }
//! ```
//!
//! [`ApiRequest::from_body`] decodes and validates that envelope;
//! [`ApiRequest::to_body`] produces it. Validation failures embed the
//! offending member value in the error message so callers can see what the
//! peer actually sent.

use serde_json::Value;

use crate::error::ApiError;

/// The protocol version every envelope must carry in its `tidyapi` member.
pub const PROTOCOL_VERSION: i64 = 1;

/// A decoded TidyApi request envelope.
///
/// # Examples
///
/// ```
/// use tidyapi_model::ApiRequest;
///
/// let request = ApiRequest::from_body(
///     r#"{"tidyapi":1,"method":"ping","id":"42","params":{"echo":true}}"#,
/// )
/// .unwrap();
/// assert_eq!(request.method, "ping");
/// assert_eq!(request.id, "42");
/// assert_eq!(request.params["echo"], true);
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct ApiRequest {
    /// The method the caller wants to invoke. Never empty.
    pub method: String,
    /// Caller-chosen request identifier. Never empty.
    pub id: String,
    /// Free-form method parameters; `null` when absent.
    pub params: Value,
}

impl ApiRequest {
    /// Create a request envelope.
    pub fn new(method: impl Into<String>, id: impl Into<String>, params: Value) -> Self {
        Self {
            method: method.into(),
            id: id.into(),
            params,
        }
    }

    /// Decode and validate a request body.
    ///
    /// The body must parse as a JSON object whose `tidyapi` member is the
    /// integer `1` and whose `method` and `id` members are non-empty strings.
    /// Any violation is terminal; there is no partial success.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError::InvalidRequestBody`] when the body is not JSON,
    /// [`ApiError::InvalidRequestBodyType`] when it parses to something other
    /// than an object, and [`ApiError::InvalidRequestMember`] when a required
    /// member is missing or malformed.
    pub fn from_body(body: &str) -> Result<Self, ApiError> {
        let value: Value =
            serde_json::from_str(body).map_err(|e| ApiError::InvalidRequestBody(e.to_string()))?;

        let Value::Object(members) = value else {
            return Err(ApiError::InvalidRequestBodyType(body.to_owned()));
        };

        if members.get("tidyapi").and_then(Value::as_i64) != Some(PROTOCOL_VERSION) {
            return Err(ApiError::InvalidRequestMember {
                name: "tidyapi",
                value: member_text(members.get("tidyapi")),
            });
        }

        let method = match members.get("method") {
            Some(Value::String(s)) if !s.is_empty() => s.clone(),
            other => {
                return Err(ApiError::InvalidRequestMember {
                    name: "method",
                    value: member_text(other),
                });
            }
        };

        let id = match members.get("id") {
            Some(Value::String(s)) if !s.is_empty() => s.clone(),
            other => {
                return Err(ApiError::InvalidRequestMember {
                    name: "id",
                    value: member_text(other),
                });
            }
        };

        let params = members.get("params").cloned().unwrap_or(Value::Null);

        Ok(Self { method, id, params })
    }

    /// Encode this request as a wire body, including the protocol version.
    ///
    /// The output round-trips through [`ApiRequest::from_body`].
    #[must_use]
    pub fn to_body(&self) -> String {
        serde_json::json!({
            "tidyapi": PROTOCOL_VERSION,
            "method": self.method,
            "id": self.id,
            "params": self.params,
        })
        .to_string()
    }
}

/// Render a member value for an error message.
///
/// Strings render unquoted and missing members render as `undefined`, for
/// parity with JavaScript peer implementations.
fn member_text(value: Option<&Value>) -> String {
    match value {
        None => "undefined".to_owned(),
        Some(Value::String(s)) => s.clone(),
        Some(other) => other.to_string(),
    }
}

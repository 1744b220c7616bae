//! Wire-visible types for the TidyApi request-authentication protocol.
//!
//! This crate defines the parts of TidyApi that both sides of the wire must
//! agree on: the JSON request envelope carried in the body, and the numeric
//! error codes returned when validation fails. The signing and validation
//! logic lives in `tidyapi-auth`; everything here is plain data.
//!
//! # Modules
//!
//! - [`error`] - Validation error type, stable numeric error codes, and the
//!   serializable error body
//! - [`request`] - The decoded request envelope and its wire encoding

pub mod error;
pub mod request;

pub use error::{ApiError, ErrorBody, ErrorCode};
pub use request::{ApiRequest, PROTOCOL_VERSION};

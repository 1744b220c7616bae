//! Secret resolution.
//!
//! The validation pipeline needs one capability: given an access key, obtain
//! the shared secret, possibly after a suspension. [`SecretProvider`] is the
//! direct-call form; [`AsyncSecretProvider`] is the suspending form for
//! stores that resolve secrets over I/O. Both are object-safe so the pipeline
//! can take `&dyn` references, and a resolver failure is surfaced as an
//! [`ApiError`] rather than silently substituting an empty secret.

use std::collections::HashMap;

use tidyapi_model::ApiError;

/// Synchronous secret lookup by access key.
///
/// Implementations may back this with a configuration file, a database, or
/// any other credential store.
pub trait SecretProvider: Send + Sync {
    /// Retrieve the shared secret for the given access key.
    ///
    /// # Errors
    ///
    /// Returns an [`ApiError`] when the access key is unknown or the store
    /// fails; the pipeline propagates it unchanged.
    fn get_secret(&self, access_key: &str) -> Result<String, ApiError>;
}

/// Asynchronous secret lookup by access key.
///
/// Uses `#[async_trait]` so it stays object-safe for `&dyn` dispatch.
#[async_trait::async_trait]
pub trait AsyncSecretProvider: Send + Sync {
    /// Retrieve the shared secret for the given access key.
    ///
    /// # Errors
    ///
    /// Returns an [`ApiError`] when the access key is unknown or the store
    /// fails; the pipeline propagates it unchanged.
    async fn get_secret(&self, access_key: &str) -> Result<String, ApiError>;
}

/// A simple in-memory secret provider backed by a `HashMap`.
///
/// Suitable for testing and development. For production use, implement
/// [`SecretProvider`] or [`AsyncSecretProvider`] against a real credential
/// store. Unknown keys resolve to [`ApiError::UnknownAccessKey`] (code 102).
///
/// # Examples
///
/// ```
/// use tidyapi_auth::{SecretProvider, StaticSecretProvider};
///
/// let secrets = StaticSecretProvider::new(vec![
///     ("ak1".to_owned(), "s3cr3t".to_owned()),
/// ]);
/// assert_eq!(secrets.get_secret("ak1").unwrap(), "s3cr3t");
/// ```
#[derive(Debug, Clone)]
pub struct StaticSecretProvider {
    secrets: HashMap<String, String>,
}

impl StaticSecretProvider {
    /// Create a provider from (access key, secret) pairs.
    pub fn new(secrets: impl IntoIterator<Item = (String, String)>) -> Self {
        Self {
            secrets: secrets.into_iter().collect(),
        }
    }
}

impl SecretProvider for StaticSecretProvider {
    fn get_secret(&self, access_key: &str) -> Result<String, ApiError> {
        self.secrets
            .get(access_key)
            .cloned()
            .ok_or_else(|| ApiError::UnknownAccessKey(access_key.to_owned()))
    }
}

#[async_trait::async_trait]
impl AsyncSecretProvider for StaticSecretProvider {
    async fn get_secret(&self, access_key: &str) -> Result<String, ApiError> {
        SecretProvider::get_secret(self, access_key)
    }
}

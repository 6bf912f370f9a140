use crate::Error;
use std::env;
use std::fmt;

/// Environment variable holding the full endpoint URL.
pub const ENDPOINT_VAR: &str = "API_ENDPOINT";

/// Environment variable holding the API key sent in the `api-key` header.
pub const API_KEY_VAR: &str = "API_KEY";

const MISSING_MESSAGE: &str = "API_ENDPOINT or API_KEY is missing in the environment";

/// Endpoint and credential for a single dispatch.
#[derive(Clone, PartialEq, Eq)]
pub struct DispatcherConfig {
    endpoint: String,
    api_key: String,
}

impl DispatcherConfig {
    /// Create a configuration, rejecting empty values.
    pub fn new(endpoint: impl Into<String>, api_key: impl Into<String>) -> Result<Self, Error> {
        let endpoint = endpoint.into();
        let api_key = api_key.into();

        if endpoint.is_empty() || api_key.is_empty() {
            return Err(Error::config(MISSING_MESSAGE));
        }

        Ok(Self { endpoint, api_key })
    }

    /// Resolve configuration from the process environment.
    ///
    /// Nothing is cached; every call reads the variables again.
    pub fn from_env() -> Result<Self, Error> {
        Self::from_lookup(|name| env::var(name).ok())
    }

    /// Resolve configuration through an arbitrary variable lookup.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, Error>
    where
        F: Fn(&str) -> Option<String>,
    {
        let endpoint = lookup(ENDPOINT_VAR).unwrap_or_default();
        let api_key = lookup(API_KEY_VAR).unwrap_or_default();
        Self::new(endpoint, api_key)
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }

    pub fn api_key(&self) -> &str {
        &self.api_key
    }
}

impl fmt::Debug for DispatcherConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("DispatcherConfig")
            .field("endpoint", &self.endpoint)
            .field("api_key", &"<redacted>")
            .finish()
    }
}

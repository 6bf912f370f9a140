use crate::config::DispatcherConfig;
use crate::error::RequestError;
use crate::types::ChatPayload;
use crate::Error;
use reqwest::header::CONTENT_TYPE;
use reqwest::Client;
use serde_json::Value;
use tracing::{debug, info, warn};

/// Header carrying the raw API key.
pub const API_KEY_HEADER: &str = "api-key";

/// Sends single chat-completion requests.
///
/// Holds only the HTTP client. Configuration is resolved per call, so no
/// request-specific state survives between invocations.
#[derive(Debug, Clone)]
pub struct Dispatcher {
    client: Client,
}

impl Dispatcher {
    /// Create a dispatcher with a default HTTP client.
    pub fn new() -> Result<Self, Error> {
        let client = Client::builder().build()?;
        Ok(Self { client })
    }

    /// Create a dispatcher around an existing HTTP client.
    pub fn with_client(client: Client) -> Self {
        Self { client }
    }

    /// Send `user_message` using `API_ENDPOINT` and `API_KEY` from the environment.
    ///
    /// The environment is read on every call. Missing or empty values fail
    /// with [`Error::Config`] before any network activity.
    pub async fn send_message(&self, user_message: &str) -> Result<Value, Error> {
        let config = DispatcherConfig::from_env()?;
        self.send_with_config(&config, user_message).await
    }

    /// Send `user_message` to the endpoint described by `config`.
    ///
    /// Returns the response body parsed as JSON, untouched. Transport
    /// failures, non-2xx statuses and non-JSON bodies all surface as
    /// [`Error::Request`].
    pub async fn send_with_config(
        &self,
        config: &DispatcherConfig,
        user_message: &str,
    ) -> Result<Value, Error> {
        let payload = ChatPayload::user(user_message);

        debug!(
            endpoint = config.endpoint(),
            message_len = user_message.len(),
            "dispatching chat completion request"
        );

        let response = self
            .client
            .post(config.endpoint())
            .header(CONTENT_TYPE, "application/json")
            .header(API_KEY_HEADER, config.api_key())
            .json(&payload)
            .send()
            .await?;

        let status = response.status();
        let body = response.text().await?;

        if !status.is_success() {
            warn!(%status, "endpoint returned an error status");
            return Err(RequestError::Status { status, body }.into());
        }

        info!(%status, bytes = body.len(), "received chat completion response");

        match serde_json::from_str(&body) {
            Ok(value) => Ok(value),
            Err(source) => Err(RequestError::Decode { source, body }.into()),
        }
    }
}

use reqwest::StatusCode;
use thiserror::Error;

/// Errors returned by the dispatcher.
///
/// There are exactly two kinds: the configuration could not be resolved, or
/// the request itself failed. Neither is retried.
#[derive(Error, Debug)]
pub enum Error {
    #[error("Invalid configuration: {0}")]
    Config(String),

    #[error("Failed to make the request")]
    Request(#[from] RequestError),
}

/// The underlying cause of a failed request.
#[derive(Error, Debug)]
pub enum RequestError {
    #[error("HTTP request failed")]
    Transport(#[from] reqwest::Error),

    #[error("{status} returned by endpoint: {body}")]
    Status { status: StatusCode, body: String },

    #[error("Response body is not valid JSON")]
    Decode {
        #[source]
        source: serde_json::Error,
        body: String,
    },
}

impl Error {
    pub fn config(message: impl Into<String>) -> Self {
        Error::Config(message.into())
    }

    /// True for missing or empty configuration values.
    pub fn is_config(&self) -> bool {
        matches!(self, Error::Config(_))
    }

    /// True for transport, status and decode failures.
    pub fn is_request(&self) -> bool {
        matches!(self, Error::Request(_))
    }

    /// The HTTP status, when the endpoint answered with a failure code.
    pub fn status(&self) -> Option<StatusCode> {
        match self {
            Error::Request(RequestError::Status { status, .. }) => Some(*status),
            _ => None,
        }
    }

    /// Render this error followed by every underlying cause, one per line.
    ///
    /// Consecutive causes with identical text are printed once.
    pub fn report(&self) -> String {
        let mut rendered = self.to_string();
        let mut last = rendered.clone();
        let mut source = std::error::Error::source(self);

        while let Some(cause) = source {
            let text = cause.to_string();
            if text != last {
                rendered.push_str("\n  caused by: ");
                rendered.push_str(&text);
                last = text;
            }
            source = std::error::Error::source(cause);
        }

        rendered
    }
}

impl From<reqwest::Error> for Error {
    fn from(err: reqwest::Error) -> Self {
        Error::Request(RequestError::Transport(err))
    }
}

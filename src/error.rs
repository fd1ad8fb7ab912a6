//! Error types for the intraday quote client

use std::time::Duration;

use thiserror::Error;

/// Errors produced while fetching, decoding or selecting intraday data.
#[derive(Debug, Error)]
pub enum Error {
    /// The connection could not be established or the request could not complete.
    #[error("HTTP request failed: {0}")]
    Transport(String),

    /// The request did not complete within the configured timeout.
    #[error("HTTP request timed out after {0:?}")]
    Timeout(Duration),

    /// The API answered with a status other than 200.
    #[error("API request failed with status {status}: {body}")]
    HttpStatus {
        /// HTTP status code
        status: u16,
        /// Value of the `X-Request-Id` header, if any
        request_id: Option<String>,
        /// Response body, kept for diagnostics
        body: String,
    },

    /// The body did not match the expected JSON shape.
    #[error("Error parsing JSON response: {source}")]
    Decode {
        /// Underlying serde error
        #[source]
        source: serde_json::Error,
        /// Raw response body
        body: String,
    },

    /// A series key could not be read as a timestamp.
    #[error("Could not parse timestamp '{timestamp}': {reason}")]
    TimestampParse {
        /// Offending series key
        timestamp: String,
        /// Why parsing failed
        reason: String,
    },

    /// Anything else, with a human-readable message.
    #[error("{0}")]
    Custom(String),
}

impl Error {
    /// The response body attached to the error, when the server sent one.
    pub fn body(&self) -> Option<&str> {
        match self {
            Error::HttpStatus { body, .. } | Error::Decode { body, .. } => Some(body),
            _ => None,
        }
    }
}

#[cfg(feature = "reqwest")]
impl From<reqwest::Error> for Error {
    fn from(err: reqwest::Error) -> Self {
        Error::Transport(err.to_string())
    }
}

/// Crate-wide `Result` alias.
pub type Result<T, E = Error> = std::result::Result<T, E>;

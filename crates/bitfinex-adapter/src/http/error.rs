/*
[INPUT]:  Error sources (transport, HTTP status, serialization, config)
[OUTPUT]: Structured error type for every client operation
[POS]:    Error handling layer - unified error types for entire crate
[UPDATE]: When adding new error sources or improving error messages
*/

use reqwest::StatusCode;
use thiserror::Error;

/// Main error type for the Bitfinex adapter
#[derive(Error, Debug)]
pub enum BitfinexError {
    /// Transport-level failure (connect, TLS, body read)
    #[error("HTTP request failed: {0}")]
    Http(#[from] reqwest::Error),

    /// Exchange answered with a non-success status
    #[error("API error (code {code}): {message}")]
    Api { code: i32, message: String },

    /// Request body could not be encoded
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// URL parsing failed
    #[error("Invalid URL: {0}")]
    UrlParse(#[from] url::ParseError),

    /// Response body did not match the expected contract
    #[error("Invalid response: {0}")]
    InvalidResponse(String),

    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(String),

    /// Order parameters were rejected before sending
    #[error("Invalid order: {0}")]
    InvalidOrder(String),
}

impl BitfinexError {
    /// Check if the exchange rejected the credentials or signature
    pub fn is_auth_error(&self) -> bool {
        matches!(self, BitfinexError::Api { code: 401 | 403, .. })
    }

    /// HTTP status code when the exchange answered with an error status
    pub fn status_code(&self) -> Option<u16> {
        match self {
            BitfinexError::Api { code, .. } => u16::try_from(*code).ok(),
            _ => None,
        }
    }

    /// Create an API error from status code and message
    pub fn api_error(status: StatusCode, message: impl Into<String>) -> Self {
        BitfinexError::Api {
            code: status.as_u16() as i32,
            message: message.into(),
        }
    }
}

/// Result type alias for Bitfinex operations
pub type Result<T> = std::result::Result<T, BitfinexError>;

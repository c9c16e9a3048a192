//! Error types for the Biblio client.
//!
//! Uses `thiserror` for structured error handling with automatic `From` implementations.

/// Errors from the Biblio client.
#[derive(thiserror::Error, Debug)]
pub enum ClientError {
    /// Identifier that does not parse as an integer.
    #[error("invalid identifier: {value} should be an integer")]
    InvalidId {
        /// The rejected input.
        value: String,
    },

    /// Year filter that is not all digits.
    #[error("invalid year: {value} should be an integer")]
    InvalidYear {
        /// The rejected input.
        value: String,
    },

    /// HTTP transport error (connection, DNS, TLS, etc.)
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// Malformed base URL or request path.
    #[error("invalid URL: {0}")]
    Url(#[from] url::ParseError),

    /// Response body that is neither a JSON value nor newline-delimited JSON.
    #[error("failed to decode response: {0}")]
    Decode(#[from] serde_json::Error),
}

impl ClientError {
    /// Create an invalid identifier error.
    #[must_use]
    pub fn invalid_id(value: impl Into<String>) -> Self {
        Self::InvalidId { value: value.into() }
    }

    /// Create an invalid year error.
    #[must_use]
    pub fn invalid_year(value: impl Into<String>) -> Self {
        Self::InvalidYear { value: value.into() }
    }

    /// Returns true if this error was raised by input validation, before any
    /// request went out.
    #[must_use]
    pub const fn is_validation(&self) -> bool {
        matches!(self, Self::InvalidId { .. } | Self::InvalidYear { .. })
    }
}

/// Result type alias for client operations.
pub type ClientResult<T> = Result<T, ClientError>;

//! Error types for SolusVM admin API operations.
//!
//! The library only ever fails at the transport layer. Remote-side failures
//! (bad credentials, unknown virtual server, rejected action) arrive inside
//! a successfully transported response body and are returned to the caller
//! as ordinary data, never translated into a local error.

use thiserror::Error;

/// Main error type for SolusVM client operations.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum Error {
    /// No response arrived within the configured timeout
    #[error("Request timed out: {0}")]
    Timeout(String),

    /// Connection could not be established (refused, DNS, TLS)
    #[error("Connection failed: {0}")]
    ConnectionFailed(String),

    /// Other HTTP transport failure
    #[error("HTTP request failed: {0}")]
    Http(String),

    /// The configured host does not form a valid endpoint URL
    #[error("Invalid endpoint: {0}")]
    InvalidEndpoint(String),
}

/// Specialized result type for SolusVM client operations.
pub type Result<T> = std::result::Result<T, Error>;

impl Error {
    /// Returns the error code for this error type.
    #[must_use]
    pub const fn error_code(&self) -> &'static str {
        match self {
            Self::Timeout(_) => "TIMEOUT",
            Self::ConnectionFailed(_) => "CONNECTION_FAILED",
            Self::Http(_) => "HTTP_ERROR",
            Self::InvalidEndpoint(_) => "INVALID_ENDPOINT",
        }
    }

    /// Returns true if the failure happened before any bytes reached the
    /// remote server, meaning a mutating action was definitely not applied.
    #[must_use]
    pub const fn is_connect(&self) -> bool {
        matches!(self, Self::ConnectionFailed(_) | Self::InvalidEndpoint(_))
    }
}

// Conversions from external error types
impl From<reqwest::Error> for Error {
    fn from(err: reqwest::Error) -> Self {
        if err.is_timeout() {
            Self::Timeout(err.to_string())
        } else if err.is_connect() {
            Self::ConnectionFailed(err.to_string())
        } else {
            Self::Http(err.to_string())
        }
    }
}

impl From<url::ParseError> for Error {
    fn from(err: url::ParseError) -> Self {
        Self::InvalidEndpoint(err.to_string())
    }
}

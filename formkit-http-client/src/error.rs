//! HTTP client error types.

use thiserror::Error;

/// Result type for HTTP client operations.
pub type Result<T> = std::result::Result<T, HttpClientError>;

/// Why a request did not succeed.
#[derive(Debug, Error)]
pub enum HttpClientError {
    /// The endpoint could not be resolved to a URL.
    #[error("Invalid URL: {0}")]
    InvalidUrl(String),

    /// A header name or value is not valid HTTP.
    #[error("Invalid header {name}: {message}")]
    InvalidHeader {
        /// Header name as given.
        name: String,
        /// What was wrong with it.
        message: String,
    },

    /// The server answered with a status outside 200-299.
    #[error("HTTP error! status: {status}")]
    Status {
        /// HTTP status code.
        status: u16,
    },

    /// The request body could not be serialized.
    #[error("Failed to serialize request body: {0}")]
    Serialize(String),

    /// The response body is not the expected JSON.
    #[error("JSON error: {0}")]
    Json(String),

    /// Network or protocol failure.
    #[error("HTTP error: {0}")]
    Transport(#[from] reqwest::Error),

    /// The result record was read before the request settled.
    #[error("Request has not completed")]
    Incomplete,
}

impl HttpClientError {
    /// HTTP status code, if the failure carries one.
    pub fn status_code(&self) -> Option<u16> {
        match self {
            Self::Status { status } => Some(*status),
            Self::Transport(e) => e.status().map(|s| s.as_u16()),
            _ => None,
        }
    }

    /// Check if this is a network-level failure.
    pub fn is_transport(&self) -> bool {
        matches!(self, Self::Transport(_))
    }

    pub fn is_timeout(&self) -> bool {
        matches!(self, Self::Transport(e) if e.is_timeout())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_message() {
        let error = HttpClientError::Status { status: 404 };
        assert_eq!(error.to_string(), "HTTP error! status: 404");
        assert_eq!(error.status_code(), Some(404));
        assert!(!error.is_transport());
    }

    #[test]
    fn test_no_status_for_url_errors() {
        let error = HttpClientError::InvalidUrl("relative URL without a base".into());
        assert_eq!(error.status_code(), None);
        assert!(!error.is_timeout());
    }
}

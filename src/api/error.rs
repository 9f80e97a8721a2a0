//! Error types for the Distributed Cloud API client
//!
//! Every variant that originates from a request carries the URL it was
//! issued against so the operator can tell which endpoint failed.

use thiserror::Error;

/// Errors that can occur when talking to the load-balancer management API
#[derive(Debug, Error)]
pub enum ApiError {
    /// The HTTP client could not be constructed
    #[error("Failed to build HTTP client: {0}")]
    ClientBuild(#[source] reqwest::Error),

    /// Transport-level failure (DNS, connect, TLS, timeout, ...)
    #[error("HTTP request to {url} failed: {source}")]
    Transport {
        url: String,
        #[source]
        source: reqwest::Error,
    },

    /// API returned an error response not covered by a more specific variant
    #[error("API error ({status}) from {url}: {message}")]
    Status {
        status: u16,
        url: String,
        message: String,
    },

    /// Response body was not the JSON we expected
    #[error("Failed to parse response from {url}: {message}")]
    Parse { url: String, message: String },

    /// Token missing, expired or rejected
    #[error("Authentication rejected by {url} - check the API token")]
    Unauthorized { url: String },

    /// Token valid but lacks access to the resource
    #[error("Permission denied for {url}: {message}")]
    PermissionDenied { url: String, message: String },

    /// Requested resource was not found
    #[error("Not found: {url}: {message}")]
    NotFound { url: String, message: String },

    #[error("Rate limit exceeded on {url} - please try again later")]
    RateLimited { url: String },

    /// Server error (5xx)
    #[error("Server error ({status}) from {url}: {message}")]
    Server {
        status: u16,
        url: String,
        message: String,
    },
}

impl ApiError {
    /// Map a non-success HTTP status onto the matching variant
    pub fn from_status(status: u16, url: &str, message: String) -> Self {
        let url = url.to_string();
        match status {
            401 => ApiError::Unauthorized { url },
            403 => ApiError::PermissionDenied { url, message },
            404 => ApiError::NotFound { url, message },
            429 => ApiError::RateLimited { url },
            500..=599 => ApiError::Server {
                status,
                url,
                message,
            },
            _ => ApiError::Status {
                status,
                url,
                message,
            },
        }
    }

    /// Authentication or authorization failure
    pub fn is_auth(&self) -> bool {
        matches!(
            self,
            ApiError::Unauthorized { .. } | ApiError::PermissionDenied { .. }
        )
    }
}

/// Result type alias for API operations
pub type Result<T> = std::result::Result<T, ApiError>;

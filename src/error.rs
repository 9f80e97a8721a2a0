//! Error types and exit codes for lb-waf-export.

use crate::api::ApiError;
use thiserror::Error;

/// Exit codes for lb-waf-export.
pub mod codes {
    pub const SUCCESS: i32 = 0;
    pub const CONFIG_ERROR: i32 = 1;
    pub const AUTH_ERROR: i32 = 2;
    pub const API_ERROR: i32 = 3;
    pub const WAF_NOT_FOUND: i32 = 4;
}

/// Errors that can occur while producing the report
#[derive(Debug, Error)]
pub enum ExportError {
    #[error("environment variable {0} not set - export an API token before running")]
    MissingToken(String),

    #[error(transparent)]
    Api(#[from] ApiError),

    #[error(
        "App Firewall '{waf}' used by load balancer '{load_balancer}' not found in namespace '{namespace}' or '{shared_namespace}'"
    )]
    WafNotFound {
        namespace: String,
        load_balancer: String,
        waf: String,
        shared_namespace: String,
    },

    #[error("configuration error: {0}")]
    Config(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),
}

/// Result type alias used throughout the crate
pub type Result<T> = std::result::Result<T, ExportError>;

/// Map an error to its process exit code.
pub fn exit_code(err: &ExportError) -> i32 {
    match err {
        ExportError::MissingToken(_) => codes::AUTH_ERROR,
        ExportError::Api(api) if api.is_auth() => codes::AUTH_ERROR,
        ExportError::Api(_) => codes::API_ERROR,
        ExportError::WafNotFound { .. } => codes::WAF_NOT_FOUND,
        ExportError::Config(_) | ExportError::Io(_) | ExportError::Csv(_) => codes::CONFIG_ERROR,
    }
}

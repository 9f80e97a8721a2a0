//! API token retrieval
//!
//! The token is read from an environment variable (`F5_XC_API_TOKEN` unless
//! configured otherwise) and sent as `Authorization: APIToken <token>`.

use crate::error::{ExportError, Result};

/// Environment variable holding the API token
pub const DEFAULT_TOKEN_ENV: &str = "F5_XC_API_TOKEN";

/// Read the API token from the process environment
///
/// Fails with [`ExportError::MissingToken`] when the variable is unset or
/// blank, so no unauthenticated request is ever sent.
pub fn get_api_token(var: &str) -> Result<String> {
    token_from(var, |name| std::env::var(name).ok())
}

/// Read the API token through an arbitrary lookup function
pub fn token_from<F>(var: &str, lookup: F) -> Result<String>
where
    F: Fn(&str) -> Option<String>,
{
    lookup(var)
        .map(|t| t.trim().to_string())
        .filter(|t| !t.is_empty())
        .ok_or_else(|| ExportError::MissingToken(var.to_string()))
}

/// Value for the `Authorization` header
pub fn authorization_value(token: &str) -> String {
    format!("APIToken {}", token)
}

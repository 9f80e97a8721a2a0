use crate::api::DEFAULT_API_URL_TEMPLATE;
use crate::auth::credentials::DEFAULT_TOKEN_ENV;
use serde::{Deserialize, Serialize};

/// Main configuration structure
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub api: ApiConfig,
    pub report: ReportConfig,
}

/// API connection configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ApiConfig {
    /// Base URL template; `{tenant}` is replaced with the tenant name
    pub base_url: String,
    /// Environment variable holding the API token
    pub token_env: String,
    /// Per-request timeout in seconds
    pub timeout_secs: u64,
    /// Namespace searched when a WAF is not found locally
    pub shared_namespace: String,
}

/// Report generation configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ReportConfig {
    /// Namespace value that means "scan every namespace"
    pub all_namespaces_sentinel: String,
    pub on_missing_waf: MissingWafPolicy,
}

/// What to do when a referenced WAF exists in neither the load balancer's
/// namespace nor the shared namespace
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, clap::ValueEnum,
)]
#[serde(rename_all = "lowercase")]
pub enum MissingWafPolicy {
    /// Fail the whole run
    #[default]
    Abort,
    /// Emit the row with the name marked as not found and mode NA
    Mark,
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_API_URL_TEMPLATE.to_string(),
            token_env: DEFAULT_TOKEN_ENV.to_string(),
            timeout_secs: 30,
            shared_namespace: "shared".to_string(),
        }
    }
}

impl Default for ReportConfig {
    fn default() -> Self {
        Self {
            all_namespaces_sentinel: "system".to_string(),
            on_missing_waf: MissingWafPolicy::Abort,
        }
    }
}

//! API client for the Distributed Cloud console
//!
//! Issues authenticated, read-only GET requests against the tenant's
//! configuration API. Requests are awaited one at a time by the callers;
//! the client itself holds no per-request state.

use super::ConfigApi;
use super::error::{ApiError, Result};
use super::types::{
    ApiErrorResponse, AppFirewall, HttpLoadBalancer, ListItem, ListResponse,
};
use crate::auth::credentials;
use reqwest::header::{AUTHORIZATION, CONTENT_TYPE};
use reqwest::{Client, StatusCode};
use serde::de::DeserializeOwned;
use std::time::Duration;

/// Default base URL template; `{tenant}` is replaced with the tenant name
pub const DEFAULT_API_URL_TEMPLATE: &str = "https://{tenant}.console.ves.volterra.io/api";

/// User agent for API requests
const USER_AGENT: &str = concat!("lb-waf-export/", env!("CARGO_PKG_VERSION"));

const DEBUG_RULER_WIDTH: usize = 80;

/// Client for the load-balancer management API
pub struct XcApiClient {
    /// HTTP client with configured timeout
    http_client: Client,
    /// Base API URL, e.g. `https://acme.console.ves.volterra.io/api`
    api_url: String,
    /// Value of the `Authorization` header
    authorization: String,
    /// Echo every request and response body to stdout
    debug: bool,
}

impl XcApiClient {
    /// Create a client for the given base URL and API token
    pub fn new(api_url: impl Into<String>, token: &str, timeout: Duration) -> Result<Self> {
        let http_client = Client::builder()
            .timeout(timeout)
            .user_agent(USER_AGENT)
            .build()
            .map_err(ApiError::ClientBuild)?;

        let api_url: String = api_url.into();
        Ok(Self {
            http_client,
            api_url: api_url.trim_end_matches('/').to_string(),
            authorization: credentials::authorization_value(token),
            debug: false,
        })
    }

    /// Enable or disable request/response echoing
    pub fn with_debug(mut self, debug: bool) -> Self {
        self.debug = debug;
        self
    }

    /// Get the configured API URL
    pub fn api_url(&self) -> &str {
        &self.api_url
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.api_url, path)
    }

    /// Make an authenticated GET request, returning `None` on 404
    async fn get_optional<T: DeserializeOwned>(&self, path: &str) -> Result<Option<T>> {
        let url = self.url(path);
        log::debug!("GET {}", url);

        let response = self
            .http_client
            .get(&url)
            .header(AUTHORIZATION, &self.authorization)
            .header(CONTENT_TYPE, "application/json")
            .send()
            .await
            .map_err(|source| ApiError::Transport {
                url: url.clone(),
                source,
            })?;

        let status = response.status();
        let body = response
            .text()
            .await
            .map_err(|source| ApiError::Transport {
                url: url.clone(),
                source,
            })?;

        if self.debug {
            echo_exchange(&url, &body);
        }

        if status.is_success() {
            serde_json::from_str::<T>(&body)
                .map(Some)
                .map_err(|e| ApiError::Parse {
                    url,
                    message: e.to_string(),
                })
        } else if status == StatusCode::NOT_FOUND {
            log::debug!("{} returned 404", url);
            Ok(None)
        } else {
            let message = serde_json::from_str::<ApiErrorResponse>(&body)
                .map(|e| e.get_message())
                .unwrap_or(body);
            Err(ApiError::from_status(status.as_u16(), &url, message))
        }
    }

    /// Make an authenticated GET request; 404 is an error
    async fn get<T: DeserializeOwned>(&self, path: &str) -> Result<T> {
        self.get_optional(path)
            .await?
            .ok_or_else(|| ApiError::NotFound {
                url: self.url(path),
                message: "object not found".to_string(),
            })
    }

    async fn list_names(&self, path: &str) -> Result<Vec<String>> {
        let response: ListResponse<ListItem> = self.get(path).await?;
        Ok(response
            .items
            .into_iter()
            .filter_map(|item| item.name.filter(|n| !n.is_empty()))
            .collect())
    }
}

impl ConfigApi for XcApiClient {
    /// Endpoint: GET /web/namespaces
    async fn list_namespaces(&self) -> Result<Vec<String>> {
        self.list_names("/web/namespaces").await
    }

    /// Endpoint: GET /config/namespaces/:ns/http_loadbalancers
    async fn list_http_loadbalancers(&self, namespace: &str) -> Result<Vec<String>> {
        self.list_names(&format!(
            "/config/namespaces/{}/http_loadbalancers",
            namespace
        ))
        .await
    }

    /// Endpoint: GET /config/namespaces/:ns/http_loadbalancers/:name
    async fn get_http_loadbalancer(&self, namespace: &str, name: &str) -> Result<HttpLoadBalancer> {
        self.get(&format!(
            "/config/namespaces/{}/http_loadbalancers/{}",
            namespace, name
        ))
        .await
    }

    /// Endpoint: GET /config/namespaces/:ns/app_firewalls/:name
    ///
    /// Returns `None` when the firewall does not exist in that namespace.
    async fn get_app_firewall(&self, namespace: &str, name: &str) -> Result<Option<AppFirewall>> {
        self.get_optional(&format!(
            "/config/namespaces/{}/app_firewalls/{}",
            namespace, name
        ))
        .await
    }
}

/// Print a request and its response body, pretty-printing JSON when possible
fn echo_exchange(url: &str, body: &str) {
    let ruler = "=".repeat(DEBUG_RULER_WIDTH);
    println!("\n{}", ruler);
    println!("API Request: GET {}", url);
    match serde_json::from_str::<serde_json::Value>(body) {
        Ok(json) => {
            let pretty = serde_json::to_string_pretty(&json).unwrap_or_else(|_| body.to_string());
            println!("Response JSON:\n{}", pretty);
        }
        Err(_) => println!("Response text:\n{}", body),
    }
    println!("{}\n", ruler);
}

/// Build the base API URL for a tenant from a `{tenant}` template
pub fn api_url_for_tenant(template: &str, tenant: &str) -> String {
    template.replace("{tenant}", tenant)
}

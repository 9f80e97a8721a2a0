//! Load-balancer management API client module
//!
//! Provides authenticated, read-only access to the tenant configuration API:
//! namespaces, HTTP load balancers and App Firewall (WAF) policies.
//!
//! # Example
//!
//! ```rust,ignore
//! use lb_waf_export::api::{ConfigApi, XcApiClient};
//! use std::time::Duration;
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let client = XcApiClient::new(
//!         "https://acme.console.ves.volterra.io/api",
//!         &std::env::var("F5_XC_API_TOKEN")?,
//!         Duration::from_secs(30),
//!     )?;
//!
//!     for lb in client.list_http_loadbalancers("default").await? {
//!         println!("Load balancer: {}", lb);
//!     }
//!
//!     Ok(())
//! }
//! ```

pub mod client;
pub mod error;
pub mod types;

// Re-export commonly used items
pub use client::{DEFAULT_API_URL_TEMPLATE, XcApiClient, api_url_for_tenant};
pub use error::{ApiError, Result};
pub use types::{
    AdvancedOptions, AppFirewall, HttpLoadBalancer, HttpLoadBalancerSpec, PathMatcher, Route,
};

/// The read-only operations the exporter needs from the API.
///
/// Callers await each call before issuing the next one.
#[allow(async_fn_in_trait)]
pub trait ConfigApi {
    /// Names of every namespace in the tenant
    async fn list_namespaces(&self) -> Result<Vec<String>>;

    /// Names of the HTTP load balancers in `namespace`, in API order
    async fn list_http_loadbalancers(&self, namespace: &str) -> Result<Vec<String>>;

    /// Full detail of one HTTP load balancer
    async fn get_http_loadbalancer(&self, namespace: &str, name: &str) -> Result<HttpLoadBalancer>;

    /// An App Firewall policy, or `None` if it does not exist in `namespace`
    async fn get_app_firewall(&self, namespace: &str, name: &str) -> Result<Option<AppFirewall>>;
}

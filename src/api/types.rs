//! Response types for the load-balancer management API
//!
//! Only the fields the report needs are modelled; everything else in the
//! payloads is ignored. Several fields in the API are "oneof" choices where
//! the mere presence of a key (usually with an empty object as value) carries
//! the meaning, so those are decoded as `bool` via [`present`].

use serde::de::{Deserializer, IgnoredAny};
use serde::Deserialize;

/// Generic list response: `{ "items": [...] }`
#[derive(Debug, Clone, Deserialize)]
pub struct ListResponse<T> {
    #[serde(default = "Vec::new")]
    pub items: Vec<T>,
}

/// A single entry of a list response. Entries without a name are skipped.
#[derive(Debug, Clone, Deserialize)]
pub struct ListItem {
    #[serde(default)]
    pub name: Option<String>,
}

/// Object metadata common to every config object
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ObjectMetadata {
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub namespace: Option<String>,
}

/// Reference to another config object by name
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ObjectRef {
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub namespace: Option<String>,
}

impl ObjectRef {
    /// The referenced name, if it is non-empty
    pub fn name(&self) -> Option<&str> {
        self.name.as_deref().filter(|n| !n.is_empty())
    }
}

/// HTTP load balancer detail (`GET .../http_loadbalancers/{name}`)
#[derive(Debug, Clone, Default, Deserialize)]
pub struct HttpLoadBalancer {
    #[serde(default)]
    pub metadata: ObjectMetadata,
    #[serde(default)]
    pub spec: HttpLoadBalancerSpec,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct HttpLoadBalancerSpec {
    #[serde(default, deserialize_with = "present")]
    pub disable_waf: bool,
    #[serde(default)]
    pub app_firewall: Option<ObjectRef>,
    #[serde(default)]
    pub routes: Vec<Route>,
}

impl HttpLoadBalancerSpec {
    /// Name of the default WAF, if one is referenced
    pub fn default_waf(&self) -> Option<&str> {
        self.app_firewall.as_ref().and_then(ObjectRef::name)
    }
}

/// One entry of `spec.routes`. Only simple routes carry a path matcher and
/// per-route WAF options; redirect, direct-response and custom routes
/// decode with `simple_route: None`.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct Route {
    #[serde(default)]
    pub simple_route: Option<SimpleRoute>,
}

impl Route {
    pub fn path(&self) -> Option<&PathMatcher> {
        self.simple_route.as_ref().and_then(|r| r.path.as_ref())
    }

    pub fn advanced_options(&self) -> Option<&AdvancedOptions> {
        self.simple_route
            .as_ref()
            .and_then(|r| r.advanced_options.as_ref())
    }
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct SimpleRoute {
    #[serde(default)]
    pub path: Option<PathMatcher>,
    #[serde(default)]
    pub advanced_options: Option<AdvancedOptions>,
}

/// Path matcher as sent by the API. The exact-match field is called `path`
/// on the wire.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct PathMatcher {
    #[serde(default)]
    pub prefix: Option<String>,
    #[serde(default)]
    pub regex: Option<String>,
    #[serde(default, alias = "exact")]
    pub path: Option<String>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct AdvancedOptions {
    #[serde(default, deserialize_with = "present")]
    pub disable_waf: bool,
    #[serde(default)]
    pub app_firewall: Option<ObjectRef>,
}

impl AdvancedOptions {
    /// Name of the WAF this route overrides to, if any
    pub fn waf_override(&self) -> Option<&str> {
        self.app_firewall.as_ref().and_then(ObjectRef::name)
    }
}

/// App Firewall detail (`GET .../app_firewalls/{name}`)
#[derive(Debug, Clone, Default, Deserialize)]
pub struct AppFirewall {
    #[serde(default)]
    pub metadata: ObjectMetadata,
    #[serde(default)]
    pub spec: AppFirewallSpec,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct AppFirewallSpec {
    #[serde(default, deserialize_with = "present")]
    pub monitoring: bool,
    #[serde(default, deserialize_with = "present")]
    pub blocking: bool,
}

/// Error body returned by the API on failures
#[derive(Debug, Clone, Deserialize)]
pub struct ApiErrorResponse {
    pub code: Option<i64>,
    pub message: Option<String>,
    pub error: Option<String>,
}

impl ApiErrorResponse {
    /// Get the error message, preferring `message` over `error`
    pub fn get_message(&self) -> String {
        self.message
            .clone()
            .or_else(|| self.error.clone())
            .unwrap_or_else(|| "Unknown error".to_string())
    }
}

/// Decodes any value as `true`; paired with `#[serde(default)]` this turns a
/// oneof marker key into a presence flag.
fn present<'de, D>(deserializer: D) -> Result<bool, D::Error>
where
    D: Deserializer<'de>,
{
    IgnoredAny::deserialize(deserializer)?;
    Ok(true)
}

//! Working-set resolution: which namespaces to scan

use crate::api::{ConfigApi, Result};

/// The namespaces a run covers
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum NamespaceScope {
    /// Every namespace the tenant lists
    All,
    /// Exactly one namespace
    Single(String),
}

impl NamespaceScope {
    /// `requested` equal to `sentinel` means all namespaces
    pub fn from_request(requested: &str, sentinel: &str) -> Self {
        if requested == sentinel {
            NamespaceScope::All
        } else {
            NamespaceScope::Single(requested.to_string())
        }
    }
}

/// Expand a scope into the ordered list of namespaces to scan
///
/// An empty listing is a valid, empty working set.
pub async fn resolve_namespaces<A: ConfigApi>(api: &A, scope: &NamespaceScope) -> Result<Vec<String>> {
    match scope {
        NamespaceScope::Single(namespace) => Ok(vec![namespace.clone()]),
        NamespaceScope::All => {
            let namespaces = api.list_namespaces().await?;
            log::info!("Scanning {} namespace(s)", namespaces.len());
            Ok(namespaces)
        }
    }
}

//! In-memory `ConfigApi` used by the unit tests

use crate::api::{ApiError, AppFirewall, ConfigApi, HttpLoadBalancer, Result};
use serde_json::json;
use std::cell::RefCell;
use std::collections::HashMap;

#[derive(Default)]
pub struct FakeApi {
    namespaces: Vec<String>,
    load_balancers: Vec<(String, HttpLoadBalancer)>,
    firewalls: HashMap<(String, String), AppFirewall>,
    calls: RefCell<Vec<String>>,
}

impl FakeApi {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_namespaces(mut self, namespaces: &[&str]) -> Self {
        self.namespaces = namespaces.iter().map(|n| n.to_string()).collect();
        self
    }

    /// Register a load balancer; `body` is the detail JSON as the API sends it
    pub fn with_load_balancer(mut self, namespace: &str, body: serde_json::Value) -> Self {
        let lb: HttpLoadBalancer = serde_json::from_value(body).unwrap();
        self.load_balancers.push((namespace.to_string(), lb));
        self
    }

    /// Register a policy; `mode` is the marker key to set, or "" for none
    pub fn with_firewall(mut self, namespace: &str, name: &str, mode: &str) -> Self {
        let spec = if mode.is_empty() {
            json!({})
        } else {
            json!({ mode: {} })
        };
        let firewall: AppFirewall = serde_json::from_value(json!({
            "metadata": {"name": name, "namespace": namespace},
            "spec": spec,
        }))
        .unwrap();
        self.firewalls
            .insert((namespace.to_string(), name.to_string()), firewall);
        self
    }

    /// Requests issued so far, in order
    pub fn calls(&self) -> Vec<String> {
        self.calls.borrow().clone()
    }

    fn record(&self, call: String) {
        self.calls.borrow_mut().push(call);
    }

    fn lb_name(lb: &HttpLoadBalancer) -> &str {
        lb.metadata.name.as_deref().unwrap_or_default()
    }
}

impl ConfigApi for FakeApi {
    async fn list_namespaces(&self) -> Result<Vec<String>> {
        self.record("namespaces".to_string());
        Ok(self.namespaces.clone())
    }

    async fn list_http_loadbalancers(&self, namespace: &str) -> Result<Vec<String>> {
        self.record(format!("lbs {}", namespace));
        Ok(self
            .load_balancers
            .iter()
            .filter(|(ns, _)| ns == namespace)
            .map(|(_, lb)| Self::lb_name(lb).to_string())
            .collect())
    }

    async fn get_http_loadbalancer(&self, namespace: &str, name: &str) -> Result<HttpLoadBalancer> {
        self.record(format!("lb {}/{}", namespace, name));
        self.load_balancers
            .iter()
            .find(|(ns, lb)| ns == namespace && Self::lb_name(lb) == name)
            .map(|(_, lb)| lb.clone())
            .ok_or_else(|| ApiError::NotFound {
                url: format!("fake://{}/{}", namespace, name),
                message: "no such load balancer".to_string(),
            })
    }

    async fn get_app_firewall(&self, namespace: &str, name: &str) -> Result<Option<AppFirewall>> {
        self.record(format!("waf {}/{}", namespace, name));
        Ok(self
            .firewalls
            .get(&(namespace.to_string(), name.to_string()))
            .cloned())
    }
}

//! Effective WAF resolution for load balancers and their routes
//!
//! Precedence, first match wins:
//!
//! * default row: WAF disabled or no reference -> `waf_disabled`/`NA`,
//!   otherwise look the referenced policy up.
//! * route row: route disables WAF -> `waf_disabled`/`NA`; route names a
//!   policy -> look it up; otherwise the default row's result verbatim.
//!
//! Lookups try the load balancer's namespace first and fall back to the
//! shared namespace only on not-found. Policies found there get a
//! `" (shared)"` suffix on their name.

use crate::api::{AppFirewall, ConfigApi, HttpLoadBalancerSpec, Route};
use crate::config::MissingWafPolicy;
use crate::error::{ExportError, Result};
use std::fmt;

use super::{NOT_APPLICABLE, WAF_DISABLED};

/// Appended to the name of a policy that lives in the shared namespace
pub const SHARED_SUFFIX: &str = " (shared)";
/// Appended to the name of a policy that could not be found anywhere
pub const NOT_FOUND_SUFFIX: &str = " (not found)";

/// Enforcement posture of a WAF policy
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WafMode {
    Monitoring,
    Blocking,
    /// Disabled, unknown, or not derivable from the policy
    NotApplicable,
}

impl WafMode {
    /// Derive the mode from a policy's marker fields
    pub fn from_firewall(firewall: &AppFirewall) -> Self {
        if firewall.spec.monitoring {
            WafMode::Monitoring
        } else if firewall.spec.blocking {
            WafMode::Blocking
        } else {
            WafMode::NotApplicable
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            WafMode::Monitoring => "monitoring",
            WafMode::Blocking => "blocking",
            WafMode::NotApplicable => NOT_APPLICABLE,
        }
    }
}

impl fmt::Display for WafMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// The (waf_name, waf_mode) pair reported for one row
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WafAssignment {
    pub name: String,
    pub mode: WafMode,
}

impl WafAssignment {
    pub fn disabled() -> Self {
        Self {
            name: WAF_DISABLED.to_string(),
            mode: WafMode::NotApplicable,
        }
    }
}

/// Where a policy lookup found the object
#[derive(Debug)]
enum Located {
    Local(AppFirewall),
    Shared(AppFirewall),
    Missing,
}

/// Identifies the load balancer being resolved, for lookups and errors
#[derive(Debug, Clone, Copy)]
pub struct LoadBalancerRef<'a> {
    pub namespace: &'a str,
    pub name: &'a str,
}

/// Resolves WAF assignments against the API
pub struct WafResolver<'a, A> {
    api: &'a A,
    shared_namespace: &'a str,
    on_missing: MissingWafPolicy,
}

impl<'a, A: ConfigApi> WafResolver<'a, A> {
    pub fn new(api: &'a A, shared_namespace: &'a str, on_missing: MissingWafPolicy) -> Self {
        Self {
            api,
            shared_namespace,
            on_missing,
        }
    }

    /// Resolve the load balancer's default WAF
    pub async fn resolve_default(
        &self,
        lb: LoadBalancerRef<'_>,
        spec: &HttpLoadBalancerSpec,
    ) -> Result<WafAssignment> {
        if spec.disable_waf {
            return Ok(WafAssignment::disabled());
        }
        match spec.default_waf() {
            Some(waf) => self.lookup(lb, waf).await,
            None => Ok(WafAssignment::disabled()),
        }
    }

    /// Resolve one route, inheriting `default` when the route has no override
    pub async fn resolve_route(
        &self,
        lb: LoadBalancerRef<'_>,
        route: &Route,
        default: &WafAssignment,
    ) -> Result<WafAssignment> {
        let Some(options) = route.advanced_options() else {
            return Ok(default.clone());
        };
        if options.disable_waf {
            return Ok(WafAssignment::disabled());
        }
        match options.waf_override() {
            Some(waf) => self.lookup(lb, waf).await,
            None => Ok(default.clone()),
        }
    }

    /// Fetch a policy by name and turn it into a reported assignment
    pub async fn lookup(&self, lb: LoadBalancerRef<'_>, waf: &str) -> Result<WafAssignment> {
        match self.locate(lb.namespace, waf).await? {
            Located::Local(firewall) => Ok(WafAssignment {
                name: waf.to_string(),
                mode: WafMode::from_firewall(&firewall),
            }),
            Located::Shared(firewall) => Ok(WafAssignment {
                name: format!("{}{}", waf, SHARED_SUFFIX),
                mode: WafMode::from_firewall(&firewall),
            }),
            Located::Missing => match self.on_missing {
                MissingWafPolicy::Abort => Err(ExportError::WafNotFound {
                    namespace: lb.namespace.to_string(),
                    load_balancer: lb.name.to_string(),
                    waf: waf.to_string(),
                    shared_namespace: self.shared_namespace.to_string(),
                }),
                MissingWafPolicy::Mark => {
                    log::warn!(
                        "App Firewall '{}' used by '{}/{}' not found, marking row",
                        waf,
                        lb.namespace,
                        lb.name
                    );
                    Ok(WafAssignment {
                        name: format!("{}{}", waf, NOT_FOUND_SUFFIX),
                        mode: WafMode::NotApplicable,
                    })
                }
            },
        }
    }

    async fn locate(&self, namespace: &str, waf: &str) -> Result<Located> {
        if let Some(firewall) = self.api.get_app_firewall(namespace, waf).await? {
            return Ok(Located::Local(firewall));
        }

        if namespace == self.shared_namespace {
            return Ok(Located::Missing);
        }

        log::info!(
            "App Firewall '{}' not found in namespace '{}', trying '{}'",
            waf,
            namespace,
            self.shared_namespace
        );
        match self.api.get_app_firewall(self.shared_namespace, waf).await? {
            Some(firewall) => Ok(Located::Shared(firewall)),
            None => Ok(Located::Missing),
        }
    }
}

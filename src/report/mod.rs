//! WAF report assembly
//!
//! Every load balancer yields one default row (route `NA`) followed by one
//! row per declared route, in declaration order. Load balancers appear in
//! the order the listing API returns them, namespace by namespace.

pub mod namespaces;
pub mod route;
pub mod waf;
pub mod writer;

#[cfg(test)]
pub(crate) mod testing;

pub use namespaces::{NamespaceScope, resolve_namespaces};
pub use route::{PathMatch, render_route_path};
pub use waf::{LoadBalancerRef, WafAssignment, WafMode, WafResolver};
pub use writer::{CSV_HEADER, write_csv, write_report};

use crate::api::{ConfigApi, HttpLoadBalancer};
use crate::error::Result;

/// Placeholder for "not applicable": the default row's route, and the
/// mode of disabled or unclassifiable policies
pub const NOT_APPLICABLE: &str = "NA";
/// Reported WAF name when no policy applies
pub const WAF_DISABLED: &str = "waf_disabled";

/// One line of the CSV report
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReportRow {
    pub namespace: String,
    pub lb_name: String,
    pub route: String,
    pub waf_name: String,
    pub waf_mode: String,
}

impl ReportRow {
    fn new(lb: LoadBalancerRef<'_>, route: String, waf: &WafAssignment) -> Self {
        Self {
            namespace: lb.namespace.to_string(),
            lb_name: lb.name.to_string(),
            route,
            waf_name: waf.name.clone(),
            waf_mode: waf.mode.to_string(),
        }
    }

    /// Fields in CSV column order
    pub fn as_record(&self) -> [&str; 5] {
        [
            &self.namespace,
            &self.lb_name,
            &self.route,
            &self.waf_name,
            &self.waf_mode,
        ]
    }
}

/// Produce the rows for one load balancer
///
/// `namespace` and `name` are the identifiers the detail was fetched with;
/// the object's own metadata takes precedence when present.
pub async fn load_balancer_rows<A: ConfigApi>(
    resolver: &WafResolver<'_, A>,
    namespace: &str,
    name: &str,
    lb: &HttpLoadBalancer,
) -> Result<Vec<ReportRow>> {
    let lb_ref = LoadBalancerRef {
        namespace: lb.metadata.namespace.as_deref().unwrap_or(namespace),
        name: lb.metadata.name.as_deref().unwrap_or(name),
    };

    let default = resolver.resolve_default(lb_ref, &lb.spec).await?;
    let mut rows = Vec::with_capacity(lb.spec.routes.len() + 1);
    rows.push(ReportRow::new(lb_ref, NOT_APPLICABLE.to_string(), &default));

    for route in &lb.spec.routes {
        let waf = resolver.resolve_route(lb_ref, route, &default).await?;
        rows.push(ReportRow::new(lb_ref, render_route_path(route), &waf));
    }

    Ok(rows)
}

/// Walk every load balancer in `namespaces` and collect the report rows
pub async fn collect_rows<A: ConfigApi>(
    api: &A,
    resolver: &WafResolver<'_, A>,
    namespaces: &[String],
) -> Result<Vec<ReportRow>> {
    let mut rows = Vec::new();

    for namespace in namespaces {
        let lb_names = api.list_http_loadbalancers(namespace).await?;
        log::info!(
            "Namespace '{}': {} HTTP load balancer(s)",
            namespace,
            lb_names.len()
        );

        for lb_name in &lb_names {
            let lb = api.get_http_loadbalancer(namespace, lb_name).await?;
            let lb_rows = load_balancer_rows(resolver, namespace, lb_name, &lb).await?;
            log::debug!("{}/{}: {} row(s)", namespace, lb_name, lb_rows.len());
            rows.extend(lb_rows);
        }
    }

    Ok(rows)
}

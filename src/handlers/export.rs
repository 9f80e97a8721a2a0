use crate::{
    api::{XcApiClient, api_url_for_tenant},
    auth::credentials,
    config::{Config, MissingWafPolicy},
    report::{self, NamespaceScope, WafResolver},
};
use std::path::PathBuf;
use std::time::Duration;

/// Inputs for one export run, after CLI and config have been merged
#[derive(Debug, Clone)]
pub struct ExportOptions {
    pub tenant: String,
    pub namespace: String,
    pub output: PathBuf,
    pub debug: bool,
    /// Overrides the tenant-derived base URL
    pub api_url: Option<String>,
    /// Overrides `report.on_missing_waf` from the config file
    pub on_missing_waf: Option<MissingWafPolicy>,
}

/// What a successful run produced
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExportSummary {
    pub output: PathBuf,
    pub namespaces: usize,
    pub rows: usize,
}

pub async fn handle_export(options: ExportOptions, config: &Config) -> crate::Result<ExportSummary> {
    // Fail before any request is sent
    let token = credentials::get_api_token(&config.api.token_env)?;

    let api_url = options
        .api_url
        .clone()
        .unwrap_or_else(|| api_url_for_tenant(&config.api.base_url, &options.tenant));
    log::info!("Using API endpoint {}", api_url);

    let client = XcApiClient::new(
        api_url,
        &token,
        Duration::from_secs(config.api.timeout_secs),
    )?
    .with_debug(options.debug);

    let scope = NamespaceScope::from_request(
        &options.namespace,
        &config.report.all_namespaces_sentinel,
    );
    let namespaces = report::resolve_namespaces(&client, &scope).await?;

    let on_missing = options
        .on_missing_waf
        .unwrap_or(config.report.on_missing_waf);
    let resolver = WafResolver::new(&client, &config.api.shared_namespace, on_missing);
    let rows = report::collect_rows(&client, &resolver, &namespaces).await?;

    if rows.is_empty() {
        log::warn!("No HTTP load balancer data found.");
    }
    report::write_report(&options.output, &rows)?;

    Ok(ExportSummary {
        output: options.output,
        namespaces: namespaces.len(),
        rows: rows.len(),
    })
}

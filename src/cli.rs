use crate::config::MissingWafPolicy;
use crate::handlers::ExportOptions;
use clap::Parser;
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "lb-waf-export")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(about = "Export F5 XC HTTP Load Balancer WAF configuration to CSV")]
#[command(long_about = "Lists the HTTP load balancers of a tenant, resolves the App Firewall applied to each load balancer and each of its routes, and writes one CSV row per load balancer default and per route.\n\nThe API token is read from the F5_XC_API_TOKEN environment variable.")]
pub struct Cli {
    /// Tenant name (used in the API URL)
    #[arg(long, value_name = "TENANT")]
    pub tenant: String,

    /// Namespace to scan, or 'system' for all namespaces
    #[arg(short, long, value_name = "NAMESPACE")]
    pub namespace: String,

    /// CSV output file
    #[arg(short, long, value_name = "FILE")]
    pub output: PathBuf,

    /// Print API requests/responses for debugging
    #[arg(long)]
    pub debug: bool,

    /// Path to configuration file
    #[arg(short, long, value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// API base URL, overriding the one derived from the tenant
    #[arg(long, value_name = "URL")]
    pub api_url: Option<String>,

    /// What to do when a referenced WAF exists neither locally nor in 'shared'
    #[arg(long, value_enum, value_name = "POLICY")]
    pub on_missing_waf: Option<MissingWafPolicy>,

    /// Enable verbose logging (-v for info, -vv for debug, -vvv for trace)
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Suppress all output except errors
    #[arg(short, long)]
    pub quiet: bool,
}

impl Cli {
    /// Initialize logging based on verbosity level
    pub fn init_logging(&self) {
        if self.quiet {
            return;
        }

        let verbosity = if self.debug {
            self.verbose.max(1)
        } else {
            self.verbose
        };

        let level = match verbosity {
            0 => log::LevelFilter::Warn,
            1 => log::LevelFilter::Info,
            2 => log::LevelFilter::Debug,
            _ => log::LevelFilter::Trace,
        };

        env_logger::Builder::from_default_env()
            .filter_level(level)
            .init();
    }

    pub fn export_options(&self) -> ExportOptions {
        ExportOptions {
            tenant: self.tenant.clone(),
            namespace: self.namespace.clone(),
            output: self.output.clone(),
            debug: self.debug,
            api_url: self.api_url.clone(),
            on_missing_waf: self.on_missing_waf,
        }
    }
}

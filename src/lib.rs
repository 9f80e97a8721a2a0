//! # lb-waf-export
//!
//! Audits which web-application-firewall policy protects each HTTP load
//! balancer (and each of its routes) in an F5 Distributed Cloud tenant,
//! and in which enforcement mode, writing the result as a flat CSV file.
//!
//! The tool is read-only: it lists namespaces and load balancers, fetches
//! their details and the referenced App Firewall objects, and nothing else.
//!
//! ## Example
//!
//! ```rust,no_run
//! use lb_waf_export::{config::Config, handlers::{ExportOptions, handle_export}};
//!
//! # async fn example() -> lb_waf_export::Result<()> {
//! let options = ExportOptions {
//!     tenant: "acme".to_string(),
//!     namespace: "system".to_string(),
//!     output: "waf.csv".into(),
//!     debug: false,
//!     api_url: None,
//!     on_missing_waf: None,
//! };
//! let summary = handle_export(options, &Config::default()).await?;
//! println!("{} rows", summary.rows);
//! # Ok(())
//! # }
//! ```

pub mod api;
pub mod auth;
pub mod cli;
pub mod config;
pub mod error;
pub mod handlers;
pub mod report;

pub use error::{ExportError, Result, exit_code};
pub use handlers::{ExportOptions, ExportSummary, handle_export};

/// The current version of the CLI tool
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

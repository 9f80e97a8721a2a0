pub mod types;

pub use types::{ApiConfig, Config, MissingWafPolicy, ReportConfig};

use crate::error::{ExportError, Result};
use std::fs;
use std::path::{Path, PathBuf};

const CONFIG_FILE_NAME: &str = ".lb-waf-export.toml";

/// Get the global config file path (~/.lb-waf-export.toml)
pub fn global_config_path() -> Option<PathBuf> {
    dirs::home_dir().map(|h| h.join(CONFIG_FILE_NAME))
}

/// Load configuration
///
/// An explicitly requested file must exist and parse. Otherwise the global
/// config is used if it is readable, falling back to defaults.
pub fn load_config(explicit: Option<&Path>) -> Result<Config> {
    if let Some(path) = explicit {
        let content = fs::read_to_string(path).map_err(|e| {
            ExportError::Config(format!("cannot read {}: {}", path.display(), e))
        })?;
        return toml::from_str(&content)
            .map_err(|e| ExportError::Config(format!("{}: {}", path.display(), e)));
    }

    if let Some(global) = global_config_path() {
        if global.exists() {
            if let Ok(content) = fs::read_to_string(&global) {
                match parse_config(&content) {
                    Ok(config) => {
                        log::debug!("Loaded configuration from {}", global.display());
                        return Ok(config);
                    }
                    Err(e) => log::warn!("Ignoring {}: {}", global.display(), e),
                }
            }
        }
    }

    Ok(Config::default())
}

/// Parse a TOML configuration document; missing keys take their defaults
pub fn parse_config(content: &str) -> Result<Config> {
    toml::from_str(content).map_err(|e| ExportError::Config(e.to_string()))
}

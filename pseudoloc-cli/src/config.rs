//! Optional `pseudoloc.toml` configuration.
//!
//! ```toml
//! include-blank = true
//! format = "resx"
//! lock-retry-ms = 500
//! jobs = 4
//! ```

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use serde::Deserialize;

/// Name of the configuration file picked up from the working directory.
pub const DEFAULT_CONFIG_FILE: &str = "pseudoloc.toml";

/// Values read from a configuration file. Every field is optional; command-line flags win.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "kebab-case", deny_unknown_fields)]
pub struct Config {
    pub include_blank: Option<bool>,
    pub format: Option<String>,
    pub lock_retry_ms: Option<u64>,
    pub jobs: Option<usize>,
}

/// Parse a config from a string (useful for testing).
pub fn parse_config_str(content: &str, path: &Path) -> Result<Config> {
    toml::from_str(content).with_context(|| format!("Failed to parse config file: {}", path.display()))
}

/// Parse a config file from the given path.
pub fn parse_config_file(path: &Path) -> Result<Config> {
    let content = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read config file: {}", path.display()))?;
    parse_config_str(&content, path)
}

/// Loads the explicit config file, or `pseudoloc.toml` from `cwd` when present.
///
/// A missing implicit file yields the default config; a missing explicit one is an error.
pub fn load_config(explicit: Option<&Path>, cwd: &Path) -> Result<Config> {
    if let Some(path) = explicit {
        return parse_config_file(path);
    }
    let implicit: PathBuf = cwd.join(DEFAULT_CONFIG_FILE);
    if implicit.is_file() {
        parse_config_file(&implicit)
    } else {
        Ok(Config::default())
    }
}

//! Raw configuration schema (as parsed from TOML)

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Raw configuration as parsed from TOML
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(deny_unknown_fields)]
pub struct RawConfig {
    /// Config schema version
    pub config_version: u32,

    /// Tracker settings
    #[serde(default)]
    pub tracker: RawTrackerConfig,
}

/// Tracker-level settings
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
#[serde(deny_unknown_fields)]
pub struct RawTrackerConfig {
    /// Durable shortage file (default: data dir / shortages.json)
    pub data_file: Option<PathBuf>,

    /// Names treated as administrators, case-insensitive (default: ["admin"])
    pub admins: Option<Vec<String>>,

    /// Default log level when RUST_LOG is not set
    pub log_level: Option<String>,
}

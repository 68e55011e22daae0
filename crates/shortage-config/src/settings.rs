//! Validated settings structures

use crate::schema::RawConfig;
use crate::validation::parse_log_level;
use shortage_util::{UserName, default_data_file};
use std::path::PathBuf;

/// Admin name used when the config names none
pub const DEFAULT_ADMIN: &str = "admin";

/// Log level used when the config names none
pub const DEFAULT_LOG_LEVEL: &str = "warn";

/// Validated settings ready for use by the front end
#[derive(Debug, Clone)]
pub struct Settings {
    /// Where the shortage collection is persisted
    pub data_file: PathBuf,

    /// Users who may see and delete every shortage
    pub admins: Vec<UserName>,

    /// Default log filter
    pub log_level: String,
}

impl Settings {
    /// Convert from raw config (after validation)
    pub fn from_raw(raw: RawConfig) -> Self {
        let tracker = raw.tracker;

        let admins = tracker
            .admins
            .map(|names| {
                names
                    .into_iter()
                    .map(|n| UserName::new(n.trim()))
                    .collect()
            })
            .unwrap_or_else(default_admins);

        let log_level = tracker
            .log_level
            .as_deref()
            .and_then(parse_log_level)
            .unwrap_or(DEFAULT_LOG_LEVEL)
            .to_string();

        Self {
            data_file: tracker.data_file.unwrap_or_else(default_data_file),
            admins,
            log_level,
        }
    }

    /// True if `user` is one of the configured administrators
    pub fn is_admin(&self, user: &str) -> bool {
        self.admins.iter().any(|admin| admin.matches(user.trim()))
    }
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            data_file: default_data_file(),
            admins: default_admins(),
            log_level: DEFAULT_LOG_LEVEL.to_string(),
        }
    }
}

fn default_admins() -> Vec<UserName> {
    vec![UserName::new(DEFAULT_ADMIN)]
}

//! Configuration validation

use crate::schema::RawConfig;
use std::collections::HashSet;
use thiserror::Error;

/// Log levels accepted in `tracker.log_level`
pub const LOG_LEVELS: [&str; 5] = ["trace", "debug", "info", "warn", "error"];

/// Validation error
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("Admin names cannot be empty")]
    EmptyAdminName,

    #[error("Duplicate admin name: {0}")]
    DuplicateAdmin(String),

    #[error("data_file cannot be empty")]
    EmptyDataFile,

    #[error("Unknown log level '{0}' (expected one of: trace, debug, info, warn, error)")]
    InvalidLogLevel(String),
}

/// Validate a raw configuration
pub fn validate_config(config: &RawConfig) -> Vec<ValidationError> {
    let mut errors = Vec::new();
    let tracker = &config.tracker;

    if let Some(admins) = &tracker.admins {
        let mut seen = HashSet::new();
        for name in admins {
            let name = name.trim();
            if name.is_empty() {
                errors.push(ValidationError::EmptyAdminName);
            } else if !seen.insert(name.to_lowercase()) {
                errors.push(ValidationError::DuplicateAdmin(name.to_string()));
            }
        }
    }

    if let Some(path) = &tracker.data_file
        && path.as_os_str().is_empty()
    {
        errors.push(ValidationError::EmptyDataFile);
    }

    if let Some(level) = &tracker.log_level
        && parse_log_level(level).is_none()
    {
        errors.push(ValidationError::InvalidLogLevel(level.clone()));
    }

    errors
}

/// Normalize a log level name, if it is one we accept
pub fn parse_log_level(level: &str) -> Option<&'static str> {
    let level = level.trim().to_lowercase();
    LOG_LEVELS.into_iter().find(|l| *l == level)
}

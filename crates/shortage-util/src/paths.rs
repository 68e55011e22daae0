//! Default paths for the shortage tracker
//!
//! Paths are user-writable by default:
//! - Data: `$XDG_DATA_HOME/shortages` or `~/.local/share/shortages`
//! - Config: `$XDG_CONFIG_HOME/shortages/config.toml` or `~/.config/shortages/config.toml`

use std::path::PathBuf;

/// Environment variable for overriding the data directory
pub const SHORTAGE_DATA_DIR_ENV: &str = "SHORTAGE_DATA_DIR";

/// Environment variable for overriding the data file itself
pub const SHORTAGE_DATA_FILE_ENV: &str = "SHORTAGE_DATA_FILE";

/// Data filename within the data directory
pub const DATA_FILENAME: &str = "shortages.json";

/// Config filename within the config directory
const CONFIG_FILENAME: &str = "config.toml";

/// Application subdirectory name
const APP_DIR: &str = "shortages";

/// Get the default data directory.
///
/// Order of precedence:
/// 1. `$SHORTAGE_DATA_DIR` environment variable (if set)
/// 2. `$XDG_DATA_HOME/shortages` (if XDG_DATA_HOME is set)
/// 3. `~/.local/share/shortages` (fallback)
pub fn default_data_dir() -> PathBuf {
    if let Ok(path) = std::env::var(SHORTAGE_DATA_DIR_ENV) {
        return PathBuf::from(path);
    }

    data_dir_without_env()
}

/// Get the data directory without checking SHORTAGE_DATA_DIR.
pub fn data_dir_without_env() -> PathBuf {
    if let Ok(data_home) = std::env::var("XDG_DATA_HOME") {
        return PathBuf::from(data_home).join(APP_DIR);
    }

    if let Ok(home) = std::env::var("HOME") {
        return PathBuf::from(home)
            .join(".local")
            .join("share")
            .join(APP_DIR);
    }

    // Last resort
    PathBuf::from("/tmp").join(APP_DIR).join("data")
}

/// Default location of the durable shortage file
pub fn default_data_file() -> PathBuf {
    default_data_dir().join(DATA_FILENAME)
}

/// Get the default config file path.
///
/// Order of precedence:
/// 1. `$XDG_CONFIG_HOME/shortages/config.toml` (if XDG_CONFIG_HOME is set)
/// 2. `~/.config/shortages/config.toml` (fallback)
pub fn default_config_path() -> PathBuf {
    if let Ok(config_home) = std::env::var("XDG_CONFIG_HOME") {
        return PathBuf::from(config_home).join(APP_DIR).join(CONFIG_FILENAME);
    }

    if let Ok(home) = std::env::var("HOME") {
        return PathBuf::from(home)
            .join(".config")
            .join(APP_DIR)
            .join(CONFIG_FILENAME);
    }

    PathBuf::from("/etc").join(APP_DIR).join(CONFIG_FILENAME)
}

//! Config validation CLI tool
//!
//! Checks a shortage tracker configuration file and prints the settings it
//! resolves to. With no argument, checks the default config location.

use shortage_config::{CURRENT_CONFIG_VERSION, ConfigError, Settings, load_config};
use shortage_util::default_config_path;
use std::path::PathBuf;
use std::process::ExitCode;

fn main() -> ExitCode {
    let config_path = std::env::args_os()
        .nth(1)
        .map(PathBuf::from)
        .unwrap_or_else(default_config_path);

    if matches!(
        config_path.to_str(),
        Some("-h") | Some("--help")
    ) {
        println!("Usage: validate-config [config-file]");
        println!("Default: {}", default_config_path().display());
        return ExitCode::SUCCESS;
    }

    match load_config(&config_path) {
        Ok(settings) => {
            println!("{}: OK", config_path.display());
            print_settings(&settings);
            ExitCode::SUCCESS
        }
        Err(e) => {
            eprintln!("{}: invalid", config_path.display());
            for line in describe(&e) {
                eprintln!("  {}", line);
            }
            ExitCode::from(1)
        }
    }
}

fn print_settings(settings: &Settings) {
    let admins: Vec<&str> = settings.admins.iter().map(|a| a.as_str()).collect();

    println!("  config_version = {}", CURRENT_CONFIG_VERSION);
    println!("  data_file      = {}", settings.data_file.display());
    println!("  log_level      = {}", settings.log_level);
    println!("  admins         = [{}]", admins.join(", "));
}

fn describe(error: &ConfigError) -> Vec<String> {
    match error {
        ConfigError::ReadError(e) => vec![format!("cannot read file: {}", e)],
        ConfigError::ParseError(e) => vec![format!("not valid TOML: {}", e)],
        ConfigError::ValidationFailed { errors } => {
            errors.iter().map(|e| e.to_string()).collect()
        }
        ConfigError::UnsupportedVersion(version) => vec![format!(
            "config_version {} is not supported (expected {})",
            version, CURRENT_CONFIG_VERSION
        )],
    }
}

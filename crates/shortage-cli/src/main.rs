//! shortages - interactive shortage tracker
//!
//! Wires together configuration, logging, the JSON file store and the
//! registry, then hands the terminal to the prompt loop.

use anyhow::{Context, Result};
use clap::Parser;
use shortage_cli::Shell;
use shortage_config::load_config_or_default;
use shortage_core::ShortageRegistry;
use shortage_store::JsonFileStore;
use shortage_util::{default_config_path, is_mock_time_active};
use std::io;
use std::path::PathBuf;
use std::sync::Arc;
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

/// shortages - report and review office supply shortages
#[derive(Parser, Debug)]
#[command(name = "shortages")]
#[command(about = "Report and review office supply shortages", long_about = None)]
struct Args {
    /// Configuration file path (default: ~/.config/shortages/config.toml)
    #[arg(short, long, default_value_os_t = default_config_path())]
    config: PathBuf,

    /// Data file override (or set SHORTAGE_DATA_FILE env var)
    #[arg(short, long, env = "SHORTAGE_DATA_FILE")]
    data_file: Option<PathBuf>,

    /// Log in as this user instead of prompting for a name
    #[arg(short, long)]
    user: Option<String>,

    /// Log level (default: from config, else "warn")
    #[arg(short, long)]
    log_level: Option<String>,
}

fn main() -> Result<()> {
    let args = Args::parse();

    let mut settings = load_config_or_default(&args.config)
        .with_context(|| format!("Failed to load config from {:?}", args.config))?;
    if let Some(data_file) = &args.data_file {
        settings.data_file = data_file.clone();
    }

    // Initialize logging
    let level = args.log_level.as_deref().unwrap_or(&settings.log_level);
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(true)
        .with_writer(io::stderr)
        .init();

    info!(
        version = env!("CARGO_PKG_VERSION"),
        config_path = %args.config.display(),
        data_file = %settings.data_file.display(),
        admin_count = settings.admins.len(),
        "shortages starting"
    );

    if is_mock_time_active() {
        warn!("Mock time is active, new shortages will carry the mocked timestamp");
    }

    let store = Arc::new(JsonFileStore::new(&settings.data_file));
    let registry = ShortageRegistry::open(store);

    let stdin = io::stdin();
    let stdout = io::stdout();
    let mut shell = Shell::new(registry, settings, stdin.lock(), stdout.lock());
    shell
        .run(args.user)
        .context("Terminal session failed")?;

    info!("shortages exiting");
    Ok(())
}

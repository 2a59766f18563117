//! # CLI Layer
//!
//! The CLI layer is the **only** place in the codebase that:
//! - Knows about terminal I/O (stdout, stderr)
//! - Decides where configuration comes from
//! - Installs a log subscriber
//! - Starts an async runtime
//!
//! ## Responsibilities
//!
//! 1. **Argument Parsing**: clap, in `setup.rs`
//! 2. **Logging**: `tracing-subscriber` reading `RUST_LOG`, defaulting to
//!    `warn`, or `debug` for vendorsheet crates under `--verbose`
//! 3. **Configuration**: `.env`, then `VENDORSHEET_*`, then the config file
//! 4. **Dispatch**: one handler call on a multi-thread runtime
//! 5. **Output**: the rendered string on stdout. Errors travel up to `main`.

use super::handlers;
use super::setup::Cli;
use anyhow::{Context, Result};
use clap::Parser;
use directories::ProjectDirs;
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;
use vendorsheetapp::api::VendorSheetApi;
use vendorsheetapp::config::{SheetConfig, CONFIG_FILENAME};

pub fn run() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    // A missing .env is the normal case.
    let _ = dotenvy::dotenv();

    let config_path = config_path(&cli);
    let config = SheetConfig::load(config_path.as_deref()).with_context(|| match &config_path {
        Some(path) => format!(
            "Could not load configuration (set VENDORSHEET_SPREADSHEET_ID or edit {})",
            path.display()
        ),
        None => "Could not load configuration (set VENDORSHEET_SPREADSHEET_ID)".to_string(),
    })?;
    tracing::debug!(file = ?config_path, spreadsheet = %config.spreadsheet_id, "configuration loaded");
    let api = VendorSheetApi::from_config(&config)?;

    let runtime = tokio::runtime::Builder::new_multi_thread()
        .enable_all()
        .build()
        .context("Failed to start async runtime")?;
    let output = runtime.block_on(handlers::handle(&api, cli.command))?;

    println!("{}", output.render(cli.json)?);
    Ok(())
}

fn init_logging(verbose: bool) {
    let fallback = if verbose {
        "warn,vendorsheet=debug,vendorsheetapp=debug"
    } else {
        "warn"
    };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(fallback));
    // Logs go to stderr so `--json` output stays parseable.
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init();
}

/// `--config` wins. Otherwise the platform config dir, when it has a file.
fn config_path(cli: &Cli) -> Option<PathBuf> {
    if let Some(path) = &cli.config {
        return Some(path.clone());
    }
    let dirs = ProjectDirs::from("com", "vendorsheet", "vendorsheet")?;
    let path = dirs.config_dir().join(CONFIG_FILENAME);
    path.exists().then_some(path)
}

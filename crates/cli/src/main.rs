//! splunk-dataset - Read a Splunk search as a partitioned table.
//!
//! Responsibilities:
//! - Parse command-line arguments and environment variables.
//! - Build configuration and open datasets through the shared libraries.
//! - Print schemas, partitions and saved searches as tables or CSV.
//!
//! Does NOT handle:
//! - Search, polling or result parsing (see `crates/client` and `crates/dataset`).
//!
//! Invariants:
//! - `load_dotenv()` is called BEFORE CLI parsing so `.env` can provide clap defaults.
//! - Logs go to stderr; stdout carries only command output.

mod args;
mod cancellation;
mod commands;
mod dispatch;
mod error;
mod output;

use args::Cli;
use cancellation::{CancellationToken, is_cancelled_error, print_cancelled_message};
use clap::Parser;
use dispatch::run_command;
use error::{ExitCode, ExitCodeExt};
use splunk_config::{Config, ConfigLoader};
use tracing_subscriber::{EnvFilter, fmt, prelude::*};

#[tokio::main]
async fn main() {
    // Load .env file BEFORE CLI parsing so clap env defaults can read .env values
    if let Err(e) = ConfigLoader::new().load_dotenv() {
        eprintln!("Failed to load environment: {}", e);
        std::process::exit(ExitCode::ConfigError.as_i32());
    }

    let cli = Cli::parse();

    tracing_subscriber::registry()
        .with(EnvFilter::from_default_env())
        .with(fmt::layer().with_writer(std::io::stderr))
        .init();

    let config = match build_config(&cli) {
        Ok(config) => config,
        Err(e) => {
            eprintln!("Failed to build configuration: {:#}", e);
            std::process::exit(ExitCode::ConfigError.as_i32());
        }
    };

    let cancel = CancellationToken::new();
    let cancel_clone = cancel.clone();

    tokio::spawn(async move {
        if let Err(e) = tokio::signal::ctrl_c().await {
            eprintln!("Failed to listen for Ctrl+C: {}", e);
            return;
        }
        cancel_clone.cancel();
    });

    let exit_code = match run_command(cli, config, &cancel).await {
        Ok(()) => ExitCode::Success,
        Err(e) if is_cancelled_error(&e) => {
            print_cancelled_message();
            ExitCode::Interrupted
        }
        Err(e) => {
            eprintln!("{:#}", e);
            e.exit_code()
        }
    };

    std::process::exit(exit_code.as_i32());
}

/// Merge the config file, environment and flags, in increasing priority.
fn build_config(cli: &Cli) -> Result<Config, splunk_config::ConfigError> {
    let mut loader = ConfigLoader::new();

    // Blank paths are ignored so an empty SPLUNK_CONFIG_PATH means "no file".
    if let Some(path) = &cli.config_path
        && !path.to_string_lossy().trim().is_empty()
    {
        loader = loader.with_config_path(path.clone());
    }

    loader = loader.from_file()?.from_env()?;

    if let Some(url) = &cli.base_url {
        loader = loader.with_base_url(url.clone());
    }
    if let Some(username) = &cli.username {
        loader = loader.with_username(username.clone());
    }
    if let Some(password) = &cli.password {
        loader = loader.with_password(password.clone());
    }
    if let Some(key) = &cli.session_key {
        loader = loader.with_session_key(key.clone());
    }
    if cli.basic_auth {
        loader = loader.with_basic_auth(true);
    }
    if cli.skip_verify {
        loader = loader.with_skip_verify(true);
    }
    if let Some(secs) = cli.timeout {
        loader = loader.with_timeout(std::time::Duration::from_secs(secs));
    }
    if let Some(chunksize) = cli.chunksize {
        loader = loader.with_chunksize(chunksize);
    }
    if let Some(ms) = cli.poll_interval_ms {
        loader = loader.with_poll_interval(std::time::Duration::from_millis(ms));
    }
    if let Some(secs) = cli.max_wait {
        loader = loader.with_max_wait(std::time::Duration::from_secs(secs));
    }

    loader.build()
}

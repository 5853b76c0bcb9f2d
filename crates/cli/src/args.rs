//! CLI argument definitions and parsing.
//!
//! Responsibilities:
//! - Define the CLI structure using clap derive macros.
//! - Turn `--dtype`/`--na` flags into client parse options and
//!   `--output-delimiter` into output options.
//!
//! Invariants:
//! - Payloads are always read comma-delimited; Splunk's `output_mode=csv` never varies.
//!
//! Non-responsibilities:
//! - Does not execute commands (see `dispatch` module).
//! - Does not merge configuration sources (see `main`).

use clap::{Parser, Subcommand};
use splunk_client::{ColumnType, ParseOptions};
use std::path::PathBuf;

use crate::output::OutputFormat;

#[derive(Parser)]
#[command(name = "splunk-dataset")]
#[command(about = "Read Splunk search results as a partitioned table", long_about = None)]
#[command(version)]
#[command(
    after_help = "Examples:\n  splunk-dataset schema 'index=main sourcetype=access_combined'\n  splunk-dataset --chunksize 1000 partition 'index=main' 2\n  splunk-dataset -o csv --output-file results.csv dump '| inputlookup hosts.csv'\n  splunk-dataset saved-searches\n"
)]
pub struct Cli {
    /// Base URL of the Splunk server (e.g., https://localhost:8089)
    #[arg(short, long, global = true, env = "SPLUNK_BASE_URL")]
    pub base_url: Option<String>,

    /// Username for login or Basic authentication
    #[arg(short, long, global = true, env = "SPLUNK_USERNAME")]
    pub username: Option<String>,

    /// Password for login or Basic authentication
    #[arg(short, long, global = true, env = "SPLUNK_PASSWORD", hide_env_values = true)]
    pub password: Option<String>,

    /// Pre-established session key (preferred over username/password)
    #[arg(short = 'k', long, global = true, env = "SPLUNK_SESSION_KEY", hide_env_values = true)]
    pub session_key: Option<String>,

    /// Send username/password as HTTP Basic auth instead of logging in
    #[arg(long, global = true)]
    pub basic_auth: bool,

    /// Skip TLS certificate verification (for self-signed certificates)
    #[arg(long, global = true)]
    pub skip_verify: bool,

    /// Request timeout in seconds
    #[arg(long, global = true)]
    pub timeout: Option<u64>,

    /// Maximum rows per partition
    #[arg(short, long, global = true)]
    pub chunksize: Option<usize>,

    /// Milliseconds between job status checks
    #[arg(long, global = true)]
    pub poll_interval_ms: Option<u64>,

    /// Maximum seconds to wait for the search job to finish
    #[arg(long, global = true)]
    pub max_wait: Option<u64>,

    /// Path to a JSON configuration file
    #[arg(long = "config", global = true, env = "SPLUNK_CONFIG_PATH", value_name = "FILE")]
    pub config_path: Option<PathBuf>,

    /// Output format
    #[arg(short, long, global = true, value_enum, default_value_t = OutputFormat::Table)]
    pub output: OutputFormat,

    /// Output file path (saves results to file instead of stdout)
    #[arg(long, global = true, value_name = "FILE")]
    pub output_file: Option<PathBuf>,

    /// Field delimiter of CSV output
    #[arg(long, global = true, default_value = ",", value_parser = parse_delimiter)]
    pub output_delimiter: u8,

    /// Cell text treated as missing (empty cells always are)
    #[arg(long = "na", global = true, value_name = "TOKEN")]
    pub na_representation: Option<String>,

    /// Column type override, e.g. `--dtype bytes=int64` (repeatable)
    #[arg(long = "dtype", global = true, value_name = "COLUMN=TYPE", value_parser = parse_dtype_hint)]
    pub dtype_hints: Vec<(String, ColumnType)>,

    #[command(subcommand)]
    pub command: Commands,
}

impl Cli {
    pub fn parse_options(&self) -> ParseOptions {
        let mut options = ParseOptions::default();
        if let Some(na) = &self.na_representation {
            options = options.with_na_representation(na.clone());
        }
        for (column, column_type) in &self.dtype_hints {
            options = options.with_dtype_hint(column.clone(), *column_type);
        }
        options
    }

    /// Options for writing tables: the parse options with the output delimiter.
    pub fn output_options(&self) -> ParseOptions {
        self.parse_options().with_delimiter(self.output_delimiter)
    }
}

#[derive(Subcommand)]
pub enum Commands {
    /// Run a search and show its columns, types and partition count
    Schema {
        /// The search query (e.g., 'index=main | head 100')
        query: String,
    },

    /// Run a search and show one partition
    Partition {
        /// The search query
        query: String,

        /// Zero-based partition index
        index: usize,
    },

    /// Run a search and show every partition in order
    Dump {
        /// The search query
        query: String,

        /// Number of partitions fetched concurrently
        #[arg(long, default_value = "1")]
        concurrency: usize,
    },

    /// List saved searches
    SavedSearches,
}

fn parse_delimiter(s: &str) -> Result<u8, String> {
    match s.as_bytes() {
        [b] if b.is_ascii() => Ok(*b),
        _ if s == "\\t" => Ok(b'\t'),
        _ => Err(format!("delimiter must be a single ASCII character, got '{s}'")),
    }
}

fn parse_dtype_hint(s: &str) -> Result<(String, ColumnType), String> {
    let (column, column_type) = s
        .split_once('=')
        .ok_or_else(|| format!("expected COLUMN=TYPE, got '{s}'"))?;
    let column = column.trim();
    if column.is_empty() {
        return Err(format!("missing column name in '{s}'"));
    }
    Ok((column.to_string(), column_type.parse()?))
}

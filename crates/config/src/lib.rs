//! Configuration management for Splunk datasets.
//!
//! This crate provides types and loaders for the connection, authentication
//! and partitioning settings used to open a Splunk search as a dataset.
//! Values come from JSON config files, environment variables (optionally
//! seeded from a `.env` file) and explicit builder calls.

pub mod constants;
mod loader;
pub mod types;

pub use loader::{ConfigError, ConfigLoader, env_var_or_none};
pub use types::{AuthConfig, AuthStrategy, Config, ConnectionConfig, DatasetConfig};

//! Command implementations.

pub mod dump;
pub mod partition;
pub mod saved_searches;
pub mod schema;

use splunk_client::ParseOptions;
use splunk_config::Config;
use splunk_dataset::{DatasetOptions, SplunkDataset};

use crate::output::OutputFormat;

/// Settings shared by every command.
pub struct CommandContext {
    pub config: Config,
    /// How Splunk's CSV payloads are read.
    pub parse_options: ParseOptions,
    /// How tables are written to the output.
    pub output_options: ParseOptions,
    pub format: OutputFormat,
}

impl CommandContext {
    /// An unopened dataset for `query`; nothing is sent until its schema is requested.
    pub fn dataset(&self, query: &str) -> SplunkDataset {
        let options = DatasetOptions::from(&self.config.dataset)
            .with_parse_options(self.parse_options.clone());
        SplunkDataset::from_config(query, &self.config).with_options(options)
    }
}

//! Command dispatch logic.
//!
//! Responsibilities:
//! - Route parsed CLI arguments to the matching command handler.
//! - Abort the running command when Ctrl+C is pressed.
//!
//! Does NOT handle:
//! - CLI structure definitions (see `args` module).
//! - Configuration loading (see `main()`).

use anyhow::Result;
use splunk_config::Config;

use crate::args::{Cli, Commands};
use crate::cancellation::{CancellationToken, Cancelled};
use crate::commands::{self, CommandContext};
use crate::output::Sink;

pub(crate) async fn run_command(
    cli: Cli,
    config: Config,
    cancel_token: &CancellationToken,
) -> Result<()> {
    let ctx = CommandContext {
        config,
        parse_options: cli.parse_options(),
        output_options: cli.output_options(),
        format: cli.output,
    };
    let mut sink = Sink::new(cli.output_file.clone())?;

    let run = async {
        match cli.command {
            Commands::Schema { query } => commands::schema::run(&ctx, &query, &mut sink).await,
            Commands::Partition { query, index } => {
                commands::partition::run(&ctx, &query, index, &mut sink).await
            }
            Commands::Dump { query, concurrency } => {
                commands::dump::run(&ctx, &query, concurrency, &mut sink).await
            }
            Commands::SavedSearches => commands::saved_searches::run(&ctx, &mut sink).await,
        }
    };

    tokio::select! {
        result = run => result?,
        _ = cancel_token.cancelled() => return Err(Cancelled.into()),
    }

    sink.finish()
}

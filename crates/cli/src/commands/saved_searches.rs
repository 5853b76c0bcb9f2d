//! `saved-searches` command: list saved search names and definitions.

use anyhow::Result;
use splunk_client::SplunkClient;
use tracing::info;

use crate::commands::CommandContext;
use crate::output::{Sink, render_saved_searches};

pub async fn run(ctx: &CommandContext, sink: &mut Sink) -> Result<()> {
    let client = SplunkClient::from_config(&ctx.config).await?;
    let searches = client.list_saved_searches().await?;
    info!(count = searches.len(), "Listed saved searches");

    sink.emit(&render_saved_searches(
        &searches,
        ctx.format,
        &ctx.output_options,
    )?)
}

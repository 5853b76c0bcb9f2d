//! `schema` command: resolve a dataset and print its column signature.

use anyhow::Result;
use tracing::info;

use crate::commands::CommandContext;
use crate::output::{Sink, render_schema};

pub async fn run(ctx: &CommandContext, query: &str, sink: &mut Sink) -> Result<()> {
    let dataset = ctx.dataset(query);
    let schema = dataset.schema().await?;

    info!(
        partitions = schema.partition_count,
        result_count = schema.result_count,
        "Schema resolved"
    );
    if ctx.format == crate::output::OutputFormat::Csv {
        eprintln!(
            "partitions: {}, result_count: {}",
            schema.partition_count, schema.result_count
        );
    }

    sink.emit(&render_schema(&schema, ctx.format, &ctx.output_options)?)
}

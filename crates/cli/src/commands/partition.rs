//! `partition` command: resolve a dataset and print one partition.

use anyhow::Result;

use crate::commands::CommandContext;
use crate::output::{Sink, render_table};

pub async fn run(ctx: &CommandContext, query: &str, index: usize, sink: &mut Sink) -> Result<()> {
    let dataset = ctx.dataset(query);
    dataset.schema().await?;

    let table = dataset.get_partition(index).await?;
    sink.emit(&render_table(&table, ctx.format, &ctx.output_options, true)?)
}

//! `dump` command: resolve a dataset and print every partition in order.

use anyhow::Result;
use futures::TryStreamExt;
use tracing::debug;

use crate::commands::CommandContext;
use crate::output::{OutputFormat, Sink, render_table};

pub async fn run(
    ctx: &CommandContext,
    query: &str,
    concurrency: usize,
    sink: &mut Sink,
) -> Result<()> {
    let dataset = ctx.dataset(query);
    dataset.schema().await?;

    let partitions = dataset.to_lazy_collection()?;
    if partitions.is_empty() {
        // Still print the header so empty results are valid CSV.
        let empty = arrow::record_batch::RecordBatch::new_empty(partitions.schema().clone());
        return sink.emit(&render_table(&empty, ctx.format, &ctx.output_options, true)?);
    }

    let mut stream = std::pin::pin!(partitions.stream_buffered(concurrency));
    while let Some((index, table)) = stream.try_next().await? {
        debug!(index, rows = table.num_rows(), "Writing partition");
        let header = index == 0 || ctx.format == OutputFormat::Table;
        sink.emit(&render_table(&table, ctx.format, &ctx.output_options, header)?)?;
    }
    Ok(())
}

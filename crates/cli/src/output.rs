//! Rendering tables and writing command output.
//!
//! Responsibilities:
//! - Render Arrow tables as pretty-printed text or CSV.
//! - Send output to stdout or atomically to a file.
//!
//! Invariants:
//! - File output is streamed to a temp file in the target directory and renamed
//!   into place only once the command succeeds.

use anyhow::{Context, Result};
use arrow::array::{ArrayRef, StringArray};
use arrow::record_batch::RecordBatch;
use arrow::util::pretty::pretty_format_batches;
use clap::ValueEnum;
use splunk_client::table::write_table_rows;
use splunk_client::{ParseOptions, SavedSearch, Table};
use splunk_dataset::DatasetSchema;
use std::io::Write;
use std::path::{Path, PathBuf};
use std::sync::Arc;
use tempfile::NamedTempFile;

/// How tables are printed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// Aligned text table
    Table,
    /// Delimited text with a header row
    Csv,
}

/// Render one table. `header` only affects CSV output.
pub fn render_table(
    table: &Table,
    format: OutputFormat,
    options: &ParseOptions,
    header: bool,
) -> Result<String> {
    match format {
        OutputFormat::Table => Ok(format!(
            "{}\n",
            pretty_format_batches(std::slice::from_ref(table))?
        )),
        OutputFormat::Csv => {
            let bytes = write_table_rows(table, options, header)?;
            String::from_utf8(bytes).context("CSV output was not valid UTF-8")
        }
    }
}

fn string_table(columns: &[(&str, Vec<String>)]) -> Result<Table> {
    let arrays: Vec<(&str, ArrayRef)> = columns
        .iter()
        .map(|(name, values)| (*name, Arc::new(StringArray::from(values.clone())) as ArrayRef))
        .collect();
    Ok(RecordBatch::try_from_iter(arrays)?)
}

/// Render a dataset schema as a `column`/`type` table.
///
/// Table output is followed by the partition summary; CSV output is only the
/// column listing so it stays machine-readable.
pub fn render_schema(
    schema: &DatasetSchema,
    format: OutputFormat,
    options: &ParseOptions,
) -> Result<String> {
    let names = schema
        .column_names()
        .into_iter()
        .map(str::to_string)
        .collect();
    let types = schema
        .column_types()
        .into_iter()
        .map(|t| t.to_string())
        .collect();
    let listing = string_table(&[("column", names), ("type", types)])?;

    let mut out = render_table(&listing, format, options, true)?;
    if format == OutputFormat::Table {
        out.push_str(&format!(
            "partitions: {}\nresult_count: {}\nrow_count_known: {}\n",
            schema.partition_count, schema.result_count, schema.row_count_known
        ));
    }
    Ok(out)
}

/// Render saved searches as a `name`/`search` table.
pub fn render_saved_searches(
    searches: &[SavedSearch],
    format: OutputFormat,
    options: &ParseOptions,
) -> Result<String> {
    let names = searches.iter().map(|s| s.name.clone()).collect();
    let definitions = searches.iter().map(|s| s.search.clone()).collect();
    let table = string_table(&[("name", names), ("search", definitions)])?;
    render_table(&table, format, options, true)
}

/// Where command output goes.
pub enum Sink {
    Stdout,
    /// Streamed into a temp file beside `path`, renamed into place on [`Sink::finish`].
    File { path: PathBuf, temp: NamedTempFile },
}

impl Sink {
    /// Open the sink. For a file, parent directories and the temp file are created now.
    pub fn new(output_file: Option<PathBuf>) -> Result<Self> {
        match output_file {
            Some(path) => {
                let temp = temp_file_beside(&path)?;
                Ok(Self::File { path, temp })
            }
            None => Ok(Self::Stdout),
        }
    }

    pub fn emit(&mut self, content: &str) -> Result<()> {
        match self {
            Self::Stdout => {
                let mut stdout = std::io::stdout().lock();
                stdout.write_all(content.as_bytes())?;
                stdout.flush()?;
            }
            Self::File { temp, .. } => temp
                .write_all(content.as_bytes())
                .context("Failed to write to temp file")?,
        }
        Ok(())
    }

    /// Move a file sink's output into place. A sink dropped without finishing
    /// leaves the target untouched.
    pub fn finish(self) -> Result<()> {
        if let Self::File { path, mut temp } = self {
            temp.flush().context("Failed to flush temp file")?;
            temp.persist(&path)
                .with_context(|| format!("Failed to write file: {}", path.display()))?;
            eprintln!("Results written to {}", path.display());
        }
        Ok(())
    }
}

fn temp_file_beside(path: &Path) -> Result<NamedTempFile> {
    let parent_dir = path
        .parent()
        .filter(|p| !p.as_os_str().is_empty())
        .unwrap_or_else(|| Path::new("."));
    std::fs::create_dir_all(parent_dir)
        .with_context(|| format!("Failed to create directory: {}", parent_dir.display()))?;
    NamedTempFile::new_in(parent_dir)
        .with_context(|| format!("Failed to create temp file in: {}", parent_dir.display()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use arrow::datatypes::{DataType, Field, Schema};

    fn sample() -> Table {
        string_table(&[
            ("host", vec!["web-01".to_string(), "db-01".to_string()]),
            ("status", vec!["200".to_string(), "500".to_string()]),
        ])
        .unwrap()
    }

    #[test]
    fn test_render_csv_with_and_without_header() {
        let options = ParseOptions::default();
        let with = render_table(&sample(), OutputFormat::Csv, &options, true).unwrap();
        assert_eq!(with, "host,status\nweb-01,200\ndb-01,500\n");

        let without = render_table(&sample(), OutputFormat::Csv, &options, false).unwrap();
        assert_eq!(without, "web-01,200\ndb-01,500\n");
    }

    #[test]
    fn test_render_pretty_table() {
        let out = render_table(&sample(), OutputFormat::Table, &ParseOptions::default(), true)
            .unwrap();
        assert!(out.contains("| host   | status |"), "got:\n{out}");
        assert!(out.contains("| db-01  | 500    |"));
    }

    #[test]
    fn test_render_schema_summary() {
        let schema = DatasetSchema {
            schema: Arc::new(Schema::new(vec![
                Field::new("id", DataType::Int64, true),
                Field::new("host", DataType::Utf8, true),
            ])),
            partition_count: 3,
            result_count: 30,
            row_count_known: false,
        };

        let table = render_schema(&schema, OutputFormat::Table, &ParseOptions::default()).unwrap();
        assert!(table.contains("Int64"));
        assert!(table.contains("partitions: 3"));
        assert!(table.contains("row_count_known: false"));

        let csv = render_schema(&schema, OutputFormat::Csv, &ParseOptions::default()).unwrap();
        assert_eq!(csv, "column,type\nid,Int64\nhost,Utf8\n");
    }

    #[test]
    fn test_file_sink_streams_then_persists() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nested/out.csv");

        let mut sink = Sink::new(Some(path.clone())).unwrap();
        sink.emit("a,b\n").unwrap();
        sink.emit("1,x\n").unwrap();
        assert!(!path.exists());

        sink.finish().unwrap();
        assert_eq!(std::fs::read_to_string(&path).unwrap(), "a,b\n1,x\n");
    }

    #[test]
    fn test_unfinished_file_sink_leaves_nothing() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("out.csv");

        let mut sink = Sink::new(Some(path.clone())).unwrap();
        sink.emit("a,b\n").unwrap();
        drop(sink);

        assert!(!path.exists());
        assert_eq!(std::fs::read_dir(dir.path()).unwrap().count(), 0);
    }
}

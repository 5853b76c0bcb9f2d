//! Delimited-text result payloads to Arrow tables and back.
//!
//! Responsibilities:
//! - Infer a column/type signature from a CSV sample.
//! - Parse CSV payloads into a single `RecordBatch`, either inferring the
//!   schema or against a schema fixed earlier.
//! - Write tables back out as CSV.
//!
//! Does NOT handle:
//! - Fetching payloads (see [`crate::endpoints::search::get_results_csv`]).
//!
//! Invariants:
//! - Payloads always start with a header row.
//! - Empty cells are null; `na_representation`, when set, is null too.
//! - Columns with no values in the sample are typed `Utf8`.
//! - Parsing against a schema fails unless the header names and order match it exactly.
//! - Writing a table and parsing it back against the table's own schema gives
//!   the same names, order and values, except that empty strings come back null.

use arrow::compute::concat_batches;
use arrow::csv::reader::Format;
use arrow::csv::{ReaderBuilder, WriterBuilder};
use arrow::datatypes::{DataType, Field, Schema, SchemaRef};
use arrow::error::ArrowError;
use arrow::record_batch::RecordBatch;
use regex::Regex;
use std::collections::BTreeMap;
use std::fmt;
use std::io::Cursor;
use std::str::FromStr;
use std::sync::Arc;
use thiserror::Error;
use tracing::debug;

/// An in-memory table of search results.
pub type Table = RecordBatch;

const BATCH_SIZE: usize = 8192;

/// Errors raised while reading or writing delimited text.
#[derive(Debug, Error)]
pub enum TableError {
    #[error(transparent)]
    Arrow(#[from] ArrowError),

    #[error("header mismatch: expected columns [{expected}], found [{found}]")]
    HeaderMismatch { expected: String, found: String },

    #[error("invalid NA representation: {0}")]
    NaPattern(#[from] regex::Error),
}

/// Column type override accepted in [`ParseOptions::dtype_hints`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ColumnType {
    Boolean,
    Int64,
    Float64,
    Utf8,
}

impl ColumnType {
    pub fn data_type(self) -> DataType {
        match self {
            Self::Boolean => DataType::Boolean,
            Self::Int64 => DataType::Int64,
            Self::Float64 => DataType::Float64,
            Self::Utf8 => DataType::Utf8,
        }
    }
}

impl fmt::Display for ColumnType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Self::Boolean => "bool",
            Self::Int64 => "int64",
            Self::Float64 => "float64",
            Self::Utf8 => "utf8",
        };
        write!(f, "{}", s)
    }
}

impl FromStr for ColumnType {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "bool" | "boolean" => Ok(Self::Boolean),
            "int" | "int64" | "integer" => Ok(Self::Int64),
            "float" | "float64" | "double" => Ok(Self::Float64),
            "str" | "string" | "utf8" => Ok(Self::Utf8),
            other => Err(format!(
                "unknown column type '{other}' (expected bool, int64, float64 or utf8)"
            )),
        }
    }
}

/// How a delimited payload is turned into a table.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParseOptions {
    pub delimiter: u8,
    /// Per-column type overrides. Names not present in the payload are ignored.
    pub dtype_hints: BTreeMap<String, ColumnType>,
    /// Exact cell text treated as missing, in addition to empty cells.
    pub na_representation: Option<String>,
}

impl Default for ParseOptions {
    fn default() -> Self {
        Self {
            delimiter: b',',
            dtype_hints: BTreeMap::new(),
            na_representation: None,
        }
    }
}

impl ParseOptions {
    pub fn with_delimiter(mut self, delimiter: u8) -> Self {
        self.delimiter = delimiter;
        self
    }

    pub fn with_dtype_hint(mut self, column: impl Into<String>, column_type: ColumnType) -> Self {
        self.dtype_hints.insert(column.into(), column_type);
        self
    }

    pub fn with_na_representation(mut self, na: impl Into<String>) -> Self {
        self.na_representation = Some(na.into());
        self
    }

    fn csv_format(&self) -> Result<Format, TableError> {
        let mut format = Format::default()
            .with_header(true)
            .with_delimiter(self.delimiter);
        if let Some(na) = self.na_representation.as_deref() {
            let pattern = format!("^(?:{})?$", regex::escape(na));
            format = format.with_null_regex(Regex::new(&pattern)?);
        }
        Ok(format)
    }
}

fn is_blank(payload: &[u8]) -> bool {
    payload.iter().all(|b| b.is_ascii_whitespace())
}

/// Infer the column/type signature of a payload, applying `dtype_hints`.
pub fn infer_schema(payload: &[u8], options: &ParseOptions) -> Result<SchemaRef, TableError> {
    if is_blank(payload) {
        return Ok(Arc::new(Schema::empty()));
    }
    let (inferred, records) = options.csv_format()?.infer_schema(Cursor::new(payload), None)?;
    debug!(
        columns = inferred.fields().len(),
        records, "Inferred schema from sample"
    );
    Ok(Arc::new(resolve_types(&inferred, options)))
}

fn resolve_types(inferred: &Schema, options: &ParseOptions) -> Schema {
    for column in options.dtype_hints.keys() {
        if inferred.field_with_name(column).is_err() {
            debug!("Ignoring type hint for unknown column {}", column);
        }
    }

    let fields: Vec<Field> = inferred
        .fields()
        .iter()
        .map(|field| {
            let data_type = match options.dtype_hints.get(field.name()) {
                Some(hint) => hint.data_type(),
                None if field.data_type() == &DataType::Null => DataType::Utf8,
                None => field.data_type().clone(),
            };
            Field::new(field.name(), data_type, true)
        })
        .collect();
    Schema::new(fields)
}

/// Parse a payload, inferring its schema from the payload itself.
pub fn parse_table(payload: &[u8], options: &ParseOptions) -> Result<Table, TableError> {
    let schema = infer_schema(payload, options)?;
    if is_blank(payload) {
        return Ok(RecordBatch::new_empty(schema));
    }
    read_batches(payload, &schema, options.csv_format()?)
}

/// Parse a payload against a schema fixed earlier (typically from a sample).
///
/// A blank payload is an empty table. The header must list exactly the
/// schema's columns in the same order.
pub fn parse_table_with_schema(
    payload: &[u8],
    schema: &SchemaRef,
    options: &ParseOptions,
) -> Result<Table, TableError> {
    if is_blank(payload) {
        return Ok(RecordBatch::new_empty(schema.clone()));
    }

    let (header, _) = options
        .csv_format()?
        .infer_schema(Cursor::new(payload), Some(0))?;
    let found: Vec<&str> = header.fields().iter().map(|f| f.name().as_str()).collect();
    let expected: Vec<&str> = schema.fields().iter().map(|f| f.name().as_str()).collect();
    if found != expected {
        return Err(TableError::HeaderMismatch {
            expected: expected.join(", "),
            found: found.join(", "),
        });
    }

    read_batches(payload, schema, options.csv_format()?)
}

fn read_batches(payload: &[u8], schema: &SchemaRef, format: Format) -> Result<Table, TableError> {
    let reader = ReaderBuilder::new(schema.clone())
        .with_format(format)
        .with_batch_size(BATCH_SIZE)
        .build(Cursor::new(payload))?;
    let batches = reader.collect::<Result<Vec<_>, _>>()?;
    Ok(concat_batches(schema, &batches)?)
}

/// Write a table as delimited text with a header row.
///
/// Nulls are written as `na_representation` when set, otherwise as empty cells.
/// Read the output back with [`parse_table_with_schema`] and the table's schema;
/// [`parse_table`] re-infers types, so a string column like `"001"` would
/// come back as integers.
pub fn write_table(table: &Table, options: &ParseOptions) -> Result<Vec<u8>, TableError> {
    write_table_rows(table, options, true)
}

/// Write a table as delimited text, with or without the header row.
///
/// Leaving the header out lets consecutive partitions be appended to one stream.
pub fn write_table_rows(
    table: &Table,
    options: &ParseOptions,
    header: bool,
) -> Result<Vec<u8>, TableError> {
    let mut builder = WriterBuilder::new()
        .with_header(header)
        .with_delimiter(options.delimiter);
    if let Some(na) = &options.na_representation {
        builder = builder.with_null(na.clone());
    }
    let mut writer = builder.build(Vec::new());
    writer.write(table)?;
    Ok(writer.into_inner())
}

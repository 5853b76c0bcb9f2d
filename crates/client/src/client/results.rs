//! Result retrieval and parsing.

use arrow::datatypes::SchemaRef;
use std::time::Duration;

use crate::client::SplunkClient;
use crate::endpoints;
use crate::error::{ClientError, Result};
use crate::models::JobId;
use crate::table::{self, ParseOptions, Table};

impl SplunkClient {
    /// Fetch rows `[offset, offset + count)` of a finished job as CSV bytes.
    ///
    /// `count = 0` fetches every row from `offset` onward.
    pub async fn fetch_raw(&self, sid: &JobId, offset: usize, count: usize) -> Result<Vec<u8>> {
        endpoints::get_results_csv(&self.http, &self.base_url, &self.auth, sid, offset, count)
            .await
    }

    /// Fetch a row range and parse it, inferring the schema from the rows.
    pub async fn fetch_table(
        &self,
        sid: &JobId,
        offset: usize,
        count: usize,
        options: &ParseOptions,
    ) -> Result<Table> {
        let payload = self.fetch_raw(sid, offset, count).await?;
        table::parse_table(&payload, options)
            .map_err(|e| ClientError::parse_in(sid.as_str(), offset, count, e.to_string()))
    }

    /// Fetch a row range and parse it against an established schema.
    pub async fn fetch_table_with_schema(
        &self,
        sid: &JobId,
        offset: usize,
        count: usize,
        schema: &SchemaRef,
        options: &ParseOptions,
    ) -> Result<Table> {
        let payload = self.fetch_raw(sid, offset, count).await?;
        table::parse_table_with_schema(&payload, schema, options)
            .map_err(|e| ClientError::parse_in(sid.as_str(), offset, count, e.to_string()))
    }

    /// Run `query` to completion and return every result row in one table.
    pub async fn read_table(
        &self,
        query: &str,
        options: &ParseOptions,
        poll_interval: Duration,
        timeout: Duration,
    ) -> Result<Table> {
        let sid = self.submit(query).await?;
        self.wait_until_done(&sid, poll_interval, timeout).await?;
        self.fetch_table(&sid, 0, 0, options).await
    }
}

//! Saved search listing.

use reqwest::Client;
use tracing::debug;

use crate::auth::AuthHeader;
use crate::endpoints::{RequestFailure, send_request};
use crate::error::{ClientError, Result};
use crate::models::{SavedSearch, SavedSearchContent, SplunkResponse};

/// List every saved search visible to the authenticated user.
///
/// `count=0` disables Splunk's default page size of 30 entries.
pub async fn list_saved_searches(
    client: &Client,
    base_url: &str,
    auth: &AuthHeader,
) -> Result<Vec<SavedSearch>> {
    debug!("Listing saved searches");

    let url = format!("{}/services/saved/searches", base_url);
    let builder = client
        .get(&url)
        .header("Authorization", auth.value())
        .query(&[("output_mode", "json"), ("count", "0")]);
    let response = send_request(builder, "/services/saved/searches")
        .await
        .map_err(|f| match f {
            RequestFailure::Status {
                status,
                url,
                message,
                request_id,
            } => ClientError::Api {
                status: Some(status),
                url,
                message,
                request_id,
            },
            transport => ClientError::Api {
                status: None,
                url: url.clone(),
                message: transport.message(),
                request_id: None,
            },
        })?;

    let resp: SplunkResponse<SavedSearchContent> =
        response.json().await.map_err(|e| ClientError::Api {
            status: None,
            url: url.clone(),
            message: format!("Failed to parse saved searches response: {e}"),
            request_id: None,
        })?;

    Ok(resp
        .entry
        .into_iter()
        .map(|e| SavedSearch {
            name: e.name,
            search: e.content.search,
        })
        .collect())
}

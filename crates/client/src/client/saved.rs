//! Saved search listing.

use crate::client::SplunkClient;
use crate::endpoints;
use crate::error::Result;
use crate::models::SavedSearch;

impl SplunkClient {
    /// List saved searches as `(name, search)` pairs.
    pub async fn list_saved_searches(&self) -> Result<Vec<SavedSearch>> {
        endpoints::list_saved_searches(&self.http, &self.base_url, &self.auth).await
    }
}

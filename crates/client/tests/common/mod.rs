//! Common test utilities for integration tests.
//!
//! This module provides shared helper functions and re-exports commonly used
//! types for testing the Splunk client against a wiremock server.
//!
//! # Invariants
//! - Fixtures are loaded from the `fixtures/` directory relative to the crate root
//!
//! # What this does NOT handle
//! - Mock setup for individual endpoints (use wiremock directly in tests)

use secrecy::SecretString;

#[allow(unused_imports)]
pub use splunk_client::testing::{ManualClock, load_fixture, load_text_fixture};

#[allow(unused_imports)]
pub use splunk_client::{ClientError, Credentials, JobId, ParseOptions, SplunkClient};
#[allow(unused_imports)]
pub use wiremock::{Mock, MockServer, ResponseTemplate};

/// Session key used by [`key_client`].
#[allow(dead_code)]
pub const TEST_KEY: &str = "test-session-key";

/// Client for `server` authenticated with [`TEST_KEY`]. No login request is made.
#[allow(dead_code)]
pub async fn key_client(server: &MockServer) -> SplunkClient {
    SplunkClient::builder()
        .base_url(server.uri())
        .credentials(Credentials::SessionKey(SecretString::new(
            TEST_KEY.to_string().into(),
        )))
        .connect()
        .await
        .expect("session key connect never touches the network")
}

/// A CSV response body as Splunk sends it.
#[allow(dead_code)]
pub fn csv_response(fixture: &str) -> ResponseTemplate {
    ResponseTemplate::new(200)
        .insert_header("content-type", "text/csv; charset=UTF-8")
        .set_body_string(load_text_fixture(fixture))
}

/// A Splunk-style error body with a single message.
#[allow(dead_code)]
pub fn error_response(status: u16, text: &str) -> ResponseTemplate {
    ResponseTemplate::new(status).set_body_json(serde_json::json!({
        "messages": [{"type": "ERROR", "text": text}]
    }))
}

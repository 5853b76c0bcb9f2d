//! Shared test utilities for splunk-dataset integration tests.
//!
//! Responsibilities:
//! - Provide a hermetic CLI command factory that prevents dotenv loading.
//! - Mount the scripted `j1` search job on a wiremock server.
//!
//! Invariants / Assumptions:
//! - `SPLUNK_SESSION_KEY` is set to "test-key" unless overridden, so no login happens.
//! - Polling is shortened to 10ms so job waits finish quickly.

use assert_cmd::Command;
use wiremock::matchers::{method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

#[allow(unused_imports)]
pub use splunk_client::testing::{load_fixture, load_text_fixture};

/// Returns a hermetic `splunk-dataset` command.
pub fn splunk_cmd() -> Command {
    let mut cmd = assert_cmd::cargo::cargo_bin_cmd!("splunk-dataset");

    cmd.env("DOTENV_DISABLED", "1")
        .env("SPLUNK_SESSION_KEY", "test-key")
        .env("SPLUNK_POLL_INTERVAL_MS", "10");

    cmd.env_remove("SPLUNK_BASE_URL")
        .env_remove("SPLUNK_USERNAME")
        .env_remove("SPLUNK_PASSWORD")
        .env_remove("SPLUNK_BASIC_AUTH")
        .env_remove("SPLUNK_CHUNKSIZE")
        .env_remove("SPLUNK_MAX_WAIT")
        .env_remove("SPLUNK_CONFIG_PATH")
        .env_remove("RUST_LOG");

    cmd
}

/// Returns a hermetic command pointed at `server` with a chunksize of 10.
#[allow(dead_code)]
pub fn splunk_cmd_for(server: &MockServer) -> Command {
    let mut cmd = splunk_cmd();
    cmd.env("SPLUNK_BASE_URL", server.uri())
        .env("SPLUNK_CHUNKSIZE", "10");
    cmd
}

/// Mount submission, one running status and a done status of 30 rows for job `j1`.
#[allow(dead_code)]
pub async fn mount_j1_job(server: &MockServer) {
    Mock::given(method("POST"))
        .and(path("/services/search/jobs"))
        .respond_with(
            ResponseTemplate::new(201).set_body_json(load_fixture("search/create_job.json")),
        )
        .mount(server)
        .await;

    Mock::given(method("GET"))
        .and(path("/services/search/jobs/j1"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_json(load_fixture("search/job_status_running.json")),
        )
        .up_to_n_times(1)
        .mount(server)
        .await;

    Mock::given(method("GET"))
        .and(path("/services/search/jobs/j1"))
        .respond_with(
            ResponseTemplate::new(200).set_body_json(load_fixture("search/job_status_done.json")),
        )
        .mount(server)
        .await;
}

/// Mount a CSV result range of `j1`.
#[allow(dead_code)]
pub async fn mount_range(server: &MockServer, offset: usize, count: usize, fixture: &str) {
    Mock::given(method("GET"))
        .and(path("/services/search/jobs/j1/results/"))
        .and(query_param("offset", offset.to_string()))
        .and(query_param("count", count.to_string()))
        .respond_with(ResponseTemplate::new(200).set_body_string(load_text_fixture(fixture)))
        .mount(server)
        .await;
}

/// Mount every range of `j1`: the 20-row sample and three 10-row partitions.
#[allow(dead_code)]
pub async fn mount_j1_results(server: &MockServer) {
    mount_range(server, 0, 20, "search/results_sample.csv").await;
    mount_range(server, 0, 10, "search/results_first.csv").await;
    mount_range(server, 10, 10, "search/results_page.csv").await;
    mount_range(server, 20, 10, "search/results_last.csv").await;
}

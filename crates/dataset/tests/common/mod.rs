//! Shared helpers for dataset integration tests.
//!
//! Mounts the job lifecycle of the scripted `j1` search on a wiremock server:
//! submission, two running status checks, a done status with 30 results, and
//! CSV result ranges served from the client crate's fixtures.

#[allow(unused_imports)]
pub use splunk_client::testing::{ManualClock, load_fixture, load_text_fixture};
#[allow(unused_imports)]
pub use wiremock::{Mock, MockServer, ResponseTemplate};

use wiremock::matchers::{method, path, query_param};

/// Mount submission and status mocks for job `j1`.
#[allow(dead_code)]
pub async fn mount_j1_job(server: &MockServer) {
    Mock::given(method("POST"))
        .and(path("/services/search/jobs"))
        .respond_with(
            ResponseTemplate::new(201).set_body_json(load_fixture("search/create_job.json")),
        )
        .expect(1)
        .mount(server)
        .await;

    Mock::given(method("GET"))
        .and(path("/services/search/jobs/j1"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_json(load_fixture("search/job_status_running.json")),
        )
        .up_to_n_times(2)
        .expect(2)
        .mount(server)
        .await;

    Mock::given(method("GET"))
        .and(path("/services/search/jobs/j1"))
        .respond_with(
            ResponseTemplate::new(200).set_body_json(load_fixture("search/job_status_done.json")),
        )
        .expect(1)
        .mount(server)
        .await;
}

/// Mock serving one CSV row range of `j1`.
#[allow(dead_code)]
pub fn results_range(offset: usize, count: usize, fixture: &str) -> Mock {
    Mock::given(method("GET"))
        .and(path("/services/search/jobs/j1/results/"))
        .and(query_param("output_mode", "csv"))
        .and(query_param("offset", offset.to_string()))
        .and(query_param("count", count.to_string()))
        .respond_with(
            ResponseTemplate::new(200)
                .insert_header("content-type", "text/csv")
                .set_body_string(load_text_fixture(fixture)),
        )
}

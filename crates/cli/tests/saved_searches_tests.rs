//! Integration tests for the `saved-searches` command and authentication exit codes.

mod common;

use common::*;
use predicates::prelude::*;
use wiremock::matchers::{header, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

#[tokio::test]
async fn test_saved_searches_table() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/services/saved/searches"))
        .and(header("Authorization", "Splunk test-key"))
        .respond_with(ResponseTemplate::new(200).set_body_json(load_fixture("saved/list.json")))
        .mount(&server)
        .await;

    splunk_cmd_for(&server)
        .arg("saved-searches")
        .assert()
        .success()
        .stdout(predicate::str::contains("Errors in the last hour"))
        .stdout(predicate::str::contains("| rest /services/licenser/usage"));
}

#[tokio::test]
async fn test_saved_searches_csv_with_login() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/services/auth/login"))
        .respond_with(ResponseTemplate::new(200).set_body_json(load_fixture("auth/login.json")))
        .expect(1)
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path("/services/saved/searches"))
        .and(header(
            "Authorization",
            "Splunk 192fd3e46a31246da7ea7f109e7f95fd",
        ))
        .respond_with(ResponseTemplate::new(200).set_body_json(load_fixture("saved/list.json")))
        .mount(&server)
        .await;

    splunk_cmd_for(&server)
        .env_remove("SPLUNK_SESSION_KEY")
        .env("SPLUNK_USERNAME", "admin")
        .env("SPLUNK_PASSWORD", "changeme")
        .args(["-o", "csv", "saved-searches"])
        .assert()
        .success()
        .stdout(predicate::str::starts_with("name,search\n"))
        .stdout(predicate::str::contains("License usage,| rest /services/licenser/usage"));
}

#[tokio::test]
async fn test_rejected_login_exits_3() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/services/auth/login"))
        .respond_with(ResponseTemplate::new(401).set_body_json(serde_json::json!({
            "messages": [{"type": "WARN", "text": "Login failed"}]
        })))
        .mount(&server)
        .await;

    splunk_cmd_for(&server)
        .env_remove("SPLUNK_SESSION_KEY")
        .env("SPLUNK_USERNAME", "admin")
        .env("SPLUNK_PASSWORD", "wrong")
        .arg("saved-searches")
        .assert()
        .code(3)
        .stderr(predicate::str::contains("Login failed"))
        .stderr(predicate::str::contains("wrong").not());
}

#[tokio::test]
async fn test_forbidden_listing_exits_3() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/services/saved/searches"))
        .respond_with(ResponseTemplate::new(403))
        .mount(&server)
        .await;

    splunk_cmd_for(&server)
        .arg("saved-searches")
        .assert()
        .code(3);
}

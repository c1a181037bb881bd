use assert_cmd::cargo::cargo_bin_cmd;
use predicates::prelude::*;
use wiremock::matchers::{header, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

// ============================================================================
// Help and Argument Tests
// ============================================================================

#[test]
fn test_help_flag() {
    cargo_bin_cmd!("newrelic")
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("Query the New Relic REST API"))
        .stdout(predicate::str::contains("EXIT CODES"));
}

#[test]
fn test_version_flag() {
    cargo_bin_cmd!("newrelic")
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains("newrelic"));
}

#[test]
fn test_missing_api_key_fails() {
    cargo_bin_cmd!("newrelic")
        .env_remove("NEWRELIC_API_KEY")
        .arg("v2/applications.json")
        .assert()
        .failure()
        .stderr(predicate::str::contains("--api-key"));
}

// ============================================================================
// Configuration Errors
// ============================================================================

#[test]
fn test_malformed_api_url_fails_fast() {
    cargo_bin_cmd!("newrelic")
        .args(["--api-url", "not a url", "--api-key", "k", "v2/applications.json"])
        .assert()
        .code(2)
        .stderr(predicate::str::contains("Failed to parse New Relic API URL"));
}

#[test]
fn test_invalid_method_is_request_error() {
    cargo_bin_cmd!("newrelic")
        .args(["--api-key", "k", "-X", "GE T", "v2/applications.json"])
        .assert()
        .code(3)
        .stderr(predicate::str::contains("Invalid HTTP method"));
}

// ============================================================================
// End-to-End Requests
// ============================================================================

#[tokio::test(flavor = "multi_thread")]
async fn test_prints_decoded_json() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/v2/applications.json"))
        .and(header("x-api-key", "cli-key"))
        .and(header("user-agent", "newrelic_exporter;rust"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
            "applications": [{ "id": 1, "name": "checkout" }]
        })))
        .expect(1)
        .mount(&mock_server)
        .await;

    let api_url = format!("{}/", mock_server.uri());
    tokio::task::spawn_blocking(move || {
        cargo_bin_cmd!("newrelic")
            .env("NEWRELIC_API_URL", &api_url)
            .env("NEWRELIC_API_KEY", "cli-key")
            .arg("v2/applications.json")
            .assert()
            .success()
            .stdout(predicate::str::contains("\"checkout\""))
            .stderr(predicate::str::contains("HTTP 200"));
    })
    .await
    .unwrap();
}

#[tokio::test(flavor = "multi_thread")]
async fn test_non_json_body_exits_with_decode_code() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/v2/applications.json"))
        .respond_with(ResponseTemplate::new(503).set_body_string("Service Unavailable"))
        .mount(&mock_server)
        .await;

    let api_url = format!("{}/", mock_server.uri());
    tokio::task::spawn_blocking(move || {
        cargo_bin_cmd!("newrelic")
            .args(["--api-url", api_url.as_str(), "--api-key", "k", "v2/applications.json"])
            .assert()
            .code(1)
            .stderr(predicate::str::contains("HTTP 503"))
            .stderr(predicate::str::contains("JSON decode error"));
    })
    .await
    .unwrap();
}

#[test]
fn test_unreachable_server_exits_with_transport_code() {
    cargo_bin_cmd!("newrelic")
        .args([
            "--api-url",
            "http://127.0.0.1:1/",
            "--api-key",
            "k",
            "v2/applications.json",
        ])
        .assert()
        .code(3)
        .stderr(predicate::str::contains("HTTP request failed"));
}

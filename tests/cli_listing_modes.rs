//! CLI integration tests for the non-interactive listing modes.
//!
//! These tests spawn the Punnet binary against a Wiremock backend and check
//! what reaches stdout, stderr, and the exit status.

use std::process::{Command, Output};

use rstest::rstest;
use serde_json::json;
use tempfile::TempDir;
use tokio::runtime::Runtime;
use wiremock::matchers::{method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

/// Returns the path to the built binary.
fn binary_path() -> std::path::PathBuf {
    // cargo test builds binaries in target/debug
    let mut path = std::env::current_exe()
        .unwrap_or_else(|error| panic!("failed to get current exe path: {error}"));
    path.pop(); // remove test binary name
    path.pop(); // remove deps
    path.push("punnet");
    path
}

#[expect(
    clippy::expect_used,
    reason = "integration test setup; allow-expect-in-tests does not cover integration tests"
)]
fn run_punnet(args: &[&str]) -> Output {
    let working_dir = TempDir::new().expect("should create temp directory");
    Command::new(binary_path())
        .args(args)
        .current_dir(working_dir.path())
        .env_remove("PUNNET_BASE_URL")
        .env_remove("PUNNET_REQUEST_TIMEOUT_SECONDS")
        .env_remove("PUNNET_HEADLINE")
        .env_remove("PUNNET_LIST_HEADLINES")
        .env_remove("PUNNET_EVALUATOR")
        .env_remove("PUNNET_RESULTS_DIR")
        .env_remove("PUNNET_LOG_FILE")
        .env("RUST_LOG", "off")
        .output()
        .unwrap_or_else(|error| panic!("failed to execute binary: {error}"))
}

/// Starts a backend serving two headlines and two puns for headline 7.
#[expect(
    clippy::expect_used,
    reason = "integration test setup; allow-expect-in-tests does not cover integration tests"
)]
fn start_backend() -> (Runtime, MockServer) {
    let runtime = Runtime::new().expect("should create runtime");
    let server = runtime.block_on(async {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/get_headlines"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!([
                { "headline_id": 7, "headline": "News A" },
                { "headline_id": "1", "headline": "X" }
            ])))
            .mount(&server)
            .await;
        Mock::given(method("GET"))
            .and(path("/get_generated"))
            .and(query_param("id", "7"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!([
                { "generated": "pun1" },
                { "generated": "pun2" }
            ])))
            .mount(&server)
            .await;
        Mock::given(method("GET"))
            .and(path("/get_generated"))
            .and(query_param("id", "404"))
            .respond_with(
                ResponseTemplate::new(404)
                    .set_body_json(json!({ "status": "failure", "message": "unknown headline" })),
            )
            .mount(&server)
            .await;
        server
    });
    (runtime, server)
}

#[rstest]
fn list_headlines_prints_one_tab_separated_row_per_headline() {
    let (_runtime, server) = start_backend();

    let output = run_punnet(&["--base-url", &server.uri(), "--list-headlines"]);

    assert!(output.status.success(), "stderr: {}", String::from_utf8_lossy(&output.stderr));
    assert_eq!(String::from_utf8_lossy(&output.stdout), "7\tNews A\n1\tX\n");
}

#[rstest]
#[case::long_flag("--headline")]
#[case::short_flag("-H")]
fn headline_flag_prints_puns_in_backend_order(#[case] flag: &str) {
    let (_runtime, server) = start_backend();

    let output = run_punnet(&["--base-url", &server.uri(), flag, "7"]);

    assert!(output.status.success(), "stderr: {}", String::from_utf8_lossy(&output.stderr));
    assert_eq!(String::from_utf8_lossy(&output.stdout), "pun1\npun2\n");
}

#[rstest]
fn backend_failure_exits_with_error() {
    let (_runtime, server) = start_backend();

    let output = run_punnet(&["--base-url", &server.uri(), "--headline", "404"]);

    assert!(!output.status.success(), "unknown headline should fail");
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("404"), "stderr should name the status: {stderr}");
    assert!(output.stdout.is_empty(), "nothing should reach stdout");
}

#[rstest]
fn invalid_base_url_is_rejected_before_any_request() {
    let output = run_punnet(&["--base-url", "not a url", "--list-headlines"]);

    assert!(!output.status.success(), "invalid base URL should fail");
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("base URL"), "stderr should explain the problem: {stderr}");
}

//! Wiremock stand-in for the pun generation backend.
//!
//! BDD steps are synchronous, so [`BackendHarness`] pairs the mock server
//! with the current-thread runtime it was started on and exposes blocking
//! helpers for arranging responses and driving the app.

use std::future::Future;
use std::io;
use std::rc::Rc;
use std::time::Duration;

use rstest_bdd::Slot;
use serde_json::{Value, json};
use tokio::runtime::{Builder, Runtime};
use wiremock::matchers::{method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

/// Path of the headline listing endpoint.
pub const HEADLINES_PATH: &str = "/get_headlines";
/// Path of the generated puns endpoint.
pub const GENERATED_PATH: &str = "/get_generated";

/// Mock backend plus the runtime its futures are driven on.
#[derive(Clone)]
pub struct BackendHarness {
    runtime: Rc<Runtime>,
    server: Rc<MockServer>,
}

impl BackendHarness {
    /// Starts a fresh mock backend on a current-thread runtime.
    ///
    /// # Errors
    ///
    /// Returns an error if the runtime cannot be built.
    pub fn start() -> io::Result<Self> {
        let runtime = Builder::new_current_thread().enable_all().build()?;
        let server = runtime.block_on(MockServer::start());
        Ok(Self {
            runtime: Rc::new(runtime),
            server: Rc::new(server),
        })
    }

    /// Base URL the client under test should talk to.
    pub fn uri(&self) -> String {
        self.server.uri()
    }

    /// Drives `future` to completion on the harness runtime.
    pub fn block_on<F: Future>(&self, future: F) -> F::Output {
        self.runtime.block_on(future)
    }

    /// Serves `headlines` from the headline listing endpoint.
    pub fn serve_headlines(&self, headlines: &[(u64, String)]) {
        let body: Vec<Value> = headlines
            .iter()
            .map(|(id, title)| json!({ "headline_id": id, "headline": title }))
            .collect();
        self.mount(
            Mock::given(method("GET"))
                .and(path(HEADLINES_PATH))
                .respond_with(ResponseTemplate::new(200).set_body_json(body)),
        );
    }

    /// Makes the headline listing endpoint fail with `status`.
    pub fn fail_headlines(&self, status: u16) {
        self.mount(
            Mock::given(method("GET")).and(path(HEADLINES_PATH)).respond_with(
                ResponseTemplate::new(status)
                    .set_body_json(json!({ "status": "failure", "message": "backend unavailable" })),
            ),
        );
    }

    /// Serves `puns` for headline `id`, optionally after `delay`.
    pub fn serve_puns(&self, id: u64, puns: &[&str], delay: Option<Duration>) {
        let body: Vec<Value> = puns.iter().map(|pun| json!({ "generated": pun })).collect();
        let mut response = ResponseTemplate::new(200).set_body_json(body);
        if let Some(wait) = delay {
            response = response.set_delay(wait);
        }
        self.mount(
            Mock::given(method("GET"))
                .and(path(GENERATED_PATH))
                .and(query_param("id", id.to_string()))
                .respond_with(response),
        );
    }

    /// Number of pun requests the backend has received.
    pub fn pun_requests(&self) -> usize {
        self.block_on(self.server.received_requests())
            .unwrap_or_default()
            .iter()
            .filter(|request| request.url.path() == GENERATED_PATH)
            .count()
    }

    fn mount(&self, mock: Mock) {
        self.block_on(mock.mount(&self.server));
    }
}

/// Returns the scenario's backend, starting one on first use.
///
/// # Errors
///
/// Returns an error if the backend has to be started and that fails.
pub fn ensure_backend(slot: &Slot<BackendHarness>) -> io::Result<BackendHarness> {
    if let Some(harness) = slot.get() {
        return Ok(harness);
    }
    let harness = BackendHarness::start()?;
    slot.set(harness.clone());
    Ok(harness)
}

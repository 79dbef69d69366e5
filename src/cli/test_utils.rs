//! Shared test utilities for CLI tests.

use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use punnet::{FetchError, Headline, HeadlineGateway, HeadlineId, Pun};

/// A gateway returning preconfigured responses and recording pun requests.
#[derive(Clone, Default)]
pub struct ScriptedGateway {
    /// Response for the headline request (consumed on first call).
    pub headlines: Arc<Mutex<Option<Result<Vec<Headline>, FetchError>>>>,
    /// Response for the pun request (consumed on first call).
    pub puns: Arc<Mutex<Option<Result<Vec<Pun>, FetchError>>>>,
    /// Identifiers passed to `generated_puns`, in call order.
    pub requested: Arc<Mutex<Vec<HeadlineId>>>,
}

impl ScriptedGateway {
    /// Gateway answering the headline request with `response`.
    pub fn with_headlines(response: Result<Vec<Headline>, FetchError>) -> Self {
        Self {
            headlines: Arc::new(Mutex::new(Some(response))),
            ..Self::default()
        }
    }

    /// Gateway answering the pun request with `response`.
    pub fn with_puns(response: Result<Vec<Pun>, FetchError>) -> Self {
        Self {
            puns: Arc::new(Mutex::new(Some(response))),
            ..Self::default()
        }
    }
}

#[async_trait]
impl HeadlineGateway for ScriptedGateway {
    async fn headlines(&self) -> Result<Vec<Headline>, FetchError> {
        self.headlines
            .lock()
            .expect("headlines mutex should be available")
            .take()
            .expect("headline response should only be consumed once")
    }

    async fn generated_puns(&self, id: &HeadlineId) -> Result<Vec<Pun>, FetchError> {
        self.requested
            .lock()
            .expect("requested mutex should be available")
            .push(id.clone());

        self.puns
            .lock()
            .expect("puns mutex should be available")
            .take()
            .expect("pun response should only be consumed once")
    }
}

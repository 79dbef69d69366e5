//! Gateways for loading headlines and generated puns.
//!
//! The trait-based design lets the TUI and CLI run against a mocked backend
//! in tests while [`HttpHeadlineGateway`] performs real HTTP requests.

mod client;
mod error_mapping;
mod http;

pub use http::HttpHeadlineGateway;

use async_trait::async_trait;

use crate::backend::error::FetchError;
use crate::backend::models::{Headline, HeadlineId, Pun};

/// Gateway that can read headlines and their puns from the backend.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait HeadlineGateway: Send + Sync {
    /// Fetch every headline, in backend order.
    async fn headlines(&self) -> Result<Vec<Headline>, FetchError>;

    /// Fetch the generated puns for one headline, in backend order.
    async fn generated_puns(&self, id: &HeadlineId) -> Result<Vec<Pun>, FetchError>;
}

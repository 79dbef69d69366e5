//! Read-only access to the pun generation backend.
//!
//! The backend exposes two endpoints: `/get_headlines` lists every headline
//! and `/get_generated?id=...` lists the puns generated for one headline.
//! This module validates the configured base URL, performs the requests, and
//! maps every failure (transport, status, timeout, undecodable body) into
//! [`FetchError`] so callers can fall back without panicking.

pub mod base_url;
pub mod error;
pub mod gateway;
pub mod models;

pub use base_url::BackendBaseUrl;
pub use error::FetchError;
pub use gateway::{HeadlineGateway, HttpHeadlineGateway};
pub use models::{Headline, HeadlineId, Pun};

#[cfg(test)]
pub use gateway::MockHeadlineGateway;

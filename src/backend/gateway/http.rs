//! Gateway for reading the backend over HTTP.

use std::time::Duration;

use async_trait::async_trait;
use reqwest::Client;
use serde::de::DeserializeOwned;
use url::Url;

use crate::backend::base_url::BackendBaseUrl;
use crate::backend::error::FetchError;
use crate::backend::models::{ApiHeadline, ApiPun, Headline, HeadlineId, Pun};

use super::HeadlineGateway;
use super::client::build_http_client;
use super::error_mapping::{map_decode_error, map_status_error, map_transport_error};

const HEADLINES_OPERATION: &str = "headline listing";
const GENERATED_OPERATION: &str = "generated puns";

/// Gateway for loading headlines and puns through reqwest.
#[derive(Debug, Clone)]
pub struct HttpHeadlineGateway {
    client: Client,
    base_url: BackendBaseUrl,
    timeout: Duration,
}

impl HttpHeadlineGateway {
    /// Creates a gateway for the given backend with a per-request timeout.
    ///
    /// # Errors
    ///
    /// Returns [`FetchError::Configuration`] if the HTTP client cannot be
    /// built or the timeout is zero.
    pub fn new(base_url: BackendBaseUrl, timeout: Duration) -> Result<Self, FetchError> {
        let client = build_http_client(timeout)?;
        Ok(Self {
            client,
            base_url,
            timeout,
        })
    }

    /// Returns the backend base URL this gateway talks to.
    #[must_use]
    pub const fn base_url(&self) -> &BackendBaseUrl {
        &self.base_url
    }

    /// Issues a GET and decodes the body as a JSON array of `T`.
    async fn get_array<T: DeserializeOwned>(
        &self,
        operation: &str,
        url: Url,
    ) -> Result<Vec<T>, FetchError> {
        tracing::debug!(%url, "{operation} request");

        let response = self
            .client
            .get(url)
            .send()
            .await
            .map_err(|error| map_transport_error(operation, &error, self.timeout))?;

        let status = response.status();
        let body = response
            .text()
            .await
            .map_err(|error| map_transport_error(operation, &error, self.timeout))?;

        if !status.is_success() {
            return Err(map_status_error(operation, status, &body));
        }

        serde_json::from_str::<Vec<T>>(&body).map_err(|error| map_decode_error(operation, &error))
    }
}

#[async_trait]
impl HeadlineGateway for HttpHeadlineGateway {
    async fn headlines(&self) -> Result<Vec<Headline>, FetchError> {
        let url = self.base_url.headlines_url()?;
        let headlines = self
            .get_array::<ApiHeadline>(HEADLINES_OPERATION, url)
            .await
            .inspect_err(|error| tracing::warn!("{HEADLINES_OPERATION} failed: {error}"))?;

        tracing::debug!(count = headlines.len(), "headlines loaded");
        Ok(headlines.into_iter().map(Into::into).collect())
    }

    async fn generated_puns(&self, id: &HeadlineId) -> Result<Vec<Pun>, FetchError> {
        let url = self.base_url.generated_url(id)?;
        let puns = self
            .get_array::<ApiPun>(GENERATED_OPERATION, url)
            .await
            .inspect_err(|error| {
                tracing::warn!(headline_id = %id, "{GENERATED_OPERATION} failed: {error}");
            })?;

        tracing::debug!(headline_id = %id, count = puns.len(), "puns loaded");
        Ok(puns.into_iter().map(Into::into).collect())
    }
}

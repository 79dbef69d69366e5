//! Backend base URL parsing and endpoint construction.

use url::Url;

use super::error::FetchError;
use super::models::HeadlineId;

const HEADLINES_PATH: &str = "get_headlines";
const GENERATED_PATH: &str = "get_generated";

/// Validated backend base URL shared by every request.
///
/// The base may carry a path prefix (for example when the backend sits behind
/// a reverse proxy at `/puns/`); endpoint paths are resolved relative to it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BackendBaseUrl(Url);

impl BackendBaseUrl {
    /// Parses and validates a base URL.
    ///
    /// # Errors
    ///
    /// Returns [`FetchError::InvalidBaseUrl`] when the value is not an
    /// absolute `http` or `https` URL with a host, or when it carries a query
    /// string or fragment.
    pub fn parse(input: &str) -> Result<Self, FetchError> {
        let mut parsed = Url::parse(input.trim())
            .map_err(|error| FetchError::InvalidBaseUrl(format!("{input}: {error}")))?;

        if !matches!(parsed.scheme(), "http" | "https") {
            return Err(FetchError::InvalidBaseUrl(format!(
                "{input}: scheme must be http or https"
            )));
        }

        if parsed.host_str().is_none() {
            return Err(FetchError::InvalidBaseUrl(format!(
                "{input}: URL must include a host"
            )));
        }

        if parsed.query().is_some() || parsed.fragment().is_some() {
            return Err(FetchError::InvalidBaseUrl(format!(
                "{input}: URL must not carry a query or fragment"
            )));
        }

        if !parsed.path().ends_with('/') {
            let with_slash = format!("{}/", parsed.path());
            parsed.set_path(&with_slash);
        }

        Ok(Self(parsed))
    }

    /// Borrow the normalised base URL.
    #[must_use]
    pub const fn as_url(&self) -> &Url {
        &self.0
    }

    /// URL of the headline listing endpoint.
    ///
    /// # Errors
    ///
    /// Returns [`FetchError::InvalidBaseUrl`] if the endpoint cannot be
    /// resolved against the base.
    pub fn headlines_url(&self) -> Result<Url, FetchError> {
        self.endpoint(HEADLINES_PATH)
    }

    /// URL of the generated puns endpoint for one headline.
    ///
    /// The identifier is percent-encoded as the `id` query parameter.
    ///
    /// # Errors
    ///
    /// Returns [`FetchError::InvalidBaseUrl`] if the endpoint cannot be
    /// resolved against the base.
    pub fn generated_url(&self, id: &HeadlineId) -> Result<Url, FetchError> {
        let mut url = self.endpoint(GENERATED_PATH)?;
        url.query_pairs_mut().append_pair("id", id.as_str());
        Ok(url)
    }

    fn endpoint(&self, path: &str) -> Result<Url, FetchError> {
        self.0
            .join(path)
            .map_err(|error| FetchError::InvalidBaseUrl(format!("{path}: {error}")))
    }
}

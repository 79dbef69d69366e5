//! Data models for headlines and their generated puns.

use std::fmt;

use serde::Deserialize;

#[cfg(any(test, feature = "test-support"))]
pub mod test_support;

/// Opaque headline identifier, kept in its string encoding.
///
/// The backend may send the identifier as a JSON string or integer. Either
/// form is stored as text so the value round-trips verbatim into the
/// `id` query parameter.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Deserialize)]
#[serde(try_from = "RawHeadlineId")]
pub struct HeadlineId(String);

impl HeadlineId {
    /// Wraps an identifier, rejecting blank values.
    ///
    /// A blank identifier would be indistinguishable from "no selection".
    ///
    /// # Errors
    ///
    /// Returns a description of the problem when `value` is blank.
    pub fn new(value: impl Into<String>) -> Result<Self, String> {
        let text = value.into();
        if text.trim().is_empty() {
            return Err("headline_id must not be blank".to_owned());
        }
        Ok(Self(text))
    }

    /// Borrow the identifier text.
    #[must_use]
    pub const fn as_str(&self) -> &str {
        self.0.as_str()
    }
}

impl fmt::Display for HeadlineId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

#[derive(Deserialize)]
#[serde(untagged)]
enum RawHeadlineId {
    Text(String),
    Signed(i64),
    Unsigned(u64),
}

impl TryFrom<RawHeadlineId> for HeadlineId {
    type Error = String;

    fn try_from(raw: RawHeadlineId) -> Result<Self, Self::Error> {
        match raw {
            RawHeadlineId::Text(text) => Self::new(text),
            RawHeadlineId::Signed(number) => Self::new(number.to_string()),
            RawHeadlineId::Unsigned(number) => Self::new(number.to_string()),
        }
    }
}

/// A news headline the evaluator can select.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Headline {
    /// Backend identifier.
    pub headline_id: HeadlineId,
    /// Display text.
    pub headline: String,
}

/// A generated pun caption attached to one headline.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Pun {
    /// Display text.
    pub generated: String,
}

#[derive(Debug, Clone, Deserialize)]
pub(crate) struct ApiHeadline {
    pub(crate) headline_id: HeadlineId,
    pub(crate) headline: String,
}

#[derive(Debug, Clone, Deserialize)]
pub(crate) struct ApiPun {
    pub(crate) generated: String,
}

/// Failure body returned by the backend alongside 4xx statuses.
#[derive(Debug, Clone, Deserialize)]
pub(crate) struct ApiFailure {
    pub(crate) message: Option<String>,
}

impl From<ApiHeadline> for Headline {
    fn from(value: ApiHeadline) -> Self {
        Self {
            headline_id: value.headline_id,
            headline: value.headline,
        }
    }
}

impl From<ApiPun> for Pun {
    fn from(value: ApiPun) -> Self {
        Self {
            generated: value.generated,
        }
    }
}

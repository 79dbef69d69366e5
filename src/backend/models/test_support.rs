//! Test helpers for constructing headline and pun fixtures.
//!
//! # Examples
//!
//! ```
//! use punnet::backend::models::test_support::{headline, pun};
//!
//! let item = headline("7", "News A");
//! assert_eq!(item.headline_id.as_str(), "7");
//! assert_eq!(pun("funny!").generated, "funny!");
//! ```

use super::{Headline, HeadlineId, Pun};

/// Builds a headline with the given identifier and text.
///
/// # Panics
///
/// Panics when `id` is blank.
#[must_use]
pub fn headline(id: &str, text: &str) -> Headline {
    Headline {
        headline_id: headline_id(id),
        headline: text.to_owned(),
    }
}

/// Builds a headline identifier.
///
/// # Panics
///
/// Panics when `id` is blank.
#[must_use]
pub fn headline_id(id: &str) -> HeadlineId {
    HeadlineId::new(id).unwrap_or_else(|error| panic!("invalid fixture id {id:?}: {error}"))
}

/// Builds a pun with the given text.
#[must_use]
pub fn pun(text: &str) -> Pun {
    Pun {
        generated: text.to_owned(),
    }
}

/// Builds `count` puns named `pun1`, `pun2`, and so on.
#[must_use]
pub fn numbered_puns(count: usize) -> Vec<Pun> {
    (1..=count).map(|n| pun(&format!("pun{n}"))).collect()
}

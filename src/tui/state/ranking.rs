//! Local rankings over a loaded pun list.
//!
//! Puns carry no backend identity, so each is keyed by its position in the
//! response ([`PunKey`]). A ranking reorders keys, never the puns
//! themselves, which keeps rendered items tied to a stable key while the
//! evaluator moves them around. Each [`RankingCriterion`] gets its own,
//! independent ranking.

use crate::backend::Pun;

/// Stable key of a pun: its position in the backend response.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct PunKey(usize);

impl PunKey {
    /// Response position.
    #[must_use]
    pub const fn index(self) -> usize {
        self.0
    }
}

/// What the evaluator is ordering the puns by.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum RankingCriterion {
    /// Funniest pun first.
    #[default]
    Funniness,
    /// Pun most related to the headline first.
    Similarity,
}

impl RankingCriterion {
    /// The other criterion.
    #[must_use]
    pub const fn toggled(self) -> Self {
        match self {
            Self::Funniness => Self::Similarity,
            Self::Similarity => Self::Funniness,
        }
    }

    /// Short label for titles and status messages.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Funniness => "funniness",
            Self::Similarity => "similarity",
        }
    }
}

/// Display order of a pun list plus the highlighted row.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct PunRanking {
    order: Vec<PunKey>,
    cursor: usize,
}

impl PunRanking {
    /// Starts a ranking in response order.
    #[must_use]
    pub fn in_response_order(len: usize) -> Self {
        Self {
            order: (0..len).map(PunKey).collect(),
            cursor: 0,
        }
    }

    /// Keys in ranked order, best first.
    #[must_use]
    pub fn keys(&self) -> &[PunKey] {
        &self.order
    }

    /// Zero-based rank of `key`, if it is part of this ranking.
    #[must_use]
    pub fn rank_of(&self, key: PunKey) -> Option<usize> {
        self.order.iter().position(|&ranked| ranked == key)
    }

    /// Highlighted row.
    #[must_use]
    pub const fn cursor(&self) -> usize {
        self.cursor
    }

    /// Number of ranked puns.
    #[must_use]
    pub const fn len(&self) -> usize {
        self.order.len()
    }

    /// Returns true when there is nothing to rank.
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.order.is_empty()
    }

    /// Resolves the ranked order against the loaded puns.
    pub fn ranked<'a>(&'a self, puns: &'a [Pun]) -> impl Iterator<Item = (PunKey, &'a Pun)> + 'a {
        self.order
            .iter()
            .filter_map(move |&key| puns.get(key.0).map(|pun| (key, pun)))
    }

    /// Moves the highlight by `step` rows, clamped to the list.
    pub fn move_cursor(&mut self, up: bool, step: usize) {
        self.cursor = if up {
            self.cursor.saturating_sub(step)
        } else {
            self.cursor
                .saturating_add(step)
                .min(self.order.len().saturating_sub(1))
        };
    }

    /// Moves the cursor to the first or last row.
    pub fn jump(&mut self, to_end: bool) {
        self.cursor = if to_end {
            self.order.len().saturating_sub(1)
        } else {
            0
        };
    }

    /// Swaps the highlighted pun with its neighbour above and follows it.
    /// Returns `true` when the order changed.
    pub fn promote(&mut self) -> bool {
        let Some(above) = self.cursor.checked_sub(1) else {
            return false;
        };
        if self.cursor >= self.order.len() {
            return false;
        }
        self.order.swap(above, self.cursor);
        self.cursor = above;
        true
    }

    /// Swaps the highlighted pun with its neighbour below and follows it.
    /// Returns `true` when the order changed.
    pub fn demote(&mut self) -> bool {
        let below = self.cursor.saturating_add(1);
        if below >= self.order.len() {
            return false;
        }
        self.order.swap(self.cursor, below);
        self.cursor = below;
        true
    }
}

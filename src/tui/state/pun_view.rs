//! Pun viewer state machine with a stale-response guard.
//!
//! The viewer reacts to the selector's [`Selection`]:
//!
//! - empty selection: `Idle`, zero puns, no request;
//! - new non-empty selection: `Loading` with a fresh [`FetchTicket`];
//! - result for the current ticket: `Loaded`.
//!
//! Every dispatched request gets a ticket with a new generation number. A
//! result is applied only when the viewer is still `Loading` with exactly
//! that ticket, so a slow response for a superseded selection can never
//! overwrite the list for the current one.

use crate::backend::{FetchError, HeadlineId, Pun};

use super::ranking::{PunRanking, RankingCriterion};
use crate::evaluation::RankedPun;
use super::selection::Selection;

/// Identifies one dispatched pun request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FetchTicket {
    generation: u64,
    headline_id: HeadlineId,
}

impl FetchTicket {
    /// Monotonic dispatch number within one viewer.
    #[must_use]
    pub const fn generation(&self) -> u64 {
        self.generation
    }

    /// Headline the request was dispatched for.
    #[must_use]
    pub const fn headline_id(&self) -> &HeadlineId {
        &self.headline_id
    }
}

/// Puns loaded for one headline, with the evaluator's two rankings.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LoadedPuns {
    /// Headline the puns belong to.
    pub headline_id: HeadlineId,
    /// Puns in response order.
    pub puns: Vec<Pun>,
    /// Order from funniest to least funny.
    pub funniness: PunRanking,
    /// Order from most to least related to the headline.
    pub similarity: PunRanking,
    /// Ranking currently shown and edited.
    pub criterion: RankingCriterion,
    /// Failure reason when the request did not succeed.
    pub notice: Option<String>,
}

impl LoadedPuns {
    fn from_result(headline_id: HeadlineId, result: Result<Vec<Pun>, FetchError>) -> Self {
        let (puns, notice) = match result {
            Ok(puns) => (puns, None),
            Err(error) => (Vec::new(), Some(error.to_string())),
        };
        let funniness = PunRanking::in_response_order(puns.len());
        let similarity = PunRanking::in_response_order(puns.len());
        Self {
            headline_id,
            puns,
            funniness,
            similarity,
            criterion: RankingCriterion::default(),
            notice,
        }
    }

    /// The ranking for `criterion`.
    #[must_use]
    pub const fn ranking_for(&self, criterion: RankingCriterion) -> &PunRanking {
        match criterion {
            RankingCriterion::Funniness => &self.funniness,
            RankingCriterion::Similarity => &self.similarity,
        }
    }

    /// The ranking currently shown.
    #[must_use]
    pub const fn ranking(&self) -> &PunRanking {
        self.ranking_for(self.criterion)
    }

    /// The ranking currently shown, for editing.
    pub const fn ranking_mut(&mut self) -> &mut PunRanking {
        match self.criterion {
            RankingCriterion::Funniness => &mut self.funniness,
            RankingCriterion::Similarity => &mut self.similarity,
        }
    }

    /// Switches to the other ranking. Both orders are kept.
    pub const fn toggle_criterion(&mut self) {
        self.criterion = self.criterion.toggled();
    }

    /// Puns in the order of the ranking currently shown.
    pub fn ranked(&self) -> impl Iterator<Item = &Pun> {
        self.ranked_by(self.criterion)
    }

    /// Puns in the order of the ranking for `criterion`.
    pub fn ranked_by(&self, criterion: RankingCriterion) -> impl Iterator<Item = &Pun> {
        self.ranking_for(criterion)
            .ranked(&self.puns)
            .map(|(_, pun)| pun)
    }

    /// Every pun with both of its ranks, funniest first.
    #[must_use]
    pub fn ranks(&self) -> Vec<RankedPun<'_>> {
        self.funniness
            .ranked(&self.puns)
            .enumerate()
            .map(|(funniness_rank, (key, pun))| RankedPun {
                pun,
                funniness_rank,
                similarity_rank: self.similarity.rank_of(key).unwrap_or(funniness_rank),
            })
            .collect()
    }
}

/// Viewer phase.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum PunViewPhase {
    /// No headline selected.
    #[default]
    Idle,
    /// Waiting for the response to this ticket.
    Loading(FetchTicket),
    /// Response for the current selection applied.
    Loaded(LoadedPuns),
}

/// Outcome of offering a response to the viewer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FetchResolution {
    /// The response matched the in-flight ticket and now drives the view.
    Applied,
    /// The response belonged to a superseded request and was dropped.
    Discarded,
}

/// State of the pun viewer.
#[derive(Debug, Clone, Default)]
pub struct PunViewState {
    phase: PunViewPhase,
    current: Selection,
    dispatched: u64,
}

impl PunViewState {
    /// Creates an idle viewer.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Current phase.
    #[must_use]
    pub const fn phase(&self) -> &PunViewPhase {
        &self.phase
    }

    /// Mutable access to the loaded list, for ranking.
    pub const fn loaded_mut(&mut self) -> Option<&mut LoadedPuns> {
        match &mut self.phase {
            PunViewPhase::Loaded(loaded) => Some(loaded),
            PunViewPhase::Idle | PunViewPhase::Loading(_) => None,
        }
    }

    /// The loaded list, if any.
    #[must_use]
    pub const fn loaded(&self) -> Option<&LoadedPuns> {
        match &self.phase {
            PunViewPhase::Loaded(loaded) => Some(loaded),
            PunViewPhase::Idle | PunViewPhase::Loading(_) => None,
        }
    }

    /// Returns true while a request for the current selection is in flight.
    #[must_use]
    pub const fn is_loading(&self) -> bool {
        matches!(self.phase, PunViewPhase::Loading(_))
    }

    /// Number of requests dispatched over the viewer's lifetime.
    #[must_use]
    pub const fn dispatched(&self) -> u64 {
        self.dispatched
    }

    /// Reacts to the selection value.
    ///
    /// Returns a ticket when a request must be dispatched. An unchanged value
    /// returns `None` and leaves the phase alone, so re-renders and repeated
    /// choices never issue requests.
    pub fn on_selection(&mut self, selection: &Selection) -> Option<FetchTicket> {
        if &self.current == selection {
            return None;
        }
        self.current = selection.clone();

        let Some(id) = selection.headline_id() else {
            self.phase = PunViewPhase::Idle;
            return None;
        };

        self.dispatched = self.dispatched.saturating_add(1);
        let ticket = FetchTicket {
            generation: self.dispatched,
            headline_id: id.clone(),
        };
        self.phase = PunViewPhase::Loading(ticket.clone());
        Some(ticket)
    }

    /// Offers a response. Failures become an empty list with a notice.
    pub fn on_fetched(
        &mut self,
        ticket: &FetchTicket,
        result: Result<Vec<Pun>, FetchError>,
    ) -> FetchResolution {
        let PunViewPhase::Loading(in_flight) = &self.phase else {
            return FetchResolution::Discarded;
        };
        if in_flight != ticket {
            return FetchResolution::Discarded;
        }

        self.phase = PunViewPhase::Loaded(LoadedPuns::from_result(
            ticket.headline_id.clone(),
            result,
        ));
        FetchResolution::Applied
    }
}

//! Fetch commands and result handlers.
//!
//! Fetches run as bubbletea-rs commands on the Tokio runtime and report
//! back as `HeadlinesFetched` or `PunsFetched` messages. Pun results carry
//! the ticket they were dispatched with; the viewer drops any result whose
//! ticket is no longer the in-flight one.

use std::any::Any;
use std::sync::Arc;

use bubbletea_rs::Cmd;

use super::EvaluationApp;
use crate::backend::{FetchError, Headline, Pun};
use crate::tui::messages::AppMsg;
use crate::tui::state::{FetchResolution, FetchTicket};

impl EvaluationApp {
    /// Dispatches fetch results to their handlers.
    pub(super) fn handle_data_msg(&mut self, msg: &AppMsg) -> Option<Cmd> {
        match msg {
            AppMsg::HeadlinesFetched(result) => self.handle_headlines_fetched(result),
            AppMsg::PunsFetched { ticket, result } => self.handle_puns_fetched(ticket, result),
            _ => None,
        }
    }

    /// Creates the command issuing the one headline request.
    pub(super) fn fetch_headlines_cmd(&self) -> Cmd {
        let gateway = Arc::clone(&self.gateway);
        Box::pin(async move {
            let result = gateway.headlines().await;
            Some(Box::new(AppMsg::HeadlinesFetched(result)) as Box<dyn Any + Send>)
        })
    }

    /// Creates the command fetching puns for `ticket`.
    pub(super) fn fetch_puns_cmd(&self, ticket: FetchTicket) -> Cmd {
        let gateway = Arc::clone(&self.gateway);
        tracing::debug!(
            generation = ticket.generation(),
            headline_id = %ticket.headline_id(),
            "dispatching pun fetch"
        );
        Box::pin(async move {
            let result = gateway.generated_puns(ticket.headline_id()).await;
            Some(Box::new(AppMsg::PunsFetched { ticket, result }) as Box<dyn Any + Send>)
        })
    }

    fn handle_headlines_fetched(
        &mut self,
        result: &Result<Vec<Headline>, FetchError>,
    ) -> Option<Cmd> {
        self.selector.apply_headlines(result.clone());
        self.adjust_scroll_to_cursor();
        None
    }

    fn handle_puns_fetched(
        &mut self,
        ticket: &FetchTicket,
        result: &Result<Vec<Pun>, FetchError>,
    ) -> Option<Cmd> {
        if self.pun_view.on_fetched(ticket, result.clone()) == FetchResolution::Discarded {
            tracing::debug!(
                generation = ticket.generation(),
                headline_id = %ticket.headline_id(),
                "discarding stale pun response"
            );
        }
        None
    }
}

//! The search state machine.
//!
//! ```text
//!            submit (non-blank)
//!   any ───────────────────────▶ Validating ──parse error──▶ Failed
//!                                    │
//!                                    └──parsed──▶ Searching ──complete(latest id)──▶ Success | Failed
//! ```
//!
//! `submit` and `complete` are synchronous. The lookup itself runs wherever the
//! caller likes; several may be in flight at once, but only the response
//! tagged with the latest [`SearchId`] is applied.

use ziplookup_client::LookupError;
use ziplookup_core::{parse_address, ResultSet};

use crate::error::SearchError;
use crate::lookup::LookupService;
use crate::notify::{Notification, Notifier};
use crate::state::{SearchId, SearchRequest, SearchState};

pub const NO_RESULTS_MESSAGE: &str = "No results found";

/// What the Result Renderer needs from the current search.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RenderInput<'a> {
    /// The stored result set, present only in the `Success` state.
    pub results: Option<&'a ResultSet>,
    /// `true` while an empty result would still trigger the "no results"
    /// notice for the current search.
    pub no_results_pending: bool,
    pub loading: bool,
}

/// Drives one address search at a time for a single input field.
pub struct SearchOrchestrator<N> {
    notifier: N,
    state: SearchState,
    latest: SearchId,
    /// Armed on submit; disarmed by an input edit or once the search settles.
    no_results_armed: bool,
}

impl<N: Notifier> SearchOrchestrator<N> {
    pub fn new(notifier: N) -> Self {
        Self {
            notifier,
            state: SearchState::Idle,
            latest: SearchId::ZERO,
            no_results_armed: false,
        }
    }

    #[must_use]
    pub fn state(&self) -> &SearchState {
        &self.state
    }

    #[must_use]
    pub fn is_loading(&self) -> bool {
        self.state.is_loading()
    }

    /// Id of the most recent accepted submission, if any.
    #[must_use]
    pub fn latest_id(&self) -> Option<SearchId> {
        (self.latest != SearchId::ZERO).then_some(self.latest)
    }

    #[must_use]
    pub fn notifier(&self) -> &N {
        &self.notifier
    }

    #[must_use]
    pub fn render_input(&self) -> RenderInput<'_> {
        RenderInput {
            results: self.state.results(),
            no_results_pending: self.no_results_armed,
            loading: self.is_loading(),
        }
    }

    /// Starts a new search for `raw`.
    ///
    /// Blank input is ignored. Otherwise any previous result is dropped, the
    /// address is validated, and on success the caller gets the request to
    /// send. A request still in flight from an earlier submission becomes
    /// stale.
    pub fn submit(&mut self, raw: &str) -> Option<SearchRequest> {
        if raw.trim().is_empty() {
            tracing::debug!("ignoring blank submission");
            return None;
        }

        self.latest = self.latest.next();
        let id = self.latest;
        self.no_results_armed = true;
        self.transition(id, SearchState::Validating);

        match parse_address(raw) {
            Ok(parsed) => {
                self.transition(id, SearchState::Searching);
                self.emit(Notification::info(format!(
                    "Searching for street {}, house number {}, city {}",
                    parsed.street_name, parsed.house_number, parsed.city_name
                )));
                Some(SearchRequest::new(id, raw))
            }
            Err(err) => {
                self.fail(id, &SearchError::from(err));
                None
            }
        }
    }

    /// Records that the user edited the input field.
    ///
    /// Nothing in flight is cancelled, but an empty response that arrives
    /// afterwards no longer raises the "no results" notice.
    pub fn input_changed(&mut self) {
        self.no_results_armed = false;
    }

    /// Applies the outcome of the lookup for `id`.
    ///
    /// Returns `false`, leaving everything untouched, when `id` is not the
    /// latest submission or the machine is no longer waiting on it.
    pub fn complete(&mut self, id: SearchId, outcome: Result<ResultSet, LookupError>) -> bool {
        if id != self.latest || !matches!(self.state, SearchState::Searching) {
            tracing::debug!(
                search_id = %id,
                latest = %self.latest,
                state = self.state.name(),
                "discarding stale lookup response"
            );
            return false;
        }

        match outcome {
            Ok(results) => {
                let announce_empty = results.is_empty() && self.no_results_armed;
                self.no_results_armed = false;
                tracing::info!(search_id = %id, hits = results.total(), "lookup succeeded");
                self.transition(id, SearchState::Success(results));
                if announce_empty {
                    self.emit(Notification::info(NO_RESULTS_MESSAGE));
                }
            }
            Err(err) => self.fail(id, &SearchError::from(err)),
        }
        true
    }

    /// Runs one search end to end against `lookup`.
    pub async fn search<L: LookupService>(&mut self, lookup: &L, raw: &str) -> &SearchState {
        if let Some(request) = self.submit(raw) {
            let outcome = lookup.lookup(request.raw_address()).await;
            self.complete(request.id(), outcome);
        }
        &self.state
    }

    fn fail(&mut self, id: SearchId, err: &SearchError) {
        let message = err.to_string();
        if err.is_service_fault() {
            tracing::warn!(search_id = %id, error = %err, "search failed");
        } else {
            tracing::debug!(search_id = %id, error = %err, "address rejected");
        }
        self.no_results_armed = false;
        self.transition(id, SearchState::Failed(message.clone()));
        self.emit(Notification::error(message));
    }

    fn transition(&mut self, id: SearchId, next: SearchState) {
        tracing::debug!(
            search_id = %id,
            from = self.state.name(),
            to = next.name(),
            "search state transition"
        );
        self.state = next;
    }

    /// Notifications go out after the state change they describe, so a
    /// failing surface cannot leave the machine loading.
    fn emit(&self, notification: Notification) {
        if let Err(e) = self.notifier.notify(notification) {
            tracing::warn!(error = %e, "failed to deliver notification");
        }
    }
}

#[cfg(test)]
#[path = "orchestrator_test.rs"]
mod tests;

//! Debounced simulated search requests.
//!
//! The pipeline turns raw query changes into store transitions with two
//! explicit timers, both owned here and both driven by the runtime's
//! cooperative event loop:
//!
//! - a **debounce** deadline armed 300 ms after the latest keystroke,
//!   canceled and re-armed by every further keystroke;
//! - a **fetch** deadline per issued request, modeling the fixed 500 ms
//!   latency of the simulated backend.
//!
//! There is no thread and no suspension: the pipeline exposes its earliest
//! deadline via [`SearchPipeline::next_deadline`], the runtime sleeps until
//! then, and [`SearchPipeline::poll`] fires whatever became due. All time is
//! passed in as a parameter, which keeps every timing property testable
//! without waiting on a real clock.
//!
//! # Staleness
//!
//! Only the debounce timer is cancelable; a fetch, once issued, always runs
//! to completion. Completions carry a generation token, and `poll` discards
//! any completion older than the most recently issued fetch, so overlapping
//! requests can never apply out of order.

use crate::search::catalog::filter_items;
use crate::store::Transition;
use std::time::{Duration, Instant};

/// Quiescence window on the query before a request is issued.
pub const DEBOUNCE_WINDOW: Duration = Duration::from_millis(300);

/// Fixed latency of the simulated backend.
pub const FETCH_LATENCY: Duration = Duration::from_millis(500);

/// Armed debounce timer for the latest non-empty query.
#[derive(Debug, Clone)]
struct DebounceTimer {
    query: String,
    fires_at: Instant,
}

/// An issued simulated request running to completion.
#[derive(Debug, Clone)]
struct FetchTask {
    query: String,
    generation: u64,
    completes_at: Instant,
}

/// Debounce + simulated-fetch state machine.
#[derive(Debug, Default)]
pub struct SearchPipeline {
    debounce: Option<DebounceTimer>,
    in_flight: Vec<FetchTask>,
    next_generation: u64,
}

impl SearchPipeline {
    /// Creates an idle pipeline.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Reacts to a committed query change.
    ///
    /// Empty or whitespace-only queries cancel any armed debounce and emit
    /// `ClearSearch` immediately, bypassing the debounce. Anything else
    /// (re)arms the debounce at `now + 300ms`; the request itself is issued
    /// later by [`poll`](Self::poll).
    ///
    /// Returned transitions must be dispatched by the caller, in order.
    pub fn note_query(&mut self, query: &str, now: Instant) -> Vec<Transition> {
        if query.trim().is_empty() {
            if self.debounce.take().is_some() {
                tracing::debug!("debounce canceled by empty query");
            }
            return vec![Transition::ClearSearch];
        }

        let fires_at = now + DEBOUNCE_WINDOW;
        let rearmed = self.debounce.is_some();
        self.debounce = Some(DebounceTimer {
            query: query.to_string(),
            fires_at,
        });

        tracing::debug!(query = %query, rearmed = rearmed, "debounce armed");
        vec![]
    }

    /// Cancels any armed debounce without touching in-flight fetches.
    ///
    /// Used when the owning view is left; an issued fetch still lands.
    pub fn cancel_debounce(&mut self) {
        self.debounce = None;
    }

    /// Earliest pending deadline, if any.
    ///
    /// The runtime uses this as its poll timeout so timers fire promptly
    /// without busy-waiting.
    #[must_use]
    pub fn next_deadline(&self) -> Option<Instant> {
        let fetch = self.in_flight.iter().map(|task| task.completes_at).min();
        match (self.debounce.as_ref().map(|d| d.fires_at), fetch) {
            (Some(a), Some(b)) => Some(a.min(b)),
            (Some(a), None) => Some(a),
            (None, b) => b,
        }
    }

    /// Fires every deadline due at `now`, returning transitions to dispatch.
    ///
    /// A due debounce issues a fetch (with a fresh generation token) and
    /// emits `SearchPending`. A due fetch computes its result set and emits
    /// `SearchFulfilled`, unless a newer fetch has been issued since, in
    /// which case the completion is stale and silently discarded.
    pub fn poll(&mut self, now: Instant) -> Vec<Transition> {
        let mut transitions = Vec::new();

        if self
            .debounce
            .as_ref()
            .is_some_and(|timer| timer.fires_at <= now)
        {
            if let Some(timer) = self.debounce.take() {
                let generation = self.next_generation;
                self.next_generation += 1;

                tracing::debug!(query = %timer.query, generation = generation, "issuing simulated fetch");
                self.in_flight.push(FetchTask {
                    query: timer.query,
                    generation,
                    completes_at: now + FETCH_LATENCY,
                });
                transitions.push(Transition::SearchPending);
            }
        }

        let mut due: Vec<FetchTask> = Vec::new();
        self.in_flight.retain(|task| {
            if task.completes_at <= now {
                due.push(task.clone());
                false
            } else {
                true
            }
        });
        due.sort_by_key(|task| task.generation);

        let latest_issued = self.next_generation.checked_sub(1);
        for task in due {
            if latest_issued == Some(task.generation) {
                let results = filter_items(&task.query);
                tracing::debug!(
                    query = %task.query,
                    result_count = results.len(),
                    "simulated fetch fulfilled"
                );
                transitions.push(Transition::SearchFulfilled(results));
            } else {
                tracing::debug!(
                    query = %task.query,
                    generation = task.generation,
                    "discarding stale fetch completion"
                );
            }
        }

        transitions
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn at(base: Instant, ms: u64) -> Instant {
        base + Duration::from_millis(ms)
    }

    #[test]
    fn keystrokes_within_the_window_coalesce_into_one_fetch() {
        let t0 = Instant::now();
        let mut pipeline = SearchPipeline::new();

        assert!(pipeline.note_query("a", t0).is_empty());
        assert!(pipeline.note_query("ap", at(t0, 100)).is_empty());
        assert!(pipeline.note_query("app", at(t0, 200)).is_empty());

        // The first keystroke's window would have expired here, but each
        // keystroke restarted it.
        assert!(pipeline.poll(at(t0, 350)).is_empty());

        let fired = pipeline.poll(at(t0, 500));
        assert_eq!(fired, vec![Transition::SearchPending]);

        let done = pipeline.poll(at(t0, 1000));
        assert_eq!(done, vec![Transition::SearchFulfilled(vec!["Apple".to_string()])]);

        // Nothing left to fire.
        assert!(pipeline.next_deadline().is_none());
    }

    #[test]
    fn second_keystroke_within_100ms_fetches_only_the_final_query() {
        let t0 = Instant::now();
        let mut pipeline = SearchPipeline::new();

        pipeline.note_query("a", t0);
        pipeline.note_query("b", at(t0, 100));

        let pending = pipeline.poll(at(t0, 400));
        assert_eq!(pending, vec![Transition::SearchPending]);

        let done = pipeline.poll(at(t0, 900));
        assert_eq!(done, vec![Transition::SearchFulfilled(filter_items("b"))]);

        // Exactly one fetch total: nothing else pending.
        assert!(pipeline.poll(at(t0, 5000)).is_empty());
    }

    #[test]
    fn empty_query_clears_immediately_and_issues_no_fetch() {
        let t0 = Instant::now();
        let mut pipeline = SearchPipeline::new();

        pipeline.note_query("a", t0);
        let cleared = pipeline.note_query("   ", at(t0, 50));
        assert_eq!(cleared, vec![Transition::ClearSearch]);

        assert!(pipeline.next_deadline().is_none());
        assert!(pipeline.poll(at(t0, 2000)).is_empty());
    }

    #[test]
    fn query_e_fulfills_with_the_reference_subsequence() {
        let t0 = Instant::now();
        let mut pipeline = SearchPipeline::new();

        pipeline.note_query("e", t0);
        assert_eq!(pipeline.poll(at(t0, 300)), vec![Transition::SearchPending]);

        let done = pipeline.poll(at(t0, 800));
        assert_eq!(
            done,
            vec![Transition::SearchFulfilled(vec![
                "Apple".to_string(),
                "Cherry".to_string(),
                "Date".to_string(),
                "Elderberry".to_string(),
            ])]
        );
    }

    #[test]
    fn stale_completion_is_discarded_when_a_newer_fetch_exists() {
        let t0 = Instant::now();
        let mut pipeline = SearchPipeline::new();

        // First fetch issued at t+300, completing at t+800.
        pipeline.note_query("a", t0);
        assert_eq!(pipeline.poll(at(t0, 300)), vec![Transition::SearchPending]);

        // Second query debounces at t+650, issuing fetch two at t+650.
        pipeline.note_query("b", at(t0, 350));
        assert_eq!(pipeline.poll(at(t0, 650)), vec![Transition::SearchPending]);

        // Fetch one completes but is stale: generation 0 < latest issued 1.
        assert!(pipeline.poll(at(t0, 800)).is_empty());

        // Fetch two lands with the newer query's results.
        let done = pipeline.poll(at(t0, 1150));
        assert_eq!(done, vec![Transition::SearchFulfilled(filter_items("b"))]);
    }

    #[test]
    fn next_deadline_tracks_the_earliest_timer() {
        let t0 = Instant::now();
        let mut pipeline = SearchPipeline::new();

        assert!(pipeline.next_deadline().is_none());

        pipeline.note_query("fig", t0);
        assert_eq!(pipeline.next_deadline(), Some(at(t0, 300)));

        pipeline.poll(at(t0, 300));
        assert_eq!(pipeline.next_deadline(), Some(at(t0, 800)));
    }

    #[test]
    fn cancel_debounce_keeps_in_flight_fetches() {
        let t0 = Instant::now();
        let mut pipeline = SearchPipeline::new();

        pipeline.note_query("grape", t0);
        pipeline.poll(at(t0, 300));

        pipeline.cancel_debounce();
        assert_eq!(pipeline.next_deadline(), Some(at(t0, 800)));

        let done = pipeline.poll(at(t0, 800));
        assert_eq!(done, vec![Transition::SearchFulfilled(vec!["Grape".to_string()])]);
    }
}

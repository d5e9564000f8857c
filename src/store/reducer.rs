//! Pure transition application.
//!
//! The reducer is the only place store state changes shape. It takes the
//! current state and a transition and produces the next state, with no side
//! effects and no failure path. Persistence, timers, and rendering all hang
//! off the store's notification mechanism instead (observer pattern), keeping
//! this function trivially testable.

use super::state::StoreState;
use super::transition::Transition;

/// Applies a transition to a state snapshot, producing the next state.
///
/// Total over the closed [`Transition`] set: every variant produces a valid
/// next state and the function never panics for any payload.
///
/// # Search lifecycle
///
/// The search slice moves through idle → pending → fulfilled/rejected as
/// modeled by `loading` and `error`:
///
/// - `SearchPending` sets `loading` and clears a stale error but keeps the
///   previous results visible.
/// - `SearchFulfilled` replaces the results wholesale.
/// - `SearchRejected` records the message and keeps the previous results.
/// - `ClearSearch` empties query and results without touching
///   `loading`/`error`; a fetch already past its point of no return will
///   still land and overwrite them.
#[must_use]
pub fn reduce(state: &StoreState, transition: &Transition) -> StoreState {
    let mut next = state.clone();

    match transition {
        Transition::Increment => {
            next.counter.value += 1;
        }
        Transition::Decrement => {
            next.counter.value -= 1;
        }
        Transition::ResetCounter => {
            next.counter.value = 0;
        }
        Transition::ToggleTheme => {
            next.theme.mode = next.theme.mode.toggled();
        }
        Transition::SetQuery(query) => {
            next.search.query.clone_from(query);
        }
        Transition::ClearSearch => {
            next.search.query.clear();
            next.search.results.clear();
        }
        Transition::SearchPending => {
            next.search.loading = true;
            next.search.error = None;
        }
        Transition::SearchFulfilled(results) => {
            next.search.loading = false;
            next.search.results.clone_from(results);
        }
        Transition::SearchRejected(message) => {
            next.search.loading = false;
            next.search.error = Some(message.clone());
        }
    }

    next
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::state::ThemeMode;

    fn apply_all(transitions: &[Transition]) -> StoreState {
        transitions
            .iter()
            .fold(StoreState::default(), |state, t| reduce(&state, t))
    }

    #[test]
    fn counter_value_is_the_fold_of_the_sequence() {
        // Final value equals the sum of {+1, -1, reset-to-0} applied in order.
        let sequences: &[(&[Transition], i64)] = &[
            (&[Transition::Increment, Transition::Increment, Transition::Decrement], 1),
            (&[Transition::Decrement, Transition::Decrement], -2),
            (
                &[
                    Transition::Increment,
                    Transition::ResetCounter,
                    Transition::Increment,
                    Transition::Increment,
                ],
                2,
            ),
            (&[], 0),
        ];

        for (sequence, expected) in sequences {
            assert_eq!(apply_all(sequence).counter.value, *expected);
        }
    }

    #[test]
    fn reset_is_idempotent() {
        let once = apply_all(&[Transition::Increment, Transition::ResetCounter]);
        let twice = apply_all(&[
            Transition::Increment,
            Transition::ResetCounter,
            Transition::ResetCounter,
        ]);
        assert_eq!(once, twice);
    }

    #[test]
    fn toggle_theme_flips_and_round_trips() {
        let dark = apply_all(&[Transition::ToggleTheme]);
        assert_eq!(dark.theme.mode, ThemeMode::Dark);

        let light = reduce(&dark, &Transition::ToggleTheme);
        assert_eq!(light.theme.mode, ThemeMode::Light);
    }

    #[test]
    fn pending_keeps_results_and_clears_error() {
        let mut state = StoreState::default();
        state.search.results = vec!["Apple".to_string()];
        state.search.error = Some("boom".to_string());

        let next = reduce(&state, &Transition::SearchPending);
        assert!(next.search.loading);
        assert!(next.search.error.is_none());
        assert_eq!(next.search.results, vec!["Apple".to_string()]);
    }

    #[test]
    fn fulfilled_replaces_results_and_stops_loading() {
        let mut state = StoreState::default();
        state.search.loading = true;
        state.search.results = vec!["Apple".to_string()];

        let next = reduce(
            &state,
            &Transition::SearchFulfilled(vec!["Fig".to_string(), "Grape".to_string()]),
        );
        assert!(!next.search.loading);
        assert_eq!(next.search.results, vec!["Fig".to_string(), "Grape".to_string()]);
    }

    #[test]
    fn rejected_records_error_and_keeps_results() {
        let mut state = StoreState::default();
        state.search.loading = true;
        state.search.results = vec!["Cherry".to_string()];

        let next = reduce(&state, &Transition::SearchRejected("offline".to_string()));
        assert!(!next.search.loading);
        assert_eq!(next.search.error.as_deref(), Some("offline"));
        assert_eq!(next.search.results, vec!["Cherry".to_string()]);
    }

    #[test]
    fn clear_search_empties_query_and_results_only() {
        let mut state = StoreState::default();
        state.search.query = "ap".to_string();
        state.search.results = vec!["Apple".to_string()];
        state.search.loading = true;
        state.search.error = Some("stale".to_string());

        let next = reduce(&state, &Transition::ClearSearch);
        assert!(next.search.query.is_empty());
        assert!(next.search.results.is_empty());
        // loading/error are owned by the request lifecycle transitions.
        assert!(next.search.loading);
        assert_eq!(next.search.error.as_deref(), Some("stale"));
    }

    #[test]
    fn reducer_does_not_mutate_its_input() {
        let state = apply_all(&[Transition::Increment]);
        let copy = state.clone();
        let _ = reduce(&state, &Transition::Increment);
        assert_eq!(state, copy);
    }
}

//! Event handling and state transition coordination.
//!
//! The handler is the application's control-flow hub: user input and timer
//! expiry arrive as [`Event`] values, state mutations happen through
//! `AppState` (dispatching store transitions where the Store page owns the
//! data), and side effects for the runtime come back as [`Action`] values.
//!
//! ```text
//! User Input / Timers → Events → handle_event → State Mutations → Actions
//! ```
//!
//! The same counter/theme/search events act on different state owners
//! depending on the active page, which is where this demo earns its keep:
//! the handler is the single place you can read both styles side by side.
//!
//! All time enters through the `now` parameter so every timing behavior can
//! be driven synthetically in tests.

use crate::app::actions::Action;
use crate::app::local::LocalPanel;
use crate::app::modes::{InputFocus, Page};
use crate::app::state::AppState;
use crate::domain::error::Result;
use crate::store::Transition;
use std::time::Instant;

/// Events triggered by user input or timer expiry.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Event {
    /// Shows the given page, recreating local state or resetting the store's
    /// search slice as the page contract requires.
    SwitchPage(Page),

    /// Adds one to the active page's counter.
    Increment,

    /// Subtracts one from the active page's counter.
    Decrement,

    /// Resets the active page's counter to zero.
    ResetCounter,

    /// Flips the active page's theme flag.
    ToggleTheme,

    /// Moves keystroke focus into the search box.
    FocusSearch,

    /// Returns keystroke focus to command keys, keeping the query.
    LeaveSearch,

    /// Appends a character to the active page's search query.
    Char(char),

    /// Removes the last character from the active page's search query.
    Backspace,

    /// A pipeline deadline may have come due; poll and apply the outcome.
    TimerElapsed,

    /// Exits the application.
    Quit,
}

/// Processes an event, mutates application state, and returns actions.
///
/// The boolean is the redraw flag: `false` means the event changed nothing
/// observable and the frame can be skipped.
///
/// # Errors
///
/// Currently infallible in practice; the `Result` keeps the signature stable
/// for handlers that grow fallible effects.
#[allow(clippy::unnecessary_wraps)]
pub fn handle_event(
    state: &mut AppState,
    event: &Event,
    now: Instant,
) -> Result<(bool, Vec<Action>)> {
    let _span = tracing::debug_span!("handle_event", event_type = ?event).entered();

    match event {
        Event::Quit => Ok((false, vec![Action::Quit])),

        Event::SwitchPage(page) => {
            if *page == state.page {
                return Ok((false, vec![]));
            }

            tracing::debug!(from = ?state.page, to = ?page, "switching page");
            state.page = *page;
            state.focus = InputFocus::Normal;

            match page {
                // Local state is component state: entering the page mounts a
                // fresh component.
                Page::Local => state.local = LocalPanel::default(),
                // The store's search slice resets on entry; counter and
                // theme persist, that is the demo.
                Page::Store => {
                    state.pipeline.cancel_debounce();
                    state.store.dispatch(Transition::ClearSearch);
                }
            }

            Ok((true, vec![]))
        }

        Event::Increment => {
            match state.page {
                Page::Local => state.local.counter += 1,
                Page::Store => state.store.dispatch(Transition::Increment),
            }
            Ok((true, vec![]))
        }

        Event::Decrement => {
            match state.page {
                Page::Local => state.local.counter -= 1,
                Page::Store => state.store.dispatch(Transition::Decrement),
            }
            Ok((true, vec![]))
        }

        Event::ResetCounter => {
            match state.page {
                Page::Local => state.local.counter = 0,
                Page::Store => state.store.dispatch(Transition::ResetCounter),
            }
            Ok((true, vec![]))
        }

        Event::ToggleTheme => {
            match state.page {
                Page::Local => state.theme_context.toggle(),
                Page::Store => state.store.dispatch(Transition::ToggleTheme),
            }
            Ok((true, vec![]))
        }

        Event::FocusSearch => {
            state.focus = InputFocus::Search;
            Ok((true, vec![]))
        }

        Event::LeaveSearch => {
            if state.focus == InputFocus::Normal {
                return Ok((false, vec![]));
            }
            state.focus = InputFocus::Normal;
            Ok((true, vec![]))
        }

        Event::Char(c) => {
            if state.focus != InputFocus::Search {
                return Ok((false, vec![]));
            }

            match state.page {
                Page::Local => {
                    state.local.query.push(*c);
                }
                Page::Store => {
                    let mut query = state.store.state().search.query.clone();
                    query.push(*c);
                    apply_query(state, query, now);
                }
            }
            Ok((true, vec![]))
        }

        Event::Backspace => {
            if state.focus != InputFocus::Search {
                return Ok((false, vec![]));
            }

            match state.page {
                Page::Local => {
                    state.local.query.pop();
                }
                Page::Store => {
                    let mut query = state.store.state().search.query.clone();
                    query.pop();
                    apply_query(state, query, now);
                }
            }
            Ok((true, vec![]))
        }

        Event::TimerElapsed => {
            let transitions = state.pipeline.poll(now);
            if transitions.is_empty() {
                return Ok((false, vec![]));
            }

            tracing::debug!(count = transitions.len(), "applying timer transitions");
            state.apply_transitions(transitions);
            Ok((true, vec![]))
        }
    }
}

/// Commits a store-page query edit and feeds it to the pipeline.
///
/// The `SetQuery` dispatch happens first so subscribers observe the
/// keystroke before any pipeline-produced transition (an immediate
/// `ClearSearch` for empty queries).
fn apply_query(state: &mut AppState, query: String, now: Instant) {
    state.store.dispatch(Transition::SetQuery(query.clone()));
    let follow_ups = state.pipeline.note_query(&query, now);
    state.apply_transitions(follow_ups);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::search::{DEBOUNCE_WINDOW, FETCH_LATENCY};
    use crate::store::StoreState;
    use std::time::Duration;

    fn new_app(page: Page) -> AppState {
        AppState::new(StoreState::default(), page)
    }

    fn at(base: Instant, ms: u64) -> Instant {
        base + Duration::from_millis(ms)
    }

    fn type_query(state: &mut AppState, text: &str, now: Instant) {
        handle_event(state, &Event::FocusSearch, now).unwrap();
        for c in text.chars() {
            handle_event(state, &Event::Char(c), now).unwrap();
        }
    }

    #[test]
    fn counter_events_act_on_the_active_pages_owner() {
        let t0 = Instant::now();
        let mut state = new_app(Page::Local);

        handle_event(&mut state, &Event::Increment, t0).unwrap();
        handle_event(&mut state, &Event::Increment, t0).unwrap();
        assert_eq!(state.local.counter, 2);
        assert_eq!(state.store.state().counter.value, 0);

        handle_event(&mut state, &Event::SwitchPage(Page::Store), t0).unwrap();
        handle_event(&mut state, &Event::Increment, t0).unwrap();
        assert_eq!(state.store.state().counter.value, 1);
    }

    #[test]
    fn local_state_dies_on_navigation_but_store_state_survives() {
        let t0 = Instant::now();
        let mut state = new_app(Page::Local);

        handle_event(&mut state, &Event::Increment, t0).unwrap();
        handle_event(&mut state, &Event::SwitchPage(Page::Store), t0).unwrap();
        handle_event(&mut state, &Event::Increment, t0).unwrap();
        handle_event(&mut state, &Event::Increment, t0).unwrap();
        handle_event(&mut state, &Event::SwitchPage(Page::Local), t0).unwrap();

        // Fresh component: the local counter reset.
        assert_eq!(state.local.counter, 0);
        // The store kept its value across both switches.
        assert_eq!(state.store.state().counter.value, 2);
    }

    #[test]
    fn theme_toggle_targets_context_or_store_by_page() {
        let t0 = Instant::now();
        let mut state = new_app(Page::Local);

        handle_event(&mut state, &Event::ToggleTheme, t0).unwrap();
        assert_eq!(state.theme_context.mode.label(), "dark");
        assert_eq!(state.store.state().theme.mode.label(), "light");

        handle_event(&mut state, &Event::SwitchPage(Page::Store), t0).unwrap();
        handle_event(&mut state, &Event::ToggleTheme, t0).unwrap();
        assert_eq!(state.store.state().theme.mode.label(), "dark");
    }

    #[test]
    fn typing_is_ignored_without_search_focus() {
        let t0 = Instant::now();
        let mut state = new_app(Page::Store);

        let (redraw, _) = handle_event(&mut state, &Event::Char('x'), t0).unwrap();
        assert!(!redraw);
        assert!(state.store.state().search.query.is_empty());
    }

    #[test]
    fn store_page_search_goes_pending_then_fulfills() {
        let t0 = Instant::now();
        let mut state = new_app(Page::Store);

        type_query(&mut state, "e", t0);
        assert_eq!(state.store.state().search.query, "e");
        assert!(!state.store.state().search.loading);

        // Debounce elapses: the fetch is issued.
        handle_event(&mut state, &Event::TimerElapsed, t0 + DEBOUNCE_WINDOW).unwrap();
        assert!(state.store.state().search.loading);

        // Latency elapses: results land.
        let done = t0 + DEBOUNCE_WINDOW + FETCH_LATENCY;
        handle_event(&mut state, &Event::TimerElapsed, done).unwrap();

        let search = &state.store.state().search;
        assert!(!search.loading);
        assert_eq!(
            search.results,
            vec!["Apple", "Cherry", "Date", "Elderberry"]
        );
    }

    #[test]
    fn rapid_keystrokes_fetch_only_the_final_query() {
        let t0 = Instant::now();
        let mut state = new_app(Page::Store);

        handle_event(&mut state, &Event::FocusSearch, t0).unwrap();
        handle_event(&mut state, &Event::Char('a'), t0).unwrap();
        handle_event(&mut state, &Event::Backspace, at(t0, 100)).unwrap();
        handle_event(&mut state, &Event::Char('b'), at(t0, 100)).unwrap();

        // The first keystroke's window never fires.
        handle_event(&mut state, &Event::TimerElapsed, at(t0, 350)).unwrap();
        assert!(!state.store.state().search.loading);

        handle_event(&mut state, &Event::TimerElapsed, at(t0, 400)).unwrap();
        assert!(state.store.state().search.loading);

        handle_event(&mut state, &Event::TimerElapsed, at(t0, 900)).unwrap();
        let search = &state.store.state().search;
        assert_eq!(search.query, "b");
        assert_eq!(search.results, vec!["Banana", "Elderberry"]);
    }

    #[test]
    fn clearing_the_query_bypasses_the_debounce() {
        let t0 = Instant::now();
        let mut state = new_app(Page::Store);

        type_query(&mut state, "a", t0);
        handle_event(&mut state, &Event::Backspace, at(t0, 50)).unwrap();

        let search = &state.store.state().search;
        assert!(search.query.is_empty());
        assert!(search.results.is_empty());

        // No fetch was armed by the deleted keystroke.
        handle_event(&mut state, &Event::TimerElapsed, at(t0, 2000)).unwrap();
        assert!(!state.store.state().search.loading);
    }

    #[test]
    fn entering_the_store_page_resets_the_search_slice() {
        let t0 = Instant::now();
        let mut state = new_app(Page::Store);

        type_query(&mut state, "fig", t0);
        handle_event(&mut state, &Event::TimerElapsed, at(t0, 300)).unwrap();
        handle_event(&mut state, &Event::TimerElapsed, at(t0, 800)).unwrap();
        assert!(!state.store.state().search.results.is_empty());

        handle_event(&mut state, &Event::SwitchPage(Page::Local), t0).unwrap();
        handle_event(&mut state, &Event::SwitchPage(Page::Store), t0).unwrap();

        let search = &state.store.state().search;
        assert!(search.query.is_empty());
        assert!(search.results.is_empty());
    }

    #[test]
    fn quit_emits_the_quit_action_without_redraw() {
        let t0 = Instant::now();
        let mut state = new_app(Page::Local);
        let (redraw, actions) = handle_event(&mut state, &Event::Quit, t0).unwrap();
        assert!(!redraw);
        assert_eq!(actions, vec![Action::Quit]);
    }

    #[test]
    fn timer_with_nothing_due_requests_no_redraw() {
        let t0 = Instant::now();
        let mut state = new_app(Page::Store);
        let (redraw, actions) = handle_event(&mut state, &Event::TimerElapsed, t0).unwrap();
        assert!(!redraw);
        assert!(actions.is_empty());
    }
}

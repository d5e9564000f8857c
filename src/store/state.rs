//! State value types owned by the global store.
//!
//! These types form the single authoritative copy of application-wide state.
//! They are plain values: all mutation goes through the reducer
//! ([`crate::store::reducer::reduce`]), and the store hands out immutable
//! references only.
//!
//! # Persistence boundary
//!
//! [`CounterState`] and [`ThemeState`] derive `Serialize`/`Deserialize`
//! because they are part of the durable snapshot. [`SearchState`] is
//! deliberately *not* serializable: it is ephemeral by contract, and leaving
//! the derive off makes accidentally persisting it a compile error rather
//! than a bug.

use serde::{Deserialize, Serialize};

/// Counter slice of the global store.
///
/// The value is an unconstrained signed integer; no clamping is applied by
/// any transition.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct CounterState {
    /// Current counter value.
    pub value: i64,
}

/// The two supported display themes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ThemeMode {
    /// Light background palette.
    Light,
    /// Dark background palette.
    Dark,
}

impl ThemeMode {
    /// Returns the opposite mode.
    #[must_use]
    pub const fn toggled(self) -> Self {
        match self {
            Self::Light => Self::Dark,
            Self::Dark => Self::Light,
        }
    }

    /// Lowercase display label ("light" / "dark").
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Light => "light",
            Self::Dark => "dark",
        }
    }
}

impl Default for ThemeMode {
    fn default() -> Self {
        Self::Light
    }
}

/// Theme slice of the global store.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct ThemeState {
    /// Active theme mode.
    pub mode: ThemeMode,
}

/// Search slice of the global store.
///
/// Models the simulated request lifecycle as `loading` plus `error`
/// presence: idle (`loading == false`, `error == None`), pending
/// (`loading == true`), fulfilled (`loading == false`, results replaced) or
/// rejected (`loading == false`, `error == Some(..)`, results untouched).
///
/// Never part of the persisted snapshot.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct SearchState {
    /// Current query text, updated on every keystroke.
    pub query: String,

    /// Results of the most recent fulfilled request, in reference-list order.
    pub results: Vec<String>,

    /// Whether a simulated request is in flight.
    pub loading: bool,

    /// Error message from the most recent rejected request, if any.
    pub error: Option<String>,
}

/// The complete global store state.
///
/// The store owns exactly one value of this type; every committed transition
/// replaces it wholesale with the reducer's output.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct StoreState {
    /// Counter slice (persisted).
    pub counter: CounterState,

    /// Theme slice (persisted).
    pub theme: ThemeState,

    /// Search slice (ephemeral).
    pub search: SearchState,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn theme_mode_toggles_between_both_variants() {
        assert_eq!(ThemeMode::Light.toggled(), ThemeMode::Dark);
        assert_eq!(ThemeMode::Dark.toggled(), ThemeMode::Light);
    }

    #[test]
    fn default_state_is_empty_light_and_idle() {
        let state = StoreState::default();
        assert_eq!(state.counter.value, 0);
        assert_eq!(state.theme.mode, ThemeMode::Light);
        assert!(state.search.query.is_empty());
        assert!(state.search.results.is_empty());
        assert!(!state.search.loading);
        assert!(state.search.error.is_none());
    }

    #[test]
    fn theme_mode_serializes_lowercase() {
        let json = serde_json::to_string(&ThemeMode::Dark).unwrap();
        assert_eq!(json, "\"dark\"");
        let back: ThemeMode = serde_json::from_str("\"light\"").unwrap();
        assert_eq!(back, ThemeMode::Light);
    }
}

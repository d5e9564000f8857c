//! The closed set of named state transitions accepted by the store.
//!
//! A [`Transition`] is a request to move the store from one state to the
//! next. Transitions carry their payloads by value and are applied by the
//! pure reducer; they never perform side effects themselves. The search
//! pipeline and the event handler are the only producers.

/// A named, pure state-update operation accepted by the global store.
///
/// Dispatching any variant always succeeds: the reducer is total over this
/// set and never panics. Variants map one-to-one onto the operations the
/// demo exposes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Transition {
    /// Adds one to the counter.
    Increment,

    /// Subtracts one from the counter.
    Decrement,

    /// Resets the counter to zero. Idempotent.
    ResetCounter,

    /// Flips the theme between light and dark.
    ToggleTheme,

    /// Replaces the search query text.
    SetQuery(String),

    /// Empties the query and results. Leaves `loading`/`error` untouched.
    ClearSearch,

    /// Marks a simulated request as in flight and clears any prior error.
    /// Prior results are kept so the list does not flicker while loading.
    SearchPending,

    /// Completes a simulated request with its result set.
    SearchFulfilled(Vec<String>),

    /// Fails a simulated request with an error message. Results are kept.
    SearchRejected(String),
}

impl Transition {
    /// Stable name for structured logging.
    #[must_use]
    pub const fn kind(&self) -> &'static str {
        match self {
            Self::Increment => "increment",
            Self::Decrement => "decrement",
            Self::ResetCounter => "reset-counter",
            Self::ToggleTheme => "toggle-theme",
            Self::SetQuery(_) => "set-query",
            Self::ClearSearch => "clear-search",
            Self::SearchPending => "search-pending",
            Self::SearchFulfilled(_) => "search-fulfilled",
            Self::SearchRejected(_) => "search-rejected",
        }
    }
}

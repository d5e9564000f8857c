//! View model types representing renderable UI state.
//!
//! Immutable models computed from application state by
//! [`crate::app::AppState::compute_viewmodel`] and consumed by the renderer.
//! They contain no business logic, only display-ready data; both pages
//! produce the same shape, so the component renderers need no knowledge of
//! which state-management style fed them.

/// Complete UI view model for one frame.
#[derive(Debug, Clone)]
pub struct UIViewModel {
    /// Header bar (page title, navigation, store counter readout).
    pub header: HeaderInfo,

    /// The active page's panels.
    pub page: PageViewModel,

    /// Footer keybinding hints.
    pub footer: FooterInfo,
}

/// Header display information.
#[derive(Debug, Clone)]
pub struct HeaderInfo {
    /// Active page title.
    pub title: String,

    /// Navigation hint naming both pages.
    pub nav: String,

    /// Global store counter, shown on every page to demonstrate that store
    /// state is visible from anywhere.
    pub store_counter: i64,
}

/// Footer display information.
#[derive(Debug, Clone)]
pub struct FooterInfo {
    /// Keybinding help text for the current mode.
    pub keybindings: String,
}

/// The three demo panels of the active page.
#[derive(Debug, Clone)]
pub struct PageViewModel {
    /// Counter panel.
    pub counter: CounterPanel,

    /// Theme panel.
    pub theme: ThemePanel,

    /// Search panel.
    pub search: SearchPanel,

    /// One-line teaching note explaining what this page demonstrates.
    pub note: String,
}

/// Counter readout with its ownership label.
#[derive(Debug, Clone)]
pub struct CounterPanel {
    /// Panel heading naming the state owner (e.g. "Counter (local)").
    pub heading: String,

    /// Current value.
    pub value: i64,
}

/// Theme readout with its ownership label.
#[derive(Debug, Clone)]
pub struct ThemePanel {
    /// Panel heading naming the state owner.
    pub heading: String,

    /// Lowercase mode label ("light" / "dark").
    pub mode_label: &'static str,
}

/// Search box, result list, and request status.
#[derive(Debug, Clone)]
pub struct SearchPanel {
    /// Panel heading naming the state owner.
    pub heading: String,

    /// Current query text.
    pub query: String,

    /// Whether keystrokes currently edit the query.
    pub focused: bool,

    /// Whether a simulated request is in flight (always false on the Local
    /// page, which filters synchronously).
    pub loading: bool,

    /// Error from a rejected request, if any.
    pub error: Option<String>,

    /// Items to list.
    pub results: Vec<String>,

    /// Hint shown instead of results when the list is empty.
    pub empty_hint: Option<String>,
}

//! Page and input-focus mode types.
//!
//! Two small state machines control interpretation of user input: which of
//! the two demo pages is showing, and whether keystrokes go to the search
//! box or to the command keys.

/// The two demo pages.
///
/// The pages render the same three panels (counter, theme, search) but wire
/// them to different state owners, which is the entire point of the demo.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Page {
    /// Component-local state: counter and query live in the page itself and
    /// are recreated from defaults every time the page is entered.
    Local,

    /// Global-store state: every panel reads from and dispatches to the
    /// process-wide store; counter and theme survive navigation and
    /// restarts.
    Store,
}

impl Page {
    /// Title shown in the page header.
    #[must_use]
    pub const fn title(self) -> &'static str {
        match self {
            Self::Local => "Local State Demo",
            Self::Store => "Global Store Demo",
        }
    }
}

/// Current input handling mode.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputFocus {
    /// Keystrokes are interpreted as commands (navigate, counter, theme).
    Normal,

    /// Keystrokes edit the active page's search query.
    Search,
}

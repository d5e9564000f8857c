//! Actions representing side effects to be executed by the runtime shim.
//!
//! The event handler returns a `Vec<Action>` after processing each event,
//! keeping state transformation separate from effectful operations in the
//! terminal runtime. Persistence runs as a store subscriber and timers are
//! polled through deadlines, so the only effect left for the handler to
//! request is shutdown.

/// Commands for the runtime shim.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    /// Leave the event loop, restore the terminal, and exit.
    Quit,
}

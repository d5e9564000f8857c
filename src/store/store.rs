//! The global store: single owner of application-wide state.
//!
//! [`Store`] holds the one authoritative [`StoreState`] value, accepts
//! transitions through [`Store::dispatch`], and notifies subscribers
//! synchronously after every commit. It is handed to consumers by explicit
//! reference (constructor or method parameter), never through a process
//! global, and nothing outside this module can mutate the state directly.
//!
//! # Ordering guarantees
//!
//! Transitions dispatched from the same call stack apply in call order. A
//! transition's subscribers all run to completion before `dispatch` returns,
//! so any observer (the persistence bridge in particular) sees every
//! committed state exactly once, in commit order. Subscribers receive a
//! shared reference and cannot re-enter `dispatch`.

use super::reducer::reduce;
use super::state::StoreState;
use super::transition::Transition;

/// Callback invoked after every committed transition.
pub type Subscriber = Box<dyn FnMut(&StoreState)>;

/// Capability returned by [`Store::subscribe`], redeemable once via
/// [`Store::unsubscribe`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SubscriberId(u64);

/// Single process-wide state container with an explicit observer list.
pub struct Store {
    state: StoreState,
    subscribers: Vec<(SubscriberId, Subscriber)>,
    next_subscriber_id: u64,
}

impl Store {
    /// Creates a store with the given initial state.
    ///
    /// Callers that want rehydration pass the output of
    /// [`crate::persist::PersistenceBridge::load_initial_state`] here.
    #[must_use]
    pub fn new(initial: StoreState) -> Self {
        Self {
            state: initial,
            subscribers: Vec::new(),
            next_subscriber_id: 0,
        }
    }

    /// Applies a transition and synchronously notifies all subscribers.
    ///
    /// Always succeeds: the reducer is total over the transition set. The
    /// notification loop runs in registration order and completes before
    /// this method returns.
    pub fn dispatch(&mut self, transition: Transition) {
        let _span = tracing::debug_span!("dispatch", kind = transition.kind()).entered();

        self.state = reduce(&self.state, &transition);

        tracing::trace!(
            counter = self.state.counter.value,
            theme = self.state.theme.mode.label(),
            subscriber_count = self.subscribers.len(),
            "transition committed"
        );

        for (_, subscriber) in &mut self.subscribers {
            subscriber(&self.state);
        }
    }

    /// Returns the current state snapshot. O(1), no side effects.
    #[must_use]
    pub fn state(&self) -> &StoreState {
        &self.state
    }

    /// Registers a callback invoked after every committed transition, in
    /// registration order. Returns the unsubscribe capability.
    pub fn subscribe(&mut self, subscriber: impl FnMut(&StoreState) + 'static) -> SubscriberId {
        let id = SubscriberId(self.next_subscriber_id);
        self.next_subscriber_id += 1;
        self.subscribers.push((id, Box::new(subscriber)));

        tracing::debug!(subscriber_id = id.0, "subscriber registered");
        id
    }

    /// Removes a previously registered subscriber.
    ///
    /// Unknown or already-removed ids are ignored.
    pub fn unsubscribe(&mut self, id: SubscriberId) {
        self.subscribers.retain(|(existing, _)| *existing != id);
    }
}

impl std::fmt::Debug for Store {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Store")
            .field("state", &self.state)
            .field("subscriber_count", &self.subscribers.len())
            .finish()
    }
}

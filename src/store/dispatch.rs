//! Handles that let effects and UI code reach a store without owning it.

use std::sync::{Arc, Weak};

use super::action::Action;
use super::container::Store;
use crate::teardown::TeardownHandle;

/// Callable bound to one store's `dispatch`.
///
/// Holds the store weakly. Dispatching after the store is gone is ignored.
pub struct Dispatch<S, A> {
    store: Weak<Store<S, A>>,
    teardown: TeardownHandle,
}

impl<S, A> Dispatch<S, A>
where
    S: Send + Sync + 'static,
    A: Action,
{
    pub(crate) fn new(store: &Arc<Store<S, A>>) -> Self {
        Self {
            store: Arc::downgrade(store),
            teardown: store.teardown(),
        }
    }

    pub fn dispatch(&self, action: A) {
        match self.store.upgrade() {
            Some(store) => store.dispatch(action),
            None => tracing::debug!(
                action = action.kind(),
                "Dispatch into a dropped store ignored"
            ),
        }
    }

    /// Whether the bound store is still alive.
    pub fn is_connected(&self) -> bool {
        self.store.strong_count() > 0
    }

    /// Fires when the bound store is dropped.
    pub fn teardown(&self) -> TeardownHandle {
        self.teardown.clone()
    }
}

impl<S, A> Clone for Dispatch<S, A> {
    fn clone(&self) -> Self {
        Self {
            store: Weak::clone(&self.store),
            teardown: self.teardown.clone(),
        }
    }
}

/// Reader bound to one store's `get_state`.
pub struct GetState<S, A> {
    store: Weak<Store<S, A>>,
}

impl<S, A> GetState<S, A>
where
    S: Send + Sync + 'static,
    A: Action,
{
    pub(crate) fn new(store: &Arc<Store<S, A>>) -> Self {
        Self {
            store: Arc::downgrade(store),
        }
    }

    /// Current state, or `None` once the store is gone.
    pub fn get(&self) -> Option<Arc<S>> {
        self.store.upgrade().map(|store| store.get_state())
    }
}

impl<S, A> Clone for GetState<S, A> {
    fn clone(&self) -> Self {
        Self {
            store: Weak::clone(&self.store),
        }
    }
}

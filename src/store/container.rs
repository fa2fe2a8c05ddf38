//! The store: single owner of one state value.

use std::sync::Arc;

use parking_lot::RwLock;

use super::action::Action;
use super::dispatch::{Dispatch, GetState};
use super::reducer::Reducer;
use crate::event_bus::{EventBus, Listener, Subscription};
use crate::teardown::{TeardownCoordinator, TeardownHandle};

/// Single source of truth for one state value.
///
/// All mutation goes through [`Store::dispatch`]. The state lock is held only
/// while the reducer runs, never while effects or listeners run, so both may
/// dispatch again.
pub struct Store<S, A> {
    state: RwLock<Arc<S>>,
    reducer: Box<dyn Reducer<S, A>>,
    event_bus: EventBus,
    teardown: TeardownCoordinator,
}

impl<S, A> Store<S, A>
where
    S: Send + Sync + 'static,
    A: Action,
{
    pub fn new<R>(initial_state: S, reducer: R) -> Arc<Self>
    where
        R: Reducer<S, A>,
    {
        Arc::new(Self {
            state: RwLock::new(Arc::new(initial_state)),
            reducer: Box::new(reducer),
            event_bus: EventBus::new(),
            teardown: TeardownCoordinator::new(),
        })
    }

    /// Current state. Cheap: clones the `Arc`, not the state.
    pub fn get_state(&self) -> Arc<S> {
        Arc::clone(&self.state.read())
    }

    /// Run `action` through the reducer.
    ///
    /// Order within one call: state replaced, then the effect (if any) runs
    /// inline, then listeners are notified once. Work the effect defers is
    /// not awaited; its later dispatches broadcast on their own.
    pub fn dispatch(self: &Arc<Self>, action: A) {
        let kind = action.kind();
        let effect = {
            let mut state = self.state.write();
            let (next, effect) = self.reducer.reduce(&**state, action).into_parts();
            *state = Arc::new(next);
            effect
        };

        if let Some(effect) = effect {
            tracing::trace!(action = kind, "Running effect");
            effect(self.dispatcher(), self.state_getter());
        }

        tracing::debug!(
            action = kind,
            listeners = self.event_bus.len(),
            "Action dispatched"
        );
        self.event_bus.emit();
    }

    pub fn subscribe(&self, listener: Listener) -> Subscription {
        self.event_bus.add_listener(listener)
    }

    pub fn dispatcher(self: &Arc<Self>) -> Dispatch<S, A> {
        Dispatch::new(self)
    }

    pub fn state_getter(self: &Arc<Self>) -> GetState<S, A> {
        GetState::new(self)
    }

    pub fn listener_count(&self) -> usize {
        self.event_bus.len()
    }

    /// Handle that fires when this store is dropped.
    pub fn teardown(&self) -> TeardownHandle {
        self.teardown.handle()
    }
}

impl<S, A> Drop for Store<S, A> {
    fn drop(&mut self) {
        self.teardown.signal();
    }
}

use std::any::Any;
use std::sync::{Arc, OnceLock, Weak};

use super::scope::{ContextId, Scope};
use crate::store::{Action, Reducer, Store};

/// Owner of one store for the lifetime of a mounted region.
///
/// The store is built on the first [`render`](Provider::render) and reused
/// by every later one; arguments passed to later renders are ignored.
/// Dropping the provider unmounts it and drops the store.
pub struct Provider<S, A> {
    context: ContextId,
    label: Arc<str>,
    store: OnceLock<Arc<Store<S, A>>>,
}

impl<S, A> Provider<S, A>
where
    S: Send + Sync + 'static,
    A: Action,
{
    pub(crate) fn new(context: ContextId, label: Arc<str>) -> Self {
        Self {
            context,
            label,
            store: OnceLock::new(),
        }
    }

    /// Mount (first call) or re-render the provider under `parent`.
    ///
    /// Returns the scope descendants should receive.
    pub fn render<R>(&self, parent: &Scope, initial_state: S, reducer: R) -> Scope
    where
        R: Reducer<S, A>,
    {
        let store = self.store.get_or_init(|| {
            tracing::info!(store = %self.label, "Store provider mounted");
            Store::new(initial_state, reducer)
        });
        let store: Weak<Store<S, A>> = Arc::downgrade(store);
        let erased: Weak<dyn Any + Send + Sync> = store;
        parent.with_binding(self.context, erased)
    }

    /// The mounted store, if `render` has run.
    pub fn store(&self) -> Option<Arc<Store<S, A>>> {
        self.store.get().cloned()
    }

    pub fn is_mounted(&self) -> bool {
        self.store.get().is_some()
    }
}

impl<S, A> Drop for Provider<S, A> {
    fn drop(&mut self) {
        if self.store.get().is_some() {
            tracing::info!(store = %self.label, "Store provider unmounted");
        }
    }
}

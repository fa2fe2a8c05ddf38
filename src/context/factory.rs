use std::marker::PhantomData;
use std::sync::Arc;

use super::provider::Provider;
use super::scope::{ContextId, Scope};
use super::selector::Selector;
use crate::error::StoreError;
use crate::store::{Action, Dispatch, Store};

/// Provider and accessors for one `(State, Action)` pair.
///
/// Every context gets its own [`ContextId`], so stores bound through one
/// context are invisible to the accessors of any other, even when the state
/// and action types are the same.
pub struct StoreContext<S, A> {
    id: ContextId,
    label: Arc<str>,
    _types: PhantomData<fn() -> (S, A)>,
}

/// Create an isolated store context. `label` only shows up in logs.
pub fn create_store_context<S, A>(label: impl Into<String>) -> StoreContext<S, A>
where
    S: Send + Sync + 'static,
    A: Action,
{
    StoreContext::new(label)
}

impl<S, A> StoreContext<S, A>
where
    S: Send + Sync + 'static,
    A: Action,
{
    pub fn new(label: impl Into<String>) -> Self {
        Self {
            id: ContextId::next(),
            label: Arc::from(label.into()),
            _types: PhantomData,
        }
    }

    pub fn id(&self) -> ContextId {
        self.id
    }

    /// A fresh, unmounted provider for this context.
    pub fn provider(&self) -> Provider<S, A> {
        Provider::new(self.id, Arc::clone(&self.label))
    }

    /// Read a value derived from the scoped store's state.
    ///
    /// `on_change` is how the caller gets re-invoked: it fires whenever a
    /// broadcast changes the selected value. The subscription lives as long
    /// as the returned [`Selector`].
    ///
    /// # Errors
    /// [`StoreError::OutsideProvider`] if `scope` has no live store for this
    /// context.
    pub fn use_store_selector<T, F, N>(
        &self,
        scope: &Scope,
        selector: F,
        on_change: N,
    ) -> Result<Selector<T>, StoreError>
    where
        T: PartialEq + Send + 'static,
        F: Fn(&S) -> T + Send + Sync + 'static,
        N: Fn() + Send + Sync + 'static,
    {
        let store = self.lookup(scope, "use_store_selector")?;
        Ok(Selector::subscribe(&store, selector, on_change))
    }

    /// Callable bound to the scoped store's `dispatch`.
    ///
    /// # Errors
    /// [`StoreError::OutsideProvider`] if `scope` has no live store for this
    /// context.
    pub fn use_store_dispatch(&self, scope: &Scope) -> Result<Dispatch<S, A>, StoreError> {
        let store = self.lookup(scope, "use_store_dispatch")?;
        Ok(store.dispatcher())
    }

    fn lookup(&self, scope: &Scope, accessor: &'static str) -> Result<Arc<Store<S, A>>, StoreError> {
        scope.lookup::<Store<S, A>>(self.id).ok_or_else(|| {
            tracing::error!(store = %self.label, accessor, "Accessor used outside a provider");
            StoreError::OutsideProvider { accessor }
        })
    }
}

impl<S, A> Clone for StoreContext<S, A> {
    fn clone(&self) -> Self {
        Self {
            id: self.id,
            label: Arc::clone(&self.label),
            _types: PhantomData,
        }
    }
}

use std::any::Any;
use std::collections::HashMap;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::{Arc, Weak};

/// Identity of one [`StoreContext`](super::StoreContext).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ContextId(u64);

impl ContextId {
    pub(crate) fn next() -> Self {
        static NEXT: AtomicU64 = AtomicU64::new(1);
        Self(NEXT.fetch_add(1, Ordering::Relaxed))
    }
}

type ErasedStore = Weak<dyn Any + Send + Sync>;

/// A region of the UI tree and the stores visible from it.
///
/// Scopes are immutable: a provider derives a child scope from its parent
/// with its own store bound. Stores are held weakly, so a scope never keeps
/// an unmounted store alive.
#[derive(Debug, Clone, Default)]
pub struct Scope {
    bindings: Arc<HashMap<ContextId, ErasedStore>>,
}

impl Scope {
    /// Scope with no providers above it.
    pub fn root() -> Self {
        Self::default()
    }

    /// Whether `context` has a live store bound in this scope.
    pub fn provides(&self, context: ContextId) -> bool {
        self.bindings
            .get(&context)
            .is_some_and(|store| store.strong_count() > 0)
    }

    pub(crate) fn with_binding(&self, context: ContextId, store: ErasedStore) -> Self {
        let mut bindings = (*self.bindings).clone();
        bindings.insert(context, store);
        Self {
            bindings: Arc::new(bindings),
        }
    }

    pub(crate) fn lookup<T>(&self, context: ContextId) -> Option<Arc<T>>
    where
        T: Any + Send + Sync,
    {
        let store = self.bindings.get(&context)?.upgrade()?;
        store.downcast::<T>().ok()
    }
}

use thiserror::Error;

/// Errors raised by the store context accessors and effect helpers.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum StoreError {
    /// An accessor was called with a scope that has no live store for its
    /// context: no provider above it, or the provider was unmounted.
    #[error("{accessor} must be used within a StoreProvider")]
    OutsideProvider { accessor: &'static str },

    /// An async effect was started with no tokio runtime to run it on.
    #[error("no tokio runtime available to run the effect")]
    NoRuntime,
}

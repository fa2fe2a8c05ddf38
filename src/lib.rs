//! Publish/subscribe state container.
//!
//! A [`Store`] owns one state value and a reducer. Dispatching an action runs
//! the reducer, installs the new state, runs the optional [`Effect`] the
//! reducer returned, and notifies listeners through its [`EventBus`].
//! [`StoreContext`] scopes a store to a region of a UI tree and hands out
//! selector and dispatch accessors.

pub mod config;
pub mod context;
pub mod demo;
pub mod error;
pub mod event_bus;
pub mod logging;
pub mod store;
pub mod teardown;

pub use context::{create_store_context, Provider, Scope, Selector, StoreContext};
pub use error::StoreError;
pub use event_bus::{EventBus, Listener, Subscription};
pub use store::{Action, Dispatch, Effect, GetState, Reducer, Reduction, Store};

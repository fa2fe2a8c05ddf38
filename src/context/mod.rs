//! Scoped store contexts.
//!
//! A [`StoreContext`] is created once per `(State, Action)` pair. Its
//! [`Provider`] owns one store for as long as it is mounted and binds it into
//! a [`Scope`]; the scope is passed down explicitly to whatever needs to read
//! ([`StoreContext::use_store_selector`]) or write
//! ([`StoreContext::use_store_dispatch`]).

mod factory;
mod provider;
mod scope;
mod selector;

pub use factory::{create_store_context, StoreContext};
pub use provider::Provider;
pub use scope::{ContextId, Scope};
pub use selector::Selector;

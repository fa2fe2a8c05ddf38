//! Store primitives.
//!
//! ```text
//! dispatch(action) ──→ Reducer ──→ Reduction { state', effect? }
//!                                        │
//!        state replaced ──→ effect(Dispatch, GetState) ──→ EventBus::emit()
//! ```
//!
//! - **Action**: a tagged value describing an intended transition
//! - **Reducer**: pure function from `(&State, Action)` to a [`Reduction`]
//! - **Effect**: one-shot side computation that may dispatch later
//! - **Store**: sole owner of the state, serializes every mutation

mod action;
mod container;
mod dispatch;
pub mod effect;
mod reducer;

pub use action::Action;
pub use container::Store;
pub use dispatch::{Dispatch, GetState};
pub use effect::Effect;
pub use reducer::{Reducer, Reduction};

//! Terminal demo: the counter bound to a ratatui view through a store
//! context.

pub mod app;
pub mod counter;
pub mod dog;
mod render;
mod terminal_guard;

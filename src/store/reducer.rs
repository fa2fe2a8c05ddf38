//! Reducer trait and its tagged result.

use super::dispatch::{Dispatch, GetState};
use super::effect::Effect;

/// Outcome of a single reduction: the next state, optionally with one effect.
pub enum Reduction<S, A> {
    /// New state only.
    State(S),
    /// New state plus an effect to run right after it is installed.
    WithEffect(S, Effect<S, A>),
}

impl<S, A> Reduction<S, A> {
    pub fn state(next: S) -> Self {
        Reduction::State(next)
    }

    pub fn with_effect<F>(next: S, effect: F) -> Self
    where
        F: FnOnce(Dispatch<S, A>, GetState<S, A>) + Send + 'static,
    {
        Reduction::WithEffect(next, Box::new(effect))
    }

    pub fn next_state(&self) -> &S {
        match self {
            Reduction::State(next) | Reduction::WithEffect(next, _) => next,
        }
    }

    pub fn has_effect(&self) -> bool {
        matches!(self, Reduction::WithEffect(..))
    }

    pub fn into_parts(self) -> (S, Option<Effect<S, A>>) {
        match self {
            Reduction::State(next) => (next, None),
            Reduction::WithEffect(next, effect) => (next, Some(effect)),
        }
    }
}

/// Reducer computes the next state from the current one and an action.
///
/// The state is only borrowed, so a reducer cannot mutate it in place. Any
/// `Fn(&S, A) -> Reduction<S, A>` closure is a reducer.
pub trait Reducer<S, A>: Send + Sync + 'static {
    fn reduce(&self, state: &S, action: A) -> Reduction<S, A>;
}

impl<S, A, F> Reducer<S, A> for F
where
    F: Fn(&S, A) -> Reduction<S, A> + Send + Sync + 'static,
{
    fn reduce(&self, state: &S, action: A) -> Reduction<S, A> {
        self(state, action)
    }
}

//! Counter model for the demo: state, actions, and reducer.

use std::time::Duration;

use super::dog::DogClient;
use crate::store::{effect, Action, Reducer, Reduction};

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CounterState {
    pub count: i64,
    pub dog: DogStatus,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum DogStatus {
    #[default]
    Idle,
    Loading,
    Loaded(String),
    Failed(String),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CounterAction {
    Increment,
    /// Decrement now, increment again after the configured delay.
    Effect,
    FetchDog,
    DogLoaded(String),
    DogFailed(String),
}

impl Action for CounterAction {
    fn kind(&self) -> &'static str {
        match self {
            CounterAction::Increment => "INCREMENT",
            CounterAction::Effect => "EFFECT",
            CounterAction::FetchDog => "FETCH_DOG",
            CounterAction::DogLoaded(_) => "DOG_LOADED",
            CounterAction::DogFailed(_) => "DOG_FAILED",
        }
    }
}

/// Reducer for the demo counter.
///
/// EFFECT and FETCH_DOG schedule their follow-ups on the ambient tokio
/// runtime. Without one, EFFECT waits on a plain thread that store teardown
/// cannot interrupt, and FETCH_DOG fails straight away with DOG_FAILED.
pub struct CounterReducer {
    effect_delay: Duration,
    dog: DogClient,
}

impl CounterReducer {
    pub fn new(effect_delay: Duration, dog: DogClient) -> Self {
        Self { effect_delay, dog }
    }
}

impl Reducer<CounterState, CounterAction> for CounterReducer {
    fn reduce(
        &self,
        state: &CounterState,
        action: CounterAction,
    ) -> Reduction<CounterState, CounterAction> {
        match action {
            CounterAction::Increment => Reduction::state(CounterState {
                count: state.count + 1,
                ..state.clone()
            }),
            CounterAction::Effect => {
                let delay = self.effect_delay;
                Reduction::with_effect(
                    CounterState {
                        count: state.count - 1,
                        ..state.clone()
                    },
                    move |dispatch, _| {
                        effect::dispatch_after(dispatch, delay, CounterAction::Increment)
                    },
                )
            }
            CounterAction::FetchDog => {
                let client = self.dog.clone();
                Reduction::with_effect(
                    CounterState {
                        dog: DogStatus::Loading,
                        ..state.clone()
                    },
                    move |dispatch, _| {
                        let fallback = dispatch.clone();
                        let spawned = effect::spawn(dispatch, move |dispatch| async move {
                            match client.fetch_random_image().await {
                                Ok(url) => dispatch.dispatch(CounterAction::DogLoaded(url)),
                                Err(err) => {
                                    tracing::warn!(url = client.url(), error = %err, "Dog image fetch failed");
                                    dispatch.dispatch(CounterAction::DogFailed(err.to_string()));
                                }
                            }
                        });
                        if let Err(err) = spawned {
                            fallback.dispatch(CounterAction::DogFailed(err.to_string()));
                        }
                    },
                )
            }
            CounterAction::DogLoaded(url) => Reduction::state(CounterState {
                dog: DogStatus::Loaded(url),
                ..state.clone()
            }),
            CounterAction::DogFailed(reason) => Reduction::state(CounterState {
                dog: DogStatus::Failed(reason),
                ..state.clone()
            }),
        }
    }
}

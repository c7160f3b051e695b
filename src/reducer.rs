use crate::action::Action;
use crate::execute::apply;
use crate::options::{create_options, Options, PartialOptions};
use crate::state::State;

/// A pure `(state, action) -> state` function. `None` is the state before the
/// container's first dispatch.
pub trait Reducer {
    fn reduce(&self, state: Option<State>, action: &Action) -> State;
}

impl<F> Reducer for F
where
    F: Fn(Option<State>, &Action) -> State,
{
    fn reduce(&self, state: Option<State>, action: &Action) -> State {
        self(state, action)
    }
}

#[derive(Debug, Clone)]
pub struct SetStateReducer {
    options: Options,
}

impl SetStateReducer {
    pub fn new(options: Options) -> Self {
        Self { options }
    }

    pub fn options(&self) -> &Options {
        &self.options
    }
}

impl Reducer for SetStateReducer {
    fn reduce(&self, state: Option<State>, action: &Action) -> State {
        let state = state.unwrap_or_else(|| self.options.initial_state.clone());
        apply(state, action, &self.options)
    }
}

pub fn create_reducer(options: PartialOptions) -> SetStateReducer {
    SetStateReducer::new(create_options(options))
}

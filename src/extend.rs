use crate::action::Action;
use crate::execute::apply;
use crate::options::{create_options, Options, PartialOptions};
use crate::reducer::Reducer;
use crate::state::State;

pub struct ExtendedReducer<R: Reducer> {
    inner: R,
    options: Options,
}

impl<R: Reducer> ExtendedReducer<R> {
    pub fn new(inner: R, options: Options) -> Self {
        Self { inner, options }
    }

    pub fn options(&self) -> &Options {
        &self.options
    }
}

impl<R: Reducer> Reducer for ExtendedReducer<R> {
    fn reduce(&self, state: Option<State>, action: &Action) -> State {
        let state = match state {
            Some(state) => Some(apply(state, action, &self.options)),
            // Leave the first dispatch to the wrapped reducer's own initial state.
            None if action.kind == self.options.action_type() => {
                Some(apply(State::new(), action, &self.options))
            }
            None => None,
        };
        self.inner.reduce(state, action)
    }
}

pub fn extend_reducer<R: Reducer>(reducer: R, options: PartialOptions) -> ExtendedReducer<R> {
    ExtendedReducer::new(reducer, create_options(options))
}

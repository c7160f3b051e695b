use serde_json::Value;

use crate::action::Action;
use crate::reducer::Reducer;
use crate::state::State;

pub type SliceReducer = Box<dyn Reducer + Send + Sync>;

pub struct CombinedReducer {
    slices: Vec<(String, SliceReducer)>,
}

impl CombinedReducer {
    pub fn new() -> Self {
        Self { slices: Vec::new() }
    }

    pub fn slice(
        mut self,
        key: impl Into<String>,
        reducer: impl Reducer + Send + Sync + 'static,
    ) -> Self {
        self.slices.push((key.into(), Box::new(reducer)));
        self
    }
}

impl Default for CombinedReducer {
    fn default() -> Self {
        Self::new()
    }
}

impl Reducer for CombinedReducer {
    fn reduce(&self, state: Option<State>, action: &Action) -> State {
        let mut state = state.unwrap_or_default();
        let mut next_state = State::new();
        for (key, reducer) in &self.slices {
            let slice = match state.remove(key) {
                Some(Value::Object(slice)) => Some(slice),
                _ => None,
            };
            let slice = reducer.reduce(slice, action);
            next_state.insert(key.clone(), Value::Object(slice));
        }
        next_state
    }
}

pub fn combine_reducers<K, I>(slices: I) -> CombinedReducer
where
    K: Into<String>,
    I: IntoIterator<Item = (K, SliceReducer)>,
{
    CombinedReducer {
        slices: slices
            .into_iter()
            .map(|(key, reducer)| (key.into(), reducer))
            .collect(),
    }
}

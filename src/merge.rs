use crate::state::State;

pub fn default_set_state(state: State, next_state: &State) -> State {
    let mut merged = state;
    for (key, value) in next_state {
        merged.insert(key.clone(), value.clone());
    }
    merged
}

mod action;
mod action_type;
mod combine;
mod execute;
mod extend;
mod merge;
mod options;
mod reducer;
mod set_state;
mod state;
#[cfg(test)]
mod test_support;

pub use action::{set_state, Action, ActionPayload};
pub use action_type::{create_type, ACTION_TYPE};
pub use combine::{combine_reducers, CombinedReducer, SliceReducer};
pub use execute::execute_action;
pub use extend::{extend_reducer, ExtendedReducer};
pub use merge::default_set_state;
pub use options::{create_options, Options, PartialOptions};
pub use reducer::{create_reducer, Reducer, SetStateReducer};
pub use set_state::SetState;
pub use state::{State, StateFn};

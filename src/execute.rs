use std::borrow::Cow;

use crate::action::Action;
use crate::action_type::create_type;
use crate::merge::default_set_state;
use crate::options::Options;
use crate::set_state::SetState;
use crate::state::State;

/// Applies `action` to `state` according to `options`.
///
/// Returns `Cow::Borrowed(state)` when the action type does not match, and a
/// freshly built state otherwise. An override in `options.set_state` wins over
/// the action's own payload. A payload that is neither a mapping nor a function
/// is reported with a warning and leaves the state as it was.
pub fn execute_action<'a>(state: &'a State, action: &Action, options: &Options) -> Cow<'a, State> {
    if action.kind.is_empty() || action.kind != create_type(&options.kind) {
        return Cow::Borrowed(state);
    }

    log::debug!("Handling {} with {:?}", action.kind, action.payload);

    let next_state = state.clone();

    if let Some(transform) = options.set_state.as_ref().and_then(SetState::as_transform) {
        return Cow::Owned(transform(next_state));
    }

    match action.set_state_payload() {
        Some(SetState::Merge(partial)) => Cow::Owned(default_set_state(next_state, partial)),
        Some(SetState::Transform(transform)) => Cow::Owned(transform(next_state)),
        other => {
            let type_name = other.map(SetState::type_name).unwrap_or("undefined");
            log::warn!(
                "{} is not a supported type for action.payload.setState.",
                type_name
            );
            Cow::Owned(next_state)
        }
    }
}

pub(crate) fn apply(state: State, action: &Action, options: &Options) -> State {
    let next_state = match execute_action(&state, action, options) {
        Cow::Owned(next_state) => Some(next_state),
        Cow::Borrowed(_) => None,
    };
    next_state.unwrap_or(state)
}

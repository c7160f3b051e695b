use anyhow::Context;
use serde::{Deserialize, Deserializer};

use crate::action_type::create_type;
use crate::set_state::SetState;

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct Action {
    #[serde(rename = "type", default)]
    pub kind: String,
    #[serde(default)]
    pub payload: Option<ActionPayload>,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct ActionPayload {
    #[serde(rename = "setState", default, deserialize_with = "present_set_state")]
    pub set_state: Option<SetState>,
}

// An explicit `null` stays a payload so it is reported like any other value.
fn present_set_state<'de, D>(deserializer: D) -> Result<Option<SetState>, D::Error>
where
    D: Deserializer<'de>,
{
    SetState::deserialize(deserializer).map(Some)
}

impl Action {
    pub fn new(kind: impl Into<String>) -> Self {
        Self {
            kind: kind.into(),
            payload: None,
        }
    }

    pub fn from_json(json: &str) -> anyhow::Result<Self> {
        serde_json::from_str(json).context("Failed to parse action")
    }

    pub(crate) fn set_state_payload(&self) -> Option<&SetState> {
        self.payload.as_ref().and_then(|p| p.set_state.as_ref())
    }
}

pub fn set_state(payload: impl Into<SetState>, kind: &str) -> Action {
    Action {
        kind: create_type(kind),
        payload: Some(ActionPayload {
            set_state: Some(payload.into()),
        }),
    }
}

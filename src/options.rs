use anyhow::Context;
use serde::Deserialize;
use serde_json::Value;

use crate::action_type::create_type;
use crate::set_state::SetState;
use crate::state::State;

#[derive(Debug, Clone, Default, PartialEq)]
pub struct Options {
    pub initial_state: State,
    pub set_state: Option<SetState>,
    pub kind: String,
    pub extra: serde_json::Map<String, Value>,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct PartialOptions {
    #[serde(rename = "initialState", default)]
    pub initial_state: Option<State>,
    #[serde(rename = "setState", default)]
    pub set_state: Option<SetState>,
    #[serde(rename = "type", default)]
    pub kind: Option<String>,
    #[serde(flatten)]
    pub extra: serde_json::Map<String, Value>,
}

impl PartialOptions {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn initial_state(mut self, state: State) -> Self {
        self.initial_state = Some(state);
        self
    }

    pub fn set_state(mut self, set_state: impl Into<SetState>) -> Self {
        self.set_state = Some(set_state.into());
        self
    }

    pub fn kind(mut self, kind: impl Into<String>) -> Self {
        self.kind = Some(kind.into());
        self
    }

    pub fn extra(mut self, key: impl Into<String>, value: Value) -> Self {
        self.extra.insert(key.into(), value);
        self
    }

    pub fn from_json(json: &str) -> anyhow::Result<Self> {
        serde_json::from_str(json).context("Failed to parse reducer options")
    }
}

impl Options {
    pub fn from_json(json: &str) -> anyhow::Result<Self> {
        PartialOptions::from_json(json).map(create_options)
    }

    pub fn action_type(&self) -> String {
        create_type(&self.kind)
    }
}

impl From<PartialOptions> for Options {
    fn from(partial: PartialOptions) -> Self {
        create_options(partial)
    }
}

pub fn create_options(partial: PartialOptions) -> Options {
    let defaults = Options::default();
    Options {
        initial_state: partial.initial_state.unwrap_or(defaults.initial_state),
        set_state: partial.set_state.or(defaults.set_state),
        kind: partial.kind.unwrap_or(defaults.kind),
        extra: partial.extra,
    }
}

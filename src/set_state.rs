use std::fmt::Debug;
use std::sync::Arc;

use serde::{Deserialize, Deserializer};
use serde_json::Value;

use crate::state::{State, StateFn};

#[derive(Clone)]
pub enum SetState {
    Merge(State),
    Transform(StateFn),
    Unsupported(Value),
}

impl SetState {
    pub fn transform<F>(f: F) -> Self
    where
        F: Fn(State) -> State + Send + Sync + 'static,
    {
        Self::Transform(Arc::new(f))
    }

    pub fn type_name(&self) -> &'static str {
        match self {
            Self::Merge(_) => "object",
            Self::Transform(_) => "function",
            Self::Unsupported(value) => match value {
                Value::Null => "null",
                Value::Bool(_) => "boolean",
                Value::Number(_) => "number",
                Value::String(_) => "string",
                Value::Array(_) => "array",
                Value::Object(_) => "object",
            },
        }
    }

    pub(crate) fn as_transform(&self) -> Option<&StateFn> {
        match self {
            Self::Transform(f) => Some(f),
            _ => None,
        }
    }
}

impl From<State> for SetState {
    fn from(state: State) -> Self {
        Self::Merge(state)
    }
}

impl From<Value> for SetState {
    fn from(value: Value) -> Self {
        match value {
            Value::Object(state) => Self::Merge(state),
            other => Self::Unsupported(other),
        }
    }
}

impl<'de> Deserialize<'de> for SetState {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        Value::deserialize(deserializer).map(SetState::from)
    }
}

impl PartialEq for SetState {
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (Self::Merge(a), Self::Merge(b)) => a == b,
            (Self::Transform(a), Self::Transform(b)) => Arc::ptr_eq(a, b),
            (Self::Unsupported(a), Self::Unsupported(b)) => a == b,
            _ => false,
        }
    }
}

impl Debug for SetState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Merge(state) => f.debug_tuple("Merge").field(state).finish(),
            Self::Transform(_) => f.write_str("Transform"),
            Self::Unsupported(value) => f.debug_tuple("Unsupported").field(value).finish(),
        }
    }
}

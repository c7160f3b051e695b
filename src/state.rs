use std::sync::Arc;

pub type State = serde_json::Map<String, serde_json::Value>;

pub type StateFn = Arc<dyn Fn(State) -> State + Send + Sync>;

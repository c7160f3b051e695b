pub const ACTION_TYPE: &str = "SETSTATE_MW";

pub fn create_type(suffix: &str) -> String {
    if suffix.is_empty() {
        ACTION_TYPE.to_string()
    } else {
        format!("{}:{}", ACTION_TYPE, suffix)
    }
}

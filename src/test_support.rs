use std::cell::RefCell;
use std::sync::Once;

use log::{Level, Log, Metadata, Record};
use serde_json::Value;

use crate::state::State;

pub fn state(value: Value) -> State {
    match value {
        Value::Object(map) => map,
        _ => panic!("not an object"),
    }
}

thread_local! {
    static RECORDS: RefCell<Vec<(Level, String)>> = RefCell::new(Vec::new());
}

// Records land in the calling thread's buffer, so parallel tests stay apart.
struct CaptureLogger;

impl Log for CaptureLogger {
    fn enabled(&self, _metadata: &Metadata) -> bool {
        true
    }

    fn log(&self, record: &Record) {
        RECORDS.with(|records| {
            records
                .borrow_mut()
                .push((record.level(), record.args().to_string()))
        });
    }

    fn flush(&self) {}
}

static LOGGER: CaptureLogger = CaptureLogger;
static INIT: Once = Once::new();

/// Runs `f` and returns what it logged at warn level or above on this thread.
pub fn capture_warnings<T>(f: impl FnOnce() -> T) -> (T, Vec<String>) {
    INIT.call_once(|| {
        if log::set_logger(&LOGGER).is_ok() {
            log::set_max_level(log::LevelFilter::Trace);
        }
    });
    RECORDS.with(|records| records.borrow_mut().clear());
    let result = f();
    let warnings = RECORDS.with(|records| {
        records
            .borrow_mut()
            .drain(..)
            .filter(|(level, _)| *level <= Level::Warn)
            .map(|(_, message)| message)
            .collect()
    });
    (result, warnings)
}

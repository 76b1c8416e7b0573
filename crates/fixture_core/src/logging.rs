//! Injected logging collaborator.
//!
//! Fixtures log through a sink handle passed per call instead of a
//! process-global logger, so tests can assert on the exact lines a
//! variant emits without installing a subscriber.

#[cfg(feature = "test-helpers")]
use std::sync::Mutex;

/// Minimum severity is Info, so a sink receives every record; filtering
/// is the subscriber's job, not the sink's.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LogLevel {
    Info,
    Error,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LogRecord {
    pub level: LogLevel,
    pub message: String,
}

pub trait LogSink {
    fn log(&self, level: LogLevel, message: &str);
}

/// Capture double for handler tests: stores every record in order.
#[cfg(feature = "test-helpers")]
pub struct RecordingSink {
    records: Mutex<Vec<LogRecord>>,
}

#[cfg(feature = "test-helpers")]
impl RecordingSink {
    pub fn new() -> Self {
        Self {
            records: Mutex::new(Vec::new()),
        }
    }

    pub fn records(&self) -> Vec<LogRecord> {
        self.records.lock().expect("poisoned mutex").clone()
    }

    pub fn messages_at(&self, level: LogLevel) -> Vec<String> {
        self.records()
            .into_iter()
            .filter(|record| record.level == level)
            .map(|record| record.message)
            .collect()
    }
}

#[cfg(feature = "test-helpers")]
impl Default for RecordingSink {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(feature = "test-helpers")]
impl LogSink for RecordingSink {
    fn log(&self, level: LogLevel, message: &str) {
        self.records
            .lock()
            .expect("poisoned mutex")
            .push(LogRecord {
                level,
                message: message.to_string(),
            });
    }
}

use fixture_core::logging::{LogLevel, LogSink};

/// Forwards fixture log lines to the process-wide `tracing` subscriber
/// the binaries install.
pub struct TracingSink;

impl LogSink for TracingSink {
    fn log(&self, level: LogLevel, message: &str) {
        match level {
            LogLevel::Info => tracing::info!("{message}"),
            LogLevel::Error => tracing::error!("{message}"),
        }
    }
}

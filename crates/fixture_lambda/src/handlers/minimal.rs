use fixture_core::contract::{Event, HandlerResponse, InvocationContext};
use fixture_core::logging::{LogLevel, LogSink};

/// Smallest fixture: one informational line, nothing on the error
/// channel.
pub fn handle(_event: &Event, _ctx: &InvocationContext, log: &dyn LogSink) -> HandlerResponse {
    log.log(LogLevel::Info, "received event");
    HandlerResponse::fixture()
}

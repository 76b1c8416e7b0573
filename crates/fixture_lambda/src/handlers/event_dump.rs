use fixture_core::contract::{Event, HandlerResponse, InvocationContext};
use fixture_core::logging::{LogLevel, LogSink};

/// Fixture that dumps the raw event on the error channel so the
/// framework's log capture can be checked against unusual payloads.
pub fn handle(event: &Event, _ctx: &InvocationContext, log: &dyn LogSink) -> HandlerResponse {
    log.log(LogLevel::Info, "received event");
    log.log(LogLevel::Error, &event.to_string());
    HandlerResponse::fixture()
}

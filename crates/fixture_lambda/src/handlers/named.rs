use fixture_core::contract::{Event, HandlerResponse, InvocationContext};
use fixture_core::logging::{LogLevel, LogSink};

/// Fixture that announces which function name the platform resolved.
pub fn handle(_event: &Event, ctx: &InvocationContext, log: &dyn LogSink) -> HandlerResponse {
    log.log(
        LogLevel::Info,
        &format!("Handling as {}", ctx.function_name),
    );
    HandlerResponse::fixture()
}

#[cfg(test)]
mod tests {
    use fixture_core::logging::RecordingSink;
    use serde_json::{json, Value};

    use super::*;

    fn context() -> InvocationContext {
        InvocationContext::new("my-func", "req-1")
    }

    #[test]
    fn returns_fixed_response() {
        let sink = RecordingSink::new();
        let response = handle(&json!({"any": "payload"}), &context(), &sink);

        assert_eq!(response.status_code, 200);
        assert_eq!(response.body, "hello python");
    }

    #[test]
    fn logs_one_info_line_naming_the_function() {
        let sink = RecordingSink::new();
        handle(&Value::Null, &context(), &sink);

        let records = sink.records();
        assert_eq!(records.len(), 1);
        assert_eq!(records[0].level, LogLevel::Info);
        assert!(records[0].message.contains("my-func"));
        assert!(sink.messages_at(LogLevel::Error).is_empty());
    }

    #[test]
    fn response_is_independent_of_the_event() {
        let sink = RecordingSink::new();
        let from_null = handle(&Value::Null, &context(), &sink);
        let from_object = handle(&json!({"nested": {"deep": [1, 2, 3]}}), &context(), &sink);

        assert_eq!(from_null, from_object);
    }

    #[test]
    fn repeated_invocations_return_identical_responses() {
        let sink = RecordingSink::new();
        let event = json!({"same": "input"});
        let first = handle(&event, &context(), &sink);
        let second = handle(&event, &context(), &sink);

        assert_eq!(first, second);
    }
}

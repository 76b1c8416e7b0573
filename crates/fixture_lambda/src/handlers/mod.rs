//! The three fixture variants. Near-identical on purpose: the framework
//! under test exercises them as distinct deployed functions, so no
//! shared handler abstraction is assumed beyond the log sink.

pub mod event_dump;
pub mod minimal;
pub mod named;

#[cfg(test)]
mod tests {
    use fixture_core::contract::InvocationContext;
    use fixture_core::gateway::{is_error_like, request_event, DEFAULT_STAGE};
    use fixture_core::logging::RecordingSink;
    use serde_json::json;

    use super::*;

    #[test]
    fn all_variants_agree_on_the_response_for_a_gateway_event() {
        let event = request_event("POST", "/fixtures", json!({"name": "world"}), DEFAULT_STAGE);
        let ctx = InvocationContext::new("my-func", "req-1");
        let sink = RecordingSink::new();

        let responses = [
            named::handle(&event, &ctx, &sink),
            event_dump::handle(&event, &ctx, &sink),
            minimal::handle(&event, &ctx, &sink),
        ];

        assert!(responses.iter().all(|response| response == &responses[0]));
    }

    #[test]
    fn fixture_responses_are_never_classified_as_errors() {
        let event = request_event("GET", "/", serde_json::Value::Null, DEFAULT_STAGE);
        let ctx = InvocationContext::new("my-func", "req-1");
        let sink = RecordingSink::new();

        let response = named::handle(&event, &ctx, &sink);
        let serialized = serde_json::to_value(response).expect("response should serialize");

        assert!(!is_error_like(&serialized));
    }
}

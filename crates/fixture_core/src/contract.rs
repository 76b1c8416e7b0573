use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Response body every fixture returns, regardless of input.
pub const FIXTURE_BODY: &str = "hello python";
pub const FIXTURE_STATUS_CODE: u16 = 200;

/// Per-invocation input payload. Opaque to the fixtures: carried as-is,
/// never parsed, never branched on.
pub type Event = Value;

/// Read-only metadata the invoking platform supplies alongside the event.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct InvocationContext {
    pub function_name: String,
    pub request_id: String,
}

impl InvocationContext {
    pub fn new(function_name: impl Into<String>, request_id: impl Into<String>) -> Self {
        Self {
            function_name: function_name.into(),
            request_id: request_id.into(),
        }
    }
}

/// The two-field record a fixture hands back to the platform.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct HandlerResponse {
    #[serde(rename = "statusCode")]
    pub status_code: u16,
    pub body: String,
}

impl HandlerResponse {
    /// The fixed response shared by all fixture variants, built fresh
    /// per call so each invocation owns its record.
    pub fn fixture() -> Self {
        Self {
            status_code: FIXTURE_STATUS_CODE,
            body: FIXTURE_BODY.to_string(),
        }
    }
}

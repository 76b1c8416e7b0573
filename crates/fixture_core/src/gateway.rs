//! Gateway-shaped helpers for exercising the fixtures locally: the
//! proxy event a handler receives and the classification a caller
//! applies to what comes back.

use serde_json::{json, Value};

/// Stage used when the caller does not care which one appears in the
/// request context.
pub const DEFAULT_STAGE: &str = "dev";

/// Build the API-Gateway proxy event for a local invocation. Identity
/// and resource fields hold fixed local placeholders; only method,
/// path, body, and stage vary per call.
pub fn request_event(method: &str, path: &str, body: Value, stage: &str) -> Value {
    json!({
        "httpMethod": method,
        "path": path,
        "body": body,
        "headers": {},
        "queryStringParameters": null,
        "pathParameters": null,
        "stageVariables": null,
        "isBase64Encoded": false,
        "requestContext": {
            "path": "/",
            "accountId": "123",
            "resourceId": "123",
            "stage": stage,
            "requestId": "123",
            "identity": {
                "sourceIp": "127.0.0.1",
                "userAgent": "localhost-fixtures",
            },
            "resourcePath": "/",
            "httpMethod": method,
            "apiId": "123",
        },
    })
}

/// True when a payload has the shape of an unhandled Lambda error.
/// `errorMessage` alone is enough; the full
/// `errorMessage`/`errorType`/`stackTrace` triple implies it.
///
/// https://aws.amazon.com/blogs/compute/error-handling-patterns-in-amazon-api-gateway-and-aws-lambda/
pub fn is_error_like(payload: &Value) -> bool {
    payload
        .as_object()
        .is_some_and(|object| object.contains_key("errorMessage"))
}

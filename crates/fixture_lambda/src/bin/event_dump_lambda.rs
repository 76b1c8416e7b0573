use fixture_core::contract::{HandlerResponse, InvocationContext};
use fixture_lambda::handlers::event_dump;
use fixture_lambda::sinks::TracingSink;
use lambda_runtime::{service_fn, Error, LambdaEvent};
use serde_json::Value;
use tracing_subscriber::EnvFilter;

const DEFAULT_FUNCTION_NAME: &str = "event-dump";

async fn handle_request(event: LambdaEvent<Value>) -> Result<HandlerResponse, Error> {
    let ctx = InvocationContext::new(
        std::env::var("AWS_LAMBDA_FUNCTION_NAME")
            .unwrap_or_else(|_| DEFAULT_FUNCTION_NAME.to_string()),
        event.context.request_id.clone(),
    );
    Ok(event_dump::handle(&event.payload, &ctx, &TracingSink))
}

#[tokio::main]
async fn main() -> Result<(), Error> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();
    lambda_runtime::run(service_fn(handle_request)).await
}

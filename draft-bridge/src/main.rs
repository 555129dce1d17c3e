//! Draft Bridge Lambda - ALB-to-SQS request forwarder.
//!
//! Receives ALB target-group events, forwards their query parameters to the
//! configured SQS queue as a JSON message and answers with an ALB-shaped
//! JSON response.

use lambda_runtime::{service_fn, Error, LambdaEvent};
use tracing::info;
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use bridge::{AlbRequest, AlbResponse, Config, Forwarder, SqsSender};

#[tokio::main]
async fn main() -> Result<(), Error> {
    // Initialize structured JSON logging
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    tracing_subscriber::registry()
        .with(filter)
        .with(fmt::layer().json().flatten_event(true))
        .init();

    info!("draft_bridge_starting");

    // Load configuration from environment
    let config = Config::from_env();
    info!(queue_url_set = config.has_queue_url(), "config_loaded");

    // One SQS client for the lifetime of the execution environment;
    // invocations share it by reference.
    let aws_config = aws_config::load_from_env().await;
    let sender = SqsSender::new(aws_sdk_sqs::Client::new(&aws_config));
    info!("sqs_sender_created");

    let forwarder = Forwarder::new(config, sender);
    let forwarder_ref = &forwarder;

    lambda_runtime::run(service_fn(|event: LambdaEvent<AlbRequest>| async move {
        let (payload, _context) = event.into_parts();
        Ok::<AlbResponse, Error>(forwarder_ref.handle(payload).await)
    }))
    .await
}

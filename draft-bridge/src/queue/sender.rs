//! Async SQS sender behind a small capability trait.
//!
//! The handler depends on [`QueueSend`] rather than the SDK client directly,
//! so tests can substitute a double and simulate provider failures without a
//! network dependency.

use async_trait::async_trait;
use aws_sdk_sqs::error::DisplayErrorContext;
use aws_sdk_sqs::Client;
use thiserror::Error;
use tracing::info;

/// Errors from a queue send attempt.
#[derive(Debug, Error)]
pub enum SendError {
    /// The provider rejected or failed the send; carries the provider's
    /// error text verbatim.
    #[error("{0}")]
    Provider(String),

    /// The payload could not be serialized to JSON.
    #[error("{0}")]
    Serialize(#[from] serde_json::Error),
}

/// Fire-and-forget enqueue against a message queue.
///
/// Exactly one send call per invocation; retries are the caller's problem
/// and none are performed here.
#[async_trait]
pub trait QueueSend: Send + Sync {
    /// Send `body` to the queue at `queue_url`, returning the
    /// provider-assigned message id.
    async fn send(&self, queue_url: &str, body: &str) -> Result<String, SendError>;
}

/// Production [`QueueSend`] implementation backed by the AWS SQS client.
#[derive(Clone)]
pub struct SqsSender {
    client: Client,
}

impl SqsSender {
    /// Create a sender from a configured SQS client.
    pub fn new(client: Client) -> Self {
        Self { client }
    }
}

#[async_trait]
impl QueueSend for SqsSender {
    async fn send(&self, queue_url: &str, body: &str) -> Result<String, SendError> {
        let output = self
            .client
            .send_message()
            .queue_url(queue_url)
            .message_body(body)
            .send()
            .await
            .map_err(|e| SendError::Provider(DisplayErrorContext(&e).to_string()))?;

        // SQS always assigns an id; an absent one degrades to empty rather
        // than failing an otherwise successful send.
        let message_id = output.message_id().unwrap_or_default().to_string();

        info!(
            message_id = %message_id,
            body_length = body.len(),
            "sqs_message_sent"
        );

        Ok(message_id)
    }
}

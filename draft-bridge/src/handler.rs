//! Request forwarding handler.
//!
//! One linear path per invocation: validate configuration, extract query
//! parameters, send a single SQS message, map the outcome to an ALB
//! response. Fails fast on missing configuration before any I/O.

use std::collections::BTreeMap;

use tracing::{error, info, warn};

use crate::alb::{AlbRequest, AlbResponse};
use crate::config::Config;
use crate::queue::{QueueSend, SendError};

/// Body message when `SQS_QUEUE_URL` is not configured.
pub const MISSING_CONFIG_MESSAGE: &str = "Missing SQS queue URL configuration";

/// Prefix for the body message when the send fails.
pub const SEND_FAILED_PREFIX: &str = "Failed to send message to SQS: ";

/// Fixed body message on a successful send, independent of the request.
pub const SUCCESS_MESSAGE: &str = "Weekly summary draft and MyChart message draft \
     successfully requested. Please allow 10-15 seconds delay and move to Chart \
     Review and look for the drafts.";

/// Serialize the query parameters and issue exactly one queue send.
///
/// No local retry; a provider failure surfaces as-is to the caller.
pub async fn send_message<S: QueueSend + ?Sized>(
    sender: &S,
    queue_url: &str,
    payload: &BTreeMap<String, String>,
) -> Result<String, SendError> {
    let body = serde_json::to_string(payload)?;
    sender.send(queue_url, &body).await
}

/// Stateless request forwarder shared across invocations.
///
/// Holds the configuration and the queue sender; each call to
/// [`handle`](Forwarder::handle) is independent.
pub struct Forwarder<S> {
    config: Config,
    sender: S,
}

impl<S: QueueSend> Forwarder<S> {
    pub fn new(config: Config, sender: S) -> Self {
        Self { config, sender }
    }

    /// Handle one ALB event.
    ///
    /// Returns 200 with a fixed success message when the message was
    /// enqueued, 500 otherwise. All provider error classes map to 500.
    pub async fn handle(&self, event: AlbRequest) -> AlbResponse {
        if !self.config.has_queue_url() {
            warn!("queue_url_missing");
            return AlbResponse::json(500, MISSING_CONFIG_MESSAGE);
        }

        let params = event.query_parameters();
        info!(query_param_count = params.len(), "request_received");

        match send_message(&self.sender, &self.config.queue_url, &params).await {
            Ok(message_id) => {
                info!(message_id = %message_id, "draft_request_enqueued");
                AlbResponse::json(200, SUCCESS_MESSAGE)
            }
            Err(e) => {
                error!(error = %e, "sqs_send_failed");
                AlbResponse::json(500, &format!("{}{}", SEND_FAILED_PREFIX, e))
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Mutex;

    use async_trait::async_trait;

    use super::*;

    /// Recording queue double with a programmable outcome.
    struct FakeSender {
        fail_with: Option<String>,
        sent: Mutex<Vec<(String, String)>>,
    }

    impl FakeSender {
        fn succeeding() -> Self {
            FakeSender {
                fail_with: None,
                sent: Mutex::new(Vec::new()),
            }
        }

        fn failing(error_text: &str) -> Self {
            FakeSender {
                fail_with: Some(error_text.to_string()),
                sent: Mutex::new(Vec::new()),
            }
        }

        fn sent(&self) -> Vec<(String, String)> {
            self.sent.lock().unwrap().clone()
        }
    }

    #[async_trait]
    impl QueueSend for FakeSender {
        async fn send(&self, queue_url: &str, body: &str) -> Result<String, SendError> {
            self.sent
                .lock()
                .unwrap()
                .push((queue_url.to_string(), body.to_string()));
            match &self.fail_with {
                Some(text) => Err(SendError::Provider(text.clone())),
                None => Ok("mid-123".to_string()),
            }
        }
    }

    fn body_message(response: &AlbResponse) -> String {
        let body: serde_json::Value = serde_json::from_str(&response.body).unwrap();
        body["message"].as_str().unwrap().to_string()
    }

    fn event_with_params(json: &str) -> AlbRequest {
        serde_json::from_str(json).unwrap()
    }

    #[tokio::test]
    async fn test_missing_queue_url_fails_fast() {
        let forwarder = Forwarder::new(Config::new(""), FakeSender::succeeding());

        let response = forwarder.handle(event_with_params("{}")).await;

        assert_eq!(response.status_code, 500);
        assert_eq!(body_message(&response), MISSING_CONFIG_MESSAGE);
        // The queue service must never be invoked on a config error.
        assert!(forwarder.sender.sent().is_empty());
    }

    #[tokio::test]
    async fn test_missing_params_forward_empty_payload() {
        let forwarder = Forwarder::new(
            Config::new("https://sqs.example.com/drafts"),
            FakeSender::succeeding(),
        );

        let response = forwarder.handle(AlbRequest::default()).await;

        assert_eq!(response.status_code, 200);
        let sent = forwarder.sender.sent();
        assert_eq!(sent.len(), 1);
        assert_eq!(sent[0].1, "{}");
    }

    #[tokio::test]
    async fn test_success_returns_fixed_message() {
        let forwarder = Forwarder::new(
            Config::new("https://sqs.example.com/drafts"),
            FakeSender::succeeding(),
        );

        let event = event_with_params(r#"{"queryStringParameters": {"a": "1", "b": "2"}}"#);
        let response = forwarder.handle(event).await;

        assert_eq!(response.status_code, 200);
        assert_eq!(body_message(&response), SUCCESS_MESSAGE);

        let sent = forwarder.sender.sent();
        assert_eq!(sent.len(), 1);
        assert_eq!(sent[0].0, "https://sqs.example.com/drafts");
        assert_eq!(sent[0].1, r#"{"a":"1","b":"2"}"#);
    }

    #[tokio::test]
    async fn test_success_message_independent_of_params() {
        let forwarder = Forwarder::new(
            Config::new("https://sqs.example.com/drafts"),
            FakeSender::succeeding(),
        );

        let event = event_with_params(r#"{"queryStringParameters": {"patient": "42"}}"#);
        let response = forwarder.handle(event).await;

        assert_eq!(body_message(&response), SUCCESS_MESSAGE);
    }

    #[tokio::test]
    async fn test_send_failure_maps_to_500_with_provider_text() {
        let forwarder = Forwarder::new(
            Config::new("https://sqs.example.com/drafts"),
            FakeSender::failing("simulated outage"),
        );

        let response = forwarder.handle(AlbRequest::default()).await;

        assert_eq!(response.status_code, 500);
        assert_eq!(
            body_message(&response),
            "Failed to send message to SQS: simulated outage"
        );
    }

    #[tokio::test]
    async fn test_send_message_serializes_deterministically() {
        let sender = FakeSender::succeeding();
        let mut payload = BTreeMap::new();
        payload.insert("b".to_string(), "2".to_string());
        payload.insert("a".to_string(), "1".to_string());

        let message_id = send_message(&sender, "https://sqs.example.com/drafts", &payload)
            .await
            .unwrap();

        assert_eq!(message_id, "mid-123");
        assert_eq!(sender.sent()[0].1, r#"{"a":"1","b":"2"}"#);
    }
}

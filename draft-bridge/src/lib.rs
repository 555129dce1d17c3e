//! Draft Bridge - thin ALB-to-SQS request forwarder.
//!
//! This library backs the `draft-bridge` Lambda, which sits behind an
//! Application Load Balancer and does exactly one thing per invocation:
//! take the query parameters off the inbound request and enqueue them as a
//! JSON message for the downstream draft generator.
//!
//! ## Architecture
//!
//! ```text
//! ALB → draft-bridge Lambda → SQS queue → draft generator
//! ```
//!
//! There is no retry, no batching and no state across invocations; the
//! response is either 200 (message enqueued) or 500 (missing configuration
//! or the send failed).

pub mod alb;
pub mod config;
pub mod handler;
pub mod queue;

// Re-export commonly used types
pub use alb::{AlbRequest, AlbResponse};
pub use config::Config;
pub use handler::Forwarder;
pub use queue::{QueueSend, SendError, SqsSender};

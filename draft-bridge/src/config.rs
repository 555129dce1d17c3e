//! Configuration module for environment variable parsing.
//!
//! Reads all configuration from environment variables once at startup; the
//! resulting struct is passed into the handler at construction time so tests
//! never have to mutate process globals.

use std::env;

/// Application configuration loaded from environment variables.
#[derive(Debug, Clone)]
pub struct Config {
    /// URL of the target SQS queue.
    ///
    /// Empty when `SQS_QUEUE_URL` is unset; the handler treats that as a
    /// configuration error and refuses to send.
    pub queue_url: String,
}

impl Config {
    /// Load configuration from environment variables.
    pub fn from_env() -> Self {
        Config {
            queue_url: env::var("SQS_QUEUE_URL").unwrap_or_default(),
        }
    }

    /// Build a configuration with an explicit queue URL.
    pub fn new(queue_url: impl Into<String>) -> Self {
        Config {
            queue_url: queue_url.into(),
        }
    }

    /// Whether a queue URL is configured at all.
    pub fn has_queue_url(&self) -> bool {
        !self.queue_url.is_empty()
    }
}

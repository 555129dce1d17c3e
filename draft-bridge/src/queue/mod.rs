//! Queue module for SQS operations.
//!
//! Exposes the [`QueueSend`] capability trait and its production
//! implementation, [`SqsSender`].

pub mod sender;

pub use sender::{QueueSend, SendError, SqsSender};

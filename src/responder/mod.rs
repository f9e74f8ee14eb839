//! Reply sources for the chat session
//!
//! This module defines the `Responder` trait that all reply sources
//! implement, along with the canned-reply mock engine and the remote
//! backend implementation.

pub mod mock;
pub mod remote;

pub use mock::MockResponder;
pub use remote::RemoteResponder;

use crate::error::Result;
use async_trait::async_trait;

/// Source of bot replies for a chat session
///
/// Implementations produce the bot's answer to a single user input. The
/// mock engine answers from canned replies; the remote implementation
/// forwards to the backend `/chat` endpoint.
#[async_trait]
pub trait Responder: Send + Sync {
    /// Produce the bot reply for the given user input
    async fn reply(&self, input: &str) -> Result<String>;
}

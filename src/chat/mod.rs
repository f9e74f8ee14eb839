//! Chat transcript and session management
//!
//! This module contains the message/transcript types and the session
//! controller that drives the simulated conversation.

pub mod message;
pub mod session;

pub use message::{Message, Role};
pub use session::{ChatSession, ChatState};

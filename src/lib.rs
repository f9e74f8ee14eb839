//! SEObot - AI SEO assistant CLI library
//!
//! This library provides the core functionality for the SEObot assistant:
//! the canned-reply response engine, the chat session controller, and the
//! backend API client.
//!
//! # Architecture
//!
//! The library is organized into the following modules:
//!
//! - `responder`: Reply sources — the mock engine and the remote backend
//! - `chat`: Transcript types and the session controller
//! - `api`: Backend API client and payload types
//! - `config`: Configuration management and validation
//! - `error`: Error types and result aliases
//! - `cli`: Command-line interface definition
//!
//! # Example
//!
//! ```no_run
//! use seobot::config::ChatConfig;
//! use seobot::responder::MockResponder;
//! use seobot::ChatSession;
//! use std::sync::Arc;
//!
//! #[tokio::main]
//! async fn main() -> anyhow::Result<()> {
//!     let responder = Arc::new(MockResponder::new()?);
//!     let session = ChatSession::new(responder, &ChatConfig::default());
//!
//!     let mut rx = session.subscribe();
//!     session.send_message("hello");
//!     let state = rx.wait_for(|s| !s.is_typing()).await?;
//!     println!("{}", state.messages.last().unwrap().content);
//!     Ok(())
//! }
//! ```

pub mod api;
pub mod chat;
pub mod cli;
pub mod commands;
pub mod config;
pub mod error;
pub mod responder;

// Re-export commonly used types
pub use api::ApiClient;
pub use chat::{ChatSession, ChatState, Message, Role};
pub use config::Config;
pub use error::{Result, SeobotError};
pub use responder::{MockResponder, RemoteResponder, Responder};

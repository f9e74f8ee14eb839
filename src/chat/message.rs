//! Transcript message types
//!
//! Messages are immutable once created and ordered by insertion into an
//! append-only transcript. Bot messages carry a `reply_to` tag naming the
//! user message that triggered them, so completions that arrive out of
//! order stay attributable.

use chrono::{DateTime, Utc};
use colored::Colorize;
use serde::{Deserialize, Serialize};
use std::fmt;
use uuid::Uuid;

/// Role of a message sender
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    /// Session-generated messages (welcome banner)
    System,
    /// Messages typed by the user
    User,
    /// Replies produced by a responder
    Bot,
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::System => write!(f, "system"),
            Self::User => write!(f, "user"),
            Self::Bot => write!(f, "bot"),
        }
    }
}

impl Role {
    /// Colored speaker tag for terminal display
    pub fn colored_tag(&self) -> String {
        match self {
            Self::System => format!("{}", "seobot".purple()),
            Self::User => format!("{}", "you".green()),
            Self::Bot => format!("{}", "seobot".cyan()),
        }
    }
}

/// A single transcript entry
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Message {
    /// Unique message identifier
    pub id: Uuid,
    /// Sender role
    pub role: Role,
    /// Message text
    pub content: String,
    /// Creation time
    pub timestamp: DateTime<Utc>,
    /// For bot messages, the id of the user message that triggered this reply
    #[serde(skip_serializing_if = "Option::is_none")]
    pub reply_to: Option<Uuid>,
}

impl Message {
    fn new(role: Role, content: impl Into<String>, reply_to: Option<Uuid>) -> Self {
        Self {
            id: Uuid::new_v4(),
            role,
            content: content.into(),
            timestamp: Utc::now(),
            reply_to,
        }
    }

    /// Create a user message
    pub fn user(content: impl Into<String>) -> Self {
        Self::new(Role::User, content, None)
    }

    /// Create a system message
    pub fn system(content: impl Into<String>) -> Self {
        Self::new(Role::System, content, None)
    }

    /// Create a bot reply to the given user message
    pub fn bot(content: impl Into<String>, reply_to: Uuid) -> Self {
        Self::new(Role::Bot, content, Some(reply_to))
    }
}

//! Chat session controller
//!
//! Maintains the conversation transcript and the typing indicator. A user
//! message is appended synchronously; the matching bot reply is appended by
//! a timer task after a randomized typing delay.
//!
//! All state mutations go through a single `tokio::sync::watch` sender, so
//! appends are serialized and observers always see consistent snapshots.
//! Rapid sends are not queued against each other: each pending reply runs
//! on its own timer, and a reply that completes late is attributed to its
//! user message by the `reply_to` tag rather than by arrival order.

use crate::chat::message::Message;
use crate::config::ChatConfig;
use crate::responder::Responder;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use std::sync::{Arc, Mutex};
use std::time::Duration;
use tokio::sync::watch;
use uuid::Uuid;

const WELCOME_MESSAGES: [&str; 3] = [
    "Hi there! I'm SEObot, your AI SEO assistant.",
    "I can help increase your website's organic traffic. No manual work required from you!",
    "Ready to start? Tell me about your website!",
];

/// Observable session state
///
/// Snapshot of the transcript plus the number of replies still pending.
/// The typing indicator is on whenever at least one reply is pending.
#[derive(Debug, Clone, Default)]
pub struct ChatState {
    /// Append-only transcript, ordered by insertion
    pub messages: Vec<Message>,
    /// Number of bot replies scheduled but not yet appended
    pub pending_replies: usize,
    /// Most recent responder failure, if any
    pub last_error: Option<String>,
}

impl ChatState {
    /// Whether a bot reply is currently pending
    pub fn is_typing(&self) -> bool {
        self.pending_replies > 0
    }
}

/// Conversation controller for the chat demo
///
/// Owns the transcript and schedules bot replies through the configured
/// [`Responder`]. Requires a tokio runtime: `send_message` spawns the timer
/// task that delivers the reply.
///
/// Scheduled replies are not cancelled when the session is dropped; a
/// reply delivered after drop mutates state no observer is watching.
pub struct ChatSession {
    state: Arc<watch::Sender<ChatState>>,
    responder: Arc<dyn Responder>,
    min_delay_ms: u64,
    max_delay_ms: u64,
    rng: Arc<Mutex<StdRng>>,
}

impl ChatSession {
    /// Create a session with the given reply source and chat settings
    ///
    /// The transcript starts with the welcome banner (three system
    /// messages). When `config.seed` is set, delay sampling is
    /// deterministic.
    pub fn new(responder: Arc<dyn Responder>, config: &ChatConfig) -> Self {
        let rng = match config.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_os_rng(),
        };

        let initial = ChatState {
            messages: WELCOME_MESSAGES
                .iter()
                .map(|text| Message::system(*text))
                .collect(),
            pending_replies: 0,
            last_error: None,
        };
        let (state, _) = watch::channel(initial);

        Self {
            state: Arc::new(state),
            responder,
            min_delay_ms: config.min_typing_delay_ms,
            max_delay_ms: config.max_typing_delay_ms,
            rng: Arc::new(Mutex::new(rng)),
        }
    }

    /// Subscribe to state changes
    pub fn subscribe(&self) -> watch::Receiver<ChatState> {
        self.state.subscribe()
    }

    /// Current state snapshot
    pub fn snapshot(&self) -> ChatState {
        self.state.borrow().clone()
    }

    /// Send a user message and schedule the bot reply
    ///
    /// Appends the user message synchronously, turns the typing indicator
    /// on, and spawns a timer task that appends the bot reply after the
    /// sampled delay. Input is accepted as-is; empty content is appended
    /// like any other message. Returns the id of the appended user message,
    /// which the eventual bot reply will carry in `reply_to`.
    pub fn send_message(&self, content: impl Into<String>) -> Uuid {
        let user = Message::user(content);
        let trigger_id = user.id;
        let input = user.content.clone();
        let delay = self.sample_delay();

        self.state.send_modify(|s| {
            s.messages.push(user);
            s.pending_replies += 1;
        });

        let responder = Arc::clone(&self.responder);
        let state = Arc::clone(&self.state);
        tokio::spawn(async move {
            tokio::time::sleep(delay).await;
            match responder.reply(&input).await {
                Ok(text) => state.send_modify(|s| {
                    s.pending_replies = s.pending_replies.saturating_sub(1);
                    s.messages.push(Message::bot(text, trigger_id));
                }),
                Err(e) => {
                    tracing::warn!("Responder failed for message {}: {}", trigger_id, e);
                    state.send_modify(|s| {
                        s.pending_replies = s.pending_replies.saturating_sub(1);
                        s.last_error = Some(e.to_string());
                    });
                }
            }
        });

        trigger_id
    }

    /// Take and clear the last responder error, if any
    pub fn take_error(&self) -> Option<String> {
        let mut taken = None;
        self.state.send_modify(|s| {
            taken = s.last_error.take();
        });
        taken
    }

    /// Sample a typing delay uniformly from `[min, max)` milliseconds
    fn sample_delay(&self) -> Duration {
        let millis = if self.min_delay_ms >= self.max_delay_ms {
            self.min_delay_ms
        } else {
            let mut rng = match self.rng.lock() {
                Ok(guard) => guard,
                Err(poisoned) => poisoned.into_inner(),
            };
            rng.random_range(self.min_delay_ms..self.max_delay_ms)
        };
        Duration::from_millis(millis)
    }
}

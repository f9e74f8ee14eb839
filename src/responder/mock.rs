//! Canned-reply mock response engine
//!
//! Selects a reply for free-text user input by testing an ordered list of
//! keyword predicates against the lower-cased input. The first matching
//! predicate wins, so predicate order is part of the contract. Input that
//! matches no predicate gets a uniformly random pick from a fixed set of
//! fallback replies.

use crate::error::{Result, SeobotError};
use crate::responder::Responder;
use async_trait::async_trait;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use regex::Regex;
use std::sync::Mutex;

const GREETING_REPLY: &str =
    "Hello! I'm excited to help you boost your website's SEO. What's your website URL?";

const SEO_REPLY: &str = "Great question! I can help you increase your organic traffic through \
    AI-powered SEO strategies. I'll create optimized content, handle keyword research, and build \
    internal links automatically. Would you like to tell me about your website?";

const WEBSITE_REPLY: &str = "Perfect! I'll analyze your website and create a comprehensive SEO \
    strategy. I can generate high-quality articles, optimize keywords, and handle internal \
    linking. In just a few weeks, you should start seeing increased organic traffic!";

const PRICING_REPLY: &str = "Our plans start at just $49/month! For that, you get fully automated \
    SEO with AI-generated articles, keyword research, content planning, and automatic publishing. \
    It's an incredible ROI for busy founders.";

const HOW_IT_WORKS_REPLY: &str = "Here's how I work: 1) You provide your website URL, 2) I \
    analyze your site, audience, and keywords, 3) I create a content plan, 4) I start producing \
    SEO-optimized articles every week, 5) I handle internal linking automatically. You can \
    approve/decline articles or let me run on autopilot!";

const LANGUAGE_REPLY: &str = "I support 50+ languages! Including English, Spanish, French, \
    German, Chinese, Japanese, Arabic, and many more. I can create SEO content in any of these \
    languages while maintaining quality and cultural relevance.";

const HELP_REPLY: &str = "I'm here to help! I can answer questions about SEO, explain how I \
    work, discuss pricing, or get started with your website right away. What would you like to \
    know?";

const THANKS_REPLY: &str = "You're welcome! Feel free to ask me anything else about SEO or how I \
    can help grow your website's traffic.";

/// Generic replies used when no keyword predicate matches
pub const FALLBACK_REPLIES: [&str; 4] = [
    "That's interesting! Tell me more about your website and I'll help you create an SEO strategy.",
    "I understand. Could you share your website URL so I can provide specific recommendations?",
    "Great! I'm here to help boost your organic traffic. What aspect of SEO are you most interested in?",
    "I'd love to help with that! Let me know your website URL and we can get started.",
];

/// Mock response engine with ordered keyword matching
///
/// Matching order: greeting, seo/traffic, website/url, pricing,
/// how-it-works, language support, help, thanks, then random fallback.
/// The engine owns its RNG; construct with [`MockResponder::with_seed`]
/// for deterministic fallback selection in tests.
pub struct MockResponder {
    greeting: Regex,
    thanks: Regex,
    rng: Mutex<StdRng>,
}

impl MockResponder {
    /// Create a responder with an OS-seeded RNG
    ///
    /// # Errors
    ///
    /// Returns an error if the internal match patterns fail to compile.
    pub fn new() -> Result<Self> {
        Self::from_rng(StdRng::from_os_rng())
    }

    /// Create a responder with a fixed RNG seed
    ///
    /// Repeated fallback selections are deterministic for a given seed.
    pub fn with_seed(seed: u64) -> Result<Self> {
        Self::from_rng(StdRng::seed_from_u64(seed))
    }

    fn from_rng(rng: StdRng) -> Result<Self> {
        Ok(Self {
            greeting: compile(r"\b(hi|hello|hey|greetings)\b")?,
            thanks: compile(r"\b(thank|thanks|thx)\b")?,
            rng: Mutex::new(rng),
        })
    }

    /// Select the reply for the given user input
    ///
    /// Pure with respect to the input; only the fallback branch draws from
    /// the RNG.
    pub fn select_reply(&self, input: &str) -> String {
        let lower = input.to_lowercase();

        if self.greeting.is_match(&lower) {
            return GREETING_REPLY.to_string();
        }

        if lower.contains("seo") || lower.contains("traffic") {
            return SEO_REPLY.to_string();
        }

        if contains_any(&lower, &["website", "url", "http", "www"]) {
            return WEBSITE_REPLY.to_string();
        }

        if contains_any(&lower, &["price", "cost", "pay"]) {
            return PRICING_REPLY.to_string();
        }

        if lower.contains("how") && (lower.contains("work") || lower.contains("do")) {
            return HOW_IT_WORKS_REPLY.to_string();
        }

        if lower.contains("language") {
            return LANGUAGE_REPLY.to_string();
        }

        if lower.contains("help") || lower.contains("assist") {
            return HELP_REPLY.to_string();
        }

        if self.thanks.is_match(&lower) {
            return THANKS_REPLY.to_string();
        }

        let index = {
            let mut rng = match self.rng.lock() {
                Ok(guard) => guard,
                Err(poisoned) => poisoned.into_inner(),
            };
            rng.random_range(0..FALLBACK_REPLIES.len())
        };
        FALLBACK_REPLIES[index].to_string()
    }
}

#[async_trait]
impl Responder for MockResponder {
    async fn reply(&self, input: &str) -> Result<String> {
        Ok(self.select_reply(input))
    }
}

fn compile(pattern: &str) -> Result<Regex> {
    Regex::new(pattern)
        .map_err(|e| SeobotError::Chat(format!("Invalid match pattern '{}': {}", pattern, e)).into())
}

fn contains_any(haystack: &str, needles: &[&str]) -> bool {
    needles.iter().any(|needle| haystack.contains(needle))
}

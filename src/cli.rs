//! Command-line interface definition for SEObot
//!
//! This module defines the CLI structure using clap's derive API,
//! providing commands for the chat demo and the backend operations.

use clap::{Parser, Subcommand};

/// SEObot - AI SEO assistant CLI
///
/// Chat with the assistant locally, or run website analysis, article
/// generation, and session chat against a configured backend.
#[derive(Parser, Debug, Clone)]
#[command(name = "seobot")]
#[command(version, about, long_about = None)]
pub struct Cli {
    /// Path to configuration file
    #[arg(short, long, default_value = "config/config.yaml")]
    pub config: String,

    /// Command to execute
    #[command(subcommand)]
    pub command: Commands,
}

/// Available commands for SEObot
#[derive(Subcommand, Debug, Clone)]
pub enum Commands {
    /// Start the interactive chat demo
    Chat {
        /// Answer from the backend /chat endpoint instead of canned replies
        #[arg(long)]
        remote: bool,

        /// Session id from a previous analyze (required with --remote)
        #[arg(short, long)]
        session: Option<String>,

        /// RNG seed for deterministic delays and fallback replies
        #[arg(long)]
        seed: Option<u64>,
    },

    /// Analyze a website and start a session
    Analyze {
        /// Website URL to analyze
        url: String,
    },

    /// Generate an article for an existing session
    Generate {
        /// Session id from a previous analyze
        #[arg(short, long)]
        session: String,

        /// Article topic
        #[arg(short, long)]
        topic: String,

        /// Target keywords, comma separated
        #[arg(short, long, value_delimiter = ',')]
        keywords: Vec<String>,

        /// Requested article length in words
        #[arg(short = 'w', long, default_value_t = 1500)]
        word_count: u32,
    },

    /// Send a single chat message to the backend for a session
    Ask {
        /// Session id from a previous analyze
        #[arg(short, long)]
        session: String,

        /// Message to send
        message: String,
    },
}

impl Cli {
    /// Parse command line arguments
    pub fn parse_args() -> Self {
        Self::parse()
    }
}

//! SEObot - AI SEO assistant CLI
//!
//! Main entry point for the SEObot application.

use anyhow::Result;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use seobot::cli::{Cli, Commands};
use seobot::commands;
use seobot::config::Config;

#[tokio::main]
async fn main() -> Result<()> {
    init_tracing();

    let cli = Cli::parse_args();

    let config = Config::load(&cli.config)?;
    config.validate()?;

    match cli.command {
        Commands::Chat {
            remote,
            session,
            seed,
        } => {
            tracing::info!("Starting interactive chat demo");
            commands::chat::run_chat(config, remote, session, seed).await
        }
        Commands::Analyze { url } => commands::analyze::run_analyze(config, url).await,
        Commands::Generate {
            session,
            topic,
            keywords,
            word_count,
        } => commands::generate::run_generate(config, session, topic, keywords, word_count).await,
        Commands::Ask { session, message } => commands::ask::run_ask(config, session, message).await,
    }
}

/// Initialize tracing subscriber with environment filter
fn init_tracing() {
    let env_filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("seobot=info"));

    tracing_subscriber::registry()
        .with(env_filter)
        .with(tracing_subscriber::fmt::layer())
        .init();
}

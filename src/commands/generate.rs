//! Article generation command handler

use crate::api::{ApiClient, GenerateRequest};
use crate::config::Config;
use crate::error::Result;
use colored::Colorize;
use serde_json::Value;

/// Generate an article for an existing session and print it
///
/// # Arguments
///
/// * `config` - Global configuration (must have a backend base URL)
/// * `session` - Session id from a previous analyze
/// * `topic` - Article topic
/// * `keywords` - Target keywords
/// * `word_count` - Requested article length in words
pub async fn run_generate(
    config: Config,
    session: String,
    topic: String,
    keywords: Vec<String>,
    word_count: u32,
) -> Result<()> {
    let api = ApiClient::from_config(&config.backend)?;

    let request = GenerateRequest {
        session_id: session,
        topic,
        keywords,
        word_count,
        research_data: Value::Null,
    };

    tracing::info!(
        "Generating article: topic={}, words={}",
        request.topic,
        request.word_count
    );
    let response = api.generate_article(&request).await?;

    println!("{}", response.title.bold());
    println!();
    println!("{}", response.article);
    if !response.keywords.is_empty() {
        println!();
        println!("{} {}", "keywords:".bold(), response.keywords.join(", "));
    }
    if response.word_count > 0 {
        println!("{} {}", "words:".bold(), response.word_count);
    }

    Ok(())
}

//! One-shot backend chat command handler

use crate::api::{ApiClient, ChatRequest};
use crate::config::Config;
use crate::error::Result;
use colored::Colorize;

/// Send a single chat message to the backend and print the answer
///
/// # Arguments
///
/// * `config` - Global configuration (must have a backend base URL)
/// * `session` - Session id from a previous analyze
/// * `message` - Message to send
pub async fn run_ask(config: Config, session: String, message: String) -> Result<()> {
    let api = ApiClient::from_config(&config.backend)?;

    let request = ChatRequest {
        session_id: session,
        message,
    };
    let response = api.chat(&request).await?;

    println!("{} {}", "seobot".cyan(), response.answer);
    if !response.plan.is_null() {
        println!("{}", "plan:".bold());
        println!("{}", serde_json::to_string_pretty(&response.plan)?);
    }

    Ok(())
}

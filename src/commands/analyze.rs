//! Website analysis command handler

use crate::api::ApiClient;
use crate::config::Config;
use crate::error::Result;
use colored::Colorize;

/// Analyze a website and print the resulting session
///
/// # Arguments
///
/// * `config` - Global configuration (must have a backend base URL)
/// * `url` - Website URL to analyze
pub async fn run_analyze(config: Config, url: String) -> Result<()> {
    let api = ApiClient::from_config(&config.backend)?;

    tracing::info!("Analyzing website: {}", url);
    let response = api.analyze_website(&url).await?;

    println!("{} {}", "session:".bold(), response.session_id);
    if !response.plan.is_null() {
        println!("{}", "plan:".bold());
        println!("{}", serde_json::to_string_pretty(&response.plan)?);
    }
    if !response.research_data.is_null() {
        println!("{}", "research:".bold());
        println!("{}", serde_json::to_string_pretty(&response.research_data)?);
    }

    Ok(())
}

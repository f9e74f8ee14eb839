//! HTTP client for the SEO backend
//!
//! Single-shot JSON request/response forwarding against a configured base
//! URL. No retries, no caching. Errors are normalized to a human-readable
//! message: the backend error envelope when present, a generic status text
//! otherwise, and a generic network-failure message for transport errors.

use crate::api::types::{
    AnalyzeRequest, AnalyzeResponse, ApiErrorBody, ChatRequest, ChatResponse, GenerateRequest,
    GenerateResponse,
};
use crate::config::BackendConfig;
use crate::error::{Result, SeobotError};
use reqwest::Client;
use serde::de::DeserializeOwned;
use serde::Serialize;
use std::time::Duration;

/// Client for the SEO backend API
///
/// # Examples
///
/// ```no_run
/// use seobot::api::ApiClient;
///
/// # async fn example() -> seobot::error::Result<()> {
/// let client = ApiClient::new("http://localhost:8000")?;
/// let analysis = client.analyze_website("http://example.com").await?;
/// println!("session: {}", analysis.session_id);
/// # Ok(())
/// # }
/// ```
#[derive(Debug)]
pub struct ApiClient {
    client: Client,
    base_url: String,
}

impl ApiClient {
    /// Create a client for the given base URL
    ///
    /// # Errors
    ///
    /// Fails immediately if the base URL is empty or if HTTP client
    /// initialization fails. Every operation is meaningless without a
    /// configured backend, so this is checked at construction rather than
    /// deferred to first use.
    pub fn new(base_url: impl Into<String>) -> Result<Self> {
        let base_url = base_url.into();
        if base_url.trim().is_empty() {
            return Err(SeobotError::Config(
                "backend base URL is empty; set backend.base_url or export SEOBOT_API_URL"
                    .to_string(),
            )
            .into());
        }

        let client = Client::builder()
            .timeout(Duration::from_secs(30))
            .user_agent(concat!("seobot/", env!("CARGO_PKG_VERSION")))
            .build()
            .map_err(|e| SeobotError::Api(format!("Failed to create HTTP client: {}", e)))?;

        tracing::debug!("Initialized API client: base_url={}", base_url);

        Ok(Self { client, base_url })
    }

    /// Create a client from the backend configuration section
    ///
    /// # Errors
    ///
    /// Fails with a configuration error if no base URL is configured.
    pub fn from_config(config: &BackendConfig) -> Result<Self> {
        match &config.base_url {
            Some(base_url) => Self::new(base_url),
            None => Err(SeobotError::Config(
                "backend base URL is not configured; set backend.base_url in the config file \
                 or export SEOBOT_API_URL"
                    .to_string(),
            )
            .into()),
        }
    }

    /// The configured base URL
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn endpoint_url(&self, endpoint: &str) -> String {
        format!("{}{}", self.base_url.trim_end_matches('/'), endpoint)
    }

    /// Issue a single POST request with a JSON body and parse the response
    async fn post<B, T>(&self, endpoint: &str, body: &B) -> Result<T>
    where
        B: Serialize + ?Sized,
        T: DeserializeOwned,
    {
        let url = self.endpoint_url(endpoint);
        tracing::debug!("POST {}", url);

        let response = self.client.post(&url).json(body).send().await.map_err(|e| {
            tracing::warn!("Request to {} failed: {}", url, e);
            SeobotError::Api("Network error occurred".to_string())
        })?;

        let status = response.status();
        if !status.is_success() {
            let bytes = response.bytes().await.unwrap_or_default();
            let message = serde_json::from_slice::<ApiErrorBody>(&bytes)
                .ok()
                .and_then(ApiErrorBody::into_message)
                .unwrap_or_else(|| format!("HTTP error! status: {}", status.as_u16()));
            tracing::warn!("Backend returned {} for {}: {}", status, url, message);
            return Err(SeobotError::Api(message).into());
        }

        let parsed = response
            .json::<T>()
            .await
            .map_err(|e| SeobotError::Api(format!("Failed to parse backend response: {}", e)))?;
        Ok(parsed)
    }

    /// Analyze a website URL
    ///
    /// Issues `POST /analyze` and returns the session id, research data,
    /// and content plan produced by the backend.
    pub async fn analyze_website(&self, url: &str) -> Result<AnalyzeResponse> {
        let request = AnalyzeRequest {
            url: url.to_string(),
        };
        self.post("/analyze", &request).await
    }

    /// Generate an article for a session
    ///
    /// Issues `POST /generate` with the topic, keywords, word count, and
    /// the research data from a previous analyze call.
    pub async fn generate_article(&self, payload: &GenerateRequest) -> Result<GenerateResponse> {
        self.post("/generate", payload).await
    }

    /// Send a chat message for a session
    ///
    /// Issues `POST /chat` and returns the bot answer and the possibly
    /// updated content plan.
    pub async fn chat(&self, payload: &ChatRequest) -> Result<ChatResponse> {
        self.post("/chat", payload).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::BackendConfig;

    #[test]
    fn test_new_rejects_empty_base_url() {
        let err = ApiClient::new("").unwrap_err();
        assert!(err.to_string().contains("backend base URL is empty"));

        let err = ApiClient::new("   ").unwrap_err();
        assert!(err.to_string().contains("backend base URL is empty"));
    }

    #[test]
    fn test_from_config_requires_base_url() {
        let err = ApiClient::from_config(&BackendConfig { base_url: None }).unwrap_err();
        assert!(err.to_string().contains("not configured"));
    }

    #[test]
    fn test_from_config_with_base_url() {
        let client = ApiClient::from_config(&BackendConfig {
            base_url: Some("http://host:1234".to_string()),
        })
        .unwrap();
        assert_eq!(client.base_url(), "http://host:1234");
    }

    #[test]
    fn test_endpoint_url_joins_paths() {
        let client = ApiClient::new("http://host:1234").unwrap();
        assert_eq!(client.endpoint_url("/analyze"), "http://host:1234/analyze");
    }

    #[test]
    fn test_endpoint_url_handles_trailing_slash() {
        let client = ApiClient::new("http://host:1234/").unwrap();
        assert_eq!(client.endpoint_url("/chat"), "http://host:1234/chat");
    }
}

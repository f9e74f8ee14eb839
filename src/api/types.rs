//! Payload types for the SEO backend API
//!
//! Request and response shapes for the `/analyze`, `/generate`, and `/chat`
//! endpoints. `research_data` and `plan` are opaque pass-through values; the
//! client never interprets their contents.

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Request body for `POST /analyze`
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AnalyzeRequest {
    /// Website URL to analyze
    pub url: String,
}

/// Response body from `POST /analyze`
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AnalyzeResponse {
    /// Session identifier for subsequent generate/chat calls
    pub session_id: String,
    /// Opaque research payload produced by the backend
    #[serde(default)]
    pub research_data: Value,
    /// Opaque content plan produced by the backend
    #[serde(default)]
    pub plan: Value,
}

/// Request body for `POST /generate`
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GenerateRequest {
    /// Session identifier from a previous analyze call
    pub session_id: String,
    /// Article topic
    pub topic: String,
    /// Target keywords
    pub keywords: Vec<String>,
    /// Requested article length in words
    pub word_count: u32,
    /// Opaque research payload from the analyze response
    #[serde(default)]
    pub research_data: Value,
}

/// Response body from `POST /generate`
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GenerateResponse {
    /// Article title
    pub title: String,
    /// Generated article body
    pub article: String,
    /// Keywords used by the generator
    #[serde(default)]
    pub keywords: Vec<String>,
    /// Actual word count of the generated article
    #[serde(default)]
    pub word_count: u32,
}

/// Request body for `POST /chat`
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ChatRequest {
    /// Session identifier from a previous analyze call
    pub session_id: String,
    /// User message
    pub message: String,
}

/// Response body from `POST /chat`
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ChatResponse {
    /// Bot answer text
    pub answer: String,
    /// Opaque, possibly updated content plan
    #[serde(default)]
    pub plan: Value,
}

/// Structured error envelope returned by the backend
///
/// The backend reports a human-readable message in one of `detail`,
/// `message`, or `error`, checked in that order.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ApiErrorBody {
    #[serde(default)]
    pub detail: Option<String>,
    #[serde(default)]
    pub message: Option<String>,
    #[serde(default)]
    pub error: Option<String>,
}

impl ApiErrorBody {
    /// Extract the surfaced error message, if any field is present
    pub fn into_message(self) -> Option<String> {
        self.detail.or(self.message).or(self.error)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_analyze_request_serializes_url_only() {
        let request = AnalyzeRequest {
            url: "http://example.com".to_string(),
        };
        let value = serde_json::to_value(&request).unwrap();
        assert_eq!(value, json!({"url": "http://example.com"}));
    }

    #[test]
    fn test_analyze_response_defaults_opaque_fields() {
        let response: AnalyzeResponse = serde_json::from_value(json!({
            "session_id": "s-1"
        }))
        .unwrap();
        assert_eq!(response.session_id, "s-1");
        assert!(response.research_data.is_null());
        assert!(response.plan.is_null());
    }

    #[test]
    fn test_generate_request_shape() {
        let request = GenerateRequest {
            session_id: "s-1".to_string(),
            topic: "link building".to_string(),
            keywords: vec!["seo".to_string(), "links".to_string()],
            word_count: 1500,
            research_data: json!({"audience": "founders"}),
        };
        let value = serde_json::to_value(&request).unwrap();
        assert_eq!(value["session_id"], "s-1");
        assert_eq!(value["keywords"], json!(["seo", "links"]));
        assert_eq!(value["word_count"], 1500);
        assert_eq!(value["research_data"]["audience"], "founders");
    }

    #[test]
    fn test_error_body_prefers_detail() {
        let body: ApiErrorBody = serde_json::from_value(json!({
            "detail": "bad site",
            "message": "other",
            "error": "another"
        }))
        .unwrap();
        assert_eq!(body.into_message().as_deref(), Some("bad site"));
    }

    #[test]
    fn test_error_body_falls_back_to_message_then_error() {
        let body: ApiErrorBody =
            serde_json::from_value(json!({"message": "from message"})).unwrap();
        assert_eq!(body.into_message().as_deref(), Some("from message"));

        let body: ApiErrorBody = serde_json::from_value(json!({"error": "from error"})).unwrap();
        assert_eq!(body.into_message().as_deref(), Some("from error"));
    }

    #[test]
    fn test_error_body_without_known_fields() {
        let body: ApiErrorBody = serde_json::from_value(json!({"status": 500})).unwrap();
        assert!(body.into_message().is_none());
    }
}

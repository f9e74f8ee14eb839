//! Remote responder backed by the SEO backend
//!
//! Forwards chat input to the backend `/chat` endpoint for an existing
//! analysis session. This is the reply source the mock engine is meant to
//! be replaced by once a backend is available.

use crate::api::{ApiClient, ChatRequest};
use crate::error::Result;
use crate::responder::Responder;
use async_trait::async_trait;

/// Reply source that forwards to the backend `/chat` endpoint
pub struct RemoteResponder {
    api: ApiClient,
    session_id: String,
}

impl RemoteResponder {
    /// Create a remote responder for an existing analysis session
    ///
    /// The session id comes from a previous `analyze` call and is treated
    /// as an opaque string.
    pub fn new(api: ApiClient, session_id: impl Into<String>) -> Self {
        Self {
            api,
            session_id: session_id.into(),
        }
    }

    /// The session id used for chat requests
    pub fn session_id(&self) -> &str {
        &self.session_id
    }
}

#[async_trait]
impl Responder for RemoteResponder {
    async fn reply(&self, input: &str) -> Result<String> {
        let request = ChatRequest {
            session_id: self.session_id.clone(),
            message: input.to_string(),
        };
        let response = self.api.chat(&request).await?;
        Ok(response.answer)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_session_id_is_kept_opaque() {
        let api = ApiClient::new("http://host:1234").unwrap();
        let responder = RemoteResponder::new(api, "abc/123 weird id");
        assert_eq!(responder.session_id(), "abc/123 weird id");
    }
}

//! Remote chat API client
//!
//! Thin client for the conversation endpoint: one POST per user message,
//! JSON in both directions. The server assigns the conversation identifier
//! on the first reply; the caller threads it back into every later request.

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Default chat endpoint, overridable in settings
pub const DEFAULT_ENDPOINT: &str = "https://api-inbis.vercel.app/api/chat";

/// Request body for the chat endpoint
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ChatRequest {
    /// None until the server has assigned one
    pub conversation_id: Option<String>,
    pub user_message: String,
}

/// Response body from the chat endpoint
///
/// Both fields are optional on the wire; a response carrying neither is
/// still a success at the HTTP layer and simply yields nothing to reveal.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ChatResponse {
    #[serde(default)]
    pub conversation_id: Option<String>,
    #[serde(default)]
    pub assistant_message: Option<String>,
}

/// Chat API errors
#[derive(Debug, Error)]
pub enum ApiError {
    #[error("HTTP request failed: {0}")]
    Request(#[from] reqwest::Error),
    #[error("Chat API returned status {0}")]
    Status(reqwest::StatusCode),
}

/// HTTP client for the chat endpoint
///
/// Built once at startup with an explicit request timeout so a hung server
/// cannot leave the typing placeholder on screen indefinitely.
pub struct ChatClient {
    http: reqwest::Client,
    endpoint: String,
}

impl ChatClient {
    pub fn new(endpoint: impl Into<String>, timeout_secs: u64) -> Self {
        let http = reqwest::Client::builder()
            .timeout(std::time::Duration::from_secs(timeout_secs))
            .build()
            .unwrap_or_else(|e| {
                tracing::warn!("Falling back to default HTTP client: {}", e);
                reqwest::Client::new()
            });
        Self {
            http,
            endpoint: endpoint.into(),
        }
    }

    /// Send one user message and wait for the assistant's reply.
    ///
    /// Fails on connect errors, timeout, a non-2xx status, or a body that
    /// does not parse as the expected JSON shape. No retry.
    pub async fn send(
        &self,
        conversation_id: Option<&str>,
        user_message: &str,
    ) -> Result<ChatResponse, ApiError> {
        let request = ChatRequest {
            conversation_id: conversation_id.map(|s| s.to_string()),
            user_message: user_message.to_string(),
        };

        tracing::debug!(endpoint = %self.endpoint, "Sending chat request");
        let response = self.http.post(&self.endpoint).json(&request).send().await?;

        let status = response.status();
        if !status.is_success() {
            return Err(ApiError::Status(status));
        }

        let parsed: ChatResponse = response.json().await?;
        Ok(parsed)
    }
}

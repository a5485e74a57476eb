use crate::config::OpenRouterSettings;
use crate::core::prompt::ChatMessage;
use reqwest::Client;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::time::Duration;
use thiserror::Error;

/// Errors from the model provider call
///
/// All variants are fatal transport failures for the request: a failed LLM
/// call is never degraded to an empty recommendation set.
#[derive(Debug, Error)]
pub enum OpenRouterError {
    #[error("HTTP request failed: {0}")]
    RequestError(#[from] reqwest::Error),

    #[error("API returned error: {0}")]
    ApiError(String),

    #[error("invalid response format: {0}")]
    InvalidResponse(String),
}

#[derive(Debug, Serialize)]
struct ChatRequest<'a> {
    model: &'a str,
    messages: &'a [ChatMessage],
    temperature: f64,
}

#[derive(Debug, Deserialize)]
struct ChatResponse {
    #[serde(default)]
    choices: Vec<Choice>,
    #[serde(default)]
    error: Option<Value>,
}

#[derive(Debug, Deserialize)]
struct Choice {
    message: ResponseMessage,
}

#[derive(Debug, Deserialize)]
struct ResponseMessage {
    #[serde(default)]
    content: Option<String>,
}

/// OpenRouter chat-completions client
pub struct OpenRouterClient {
    base_url: String,
    api_key: String,
    model: String,
    referer: String,
    app_title: String,
    client: Client,
}

impl OpenRouterClient {
    pub fn new(settings: &OpenRouterSettings) -> Self {
        let client = Client::builder()
            .timeout(Duration::from_secs(settings.timeout_secs))
            .build()
            .expect("Failed to create HTTP client");

        Self {
            base_url: settings.base_url.trim_end_matches('/').to_string(),
            api_key: settings.api_key.clone(),
            model: settings.model.clone(),
            referer: settings.referer.clone(),
            app_title: settings.app_title.clone(),
            client,
        }
    }

    /// Send a chat completion and return the raw text of the first choice
    ///
    /// A non-success status, an embedded `error` object, or a missing
    /// message content all fail the call; the caller decides nothing about
    /// degradation here.
    pub async fn chat(&self, messages: &[ChatMessage]) -> Result<String, OpenRouterError> {
        let url = format!("{}/chat/completions", self.base_url);

        let request = ChatRequest {
            model: &self.model,
            messages,
            temperature: 0.7,
        };

        tracing::debug!("OpenRouter chat request (model: {})", self.model);

        let response = self
            .client
            .post(&url)
            .bearer_auth(&self.api_key)
            .header("HTTP-Referer", &self.referer)
            .header("X-Title", &self.app_title)
            .json(&request)
            .send()
            .await?;

        if !response.status().is_success() {
            let status = response.status();
            let body = response.text().await.unwrap_or_default();
            return Err(OpenRouterError::ApiError(format!(
                "chat completion failed ({}): {}",
                status, body
            )));
        }

        let chat_response: ChatResponse = response
            .json()
            .await
            .map_err(|e| OpenRouterError::InvalidResponse(e.to_string()))?;

        // OpenRouter can return 200 with an error payload instead of choices
        if let Some(error) = chat_response.error {
            return Err(OpenRouterError::ApiError(error.to_string()));
        }

        chat_response
            .choices
            .into_iter()
            .next()
            .and_then(|choice| choice.message.content)
            .filter(|content| !content.is_empty())
            .ok_or_else(|| OpenRouterError::InvalidResponse("no message content".to_string()))
    }
}

//! OpenAI-compatible chat completion writer

use async_trait::async_trait;
use reqwest::Client;
use secrecy::{ExposeSecret, SecretString};
use serde::{Deserialize, Serialize};
use url::Url;

use super::StoryWriter;
use crate::{error::StoryError, types::StoryRequest};

/// Chat completion writer for any OpenAI-compatible API
pub struct OpenAiWriter {
    name: String,
    client: Client,
    base_url: Url,
    api_key: SecretString,
    model: String,
}

impl OpenAiWriter {
    pub fn new(name: String, api_key: SecretString, base_url: Url, model: String) -> Self {
        Self {
            name,
            client: dreamweave_core::http_client(),
            base_url,
            api_key,
            model,
        }
    }

    fn completions_url(&self) -> String {
        let base = self.base_url.as_str().trim_end_matches('/');
        format!("{base}/chat/completions")
    }
}

#[derive(Serialize)]
struct ChatRequest<'a> {
    model: &'a str,
    messages: [ChatMessage<'a>; 2],
    max_tokens: u32,
    temperature: f32,
}

#[derive(Serialize)]
struct ChatMessage<'a> {
    role: &'static str,
    content: &'a str,
}

#[derive(Deserialize)]
struct ChatResponse {
    choices: Vec<ChatChoice>,
}

#[derive(Deserialize)]
struct ChatChoice {
    message: ChatResponseMessage,
}

#[derive(Deserialize)]
struct ChatResponseMessage {
    #[serde(default)]
    content: Option<String>,
}

#[async_trait]
impl StoryWriter for OpenAiWriter {
    async fn write(&self, request: &StoryRequest) -> crate::error::Result<String> {
        let wire_request = ChatRequest {
            model: &self.model,
            messages: [
                ChatMessage {
                    role: "system",
                    content: &request.system,
                },
                ChatMessage {
                    role: "user",
                    content: &request.prompt,
                },
            ],
            max_tokens: request.max_tokens,
            temperature: request.temperature,
        };

        tracing::debug!(
            provider = %self.name,
            model = %self.model,
            prompt_chars = request.prompt.len(),
            "sending story generation request"
        );

        let response = self
            .client
            .post(self.completions_url())
            .bearer_auth(self.api_key.expose_secret())
            .json(&wire_request)
            .send()
            .await
            .map_err(|e| {
                tracing::error!(provider = %self.name, error = %e, "story generation request failed");
                StoryError::ConnectionError(e.to_string())
            })?;

        let status = response.status();

        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            tracing::warn!(provider = %self.name, %status, "story provider returned error");

            return Err(match status.as_u16() {
                401 | 403 => StoryError::AuthenticationFailed(body),
                _ => StoryError::ProviderApiError {
                    status: status.as_u16(),
                    message: body,
                },
            });
        }

        let wire_response: ChatResponse = response
            .json()
            .await
            .map_err(|e| StoryError::InvalidResponse(e.to_string()))?;

        let story = wire_response
            .choices
            .into_iter()
            .next()
            .and_then(|choice| choice.message.content)
            .map(|content| content.trim().to_owned())
            .filter(|content| !content.is_empty())
            .ok_or(StoryError::EmptyCompletion)?;

        tracing::debug!(provider = %self.name, chars = story.len(), "story generated");

        Ok(story)
    }

    fn name(&self) -> &str {
        &self.name
    }
}

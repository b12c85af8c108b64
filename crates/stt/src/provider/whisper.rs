use async_trait::async_trait;
use reqwest::Client;
use secrecy::{ExposeSecret, SecretString};
use url::Url;

use super::Transcriber;
use crate::{
    error::SttError,
    types::{TranscriptionRequest, TranscriptionResponse},
};

/// Whisper-compatible STT provider
pub struct WhisperProvider {
    client: Client,
    base_url: Url,
    api_key: SecretString,
    model: String,
    name: String,
}

impl WhisperProvider {
    pub fn new(name: String, api_key: SecretString, base_url: Url, model: String) -> Self {
        Self {
            client: dreamweave_core::http_client(),
            base_url,
            api_key,
            model,
            name,
        }
    }

    fn transcriptions_url(&self) -> String {
        format!("{}/audio/transcriptions", self.base_url.as_str().trim_end_matches('/'))
    }
}

#[derive(serde::Deserialize)]
struct WhisperResponse {
    text: String,
}

#[async_trait]
impl Transcriber for WhisperProvider {
    async fn transcribe(&self, request: TranscriptionRequest) -> crate::error::Result<TranscriptionResponse> {
        let audio = tokio::fs::read(&request.audio_path).await?;

        tracing::debug!(
            provider = %self.name,
            bytes = audio.len(),
            model = %self.model,
            language = %request.language,
            "sending transcription request"
        );

        let part = reqwest::multipart::Part::bytes(audio)
            .file_name(request.filename)
            .mime_str(&request.content_type)
            .map_err(|e| SttError::InvalidRequest(format!("invalid content type: {e}")))?;

        let form = reqwest::multipart::Form::new()
            .part("file", part)
            .text("model", self.model.clone())
            .text("language", request.language);

        let response = self
            .client
            .post(self.transcriptions_url())
            .bearer_auth(self.api_key.expose_secret())
            .multipart(form)
            .send()
            .await
            .map_err(|e| {
                tracing::error!(provider = %self.name, error = %e, "transcription request failed");
                SttError::ConnectionError(e.to_string())
            })?;

        let status = response.status();

        if !status.is_success() {
            let error_text = response.text().await.unwrap_or_else(|_| "Unknown error".to_string());

            tracing::error!(provider = %self.name, %status, "transcription API error");

            return Err(match status.as_u16() {
                401 | 403 => SttError::AuthenticationFailed(error_text),
                400 => SttError::InvalidRequest(error_text),
                _ => SttError::ProviderApiError {
                    status: status.as_u16(),
                    message: error_text,
                },
            });
        }

        let result: WhisperResponse = response.json().await.map_err(|e| {
            tracing::error!(provider = %self.name, error = %e, "failed to parse transcription response");
            SttError::InvalidResponse(e.to_string())
        })?;

        tracing::debug!(provider = %self.name, chars = result.text.len(), "transcription complete");

        Ok(TranscriptionResponse { text: result.text })
    }

    fn name(&self) -> &str {
        &self.name
    }
}

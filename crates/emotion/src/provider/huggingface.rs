use std::time::Duration;

use async_trait::async_trait;
use reqwest::Client;
use secrecy::{ExposeSecret, SecretString};
use serde::{Deserialize, Serialize};
use url::Url;

use super::EmotionClassifier;
use crate::{error::EmotionError, types::EmotionScore};

/// Hugging Face inference API text-classification provider
pub struct HuggingFaceClassifier {
    client: Client,
    url: Url,
    api_key: SecretString,
    timeout: Duration,
    name: String,
}

impl HuggingFaceClassifier {
    pub fn new(name: String, api_key: SecretString, url: Url, timeout: Duration) -> Self {
        Self {
            client: dreamweave_core::http_client(),
            url,
            api_key,
            timeout,
            name,
        }
    }
}

#[derive(Serialize)]
struct ClassifyRequest<'a> {
    inputs: &'a str,
}

/// Text-classification output
///
/// The inference API wraps the scores for a single input in an outer list;
/// some deployments return the flat list directly.
#[derive(Deserialize)]
#[serde(untagged)]
enum ClassifierOutput {
    Batched(Vec<Vec<EmotionScore>>),
    Flat(Vec<EmotionScore>),
}

impl ClassifierOutput {
    fn into_scores(self) -> Option<Vec<EmotionScore>> {
        match self {
            Self::Batched(batches) => batches.into_iter().next(),
            Self::Flat(scores) => Some(scores),
        }
    }
}

fn transport_error(error: &reqwest::Error) -> EmotionError {
    if error.is_timeout() {
        EmotionError::Timeout
    } else {
        EmotionError::Connection(error.to_string())
    }
}

pub(crate) fn parse_scores(body: &str) -> crate::error::Result<Vec<EmotionScore>> {
    serde_json::from_str::<ClassifierOutput>(body)
        .ok()
        .and_then(ClassifierOutput::into_scores)
        .ok_or_else(|| EmotionError::Malformed(body.chars().take(200).collect()))
}

#[async_trait]
impl EmotionClassifier for HuggingFaceClassifier {
    async fn classify(&self, text: &str) -> crate::error::Result<Vec<EmotionScore>> {
        tracing::debug!(provider = %self.name, chars = text.len(), "sending emotion classification request");

        let response = self
            .client
            .post(self.url.clone())
            .bearer_auth(self.api_key.expose_secret())
            .timeout(self.timeout)
            .json(&ClassifyRequest { inputs: text })
            .send()
            .await
            .map_err(|e| transport_error(&e))?;

        let status = response.status();
        let body = response.text().await.map_err(|e| transport_error(&e))?;

        // Only a plain 200 carries a finished classification
        if status != reqwest::StatusCode::OK {
            return Err(EmotionError::Status {
                status: status.as_u16(),
                message: body,
            });
        }

        let scores = parse_scores(&body)?;

        tracing::debug!(provider = %self.name, labels = scores.len(), "emotion classification complete");

        Ok(scores)
    }

    fn name(&self) -> &str {
        &self.name
    }
}

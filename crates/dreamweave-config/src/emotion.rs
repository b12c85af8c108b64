use std::time::Duration;

use secrecy::SecretString;
use serde::{Deserialize, Deserializer};
use url::Url;

/// Emotion classifier configuration
///
/// The classifier is optional. Without a credential every request runs in
/// fallback mode with a fixed emotion pair.
#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct EmotionConfig {
    /// Classifier credential
    #[serde(default)]
    pub api_key: Option<SecretString>,
    /// Inference endpoint accepting `{"inputs": "..."}`
    #[serde(default = "default_url")]
    pub url: Url,
    /// Wall-clock bound for the classifier call (e.g. "30s")
    #[serde(default = "default_timeout", deserialize_with = "deserialize_duration")]
    pub timeout: Duration,
}

impl EmotionConfig {
    /// The configured credential, treating an empty value as unset
    pub fn credential(&self) -> Option<&SecretString> {
        crate::secret::present(self.api_key.as_ref())
    }
}

impl Default for EmotionConfig {
    fn default() -> Self {
        Self {
            api_key: None,
            url: default_url(),
            timeout: default_timeout(),
        }
    }
}

fn default_url() -> Url {
    Url::parse("https://api-inference.huggingface.co/models/j-hartmann/emotion-english-distilroberta-base")
        .expect("valid default URL")
}

const fn default_timeout() -> Duration {
    Duration::from_secs(30)
}

fn deserialize_duration<'de, D>(deserializer: D) -> Result<Duration, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = String::deserialize(deserializer)?;
    duration_str::parse(&raw).map_err(|e| serde::de::Error::custom(format!("invalid duration '{raw}': {e}")))
}

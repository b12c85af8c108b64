use std::path::PathBuf;

use secrecy::SecretString;
use serde::Deserialize;
use url::Url;

/// Speech-to-text provider configuration
///
/// Targets any Whisper-compatible `/audio/transcriptions` endpoint.
#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct TranscriptionConfig {
    /// Provider credential; requests fail with a configuration error without it
    #[serde(default)]
    pub api_key: Option<SecretString>,
    /// Base URL, `/audio/transcriptions` is appended
    #[serde(default = "default_base_url")]
    pub base_url: Url,
    /// Model identifier sent with every request
    #[serde(default = "default_model")]
    pub model: String,
    /// Language hint (ISO 639-1)
    #[serde(default = "default_language")]
    pub language: String,
    /// Directory for per-request temporary audio files (system temp dir when unset)
    #[serde(default)]
    pub temp_dir: Option<PathBuf>,
}

impl TranscriptionConfig {
    /// The configured credential, treating an empty value as unset
    pub fn credential(&self) -> Option<&SecretString> {
        crate::secret::present(self.api_key.as_ref())
    }
}

impl Default for TranscriptionConfig {
    fn default() -> Self {
        Self {
            api_key: None,
            base_url: default_base_url(),
            model: default_model(),
            language: default_language(),
            temp_dir: None,
        }
    }
}

pub(crate) fn default_base_url() -> Url {
    Url::parse("https://api.groq.com/openai/v1").expect("valid default URL")
}

fn default_model() -> String {
    "whisper-large-v3".to_owned()
}

fn default_language() -> String {
    "en".to_owned()
}

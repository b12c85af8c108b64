use secrecy::SecretString;
use serde::Deserialize;
use url::Url;

/// Story generation provider configuration
///
/// Targets any OpenAI-compatible `/chat/completions` endpoint.
#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct StoryConfig {
    /// Provider credential
    #[serde(default)]
    pub api_key: Option<SecretString>,
    /// Base URL, `/chat/completions` is appended
    #[serde(default = "crate::transcription::default_base_url")]
    pub base_url: Url,
    /// Chat model
    #[serde(default = "default_model")]
    pub model: String,
    /// Upper bound on generated tokens
    #[serde(default = "default_max_tokens")]
    pub max_tokens: u32,
    /// Sampling temperature
    #[serde(default = "default_temperature")]
    pub temperature: f32,
}

impl StoryConfig {
    /// The configured credential, treating an empty value as unset
    pub fn credential(&self) -> Option<&SecretString> {
        crate::secret::present(self.api_key.as_ref())
    }
}

impl Default for StoryConfig {
    fn default() -> Self {
        Self {
            api_key: None,
            base_url: crate::transcription::default_base_url(),
            model: default_model(),
            max_tokens: default_max_tokens(),
            temperature: default_temperature(),
        }
    }
}

fn default_model() -> String {
    "llama3-70b-8192".to_owned()
}

const fn default_max_tokens() -> u32 {
    800
}

const fn default_temperature() -> f32 {
    0.8
}

//! Programmatic configuration builder for integration tests

use std::net::SocketAddr;
use std::path::Path;
use std::time::Duration;

use dreamweave_config::{Config, CorsConfig, HealthConfig, ServerConfig};
use secrecy::SecretString;

use super::mock_providers::MockProviders;

/// Credential every mock provider expects
pub const TEST_KEY: &str = "test-key";

/// Builder for constructing test configurations
pub struct ConfigBuilder {
    config: Config,
}

impl ConfigBuilder {
    /// Create a new builder with minimal defaults and no credentials
    pub fn new() -> Self {
        let mut config = Config {
            server: ServerConfig {
                listen_address: Some(SocketAddr::from(([127, 0, 0, 1], 0))),
                health: HealthConfig {
                    enabled: true,
                    ..HealthConfig::default()
                },
                ..ServerConfig::default()
            },
            ..Config::default()
        };
        config.dreams.directory = "/nonexistent/dreamweave-test-dreams".into();

        Self { config }
    }

    /// Point transcription, classification and generation at a mock backend
    pub fn with_providers(mut self, mock: &MockProviders) -> Self {
        self.config.transcription.api_key = Some(SecretString::from(TEST_KEY));
        self.config.transcription.base_url = mock.base_url().parse().expect("valid URL");

        self.config.story.api_key = Some(SecretString::from(TEST_KEY));
        self.config.story.base_url = mock.base_url().parse().expect("valid URL");

        self.config.emotion.api_key = Some(SecretString::from(TEST_KEY));
        self.config.emotion.url = mock.emotion_url().parse().expect("valid URL");

        self
    }

    /// Remove the classifier credential
    pub fn without_emotion_credential(mut self) -> Self {
        self.config.emotion.api_key = None;
        self
    }

    /// Remove the story generation credential
    pub fn without_story_credential(mut self) -> Self {
        self.config.story.api_key = None;
        self
    }

    /// Bound the classifier call
    pub fn with_emotion_timeout(mut self, timeout: Duration) -> Self {
        self.config.emotion.timeout = timeout;
        self
    }

    /// Write temporary audio into `dir`
    pub fn with_temp_dir(mut self, dir: &Path) -> Self {
        self.config.transcription.temp_dir = Some(dir.to_path_buf());
        self
    }

    /// Serve stored dreams from `dir`
    pub fn with_dreams_dir(mut self, dir: &Path) -> Self {
        self.config.dreams.directory = dir.to_path_buf();
        self
    }

    /// Set CORS configuration
    pub fn with_cors(mut self, config: CorsConfig) -> Self {
        self.config.server.cors = Some(config);
        self
    }

    /// Disable health endpoint
    pub fn without_health(mut self) -> Self {
        self.config.server.health.enabled = false;
        self
    }

    /// Build the final config
    pub fn build(self) -> Config {
        self.config
    }
}

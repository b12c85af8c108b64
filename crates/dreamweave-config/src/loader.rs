use std::path::Path;

use crate::Config;

impl Config {
    /// Load configuration from a TOML file
    ///
    /// Reads the file, expands `{{ env.VAR }}` placeholders, then
    /// deserializes and validates the result.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read, environment variable
    /// expansion fails, TOML parsing fails, or validation fails
    pub fn load(path: &Path) -> anyhow::Result<Self> {
        let raw = std::fs::read_to_string(path)
            .map_err(|e| anyhow::anyhow!("failed to read config file {}: {e}", path.display()))?;

        Self::parse(&raw)
    }

    /// Parse configuration from TOML text
    ///
    /// # Errors
    ///
    /// Returns an error if placeholder expansion, parsing, or validation fails
    pub fn parse(raw: &str) -> anyhow::Result<Self> {
        let expanded =
            crate::env::expand_env(raw).map_err(|e| anyhow::anyhow!("config variable expansion failed: {e}"))?;

        let config: Self = toml::from_str(&expanded).map_err(|e| anyhow::anyhow!("failed to parse config: {e}"))?;

        config.validate()?;

        Ok(config)
    }

    /// Validate that the configuration is internally consistent
    ///
    /// Missing provider credentials are not an error here: the transcription
    /// and story credentials are checked per request, and the emotion
    /// classifier runs in fallback mode without one.
    ///
    /// # Errors
    ///
    /// Returns an error if a provider setting is out of range
    pub fn validate(&self) -> anyhow::Result<()> {
        self.validate_transcription()?;
        self.validate_emotion()?;
        self.validate_story()?;
        self.validate_server()?;
        Ok(())
    }

    fn validate_transcription(&self) -> anyhow::Result<()> {
        if self.transcription.model.trim().is_empty() {
            anyhow::bail!("transcription.model must not be empty");
        }

        if self.transcription.language.trim().is_empty() {
            anyhow::bail!("transcription.language must not be empty");
        }

        if let Some(ref dir) = self.transcription.temp_dir
            && !dir.is_dir()
        {
            anyhow::bail!("transcription.temp_dir {} is not a directory", dir.display());
        }

        Ok(())
    }

    fn validate_emotion(&self) -> anyhow::Result<()> {
        if self.emotion.timeout.is_zero() {
            anyhow::bail!("emotion.timeout must be greater than zero");
        }

        Ok(())
    }

    fn validate_story(&self) -> anyhow::Result<()> {
        if self.story.model.trim().is_empty() {
            anyhow::bail!("story.model must not be empty");
        }

        if self.story.max_tokens == 0 {
            anyhow::bail!("story.max_tokens must be greater than 0");
        }

        if !(0.0..=2.0).contains(&self.story.temperature) {
            anyhow::bail!("story.temperature must be between 0.0 and 2.0");
        }

        Ok(())
    }

    fn validate_server(&self) -> anyhow::Result<()> {
        if self.server.health.enabled {
            let path = self.server.health.path.as_str();

            if !path.starts_with('/') {
                anyhow::bail!("server.health.path must start with '/'");
            }

            if crate::health::is_reserved_path(path) {
                anyhow::bail!("server.health.path `{path}` collides with a built-in route");
            }
        }

        if let Some(ref telemetry) = self.telemetry
            && !(0.0..=1.0).contains(&telemetry.sampling_rate)
        {
            anyhow::bail!("telemetry.sampling_rate must be between 0.0 and 1.0");
        }

        Ok(())
    }
}

#![allow(clippy::must_use_candidate)]

pub mod cors;
pub mod dreams;
pub mod emotion;
mod env;
pub mod health;
mod loader;
mod secret;
pub mod server;
pub mod story;
pub mod telemetry;
pub mod transcription;

use serde::Deserialize;

pub use cors::*;
pub use dreams::*;
pub use emotion::*;
pub use env::ExpandError;
pub use health::*;
pub use server::*;
pub use story::*;
pub use telemetry::{ExportProtocol, ExporterConfig, TelemetryConfig};
pub use transcription::*;

/// Top-level Dreamweave configuration
#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Config {
    /// Server configuration
    #[serde(default)]
    pub server: ServerConfig,
    /// Speech-to-text provider configuration
    #[serde(default)]
    pub transcription: TranscriptionConfig,
    /// Emotion classifier configuration
    #[serde(default)]
    pub emotion: EmotionConfig,
    /// Story generation provider configuration
    #[serde(default)]
    pub story: StoryConfig,
    /// Stored dream lookup
    #[serde(default)]
    pub dreams: DreamsConfig,
    /// Telemetry configuration
    #[serde(default)]
    pub telemetry: Option<TelemetryConfig>,
}

use std::path::PathBuf;
use std::sync::Arc;

use dreamweave_config::Config;
use emotion::{EmotionClassifier, EmotionPair};
use storyteller::{StoryPrompt, StoryWriter};
use stt::{Transcriber, TranscriptionRequest};

use crate::{
    audio::TempAudio,
    error::{DreamError, Result},
    types::{DreamRequest, DreamResponse, DreamStatus},
};

/// Per-deployment knobs the pipeline passes to its providers
#[derive(Debug, Clone)]
pub struct PipelineSettings {
    /// Language hint for transcription
    pub language: String,
    /// Directory for temporary audio files
    pub temp_dir: Option<PathBuf>,
    /// Generation token cap
    pub max_tokens: u32,
    /// Generation sampling temperature
    pub temperature: f32,
}

impl PipelineSettings {
    pub fn from_config(config: &Config) -> Self {
        Self {
            language: config.transcription.language.clone(),
            temp_dir: config.transcription.temp_dir.clone(),
            max_tokens: config.story.max_tokens,
            temperature: config.story.temperature,
        }
    }
}

/// Transcribe → classify → generate, once per uploaded dream
///
/// Each provider is attempted exactly once. A missing transcriber or
/// writer is reported per request so the service can start (and serve
/// stored dreams) without credentials.
pub struct Pipeline {
    transcriber: Option<Arc<dyn Transcriber>>,
    classifier: Option<Arc<dyn EmotionClassifier>>,
    writer: Option<Arc<dyn StoryWriter>>,
    settings: PipelineSettings,
}

impl Pipeline {
    /// Start a builder with providers derived from configuration
    pub fn builder(config: &Config) -> PipelineBuilder {
        PipelineBuilder {
            transcriber: stt::build_transcriber(&config.transcription),
            classifier: emotion::build_classifier(&config.emotion),
            writer: storyteller::build_writer(&config.story),
            settings: PipelineSettings::from_config(config),
        }
    }

    /// Turn an uploaded recording into a story
    pub async fn process(&self, request: DreamRequest) -> Result<DreamResponse> {
        let (transcriber, writer) = self.required_providers()?;

        if request.audio.is_empty() {
            return Err(DreamError::InvalidInput("Empty audio file received".to_owned()));
        }

        let transcribed_text = self.transcribe(transcriber, &request).await?;

        let emotions = emotion::resolve(self.classifier.as_deref(), &transcribed_text).await;

        let story = self
            .write_story(writer, &transcribed_text, &emotions, &request.style)
            .await?;

        tracing::info!(
            style = %request.style,
            dominant = %emotions.dominant,
            secondary = %emotions.secondary,
            fallback_emotions = emotions.is_fallback(),
            story_chars = story.len(),
            "dream processed"
        );

        Ok(DreamResponse {
            transcribed_text,
            dominant_emotion: emotions.dominant,
            secondary_emotion: emotions.secondary,
            story,
            style: request.style,
            status: DreamStatus::Success,
        })
    }

    fn required_providers(&self) -> Result<(&dyn Transcriber, &dyn StoryWriter)> {
        let transcriber = self
            .transcriber
            .as_deref()
            .ok_or_else(|| DreamError::Configuration("Transcription API key not configured".to_owned()))?;

        let writer = self
            .writer
            .as_deref()
            .ok_or_else(|| DreamError::Configuration("Story generation API key not configured".to_owned()))?;

        Ok((transcriber, writer))
    }

    async fn transcribe(&self, transcriber: &dyn Transcriber, request: &DreamRequest) -> Result<String> {
        let audio = TempAudio::write(&request.audio, self.settings.temp_dir.as_deref(), &request.filename)
            .await
            .map_err(stt::SttError::from)?;

        let result = transcriber
            .transcribe(TranscriptionRequest {
                audio_path: audio.path().to_path_buf(),
                filename: request.filename.clone(),
                content_type: request.content_type.clone(),
                language: self.settings.language.clone(),
            })
            .await;

        drop(audio);

        let text = result?.text.trim().to_owned();

        if text.is_empty() {
            return Err(DreamError::NoSpeechDetected);
        }

        tracing::debug!(provider = transcriber.name(), chars = text.len(), "audio transcribed");

        Ok(text)
    }

    async fn write_story(
        &self,
        writer: &dyn StoryWriter,
        fragment: &str,
        emotions: &EmotionPair,
        style: &str,
    ) -> Result<String> {
        let request = StoryPrompt {
            fragment,
            dominant_emotion: &emotions.dominant,
            secondary_emotion: &emotions.secondary,
            style,
        }
        .into_request(self.settings.max_tokens, self.settings.temperature);

        Ok(writer.write(&request).await?)
    }
}

/// Builder for [`Pipeline`], allowing providers to be swapped out
pub struct PipelineBuilder {
    transcriber: Option<Arc<dyn Transcriber>>,
    classifier: Option<Arc<dyn EmotionClassifier>>,
    writer: Option<Arc<dyn StoryWriter>>,
    settings: PipelineSettings,
}

impl PipelineBuilder {
    #[must_use]
    pub fn transcriber(mut self, transcriber: Option<Arc<dyn Transcriber>>) -> Self {
        self.transcriber = transcriber;
        self
    }

    #[must_use]
    pub fn classifier(mut self, classifier: Option<Arc<dyn EmotionClassifier>>) -> Self {
        self.classifier = classifier;
        self
    }

    #[must_use]
    pub fn writer(mut self, writer: Option<Arc<dyn StoryWriter>>) -> Self {
        self.writer = writer;
        self
    }

    pub fn build(self) -> Pipeline {
        Pipeline {
            transcriber: self.transcriber,
            classifier: self.classifier,
            writer: self.writer,
            settings: self.settings,
        }
    }
}

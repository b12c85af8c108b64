use std::path::PathBuf;

use serde::{Deserialize, Serialize};

/// Audio file to transcribe
#[derive(Debug, Clone)]
pub struct TranscriptionRequest {
    /// Audio on disk, read by the provider when it builds the upload
    pub audio_path: PathBuf,
    /// File name reported to the provider
    pub filename: String,
    /// Content type of the audio file
    pub content_type: String,
    /// Language hint (ISO 639-1)
    pub language: String,
}

/// Transcription result following the Whisper API format
#[derive(Debug, Serialize, Deserialize)]
pub struct TranscriptionResponse {
    /// Transcribed text, untrimmed
    pub text: String,
}

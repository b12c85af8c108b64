use axum::{
    Json,
    response::{IntoResponse, Response},
};
use dreamweave_core::{ErrorBody, HttpError};
use http::StatusCode;
use storyteller::StoryError;
use stt::SttError;
use thiserror::Error;

pub type Result<T> = std::result::Result<T, DreamError>;

/// Failures surfaced by the dream endpoints
///
/// Emotion classification failures never appear here; that step always
/// resolves to some emotion pair.
#[derive(Debug, Error)]
pub enum DreamError {
    /// A required provider credential is missing
    #[error("{0}")]
    Configuration(String),

    /// The caller sent something unusable
    #[error("{0}")]
    InvalidInput(String),

    /// The multipart upload was rejected before it could be read
    #[error("{message}")]
    Upload { status: StatusCode, message: String },

    /// Transcription succeeded but produced no text
    #[error("No speech detected in audio")]
    NoSpeechDetected,

    /// The transcription provider call failed
    #[error("Transcription failed: {0}")]
    Transcription(#[from] SttError),

    /// The story provider call failed
    #[error("Story generation failed: {0}")]
    StoryGeneration(#[from] StoryError),

    /// No stored dream with that identifier
    #[error("Dream not found")]
    NotFound,

    /// Unexpected internal error
    #[error("internal error: {0}")]
    Internal(String),
}

impl HttpError for DreamError {
    fn status_code(&self) -> StatusCode {
        match self {
            Self::InvalidInput(_) | Self::NoSpeechDetected => StatusCode::BAD_REQUEST,
            Self::Upload { status, .. } => *status,
            Self::NotFound => StatusCode::NOT_FOUND,
            Self::Configuration(_) | Self::Transcription(_) | Self::StoryGeneration(_) | Self::Internal(_) => {
                StatusCode::INTERNAL_SERVER_ERROR
            }
        }
    }

    fn error_type(&self) -> &str {
        match self {
            Self::Configuration(_) => "configuration_error",
            Self::InvalidInput(_) | Self::Upload { .. } => "invalid_request_error",
            Self::NoSpeechDetected => "no_speech_detected",
            Self::Transcription(_) => "transcription_error",
            Self::StoryGeneration(_) => "story_generation_error",
            Self::NotFound => "not_found_error",
            Self::Internal(_) => "internal_error",
        }
    }

    fn client_message(&self) -> String {
        match self {
            Self::Internal(_) => "an internal error occurred".to_owned(),
            other => other.to_string(),
        }
    }
}

impl IntoResponse for DreamError {
    fn into_response(self) -> Response {
        let status = self.status_code();

        if status.is_server_error() {
            tracing::error!(error = %self, "dream request failed");
        } else {
            tracing::warn!(error = %self, "dream request rejected");
        }

        (status, Json(ErrorBody::from_error(&self))).into_response()
    }
}

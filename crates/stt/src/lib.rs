#![allow(
    clippy::must_use_candidate,
    clippy::missing_errors_doc,
    clippy::missing_const_for_fn,
    clippy::module_name_repetitions
)]

//! Speech-to-text clients
//!
//! The orchestrator only sees the [`Transcriber`] trait; the Whisper
//! implementation speaks the multipart `/audio/transcriptions` protocol
//! shared by OpenAI, Groq and most self-hosted servers.

mod error;
mod provider;
mod types;

use std::sync::Arc;

use dreamweave_config::TranscriptionConfig;

pub use error::{Result, SttError};
pub use provider::{Transcriber, whisper::WhisperProvider};
pub use types::{TranscriptionRequest, TranscriptionResponse};

/// Build the transcriber described by configuration
///
/// Returns `None` when no credential is configured; callers surface that
/// as a configuration error per request rather than refusing to start.
pub fn build_transcriber(config: &TranscriptionConfig) -> Option<Arc<dyn Transcriber>> {
    let Some(api_key) = config.credential() else {
        tracing::warn!("no transcription credential configured, dream processing will be rejected");
        return None;
    };

    tracing::debug!(model = %config.model, "initializing Whisper transcriber");

    Some(Arc::new(WhisperProvider::new(
        "whisper".to_owned(),
        api_key.clone(),
        config.base_url.clone(),
        config.model.clone(),
    )))
}

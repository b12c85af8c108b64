pub(crate) mod whisper;

use async_trait::async_trait;

use crate::types::{TranscriptionRequest, TranscriptionResponse};

/// Speech-to-text backend
#[async_trait]
pub trait Transcriber: Send + Sync {
    /// Transcribe an audio file to text
    async fn transcribe(&self, request: TranscriptionRequest) -> crate::error::Result<TranscriptionResponse>;

    /// Provider name used in logs
    fn name(&self) -> &str;
}

use serde::{Deserialize, Serialize};

/// An uploaded dream recording
#[derive(Debug, Clone)]
pub struct DreamRequest {
    /// Raw audio bytes in whatever container the client recorded
    pub audio: Vec<u8>,
    /// File name from the upload, used for the temporary file's extension
    pub filename: String,
    /// Content type from the upload
    pub content_type: String,
    /// Narrative style label
    pub style: String,
}

/// Outcome marker on a successful response
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DreamStatus {
    Success,
}

/// The generated story and everything it was derived from
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DreamResponse {
    pub transcribed_text: String,
    pub dominant_emotion: String,
    pub secondary_emotion: String,
    pub story: String,
    pub style: String,
    pub status: DreamStatus,
}

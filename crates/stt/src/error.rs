use thiserror::Error;

pub type Result<T> = std::result::Result<T, SttError>;

/// Transcription provider failures
#[derive(Debug, Error)]
pub enum SttError {
    /// Temporary audio file could not be written or read back
    #[error("audio file I/O failed: {0}")]
    Io(#[from] std::io::Error),

    /// Request was rejected as malformed by the provider or locally
    #[error("invalid request: {0}")]
    InvalidRequest(String),

    /// Provider rejected the credential
    #[error("authentication failed: {0}")]
    AuthenticationFailed(String),

    /// Provider answered with a non-success status
    #[error("provider API error ({status}): {message}")]
    ProviderApiError { status: u16, message: String },

    /// Network or connection error
    #[error("connection error: {0}")]
    ConnectionError(String),

    /// Provider answered with a body we could not parse
    #[error("invalid provider response: {0}")]
    InvalidResponse(String),
}

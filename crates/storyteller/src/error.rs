use thiserror::Error;

pub type Result<T> = std::result::Result<T, StoryError>;

/// Story generation provider failures
#[derive(Debug, Error)]
pub enum StoryError {
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

    /// Provider answered without any story text
    #[error("provider returned an empty completion")]
    EmptyCompletion,
}

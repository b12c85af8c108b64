use thiserror::Error;

pub type Result<T> = std::result::Result<T, EmotionError>;

/// Reasons a classification attempt produced nothing usable
///
/// None of these reach the HTTP caller; they only select which fallback
/// pair replaces the classifier output.
#[derive(Debug, Error)]
pub enum EmotionError {
    /// The call did not complete within the configured timeout
    #[error("classifier timed out")]
    Timeout,

    /// Network or connection error
    #[error("connection error: {0}")]
    Connection(String),

    /// Classifier answered with a non-success status
    #[error("classifier returned {status}: {message}")]
    Status { status: u16, message: String },

    /// Classifier answered 2xx with a body that is not a ranked label list
    #[error("unexpected classifier response: {0}")]
    Malformed(String),
}

impl EmotionError {
    /// Whether the provider completed the exchange and answered
    ///
    /// Completed exchanges fall back to `neutral`, transport failures to
    /// `mysterious`.
    pub const fn provider_answered(&self) -> bool {
        matches!(self, Self::Status { .. } | Self::Malformed(_))
    }
}

use http::StatusCode;
use serde::Serialize;

/// Trait for domain errors that can be converted to HTTP responses
///
/// Feature crates implement this for their error types; the response body
/// is always an [`ErrorBody`], so clients see one error shape across every
/// endpoint.
pub trait HttpError: std::error::Error {
    /// HTTP status code for this error
    fn status_code(&self) -> StatusCode;

    /// Machine-readable error type (e.g. `invalid_request_error`)
    fn error_type(&self) -> &str;

    /// Message safe to expose to API consumers
    fn client_message(&self) -> String;
}

/// JSON error body returned by every endpoint
#[derive(Debug, Serialize)]
pub struct ErrorBody {
    /// Human-readable detail
    pub detail: String,
    /// Machine-readable error type
    #[serde(rename = "type")]
    pub error_type: String,
    /// HTTP status code, repeated for clients that only see the body
    pub code: u16,
}

impl ErrorBody {
    /// Build the body for an error
    pub fn from_error<E: HttpError + ?Sized>(error: &E) -> Self {
        Self {
            detail: error.client_message(),
            error_type: error.error_type().to_owned(),
            code: error.status_code().as_u16(),
        }
    }
}

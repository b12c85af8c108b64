use axum::extract::{FromRequest, Multipart, Request};

use crate::{error::DreamError, types::DreamRequest};

/// Body limit for dream uploads (32 MiB)
pub(crate) const BODY_LIMIT_BYTES: usize = 32 << 20;

const DEFAULT_FILENAME: &str = "recording.webm";
const DEFAULT_CONTENT_TYPE: &str = "audio/webm";

/// Extractor for the `audio` + `style` multipart form
///
/// An empty `audio` part is accepted here; the pipeline rejects it after
/// the credential check.
pub struct DreamUpload(pub DreamRequest);

impl<S> FromRequest<S> for DreamUpload
where
    S: Send + Sync,
{
    type Rejection = DreamError;

    async fn from_request(request: Request, state: &S) -> Result<Self, Self::Rejection> {
        let mut multipart = Multipart::from_request(request, state)
            .await
            .map_err(|e| DreamError::Upload {
                status: e.status(),
                message: e.body_text(),
            })?;

        let mut audio = None;
        let mut filename = DEFAULT_FILENAME.to_owned();
        let mut content_type = DEFAULT_CONTENT_TYPE.to_owned();
        let mut style = None;

        while let Some(field) = multipart.next_field().await.map_err(upload_error)? {
            let name = field.name().map(str::to_owned);

            match name.as_deref() {
                Some("audio") => {
                    if let Some(name) = field.file_name().filter(|n| !n.is_empty()) {
                        filename = name.to_owned();
                    }
                    if let Some(ct) = field.content_type() {
                        content_type = ct.to_owned();
                    }
                    audio = Some(field.bytes().await.map_err(upload_error)?.to_vec());
                }
                Some("style") => {
                    style = Some(field.text().await.map_err(upload_error)?);
                }
                _ => {}
            }
        }

        let audio = audio.ok_or_else(|| DreamError::InvalidInput("Missing required 'audio' field".to_owned()))?;
        let style = style.ok_or_else(|| DreamError::InvalidInput("Missing required 'style' field".to_owned()))?;

        tracing::info!(
            filename = %filename,
            content_type = %content_type,
            bytes = audio.len(),
            style = %style,
            "received dream upload"
        );

        Ok(Self(DreamRequest {
            audio,
            filename,
            content_type,
            style,
        }))
    }
}

#[allow(clippy::needless_pass_by_value)]
fn upload_error(error: axum::extract::multipart::MultipartError) -> DreamError {
    DreamError::Upload {
        status: error.status(),
        message: error.body_text(),
    }
}

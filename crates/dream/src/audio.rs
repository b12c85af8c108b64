use std::path::Path;

use tempfile::NamedTempFile;

const DEFAULT_SUFFIX: &str = ".webm";

/// Uploaded audio written to a uniquely named temporary file
///
/// The file is removed when the value is dropped, on every exit path.
pub(crate) struct TempAudio {
    file: NamedTempFile,
}

impl TempAudio {
    /// Write `bytes` to a new `dream-*` file in `dir` (system temp dir when `None`)
    ///
    /// The bytes are written through `tokio::fs`, off the async workers.
    pub async fn write(bytes: &[u8], dir: Option<&Path>, filename: &str) -> std::io::Result<Self> {
        let suffix = suffix_for(filename);

        let mut builder = tempfile::Builder::new();
        builder.prefix("dream-").suffix(&suffix);

        let file = match dir {
            Some(dir) => builder.tempfile_in(dir)?,
            None => builder.tempfile()?,
        };

        tokio::fs::write(file.path(), bytes).await?;

        tracing::debug!(path = %file.path().display(), bytes = bytes.len(), "saved audio to temporary file");

        Ok(Self { file })
    }

    pub fn path(&self) -> &Path {
        self.file.path()
    }
}

impl Drop for TempAudio {
    fn drop(&mut self) {
        tracing::debug!(path = %self.file.path().display(), "removing temporary audio file");
    }
}

/// Keep a short alphanumeric extension from the upload name
fn suffix_for(filename: &str) -> String {
    Path::new(filename)
        .extension()
        .and_then(|ext| ext.to_str())
        .filter(|ext| !ext.is_empty() && ext.len() <= 8 && ext.chars().all(|c| c.is_ascii_alphanumeric()))
        .map_or_else(|| DEFAULT_SUFFIX.to_owned(), |ext| format!(".{}", ext.to_ascii_lowercase()))
}

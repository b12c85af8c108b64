use std::path::PathBuf;

use serde_json::value::RawValue;

use crate::error::{DreamError, Result};

/// Read-only lookup of previously stored dreams
///
/// Each record is a `<id>.json` file in one directory. Records are returned
/// exactly as stored.
#[derive(Debug, Clone)]
pub struct DreamStore {
    directory: PathBuf,
}

impl DreamStore {
    pub fn new(directory: impl Into<PathBuf>) -> Self {
        Self {
            directory: directory.into(),
        }
    }

    /// Fetch a stored dream by identifier
    ///
    /// Identifiers outside `[A-Za-z0-9_-]` never match a record, which keeps
    /// lookups inside the store directory.
    pub async fn get(&self, id: &str) -> Result<Box<RawValue>> {
        if !is_valid_id(id) {
            tracing::debug!(id, "rejecting malformed dream id");
            return Err(DreamError::NotFound);
        }

        let path = self.directory.join(format!("{id}.json"));

        let raw = match tokio::fs::read_to_string(&path).await {
            Ok(raw) => raw,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => return Err(DreamError::NotFound),
            Err(e) => {
                return Err(DreamError::Internal(format!(
                    "failed to read {}: {e}",
                    path.display()
                )));
            }
        };

        RawValue::from_string(raw)
            .map_err(|e| DreamError::Internal(format!("invalid JSON in {}: {e}", path.display())))
    }
}

fn is_valid_id(id: &str) -> bool {
    !id.is_empty() && id.chars().all(|c| c.is_ascii_alphanumeric() || c == '-' || c == '_')
}

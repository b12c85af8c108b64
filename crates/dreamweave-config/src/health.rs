use serde::Deserialize;

/// Health check endpoint configuration
#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct HealthConfig {
    #[serde(default = "default_enabled")]
    pub enabled: bool,
    #[serde(default = "default_path")]
    pub path: String,
}

impl HealthConfig {
    /// Path to mount the health route on, if it is enabled and mountable
    #[must_use]
    pub fn route_path(&self) -> Option<&str> {
        (self.enabled && self.path.starts_with('/') && !is_reserved_path(&self.path)).then_some(self.path.as_str())
    }
}

/// `/` and everything under `/api` belong to the service itself; `{` and
/// `*` would be read as route captures.
pub(crate) fn is_reserved_path(path: &str) -> bool {
    path == "/" || path == "/api" || path.starts_with("/api/") || path.contains(['{', '}', '*'])
}

impl Default for HealthConfig {
    fn default() -> Self {
        Self {
            enabled: default_enabled(),
            path: default_path(),
        }
    }
}

#[allow(clippy::missing_const_for_fn)]
fn default_enabled() -> bool {
    true
}

fn default_path() -> String {
    "/health".to_string()
}

use std::path::PathBuf;

use serde::Deserialize;

/// Location of previously stored dreams
#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct DreamsConfig {
    /// Directory holding `<id>.json` records
    #[serde(default = "default_directory")]
    pub directory: PathBuf,
}

impl Default for DreamsConfig {
    fn default() -> Self {
        Self {
            directory: default_directory(),
        }
    }
}

fn default_directory() -> PathBuf {
    PathBuf::from("dreams")
}

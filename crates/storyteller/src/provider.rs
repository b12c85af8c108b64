pub(crate) mod openai;

use async_trait::async_trait;

use crate::types::StoryRequest;

/// Language model that turns a rendered prompt into story text
#[async_trait]
pub trait StoryWriter: Send + Sync {
    /// Generate the story, trimmed of surrounding whitespace
    async fn write(&self, request: &StoryRequest) -> crate::error::Result<String>;

    /// Provider name used in logs
    fn name(&self) -> &str;
}

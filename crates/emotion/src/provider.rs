pub(crate) mod huggingface;

use async_trait::async_trait;

use crate::types::EmotionScore;

/// Text emotion classifier
#[async_trait]
pub trait EmotionClassifier: Send + Sync {
    /// Score the text against the classifier's emotion labels, in any order
    async fn classify(&self, text: &str) -> crate::error::Result<Vec<EmotionScore>>;

    /// Provider name used in logs
    fn name(&self) -> &str;
}

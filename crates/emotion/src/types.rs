use serde::{Deserialize, Serialize};

/// One label from the classifier's ranked output
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EmotionScore {
    pub label: String,
    pub score: f64,
}

/// Where an [`EmotionPair`] came from
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EmotionSource {
    /// Ranked classifier output
    Classifier,
    /// No classifier credential configured
    Unconfigured,
    /// Classifier call did not complete (timeout, connection failure)
    Unreachable,
    /// Classifier answered with an error status or unusable body
    Unusable,
}

/// Dominant and secondary emotion for a dream fragment
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EmotionPair {
    pub dominant: String,
    pub secondary: String,
    pub source: EmotionSource,
}

impl EmotionPair {
    /// Label used for the secondary emotion when only one label is ranked
    pub const SINGLE_LABEL_SECONDARY: &'static str = "neutral";

    pub(crate) fn fallback(source: EmotionSource) -> Self {
        let dominant = match source {
            EmotionSource::Unusable => "neutral",
            EmotionSource::Classifier | EmotionSource::Unconfigured | EmotionSource::Unreachable => "mysterious",
        };

        Self {
            dominant: dominant.to_owned(),
            secondary: "contemplative".to_owned(),
            source,
        }
    }

    /// Whether this pair is a substitute for classifier output
    pub fn is_fallback(&self) -> bool {
        self.source != EmotionSource::Classifier
    }
}

#![allow(
    clippy::must_use_candidate,
    clippy::missing_errors_doc,
    clippy::missing_const_for_fn,
    clippy::module_name_repetitions
)]

//! Emotion classification of transcribed dream text
//!
//! Classification is best effort: [`resolve`] always produces an
//! [`EmotionPair`], substituting a fixed fallback pair whenever the
//! classifier is missing or unusable.

mod error;
mod provider;
mod resolve;
mod types;

use std::sync::Arc;

use dreamweave_config::EmotionConfig;

pub use error::{EmotionError, Result};
pub use provider::{EmotionClassifier, huggingface::HuggingFaceClassifier};
pub use resolve::{rank, resolve};
pub use types::{EmotionPair, EmotionScore, EmotionSource};

/// Build the classifier described by configuration
///
/// Returns `None` when no credential is configured, which puts every
/// request into fallback mode.
pub fn build_classifier(config: &EmotionConfig) -> Option<Arc<dyn EmotionClassifier>> {
    let Some(api_key) = config.credential() else {
        tracing::warn!("no emotion classifier credential configured, using fallback emotions");
        return None;
    };

    Some(Arc::new(HuggingFaceClassifier::new(
        "huggingface".to_owned(),
        api_key.clone(),
        config.url.clone(),
        config.timeout,
    )))
}

#![allow(
    clippy::must_use_candidate,
    clippy::missing_errors_doc,
    clippy::missing_const_for_fn,
    clippy::module_name_repetitions
)]

//! Story generation from dream fragments

mod error;
mod prompt;
mod provider;
mod style;
mod types;

use std::sync::Arc;

use dreamweave_config::StoryConfig;

pub use error::{Result, StoryError};
pub use prompt::{SYSTEM_PROMPT, StoryPrompt};
pub use provider::{StoryWriter, openai::OpenAiWriter};
pub use style::{GENERIC_INSTRUCTION, StoryStyle, instruction_for};
pub use types::StoryRequest;

/// Build the story writer described by configuration
///
/// Returns `None` when no credential is configured.
pub fn build_writer(config: &StoryConfig) -> Option<Arc<dyn StoryWriter>> {
    let Some(api_key) = config.credential() else {
        tracing::warn!("no story generation credential configured, dream processing will be rejected");
        return None;
    };

    tracing::debug!(model = %config.model, "initializing chat completion writer");

    Some(Arc::new(OpenAiWriter::new(
        "openai".to_owned(),
        api_key.clone(),
        config.base_url.clone(),
        config.model.clone(),
    )))
}

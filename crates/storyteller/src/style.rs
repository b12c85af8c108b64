use strum::{Display, EnumIter, EnumString};

/// Instruction used for any style outside the table
pub const GENERIC_INSTRUCTION: &str = "Write as a compelling narrative story.";

/// Narrative voices with a dedicated instruction
///
/// Labels are matched exactly as the client sends them.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display, EnumString, EnumIter)]
pub enum StoryStyle {
    Shakespearean,
    Tarantino,
    #[strum(serialize = "Sci-Fi")]
    SciFi,
}

impl StoryStyle {
    /// Writing instruction for this voice
    pub const fn instruction(self) -> &'static str {
        match self {
            Self::Shakespearean => {
                "Write in the style of Shakespeare with poetic language, metaphors, and dramatic flair. \
                 Use archaic language patterns and rich imagery."
            }
            Self::Tarantino => {
                "Write in Quentin Tarantino's style with sharp dialogue, non-linear narrative elements, \
                 and vivid, cinematic descriptions."
            }
            Self::SciFi => {
                "Write as a science fiction story with futuristic elements, advanced technology, \
                 and speculative concepts."
            }
        }
    }
}

/// Resolve a caller-supplied style label to its instruction
///
/// Unknown labels get [`GENERIC_INSTRUCTION`].
pub fn instruction_for(style: &str) -> &'static str {
    style
        .parse::<StoryStyle>()
        .map_or(GENERIC_INSTRUCTION, StoryStyle::instruction)
}

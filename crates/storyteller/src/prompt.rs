use indoc::formatdoc;

use crate::{style::instruction_for, types::StoryRequest};

/// System instruction sent with every generation request
pub const SYSTEM_PROMPT: &str = "You are a creative writer who specializes in transforming dream fragments \
                                 into compelling short stories. Focus on atmosphere, emotion, and vivid imagery.";

/// Inputs for the story prompt
#[derive(Debug, Clone, Copy)]
pub struct StoryPrompt<'a> {
    /// Transcribed dream fragment
    pub fragment: &'a str,
    pub dominant_emotion: &'a str,
    pub secondary_emotion: &'a str,
    /// Caller-supplied style label, resolved through the style table
    pub style: &'a str,
}

impl StoryPrompt<'_> {
    /// Render the user prompt
    pub fn render(&self) -> String {
        formatdoc! {r#"
            Transform this dream fragment into a captivating short story (200-400 words).

            Dream Fragment: "{fragment}"
            Dominant Emotion: {dominant}
            Secondary Emotion: {secondary}
            Style: {style}

            Create a story that:
            1. Captures the essence and mood of the dream
            2. Incorporates the dominant emotions naturally
            3. Maintains the dreamlike, surreal quality
            4. Has a clear beginning, middle, and end
            5. Uses vivid, sensory descriptions

            Story:"#,
            fragment = self.fragment,
            dominant = self.dominant_emotion,
            secondary = self.secondary_emotion,
            style = instruction_for(self.style),
        }
    }

    /// Render into a complete generation request
    pub fn into_request(self, max_tokens: u32, temperature: f32) -> StoryRequest {
        StoryRequest {
            system: SYSTEM_PROMPT.to_owned(),
            prompt: self.render(),
            max_tokens,
            temperature,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::style::GENERIC_INSTRUCTION;

    #[test]
    fn renders_tarantino_prompt() {
        let prompt = StoryPrompt {
            fragment: "I was in a diner and the coffee kept refilling itself",
            dominant_emotion: "surprise",
            secondary_emotion: "joy",
            style: "Tarantino",
        };

        insta::assert_snapshot!(prompt.render(), @r#"
        Transform this dream fragment into a captivating short story (200-400 words).

        Dream Fragment: "I was in a diner and the coffee kept refilling itself"
        Dominant Emotion: surprise
        Secondary Emotion: joy
        Style: Write in Quentin Tarantino's style with sharp dialogue, non-linear narrative elements, and vivid, cinematic descriptions.

        Create a story that:
        1. Captures the essence and mood of the dream
        2. Incorporates the dominant emotions naturally
        3. Maintains the dreamlike, surreal quality
        4. Has a clear beginning, middle, and end
        5. Uses vivid, sensory descriptions

        Story:
        "#);
    }

    #[test]
    fn unknown_style_uses_generic_instruction() {
        let prompt = StoryPrompt {
            fragment: "a lighthouse made of glass",
            dominant_emotion: "mysterious",
            secondary_emotion: "contemplative",
            style: "Noir",
        };

        let rendered = prompt.render();
        assert!(rendered.contains(&format!("Style: {GENERIC_INSTRUCTION}")));
        assert!(rendered.contains("Dominant Emotion: mysterious"));
        assert!(rendered.ends_with("Story:"));
    }

    #[test]
    fn request_carries_generation_settings() {
        let request = StoryPrompt {
            fragment: "falling",
            dominant_emotion: "fear",
            secondary_emotion: "neutral",
            style: "Sci-Fi",
        }
        .into_request(800, 0.8);

        assert_eq!(request.system, SYSTEM_PROMPT);
        assert_eq!(request.max_tokens, 800);
        assert!((request.temperature - 0.8).abs() < f32::EPSILON);
        assert!(request.prompt.contains("science fiction"));
    }
}

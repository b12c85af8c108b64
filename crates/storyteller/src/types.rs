/// A fully rendered generation request
#[derive(Debug, Clone)]
pub struct StoryRequest {
    /// System instruction framing the writer's role
    pub system: String,
    /// Rendered user prompt
    pub prompt: String,
    /// Upper bound on generated tokens
    pub max_tokens: u32,
    /// Sampling temperature
    pub temperature: f32,
}

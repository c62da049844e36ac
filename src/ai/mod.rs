//! Text-generation model access

pub mod client;

use async_trait::async_trait;

use crate::errors::NotifierError;

// Re-export main types for convenience
pub use client::BedrockClient;

/// Sampling settings sent with every model call.
#[derive(Debug, Clone, PartialEq)]
pub struct InferenceParams {
    pub max_tokens: i32,
    pub temperature: f32,
    pub top_p: f32,
    /// Vendor-specific hint forwarded as an additional request field.
    pub reasoning_effort: Option<String>,
}

impl Default for InferenceParams {
    fn default() -> Self {
        Self {
            max_tokens: 4096,
            temperature: 0.5,
            top_p: 1.0,
            reasoning_effort: Some("medium".to_string()),
        }
    }
}

/// A single-turn, non-streaming text completion.
///
/// Implementations must report authorization failures as
/// [`NotifierError::AccessDeniedError`] and everything else as
/// [`NotifierError::ModelError`].
#[async_trait]
pub trait TextGenerator: Send + Sync {
    async fn generate(
        &self,
        system_prompt: &str,
        user_message: &str,
        params: &InferenceParams,
    ) -> Result<String, NotifierError>;
}

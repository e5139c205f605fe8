pub mod gemini;
pub mod ollama;

use async_trait::async_trait;

/// Single-turn completion: a fixed instruction plus the user's current
/// message. The advice flow carries no conversation memory, so the seam is
/// deliberately that narrow.
#[async_trait]
pub trait LlmProvider: Send + Sync {
    async fn complete(&self, system_prompt: &str, user_text: &str) -> anyhow::Result<String>;
}

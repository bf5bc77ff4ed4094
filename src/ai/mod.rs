//! AI service integration for prompt generation and translation
//!
//! Provides the trait seams the session orchestrates over, the Gemini
//! implementations behind them, and mock clients for tests.

pub mod gemini;
pub mod mock;

pub use gemini::{GeminiPromptClient, GeminiTranslateClient};
pub use mock::{MockPromptClient, MockTranslationClient};

use crate::models::PromptParts;
use crate::Result;
use async_trait::async_trait;

/// Expands a short user idea into the four structured prompt fields.
#[async_trait]
pub trait PromptGenerationService: Send + Sync {
    async fn generate_prompt_parts(&self, idea: &str) -> Result<PromptParts>;
}

/// Translates one Indonesian field to English.
///
/// Implementations must return `""` for empty input without touching the
/// network; the session relies on that when fanning out over blank fields.
#[async_trait]
pub trait TranslationService: Send + Sync {
    async fn translate(&self, text: &str) -> Result<String>;
}

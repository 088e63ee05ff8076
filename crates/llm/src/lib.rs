//! TalentScout LLM
//!
//! Provides a unified interface for interacting with LLM providers:
//! - Hugging Face text-generation inference (Mistral instruction format)
//! - OpenAI and OpenAI-compatible chat completions
//!
//! Also includes the HTTP client factory and a provider factory keyed by
//! [`ProviderType`].

pub mod http_client;
pub mod huggingface;
pub mod openai;
pub mod provider;
pub mod types;

use std::sync::Arc;

// Re-export main types
pub use http_client::build_http_client;
pub use huggingface::{format_instruction_prompt, HuggingFaceProvider};
pub use openai::OpenAIProvider;
pub use provider::LlmProvider;
pub use types::*;

/// Create an LLM provider from a ProviderConfig.
///
/// Factory function that maps ProviderType to the concrete provider implementation.
pub fn create_provider(config: ProviderConfig) -> LlmResult<Arc<dyn LlmProvider>> {
    let provider: Arc<dyn LlmProvider> = match config.provider {
        ProviderType::HuggingFace => Arc::new(HuggingFaceProvider::new(config)?),
        ProviderType::OpenAI => Arc::new(OpenAIProvider::new(config)?),
    };
    Ok(provider)
}

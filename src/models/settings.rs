//! Settings Models
//!
//! Application configuration and settings data structures.

use std::path::PathBuf;

use serde::{Deserialize, Serialize};
use talent_scout_llm::ProviderType;

/// Sampling for one kind of model call
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Sampling {
    pub temperature: f32,
    pub max_tokens: u32,
}

impl Sampling {
    pub const fn new(temperature: f32, max_tokens: u32) -> Self {
        Self {
            temperature,
            max_tokens,
        }
    }
}

/// Sampling per call intent.
///
/// Structured and judgment calls run cooler than open-ended generation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SamplingConfig {
    pub question_generation: Sampling,
    pub evaluation: Sampling,
    pub analysis: Sampling,
    pub follow_up: Sampling,
    pub summary: Sampling,
}

impl Default for SamplingConfig {
    fn default() -> Self {
        Self {
            question_generation: Sampling::new(0.7, 500),
            evaluation: Sampling::new(0.3, 500),
            analysis: Sampling::new(0.3, 500),
            follow_up: Sampling::new(0.7, 200),
            summary: Sampling::new(0.3, 500),
        }
    }
}

impl SamplingConfig {
    fn entries(&self) -> [(&'static str, &Sampling); 5] {
        [
            ("question_generation", &self.question_generation),
            ("evaluation", &self.evaluation),
            ("analysis", &self.analysis),
            ("follow_up", &self.follow_up),
            ("summary", &self.summary),
        ]
    }
}

/// Application configuration stored in config.json
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    /// Language model backend
    pub provider: ProviderType,
    /// Model name for the provider
    pub model: String,
    /// Endpoint override for self-hosted or compatible servers
    #[serde(skip_serializing_if = "Option::is_none")]
    pub base_url: Option<String>,
    /// Upper bound on a single model call, in seconds
    pub request_timeout_secs: u64,
    /// Per-intent sampling
    pub sampling: SamplingConfig,
    /// Total question-generation calls before falling back to a default question
    pub question_generation_attempts: u32,
    /// Where downloaded summaries are written (defaults to ~/.talent-scout/summaries)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub export_dir: Option<PathBuf>,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            provider: ProviderType::HuggingFace,
            model: ProviderType::HuggingFace.default_model().to_string(),
            base_url: None,
            request_timeout_secs: 60,
            sampling: SamplingConfig::default(),
            question_generation_attempts: 2,
            export_dir: None,
        }
    }
}

/// Settings update request (partial update)
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct SettingsUpdate {
    pub provider: Option<ProviderType>,
    pub model: Option<String>,
    pub base_url: Option<String>,
    pub request_timeout_secs: Option<u64>,
    pub question_generation_attempts: Option<u32>,
    pub export_dir: Option<PathBuf>,
}

impl AppConfig {
    /// Apply a partial update to the configuration.
    ///
    /// Switching provider without naming a model picks that provider's
    /// default model.
    pub fn apply_update(&mut self, update: SettingsUpdate) {
        if let Some(provider) = update.provider {
            if provider != self.provider && update.model.is_none() {
                self.model = provider.default_model().to_string();
            }
            self.provider = provider;
        }
        if let Some(model) = update.model {
            self.model = model;
        }
        if let Some(base_url) = update.base_url {
            self.base_url = Some(base_url);
        }
        if let Some(timeout) = update.request_timeout_secs {
            self.request_timeout_secs = timeout;
        }
        if let Some(attempts) = update.question_generation_attempts {
            self.question_generation_attempts = attempts;
        }
        if let Some(dir) = update.export_dir {
            self.export_dir = Some(dir);
        }
    }

    /// Validate the configuration
    pub fn validate(&self) -> Result<(), String> {
        if self.model.trim().is_empty() {
            return Err("model must not be empty".to_string());
        }

        if self.request_timeout_secs == 0 {
            return Err("request_timeout_secs must be at least 1 second".to_string());
        }

        if self.question_generation_attempts == 0 {
            return Err("question_generation_attempts must be at least 1".to_string());
        }

        for (name, sampling) in self.sampling.entries() {
            if !(0.0..=1.0).contains(&sampling.temperature) {
                return Err(format!(
                    "Invalid temperature for {}: {}. Must be between 0.0 and 1.0",
                    name, sampling.temperature
                ));
            }
            if sampling.max_tokens == 0 {
                return Err(format!("max_tokens for {} must be at least 1", name));
            }
        }

        Ok(())
    }
}

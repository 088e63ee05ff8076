//! Hugging Face Provider
//!
//! Implementation of the LlmProvider trait for the Hugging Face text-generation
//! inference API. Chat messages are flattened into the Mistral instruction
//! format because the endpoint takes a single prompt string.

use std::time::Duration;

use async_trait::async_trait;
use serde::Deserialize;

use super::provider::{missing_api_key_error, parse_http_error, LlmProvider};
use super::types::{
    LlmError, LlmRequestOptions, LlmResponse, LlmResult, Message, MessageRole, ProviderConfig,
    StopReason, UsageStats,
};
use crate::http_client::build_http_client;

/// Default Hugging Face inference API root; the model id is appended
const HF_INFERENCE_URL: &str = "https://api-inference.huggingface.co/models";

/// Token introspection endpoint used by health checks
const HF_WHOAMI_URL: &str = "https://huggingface.co/api/whoami-v2";

/// Hugging Face provider
pub struct HuggingFaceProvider {
    config: ProviderConfig,
    client: reqwest::Client,
}

impl HuggingFaceProvider {
    /// Create a new Hugging Face provider with the given configuration
    pub fn new(config: ProviderConfig) -> LlmResult<Self> {
        let client = build_http_client(config.timeout_secs.map(Duration::from_secs))?;
        Ok(Self { config, client })
    }

    /// Full endpoint for the configured model
    fn endpoint(&self) -> String {
        let base = self
            .config
            .base_url
            .as_deref()
            .unwrap_or(HF_INFERENCE_URL)
            .trim_end_matches('/');
        format!("{}/{}", base, self.config.model)
    }

    /// Build the request body for the API
    fn build_request_body(
        &self,
        messages: &[Message],
        request_options: &LlmRequestOptions,
    ) -> serde_json::Value {
        let mut parameters = serde_json::json!({
            "max_new_tokens": self.config.max_tokens_for(request_options),
            "temperature": self.config.temperature_for(request_options),
            "return_full_text": false,
        });
        if let Some(top_p) = self.config.top_p {
            parameters["top_p"] = serde_json::json!(top_p);
        }
        if let Some(penalty) = self.config.repetition_penalty {
            parameters["repetition_penalty"] = serde_json::json!(penalty);
        }

        serde_json::json!({
            "inputs": format_instruction_prompt(messages),
            "parameters": parameters,
        })
    }
}

/// Flatten a conversation into a single Mistral instruction prompt.
///
/// Each message becomes one `System:`, `Human:` or `Assistant:` line inside
/// a `<s>[INST] ... [/INST]` block.
pub fn format_instruction_prompt(messages: &[Message]) -> String {
    let mut prompt = String::from("<s>[INST] ");
    for message in messages {
        let label = match message.role {
            MessageRole::System => "System",
            MessageRole::User => "Human",
            MessageRole::Assistant => "Assistant",
        };
        prompt.push_str(label);
        prompt.push_str(": ");
        prompt.push_str(&message.content);
        prompt.push('\n');
    }
    prompt.push_str(" [/INST]");
    prompt
}

#[async_trait]
impl LlmProvider for HuggingFaceProvider {
    fn name(&self) -> &'static str {
        "huggingface"
    }

    fn model(&self) -> &str {
        &self.config.model
    }

    async fn send_message(
        &self,
        messages: Vec<Message>,
        request_options: LlmRequestOptions,
    ) -> LlmResult<LlmResponse> {
        let api_key = self
            .config
            .api_key
            .as_ref()
            .ok_or_else(|| missing_api_key_error("huggingface"))?;

        let body = self.build_request_body(&messages, &request_options);
        tracing::debug!(model = %self.config.model, messages = messages.len(), "huggingface text generation");

        let response = self
            .client
            .post(self.endpoint())
            .header("Authorization", format!("Bearer {}", api_key))
            .header("Content-Type", "application/json")
            .json(&body)
            .send()
            .await
            .map_err(|e| LlmError::NetworkError {
                message: e.to_string(),
            })?;

        let status = response.status().as_u16();
        let body_text = response.text().await.map_err(|e| LlmError::NetworkError {
            message: e.to_string(),
        })?;

        if status != 200 {
            return Err(parse_http_error(status, &body_text, "huggingface"));
        }

        let parsed: GenerationResponse =
            serde_json::from_str(&body_text).map_err(|e| LlmError::ParseError {
                message: format!("Failed to parse response: {}", e),
            })?;

        parsed.into_response(&self.config.model)
    }

    async fn health_check(&self) -> LlmResult<()> {
        let api_key = self
            .config
            .api_key
            .as_ref()
            .ok_or_else(|| missing_api_key_error("huggingface"))?;

        let response = self
            .client
            .get(HF_WHOAMI_URL)
            .header("Authorization", format!("Bearer {}", api_key))
            .send()
            .await
            .map_err(|e| LlmError::NetworkError {
                message: e.to_string(),
            })?;

        let status = response.status().as_u16();
        if status == 200 {
            Ok(())
        } else {
            let body = response.text().await.unwrap_or_default();
            Err(parse_http_error(status, &body, "huggingface"))
        }
    }

    fn config(&self) -> &ProviderConfig {
        &self.config
    }
}

/// Text-generation response: a list of generations, a single generation,
/// or an error object returned with a 200 status.
#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum GenerationResponse {
    Many(Vec<Generation>),
    One(Generation),
    Error { error: String },
}

#[derive(Debug, Deserialize)]
struct Generation {
    generated_text: String,
    #[serde(default)]
    details: Option<GenerationDetails>,
}

#[derive(Debug, Deserialize)]
struct GenerationDetails {
    #[serde(default)]
    finish_reason: Option<String>,
    #[serde(default)]
    generated_tokens: Option<u32>,
}

impl GenerationResponse {
    fn into_response(self, model: &str) -> LlmResult<LlmResponse> {
        let generation = match self {
            GenerationResponse::Many(list) => list.into_iter().next(),
            GenerationResponse::One(generation) => Some(generation),
            GenerationResponse::Error { error } => {
                return Err(LlmError::ServerError {
                    message: error,
                    status: None,
                })
            }
        };

        let Some(generation) = generation else {
            return Ok(LlmResponse {
                content: None,
                stop_reason: StopReason::EndTurn,
                usage: UsageStats::default(),
                model: model.to_string(),
            });
        };

        let details = generation.details.as_ref();
        let stop_reason = details
            .and_then(|d| d.finish_reason.as_deref())
            .map(StopReason::from)
            .unwrap_or(StopReason::EndTurn);
        let usage = UsageStats {
            input_tokens: 0,
            output_tokens: details.and_then(|d| d.generated_tokens).unwrap_or(0),
        };

        Ok(LlmResponse {
            content: Some(generation.generated_text),
            stop_reason,
            usage,
            model: model.to_string(),
        })
    }
}

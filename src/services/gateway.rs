//! Language Model Gateway
//!
//! The single boundary between the interview and the language model backend.
//! Every call is bounded by the configured timeout; the returned text is
//! untrusted free-form output that may ignore the requested format.

use std::sync::Arc;
use std::time::{Duration, Instant};

use talent_scout_llm::{
    create_provider, LlmProvider, LlmRequestOptions, Message, ProviderConfig,
};
use tracing::{debug, warn};

use crate::models::settings::AppConfig;
use crate::utils::error::GatewayError;

/// Gateway around one configured provider
pub struct LanguageModelGateway {
    provider: Arc<dyn LlmProvider>,
    timeout: Duration,
}

impl LanguageModelGateway {
    /// Wrap an existing provider
    pub fn new(provider: Arc<dyn LlmProvider>, timeout: Duration) -> Self {
        Self { provider, timeout }
    }

    /// Build the gateway from application config and a credential.
    ///
    /// A missing or blank credential fails with `NotConfigured`.
    pub fn from_config(
        config: &AppConfig,
        api_key: Option<String>,
    ) -> Result<Self, GatewayError> {
        let api_key = api_key
            .map(|key| key.trim().to_string())
            .filter(|key| !key.is_empty())
            .ok_or_else(|| {
                GatewayError::NotConfigured(format!(
                    "{} is not set; export it or pass --api-key",
                    config.provider.api_key_env()
                ))
            })?;

        let provider_config = ProviderConfig {
            provider: config.provider,
            api_key: Some(api_key),
            base_url: config.base_url.clone(),
            model: config.model.clone(),
            timeout_secs: Some(config.request_timeout_secs),
            ..Default::default()
        };

        let provider = create_provider(provider_config)?;
        Ok(Self::new(
            provider,
            Duration::from_secs(config.request_timeout_secs),
        ))
    }

    /// Provider name, e.g. `"huggingface"`
    pub fn provider_name(&self) -> &'static str {
        self.provider.name()
    }

    /// Model the provider sends requests to
    pub fn model(&self) -> &str {
        self.provider.model()
    }

    /// Generate text for a message list.
    ///
    /// Single attempt. Returns whatever text the model produced (possibly
    /// empty); callers parse it defensively.
    pub async fn generate(
        &self,
        messages: Vec<Message>,
        temperature: f32,
        max_output_tokens: u32,
    ) -> Result<String, GatewayError> {
        let options = LlmRequestOptions::sampling(temperature, max_output_tokens);
        let started = Instant::now();

        debug!(
            provider = self.provider.name(),
            model = self.provider.model(),
            messages = messages.len(),
            temperature,
            max_output_tokens,
            "gateway: sending request"
        );

        let result = tokio::time::timeout(
            self.timeout,
            self.provider.send_message(messages, options),
        )
        .await;

        let elapsed_ms = started.elapsed().as_millis() as u64;
        match result {
            Err(_) => {
                warn!(
                    provider = self.provider.name(),
                    elapsed_ms, "gateway: request timed out"
                );
                Err(GatewayError::Timeout {
                    secs: self.timeout.as_secs(),
                })
            }
            Ok(Err(e)) => {
                warn!(provider = self.provider.name(), elapsed_ms, error = %e, "gateway: request failed");
                Err(GatewayError::Upstream(e))
            }
            Ok(Ok(response)) => {
                debug!(
                    provider = self.provider.name(),
                    elapsed_ms,
                    output_tokens = response.usage.output_tokens,
                    "gateway: response received"
                );
                Ok(response.text().to_string())
            }
        }
    }

    /// Verify the backend accepts the credential, bounded by the timeout
    pub async fn health_check(&self) -> Result<(), GatewayError> {
        match tokio::time::timeout(self.timeout, self.provider.health_check()).await {
            Err(_) => Err(GatewayError::Timeout {
                secs: self.timeout.as_secs(),
            }),
            Ok(result) => result.map_err(GatewayError::Upstream),
        }
    }
}

impl std::fmt::Debug for LanguageModelGateway {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("LanguageModelGateway")
            .field("provider", &self.provider.name())
            .field("model", &self.provider.model())
            .field("timeout", &self.timeout)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use async_trait::async_trait;
    use std::sync::Mutex;
    use talent_scout_llm::{LlmError, LlmResponse, LlmResult};

    /// Provider that records sampling and replies after an optional delay
    struct ScriptedProvider {
        config: ProviderConfig,
        reply: LlmResult<String>,
        delay: Duration,
        seen: Mutex<Vec<LlmRequestOptions>>,
    }

    impl ScriptedProvider {
        fn new(reply: LlmResult<String>, delay: Duration) -> Self {
            Self {
                config: ProviderConfig::default(),
                reply,
                delay,
                seen: Mutex::new(Vec::new()),
            }
        }
    }

    #[async_trait]
    impl LlmProvider for ScriptedProvider {
        fn name(&self) -> &'static str {
            "scripted"
        }

        fn model(&self) -> &str {
            "scripted-model"
        }

        async fn send_message(
            &self,
            _messages: Vec<Message>,
            request_options: LlmRequestOptions,
        ) -> LlmResult<LlmResponse> {
            self.seen.lock().unwrap().push(request_options);
            tokio::time::sleep(self.delay).await;
            self.reply
                .clone()
                .map(|text| LlmResponse::from_text(text, "scripted-model"))
        }

        async fn health_check(&self) -> LlmResult<()> {
            Ok(())
        }

        fn config(&self) -> &ProviderConfig {
            &self.config
        }
    }

    #[tokio::test]
    async fn test_generate_passes_sampling() {
        let provider = Arc::new(ScriptedProvider::new(
            Ok("Score: 7".to_string()),
            Duration::ZERO,
        ));
        let gateway = LanguageModelGateway::new(provider.clone(), Duration::from_secs(5));

        let text = gateway
            .generate(vec![Message::user("evaluate")], 0.3, 500)
            .await
            .unwrap();

        assert_eq!(text, "Score: 7");
        let seen = provider.seen.lock().unwrap();
        assert_eq!(seen[0].temperature_override, Some(0.3));
        assert_eq!(seen[0].max_tokens_override, Some(500));
    }

    #[tokio::test]
    async fn test_generate_times_out() {
        let provider = Arc::new(ScriptedProvider::new(
            Ok("late".to_string()),
            Duration::from_secs(5),
        ));
        let gateway = LanguageModelGateway::new(provider, Duration::from_millis(20));

        let err = gateway
            .generate(vec![Message::user("hi")], 0.7, 200)
            .await
            .unwrap_err();
        assert!(matches!(err, GatewayError::Timeout { .. }));
    }

    #[tokio::test]
    async fn test_upstream_error_is_wrapped() {
        let provider = Arc::new(ScriptedProvider::new(
            Err(LlmError::AuthenticationFailed {
                message: "bad key".to_string(),
            }),
            Duration::ZERO,
        ));
        let gateway = LanguageModelGateway::new(provider, Duration::from_secs(5));

        let err = gateway
            .generate(vec![Message::user("hi")], 0.7, 200)
            .await
            .unwrap_err();
        assert!(matches!(
            err,
            GatewayError::Upstream(LlmError::AuthenticationFailed { .. })
        ));
    }

    #[test]
    fn test_missing_credential_is_not_configured() {
        let config = AppConfig::default();
        for key in [None, Some("   ".to_string())] {
            let err = LanguageModelGateway::from_config(&config, key).unwrap_err();
            match err {
                GatewayError::NotConfigured(message) => {
                    assert!(message.contains("HUGGINGFACE_API_KEY"))
                }
                other => panic!("Expected NotConfigured, got {other:?}"),
            }
        }
    }

    #[test]
    fn test_from_config_builds_provider() {
        let config = AppConfig::default();
        let gateway =
            LanguageModelGateway::from_config(&config, Some("hf_test".to_string())).unwrap();
        assert_eq!(gateway.provider_name(), "huggingface");
        assert_eq!(gateway.model(), "mistralai/Mistral-7B-Instruct-v0.2");
    }
}

//! Test support: a scripted language model and profile fixtures.

use std::collections::VecDeque;
use std::sync::{Arc, Mutex};
use std::time::Duration;

use async_trait::async_trait;
use talent_scout::models::settings::AppConfig;
use talent_scout::services::gateway::LanguageModelGateway;
use talent_scout::services::interview::InterviewFlowController;
use talent_scout_core::{RawExperience, RawProfile};
use talent_scout_llm::{
    LlmError, LlmProvider, LlmRequestOptions, LlmResponse, LlmResult, Message, ProviderConfig,
};

/// One request the mock received
#[derive(Debug, Clone)]
pub struct RecordedRequest {
    pub messages: Vec<Message>,
    pub options: LlmRequestOptions,
}

impl RecordedRequest {
    /// Body of the user message
    pub fn instruction(&self) -> &str {
        self.messages
            .last()
            .map(|m| m.content.as_str())
            .unwrap_or_default()
    }
}

/// Replies from a queue and records every request.
///
/// An exhausted queue answers with `ProviderUnavailable`.
pub struct MockLlmProvider {
    config: ProviderConfig,
    replies: Mutex<VecDeque<LlmResult<String>>>,
    requests: Mutex<Vec<RecordedRequest>>,
}

impl MockLlmProvider {
    pub fn new() -> Arc<Self> {
        Arc::new(Self {
            config: ProviderConfig::default(),
            replies: Mutex::new(VecDeque::new()),
            requests: Mutex::new(Vec::new()),
        })
    }

    pub fn reply(&self, text: &str) -> &Self {
        self.replies.lock().unwrap().push_back(Ok(text.to_string()));
        self
    }

    pub fn fail(&self, error: LlmError) -> &Self {
        self.replies.lock().unwrap().push_back(Err(error));
        self
    }

    pub fn requests(&self) -> Vec<RecordedRequest> {
        self.requests.lock().unwrap().clone()
    }

    pub fn request_count(&self) -> usize {
        self.requests.lock().unwrap().len()
    }
}

#[async_trait]
impl LlmProvider for MockLlmProvider {
    fn name(&self) -> &'static str {
        "mock"
    }

    fn model(&self) -> &str {
        "mock-model"
    }

    async fn send_message(
        &self,
        messages: Vec<Message>,
        request_options: LlmRequestOptions,
    ) -> LlmResult<LlmResponse> {
        self.requests.lock().unwrap().push(RecordedRequest {
            messages,
            options: request_options,
        });
        let reply = self.replies.lock().unwrap().pop_front().unwrap_or_else(|| {
            Err(LlmError::ProviderUnavailable {
                message: "no scripted reply".to_string(),
            })
        });
        reply.map(|text| LlmResponse::from_text(text, "mock-model"))
    }

    async fn health_check(&self) -> LlmResult<()> {
        Ok(())
    }

    fn config(&self) -> &ProviderConfig {
        &self.config
    }
}

pub fn gateway(provider: Arc<MockLlmProvider>) -> Arc<LanguageModelGateway> {
    Arc::new(LanguageModelGateway::new(provider, Duration::from_secs(5)))
}

pub fn controller(provider: Arc<MockLlmProvider>) -> InterviewFlowController {
    InterviewFlowController::new(gateway(provider), &AppConfig::default())
}

pub fn raw_profile(experience: i64, tech_stack: &str) -> RawProfile {
    RawProfile {
        full_name: "Jane Doe".to_string(),
        email: "Jane.Doe@Example.com".to_string(),
        phone: "+1 555-0100".to_string(),
        experience: Some(RawExperience::Years(experience)),
        position: "Backend Engineer".to_string(),
        location: "Berlin".to_string(),
        tech_stack: tech_stack.to_string(),
    }
}

pub const SATISFACTORY: &str = "Score: 8\nSatisfactory: true\nFeedback: Clear and correct.";
pub const UNSATISFACTORY: &str = "Score: 3\nSatisfactory: false\nFeedback: Missing key details.";

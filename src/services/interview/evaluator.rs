//! Response Evaluator
//!
//! Scores a candidate answer through the gateway and parses the model's
//! labeled-line reply. Parsing never fails: malformed output degrades to
//! "not satisfactory, no feedback".

use std::sync::Arc;

use chrono::Utc;
use serde::{Deserialize, Serialize};

use super::prompts;
use crate::models::settings::SamplingConfig;
use crate::services::gateway::LanguageModelGateway;
use crate::utils::error::GatewayError;

/// Verdict on one answer
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Evaluation {
    pub is_satisfactory: bool,
    /// 0-10, 0 when the model's score could not be read
    pub score: u8,
    pub feedback: String,
}

/// Prose assessment of one answer
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ResponseAnalysis {
    pub analysis: String,
    /// RFC 3339 generation time
    pub timestamp: String,
}

/// Parse `Score:` / `Satisfactory:` / `Feedback:` lines.
///
/// Lines are matched after trimming leading whitespace. Later duplicates
/// overwrite earlier ones. Unmatched fields keep their defaults.
pub fn parse_evaluation(text: &str) -> Evaluation {
    let mut evaluation = Evaluation::default();

    for line in text.lines().map(str::trim_start) {
        if let Some(value) = line.strip_prefix("Score:") {
            evaluation.score = value
                .trim()
                .parse::<i64>()
                .map(|score| score.clamp(0, 10) as u8)
                .unwrap_or(0);
        } else if let Some(value) = line.strip_prefix("Satisfactory:") {
            evaluation.is_satisfactory = value.trim().to_lowercase() == "true";
        } else if let Some(value) = line.strip_prefix("Feedback:") {
            evaluation.feedback = value.trim().to_string();
        }
    }

    evaluation
}

/// Runs evaluation and analysis calls for the flow controller
#[derive(Debug, Clone)]
pub struct ResponseEvaluator {
    gateway: Arc<LanguageModelGateway>,
    sampling: SamplingConfig,
}

impl ResponseEvaluator {
    pub fn new(gateway: Arc<LanguageModelGateway>, sampling: SamplingConfig) -> Self {
        Self { gateway, sampling }
    }

    /// Score an answer against the question it responds to
    pub async fn evaluate(&self, answer: &str, question: &str) -> Result<Evaluation, GatewayError> {
        let sampling = self.sampling.evaluation;
        let reply = self
            .gateway
            .generate(
                prompts::evaluation(question, answer),
                sampling.temperature,
                sampling.max_tokens,
            )
            .await?;
        Ok(parse_evaluation(&reply))
    }

    /// Free-text assessment of an answer
    pub async fn analyze(
        &self,
        answer: &str,
        question: &str,
    ) -> Result<ResponseAnalysis, GatewayError> {
        let sampling = self.sampling.analysis;
        let analysis = self
            .gateway
            .generate(
                prompts::analysis(question, answer),
                sampling.temperature,
                sampling.max_tokens,
            )
            .await?;
        Ok(ResponseAnalysis {
            analysis: analysis.trim().to_string(),
            timestamp: Utc::now().to_rfc3339(),
        })
    }
}

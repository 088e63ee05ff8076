//! Interview Flow Controller
//!
//! Drives one session through `collecting_profile -> in_progress -> ended`.
//!
//! Every operation that calls the language model finishes all of its calls
//! before touching the session, so a gateway failure leaves the session
//! exactly as it was and the candidate can retry the same input.

use std::sync::Arc;

use serde::{Deserialize, Serialize};
use talent_scout_core::{validate_profile, CandidateProfile, RawProfile};
use tracing::{debug, info, warn};

use super::evaluator::{Evaluation, ResponseAnalysis, ResponseEvaluator};
use super::prompts::{self, FollowUpContext, CLOSING_MESSAGE};
use crate::models::session::{ChatMessage, InterviewSession, InterviewStage};
use crate::models::settings::{AppConfig, SamplingConfig};
use crate::services::gateway::LanguageModelGateway;
use crate::utils::error::{AppError, AppResult};

/// Typed inputs that end the interview, compared trimmed and lower-cased
pub const EXIT_PHRASES: [&str; 3] = ["exit", "quit", "end interview"];

/// Topic label when a question carries no `[Technology]` prefix
pub const GENERAL_TOPIC: &str = "General";

/// Whether the candidate's input is an exit phrase
pub fn is_exit_phrase(input: &str) -> bool {
    let normalized = input.trim().to_lowercase();
    EXIT_PHRASES.contains(&normalized.as_str())
}

/// Topic of a question from its bracketed `[Technology]` tag.
///
/// Best effort: the model is asked for the tag but may omit it, in which
/// case the topic is [`GENERAL_TOPIC`].
pub fn extract_topic(question: &str) -> String {
    question
        .split_once('[')
        .and_then(|(_, rest)| rest.split_once(']'))
        .map(|(topic, _)| topic.trim())
        .filter(|topic| !topic.is_empty())
        .unwrap_or(GENERAL_TOPIC)
        .to_string()
}

/// First non-empty line of generated question text
pub fn first_question(generated: &str) -> Option<String> {
    generated
        .lines()
        .map(str::trim)
        .find(|line| !line.is_empty())
        .map(str::to_string)
}

/// Deterministic question used when the model produces nothing usable
pub fn fallback_question(technology: &str) -> String {
    format!(
        "[{technology}] Walk me through a recent project where you used {technology}. What problem did it solve, and what trade-offs did you make along the way?"
    )
}

/// Result of processing one candidate input
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum TurnOutcome {
    /// The answer was evaluated and a next question issued
    Answered {
        evaluation: Evaluation,
        analysis: ResponseAnalysis,
        next_question: String,
    },
    /// The candidate typed an exit phrase
    Ended,
}

/// State machine driving interview sessions
#[derive(Debug, Clone)]
pub struct InterviewFlowController {
    gateway: Arc<LanguageModelGateway>,
    evaluator: ResponseEvaluator,
    sampling: SamplingConfig,
    question_attempts: u32,
}

impl InterviewFlowController {
    pub fn new(gateway: Arc<LanguageModelGateway>, config: &AppConfig) -> Self {
        Self {
            evaluator: ResponseEvaluator::new(gateway.clone(), config.sampling.clone()),
            gateway,
            sampling: config.sampling.clone(),
            question_attempts: config.question_generation_attempts.max(1),
        }
    }

    /// Validate the raw profile and move the session to `in_progress`.
    ///
    /// Validation failures leave the session in `collecting_profile`.
    pub fn start(&self, session: &mut InterviewSession, raw: &RawProfile) -> AppResult<()> {
        session.require_stage(InterviewStage::CollectingProfile)?;
        let profile = validate_profile(raw)?;

        info!(
            session_id = %session.id(),
            tier = %profile.tier(),
            technologies = profile.tech_stack().len(),
            "interview started"
        );

        session.advance_stage(InterviewStage::InProgress)?;
        session.attach_profile(profile);
        Ok(())
    }

    /// Send the greeting and the first question, whichever are missing.
    ///
    /// Calling it again once both exist is a no-op.
    pub async fn open(&self, session: &mut InterviewSession) -> AppResult<()> {
        session.require_stage(InterviewStage::InProgress)?;
        let profile = Self::profile_of(session)?.clone();

        let question = match session.current_question() {
            Some(_) => None,
            None => Some(self.generate_first_question(session.id(), &profile).await?),
        };

        if session.push_greeting(prompts::greeting(&profile)) {
            debug!(session_id = %session.id(), "greeting sent");
        }

        if let Some(question) = question {
            session.set_current_topic(extract_topic(&question));
            session.push_message(ChatMessage::assistant(prompts::initial_question_message(
                &question,
            )));
            session.set_current_question(question);
        }

        Ok(())
    }

    /// Process one candidate input.
    ///
    /// Exit phrases end the interview without any model call. Anything else
    /// is evaluated, analyzed and answered with a next question, in that
    /// order, before the session is updated.
    pub async fn process_turn(
        &self,
        session: &mut InterviewSession,
        input: &str,
    ) -> AppResult<TurnOutcome> {
        session.require_stage(InterviewStage::InProgress)?;
        let input = input.trim();
        if input.is_empty() {
            return Err(AppError::invalid_state("Cannot process an empty message"));
        }

        if is_exit_phrase(input) {
            session.push_message(ChatMessage::assistant(CLOSING_MESSAGE));
            session.advance_stage(InterviewStage::Ended)?;
            info!(
                session_id = %session.id(),
                questions_asked = session.questions_asked(),
                "interview ended by candidate"
            );
            return Ok(TurnOutcome::Ended);
        }

        let question = session
            .current_question()
            .map(str::to_string)
            .ok_or_else(|| AppError::invalid_state("The interview has not been opened yet"))?;
        let profile = Self::profile_of(session)?.clone();
        let topic = session.current_topic().unwrap_or(GENERAL_TOPIC).to_string();

        let evaluation = self.evaluator.evaluate(input, &question).await?;
        let analysis = self.evaluator.analyze(input, &question).await?;

        let context = FollowUpContext {
            tech_stack: profile.tech_stack(),
            current_question: &question,
            current_topic: &topic,
            tier: profile.tier(),
            experience: profile.experience(),
        };
        let sampling = self.sampling.follow_up;
        let generated = self
            .gateway
            .generate(
                prompts::follow_up(input, &context, evaluation.is_satisfactory),
                sampling.temperature,
                sampling.max_tokens,
            )
            .await?;
        let next_question = match generated.trim() {
            "" => {
                warn!(session_id = %session.id(), "empty follow-up, using fallback question");
                fallback_question(Self::fallback_technology(
                    &profile,
                    &topic,
                    evaluation.is_satisfactory,
                ))
            }
            text => text.to_string(),
        };

        session.push_message(ChatMessage::user(input));
        session.push_message(ChatMessage::assistant(prompts::turn_message(
            &analysis.analysis,
            &evaluation.feedback,
            &next_question,
        )));
        session.set_current_question(next_question.clone());
        session.increment_questions_asked();
        if evaluation.is_satisfactory {
            session.set_current_topic(extract_topic(&next_question));
        }

        info!(
            session_id = %session.id(),
            score = evaluation.score,
            satisfactory = evaluation.is_satisfactory,
            questions_asked = session.questions_asked(),
            topic = session.current_topic().unwrap_or(GENERAL_TOPIC),
            "turn processed"
        );

        Ok(TurnOutcome::Answered {
            evaluation,
            analysis,
            next_question,
        })
    }

    /// Generate and store the interview summary.
    ///
    /// Sets the summary-ready flag; the stage is left as it is.
    pub async fn end_interview(&self, session: &mut InterviewSession) -> AppResult<String> {
        if session.stage() == InterviewStage::CollectingProfile {
            return Err(AppError::invalid_state(
                "Cannot summarize an interview that has not started",
            ));
        }

        let messages = {
            let profile = Self::profile_of(session)?;
            let assistant_messages = session.assistant_messages();
            prompts::summary(profile, session.questions_asked(), &assistant_messages)
        };

        let sampling = self.sampling.summary;
        let summary = self
            .gateway
            .generate(messages, sampling.temperature, sampling.max_tokens)
            .await?
            .trim()
            .to_string();

        session.set_summary(summary.clone());
        info!(
            session_id = %session.id(),
            questions_asked = session.questions_asked(),
            "interview summary generated"
        );
        Ok(summary)
    }

    /// Wipe the session back to `collecting_profile`, discarding the profile
    pub fn reset(&self, session: &mut InterviewSession) {
        info!(session_id = %session.id(), stage = %session.stage(), "session reset");
        session.reset();
    }

    async fn generate_first_question(
        &self,
        session_id: &str,
        profile: &CandidateProfile,
    ) -> AppResult<String> {
        let sampling = self.sampling.question_generation;

        for attempt in 1..=self.question_attempts {
            let generated = self
                .gateway
                .generate(
                    prompts::question_generation(profile.tech_stack(), profile.experience()),
                    sampling.temperature,
                    sampling.max_tokens,
                )
                .await?;

            if let Some(question) = first_question(&generated) {
                debug!(session_id, attempt, "first question generated");
                return Ok(question);
            }
            warn!(session_id, attempt, "question generation returned no usable line");
        }

        let technology = profile
            .tech_stack()
            .first()
            .map(String::as_str)
            .unwrap_or(GENERAL_TOPIC);
        warn!(session_id, "using fallback first question");
        Ok(fallback_question(technology))
    }

    /// Technology for a fallback follow-up: the next one in the stack after
    /// a satisfactory answer, otherwise the current topic
    fn fallback_technology<'a>(
        profile: &'a CandidateProfile,
        topic: &'a str,
        satisfactory: bool,
    ) -> &'a str {
        let stack = profile.tech_stack();
        let current = stack.iter().position(|tech| tech == topic);
        match (satisfactory, current) {
            (true, Some(index)) => &stack[(index + 1) % stack.len()],
            (false, Some(index)) => &stack[index],
            _ => stack.first().map(String::as_str).unwrap_or(GENERAL_TOPIC),
        }
    }

    fn profile_of(session: &InterviewSession) -> AppResult<&CandidateProfile> {
        session.profile().ok_or_else(|| {
            AppError::internal(format!("session {} has no candidate profile", session.id()))
        })
    }
}

//! Interview Session Models
//!
//! The per-session record mutated turn by turn by the interview flow
//! controller, plus the read-only views handed to the UI collaborator.

use chrono::Utc;
use serde::{Deserialize, Serialize};
use talent_scout_core::CandidateProfile;
use talent_scout_llm::MessageRole;

use crate::utils::error::{AppError, AppResult};

/// Interview stage. Only advances forward, except through a full reset.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum InterviewStage {
    /// Waiting for a valid candidate profile
    CollectingProfile,
    /// Greeting, questions and answers
    InProgress,
    /// Candidate typed an exit phrase
    Ended,
}

impl InterviewStage {
    /// Get the string form used in logs and views
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::CollectingProfile => "collecting_profile",
            Self::InProgress => "in_progress",
            Self::Ended => "ended",
        }
    }

    /// Get the display label for this stage
    pub fn label(&self) -> &'static str {
        match self {
            Self::CollectingProfile => "Collecting Profile",
            Self::InProgress => "In Progress",
            Self::Ended => "Ended",
        }
    }
}

impl std::fmt::Display for InterviewStage {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// A message in the interview transcript
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChatMessage {
    pub role: MessageRole,
    pub content: String,
    /// RFC 3339 timestamp
    pub created_at: String,
}

impl ChatMessage {
    pub fn new(role: MessageRole, content: impl Into<String>) -> Self {
        Self {
            role,
            content: content.into(),
            created_at: Utc::now().to_rfc3339(),
        }
    }

    pub fn user(content: impl Into<String>) -> Self {
        Self::new(MessageRole::User, content)
    }

    pub fn assistant(content: impl Into<String>) -> Self {
        Self::new(MessageRole::Assistant, content)
    }
}

/// Sidebar view of the candidate and interview progress
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SessionSnapshot {
    pub full_name: String,
    pub position: String,
    pub experience: u32,
    /// Tech stack joined with ", "
    pub tech_stack: String,
    pub questions_asked: u32,
}

/// Everything the UI collaborator needs to render a session
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SessionView {
    pub id: String,
    pub stage: InterviewStage,
    pub messages: Vec<ChatMessage>,
    pub snapshot: Option<SessionSnapshot>,
    pub current_topic: Option<String>,
    pub summary: Option<String>,
    pub summary_ready: bool,
}

/// One interview session.
///
/// Fields are read through accessors; mutation goes through the crate's
/// interview flow controller so the stage ordering and the one-time greeting
/// hold.
#[derive(Debug, Clone, PartialEq)]
pub struct InterviewSession {
    id: String,
    profile: Option<CandidateProfile>,
    messages: Vec<ChatMessage>,
    current_question: Option<String>,
    current_topic: Option<String>,
    questions_asked: u32,
    stage: InterviewStage,
    greeting_sent: bool,
    summary: Option<String>,
    summary_ready: bool,
    created_at: String,
}

impl InterviewSession {
    /// Create a fresh session in `collecting_profile`
    pub fn new(id: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            profile: None,
            messages: Vec::new(),
            current_question: None,
            current_topic: None,
            questions_asked: 0,
            stage: InterviewStage::CollectingProfile,
            greeting_sent: false,
            summary: None,
            summary_ready: false,
            created_at: Utc::now().to_rfc3339(),
        }
    }

    pub fn id(&self) -> &str {
        &self.id
    }

    pub fn profile(&self) -> Option<&CandidateProfile> {
        self.profile.as_ref()
    }

    pub fn messages(&self) -> &[ChatMessage] {
        &self.messages
    }

    pub fn current_question(&self) -> Option<&str> {
        self.current_question.as_deref()
    }

    pub fn current_topic(&self) -> Option<&str> {
        self.current_topic.as_deref()
    }

    pub fn questions_asked(&self) -> u32 {
        self.questions_asked
    }

    pub fn stage(&self) -> InterviewStage {
        self.stage
    }

    pub fn greeting_sent(&self) -> bool {
        self.greeting_sent
    }

    pub fn summary(&self) -> Option<&str> {
        self.summary.as_deref()
    }

    pub fn summary_ready(&self) -> bool {
        self.summary_ready
    }

    pub fn created_at(&self) -> &str {
        &self.created_at
    }

    /// Bodies of every assistant message, in order
    pub fn assistant_messages(&self) -> Vec<&str> {
        self.messages
            .iter()
            .filter(|m| m.role == MessageRole::Assistant)
            .map(|m| m.content.as_str())
            .collect()
    }

    /// Sidebar snapshot, available once a profile is attached
    pub fn snapshot(&self) -> Option<SessionSnapshot> {
        self.profile.as_ref().map(|profile| SessionSnapshot {
            full_name: profile.full_name().to_string(),
            position: profile.position().to_string(),
            experience: profile.experience(),
            tech_stack: profile.tech_stack_display(),
            questions_asked: self.questions_asked,
        })
    }

    /// Full render view
    pub fn view(&self) -> SessionView {
        SessionView {
            id: self.id.clone(),
            stage: self.stage,
            messages: self.messages.clone(),
            snapshot: self.snapshot(),
            current_topic: self.current_topic.clone(),
            summary: self.summary.clone(),
            summary_ready: self.summary_ready,
        }
    }

    /// Fail unless the session is in `expected`
    pub fn require_stage(&self, expected: InterviewStage) -> AppResult<()> {
        if self.stage == expected {
            Ok(())
        } else {
            Err(AppError::invalid_state(format!(
                "session {} is {}, expected {}",
                self.id, self.stage, expected
            )))
        }
    }

    // ── Mutation (flow controller only) ────────────────────────────────

    /// Move the stage forward. Moving backward or staying put is rejected.
    pub(crate) fn advance_stage(&mut self, next: InterviewStage) -> AppResult<()> {
        if next <= self.stage {
            return Err(AppError::invalid_state(format!(
                "cannot move session {} from {} to {}",
                self.id, self.stage, next
            )));
        }
        self.stage = next;
        Ok(())
    }

    pub(crate) fn attach_profile(&mut self, profile: CandidateProfile) {
        self.profile = Some(profile);
    }

    pub(crate) fn push_message(&mut self, message: ChatMessage) {
        self.messages.push(message);
    }

    /// Append the greeting. Returns false when one was already sent.
    pub(crate) fn push_greeting(&mut self, greeting: String) -> bool {
        if self.greeting_sent {
            return false;
        }
        self.messages.push(ChatMessage::assistant(greeting));
        self.greeting_sent = true;
        true
    }

    pub(crate) fn set_current_question(&mut self, question: String) {
        self.current_question = Some(question);
    }

    pub(crate) fn set_current_topic(&mut self, topic: String) {
        self.current_topic = Some(topic);
    }

    pub(crate) fn increment_questions_asked(&mut self) {
        self.questions_asked += 1;
    }

    pub(crate) fn set_summary(&mut self, summary: String) {
        self.summary = Some(summary);
        self.summary_ready = true;
    }

    /// Wipe every field back to its initial value, keeping the session id
    pub(crate) fn reset(&mut self) {
        *self = Self::new(std::mem::take(&mut self.id));
    }
}

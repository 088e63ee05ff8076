//! Persona Types
//!
//! Interviewer personas. Each kind of model call opens with the system
//! prompt of the persona responsible for it.

use serde::{Deserialize, Serialize};

/// Interviewer persona roles, one per kind of model call.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PersonaRole {
    /// Generates the opening question set
    QuestionDesigner,
    /// Scores an answer in the labeled-line format
    Evaluator,
    /// Writes the prose assessment shown to the candidate
    Analyst,
    /// Generates the next question after each answer
    FollowUpInterviewer,
    /// Writes the end-of-interview summary
    Summarizer,
}

impl PersonaRole {
    /// Human-readable display name for the persona.
    pub fn display_name(&self) -> &'static str {
        match self {
            PersonaRole::QuestionDesigner => "Question Designer",
            PersonaRole::Evaluator => "Evaluator",
            PersonaRole::Analyst => "Analyst",
            PersonaRole::FollowUpInterviewer => "Follow-up Interviewer",
            PersonaRole::Summarizer => "Summarizer",
        }
    }
}

impl std::fmt::Display for PersonaRole {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.display_name())
    }
}

/// A persona definition.
#[derive(Debug, Clone)]
pub struct Persona {
    /// The persona role
    pub role: PersonaRole,
    /// Identity prompt sent as the leading system message
    pub identity_prompt: &'static str,
}

//! Persona Registry
//!
//! Built-in interviewer persona definitions.

use super::types::{Persona, PersonaRole};

/// Registry of built-in personas.
pub struct PersonaRegistry;

impl PersonaRegistry {
    /// Get the persona definition for a given role.
    pub fn get(role: PersonaRole) -> Persona {
        let identity_prompt = match role {
            PersonaRole::QuestionDesigner => {
                "You are a technical interviewer generating relevant interview questions based on experience level and tech stack."
            }
            PersonaRole::Evaluator => {
                "You are an expert technical interviewer evaluating candidate responses."
            }
            PersonaRole::Analyst => {
                "You are an expert technical interviewer analyzing candidate responses."
            }
            PersonaRole::FollowUpInterviewer => {
                "You are an expert technical interviewer generating follow-up questions."
            }
            PersonaRole::Summarizer => {
                "You are an expert technical interviewer providing a comprehensive interview summary."
            }
        };
        Persona {
            role,
            identity_prompt,
        }
    }
}

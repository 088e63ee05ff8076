//! Persona Module
//!
//! Interviewer personas. Every prompt the interview sends opens with one
//! system message carrying the persona responsible for that kind of call.
//!
//! | Role | Call |
//! |------|------|
//! | QuestionDesigner | Opening question set |
//! | Evaluator | Score / verdict / feedback |
//! | Analyst | Prose assessment |
//! | FollowUpInterviewer | Next question |
//! | Summarizer | End-of-interview summary |

pub mod registry;
pub mod types;

pub use registry::PersonaRegistry;
pub use types::{Persona, PersonaRole};

//! Services
//!
//! Business logic services for the application.
//! Services handle the core functionality and are called by commands.

pub mod gateway;
pub mod interview;
pub mod persona;
pub mod session_store;

pub use gateway::LanguageModelGateway;
pub use interview::{InterviewFlowController, TurnOutcome};
pub use session_store::{SessionHandle, SessionStore};

//! Interview Service
//!
//! Technical screening conversation driven by a language model.
//!
//! ## Architecture
//! - `prompts.rs` - Message lists for every model call plus the fixed candidate-facing texts
//! - `evaluator.rs` - Answer scoring and free-text analysis
//! - `flow.rs` - Session state machine: start, open, turns, summary, reset
//! - `summary.rs` - Downloadable summary artifact

pub mod evaluator;
pub mod flow;
pub mod prompts;
pub mod summary;

pub use evaluator::{parse_evaluation, Evaluation, ResponseAnalysis, ResponseEvaluator};
pub use flow::{
    extract_topic, fallback_question, first_question, is_exit_phrase, InterviewFlowController,
    TurnOutcome, EXIT_PHRASES, GENERAL_TOPIC,
};
pub use prompts::{FollowUpContext, CLOSING_MESSAGE};
pub use summary::{summary_filename, SummaryDownload};

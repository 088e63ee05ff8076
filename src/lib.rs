//! TalentScout - Interview Orchestrator Library
//!
//! Runs technical screening interviews against a language model backend.
//! It includes:
//! - Command handlers a UI collaborator calls
//! - The interview services: prompts, gateway, evaluator, flow controller, session store
//! - Storage layer (JSON config)
//! - Data models and utilities

pub mod commands;
pub mod models;
pub mod services;
pub mod state;
pub mod storage;
pub mod utils;

pub use commands::{
    check_health, close_session, create_session, download_summary, end_interview, export_summary,
    get_session, get_settings, open_interview, send_message, start_interview, start_new_interview,
};
pub use models::response::*;
pub use models::session::{InterviewSession, InterviewStage, SessionView};
pub use models::settings::{AppConfig, SettingsUpdate};
pub use state::AppState;
pub use utils::error::{AppError, AppResult, GatewayError};

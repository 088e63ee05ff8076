//! Interview Commands
//!
//! Entry points the UI collaborator drives a session through. Each command
//! locks only the session it names.

use talent_scout_core::RawProfile;
use tracing::info;

use crate::models::response::{CommandResponse, TurnResponse};
use crate::models::session::SessionView;
use crate::services::interview::SummaryDownload;
use crate::state::AppState;
use crate::utils::error::{AppError, AppResult};

/// Create an empty session waiting for a candidate profile
pub async fn create_session(state: &AppState) -> CommandResponse<SessionView> {
    let id = state.sessions().create().await;
    match state.sessions().with_session(&id, |session| session.view()).await {
        Ok(view) => CommandResponse::ok(view),
        Err(e) => CommandResponse::err(e.to_string()),
    }
}

/// Submit the candidate profile. Validation errors list every violation.
pub async fn start_interview(
    state: &AppState,
    session_id: &str,
    profile: RawProfile,
) -> CommandResponse<SessionView> {
    state
        .sessions()
        .with_session(session_id, |session| -> AppResult<SessionView> {
            state.controller().start(session, &profile)?;
            Ok(session.view())
        })
        .await
        .and_then(|result| result)
        .into()
}

/// Send the greeting and first question
pub async fn open_interview(state: &AppState, session_id: &str) -> CommandResponse<SessionView> {
    let result = async {
        let handle = state.sessions().get(session_id).await?;
        let mut session = handle.lock().await;
        state.controller().open(&mut session).await?;
        Ok::<_, AppError>(session.view())
    }
    .await;
    result.into()
}

/// Process one candidate message
pub async fn send_message(
    state: &AppState,
    session_id: &str,
    text: &str,
) -> CommandResponse<TurnResponse> {
    let result = async {
        let handle = state.sessions().get(session_id).await?;
        let mut session = handle.lock().await;
        let outcome = state.controller().process_turn(&mut session, text).await?;
        Ok::<_, AppError>(TurnResponse {
            outcome,
            session: session.view(),
        })
    }
    .await;
    result.into()
}

/// Generate the interview summary
pub async fn end_interview(state: &AppState, session_id: &str) -> CommandResponse<String> {
    let result = async {
        let handle = state.sessions().get(session_id).await?;
        let mut session = handle.lock().await;
        state.controller().end_interview(&mut session).await
    }
    .await;
    result.into()
}

/// Discard the session contents and go back to profile collection
pub async fn start_new_interview(
    state: &AppState,
    session_id: &str,
) -> CommandResponse<SessionView> {
    state
        .sessions()
        .with_session(session_id, |session| {
            state.controller().reset(session);
            session.view()
        })
        .await
        .into()
}

/// Messages, snapshot and summary state for rendering
pub async fn get_session(state: &AppState, session_id: &str) -> CommandResponse<SessionView> {
    state
        .sessions()
        .with_session(session_id, |session| session.view())
        .await
        .into()
}

/// Summary body with its suggested filename
pub async fn download_summary(
    state: &AppState,
    session_id: &str,
) -> CommandResponse<SummaryDownload> {
    summary_download(state, session_id).await.into()
}

/// Write the summary into the configured export directory
pub async fn export_summary(state: &AppState, session_id: &str) -> CommandResponse<String> {
    let result = async {
        let download = summary_download(state, session_id).await?;
        let dir = state.export_dir().await?;
        let path = download.export(&dir)?;
        Ok::<_, AppError>(path.display().to_string())
    }
    .await;
    result.into()
}

/// Drop a session entirely
pub async fn close_session(state: &AppState, session_id: &str) -> CommandResponse<bool> {
    let removed = state.sessions().remove(session_id).await;
    if removed {
        info!(session_id, "session closed");
    }
    CommandResponse::ok(removed)
}

async fn summary_download(state: &AppState, session_id: &str) -> AppResult<SummaryDownload> {
    state
        .sessions()
        .with_session(session_id, |session| {
            match (session.summary(), session.profile()) {
                (Some(summary), Some(profile)) if session.summary_ready() => {
                    Ok(SummaryDownload::new(profile.full_name(), summary))
                }
                _ => Err(AppError::invalid_state(
                    "No summary yet; end the interview first",
                )),
            }
        })
        .await?
}

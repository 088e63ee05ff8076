//! Settings Commands
//!
//! Read access to the effective application settings.

use crate::models::response::CommandResponse;
use crate::models::settings::AppConfig;
use crate::state::AppState;

/// Get current application settings, command-line overrides included
pub async fn get_settings(state: &AppState) -> CommandResponse<AppConfig> {
    CommandResponse::ok(state.get_config().await)
}

//! Health Check Commands
//!
//! Commands for checking the health status of backend services.

use tracing::warn;

use crate::models::response::{CommandResponse, HealthResponse};
use crate::state::AppState;

/// Get the health status of the config file and the language model backend
pub async fn check_health(state: &AppState) -> CommandResponse<HealthResponse> {
    let mut health = HealthResponse::default();

    health.provider = state.gateway().provider_name().to_string();
    health.model = state.gateway().model().to_string();
    health.active_sessions = state.sessions().len().await;

    health.provider_reachable = match state.gateway().health_check().await {
        Ok(()) => true,
        Err(e) => {
            warn!(provider = %health.provider, error = %e, "provider health check failed");
            false
        }
    };

    // Overall status
    health.status = if health.provider_reachable && state.is_config_healthy() {
        "healthy".to_string()
    } else {
        "degraded".to_string()
    };

    CommandResponse::ok(health)
}

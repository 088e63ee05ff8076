//! Application State
//!
//! Long-lived state shared by every command: configuration, the session
//! store, the language model gateway and the flow controller built on it.

use std::path::PathBuf;
use std::sync::Arc;
use tokio::sync::RwLock;

use crate::models::settings::AppConfig;
use crate::services::gateway::LanguageModelGateway;
use crate::services::interview::InterviewFlowController;
use crate::services::session_store::SessionStore;
use crate::storage::ConfigService;
use crate::utils::error::AppResult;
use crate::utils::paths::summaries_dir;

/// Application state handed to the command layer
pub struct AppState {
    /// Configuration service for app settings
    config: Arc<RwLock<ConfigService>>,
    /// Live interview sessions
    sessions: Arc<SessionStore>,
    /// Language model backend
    gateway: Arc<LanguageModelGateway>,
    /// Interview state machine
    controller: InterviewFlowController,
}

impl AppState {
    /// Assemble the state around an already-built gateway
    pub fn new(config: ConfigService, gateway: Arc<LanguageModelGateway>) -> Self {
        let controller = InterviewFlowController::new(gateway.clone(), config.get_config());
        Self {
            config: Arc::new(RwLock::new(config)),
            sessions: Arc::new(SessionStore::new()),
            gateway,
            controller,
        }
    }

    /// Build the gateway from config and a credential, then assemble the state.
    ///
    /// A missing credential is a hard failure.
    pub fn initialize(config: ConfigService, api_key: Option<String>) -> AppResult<Self> {
        let gateway = LanguageModelGateway::from_config(config.get_config(), api_key)?;
        Ok(Self::new(config, Arc::new(gateway)))
    }

    pub fn sessions(&self) -> &SessionStore {
        &self.sessions
    }

    pub fn gateway(&self) -> &LanguageModelGateway {
        &self.gateway
    }

    pub fn controller(&self) -> &InterviewFlowController {
        &self.controller
    }

    /// Check if config is healthy
    pub fn is_config_healthy(&self) -> bool {
        match self.config.try_read() {
            Ok(guard) => guard.is_healthy(),
            Err(_) => false,
        }
    }

    /// Get the current configuration
    pub async fn get_config(&self) -> AppConfig {
        self.config.read().await.get_config_clone()
    }

    /// Directory summaries are exported into
    pub async fn export_dir(&self) -> AppResult<PathBuf> {
        match self.config.read().await.get_config().export_dir.clone() {
            Some(dir) => Ok(dir),
            None => summaries_dir(),
        }
    }
}

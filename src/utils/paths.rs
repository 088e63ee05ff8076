//! Cross-Platform Path Utilities
//!
//! Functions for resolving application directories across platforms.
//! Everything lives under ~/.talent-scout/.

use std::path::{Path, PathBuf};

use crate::utils::error::{AppError, AppResult};

/// Get the user's home directory
pub fn home_dir() -> AppResult<PathBuf> {
    dirs::home_dir().ok_or_else(|| AppError::config("Could not determine home directory"))
}

/// Get the TalentScout directory (~/.talent-scout/)
pub fn talent_scout_dir() -> AppResult<PathBuf> {
    Ok(home_dir()?.join(".talent-scout"))
}

/// Get the config file path (~/.talent-scout/config.json)
pub fn config_path() -> AppResult<PathBuf> {
    Ok(talent_scout_dir()?.join("config.json"))
}

/// Get the default summary export directory (~/.talent-scout/summaries/)
pub fn summaries_dir() -> AppResult<PathBuf> {
    Ok(talent_scout_dir()?.join("summaries"))
}

/// Ensure a directory exists, creating it if necessary
pub fn ensure_dir(path: &Path) -> AppResult<()> {
    if !path.exists() {
        std::fs::create_dir_all(path)?;
    }
    Ok(())
}

/// Get the TalentScout directory, creating if it doesn't exist
pub fn ensure_talent_scout_dir() -> AppResult<PathBuf> {
    let path = talent_scout_dir()?;
    ensure_dir(&path)?;
    Ok(path)
}

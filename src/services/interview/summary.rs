//! Summary Artifact
//!
//! Plain-text download of the end-of-interview summary.

use std::path::{Path, PathBuf};

use chrono::{DateTime, Local, TimeZone};
use serde::{Deserialize, Serialize};
use tracing::info;

use crate::utils::error::AppResult;
use crate::utils::paths::ensure_dir;

/// Summary body with its suggested filename
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SummaryDownload {
    pub filename: String,
    pub content: String,
}

impl SummaryDownload {
    /// Name the summary for `full_name` at the current local time
    pub fn new(full_name: &str, content: impl Into<String>) -> Self {
        Self {
            filename: summary_filename(full_name, &Local::now()),
            content: content.into(),
        }
    }

    /// Write the summary into `dir`, creating it if needed
    pub fn export(&self, dir: &Path) -> AppResult<PathBuf> {
        ensure_dir(dir)?;
        let path = dir.join(&self.filename);
        std::fs::write(&path, &self.content)?;
        info!(path = %path.display(), "summary exported");
        Ok(path)
    }
}

/// `interview_summary_<name_with_underscores>_<YYYYMMDD_HHMMSS>.txt`
///
/// Anything outside ASCII letters, digits, `-`, `_` and `.` becomes `_`, so
/// the name always stays a single path component.
pub fn summary_filename<Tz: TimeZone>(full_name: &str, at: &DateTime<Tz>) -> String
where
    Tz::Offset: std::fmt::Display,
{
    format!(
        "interview_summary_{}_{}.txt",
        filename_safe(full_name),
        at.format("%Y%m%d_%H%M%S")
    )
}

fn filename_safe(name: &str) -> String {
    name.chars()
        .map(|c| match c {
            c if c.is_ascii_alphanumeric() => c,
            '-' | '_' | '.' => c,
            _ => '_',
        })
        .collect()
}

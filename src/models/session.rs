use std::path::PathBuf;

use chrono::{DateTime, Utc};
use serde::Serialize;

/// A session log file discovered under the projects root.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SessionDescriptor {
    pub path: PathBuf,
    /// File name without the `.jsonl` extension.
    pub session_id: String,
    /// Name of the containing project directory.
    pub project: String,
}

/// Summary of a session log, computed on demand from its first and last
/// lines. Never cached.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct SessionInfo {
    pub cwd: Option<String>,
    pub version: Option<String>,
    pub message_count: usize,
    pub first_timestamp: Option<DateTime<Utc>>,
    pub last_timestamp: Option<DateTime<Utc>>,
}

use std::env;
use std::path::PathBuf;

use anyhow::{Context, Result};

/// Get the user's home directory.
///
/// Checks `$HOME` first so tests and callers can override it, then falls
/// back to the platform default.
pub fn home_dir() -> Result<PathBuf> {
    if let Ok(home) = env::var("HOME") {
        return Ok(PathBuf::from(home));
    }
    dirs::home_dir().context("Could not determine home directory")
}

/// Get the projects root directory (~/.claude/projects)
pub fn projects_root() -> Result<PathBuf> {
    Ok(home_dir()?.join(".claude").join("projects"))
}

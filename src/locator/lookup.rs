use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};

use crate::models::SessionDescriptor;
use crate::utils::paths::project_slug;

/// File extension of session logs.
pub const LOG_EXTENSION: &str = "jsonl";

/// Resolves session log files under a projects root directory.
///
/// The `legacy_user` is the username segment of the older
/// `-home-<user>-<slug>` directory layout. It is an explicit configuration
/// value; the legacy candidate path is only probed when one is set.
#[derive(Debug, Clone)]
pub struct Locator {
    projects_root: PathBuf,
    home: PathBuf,
    legacy_user: Option<String>,
}

impl Locator {
    pub fn new(projects_root: impl Into<PathBuf>, home: impl Into<PathBuf>) -> Self {
        Self { projects_root: projects_root.into(), home: home.into(), legacy_user: None }
    }

    pub fn with_legacy_user(mut self, user: impl Into<String>) -> Self {
        self.legacy_user = Some(user.into());
        self
    }

    pub fn projects_root(&self) -> &Path {
        &self.projects_root
    }

    /// Derive the project slug for a working directory.
    pub fn slug(&self, cwd: &Path) -> String {
        project_slug(cwd, &self.home)
    }

    /// Find the log file for a (working directory, session id) pair.
    ///
    /// Probes the direct slug path first, then the legacy layout when a
    /// legacy user is configured, and finally falls back to scanning every
    /// immediate subdirectory of the projects root. First match wins; the
    /// scan order is whatever the directory enumeration yields.
    pub fn find_session_file(&self, cwd: &Path, session_id: &str) -> Result<Option<PathBuf>> {
        let slug = self.slug(cwd);
        let file_name = format!("{}.{}", session_id, LOG_EXTENSION);

        let mut candidates = vec![self.projects_root.join(&slug).join(&file_name)];
        if let Some(user) = &self.legacy_user {
            candidates
                .push(self.projects_root.join(format!("-home-{}-{}", user, slug)).join(&file_name));
        }
        for candidate in candidates {
            if candidate.exists() {
                return Ok(Some(candidate));
            }
        }

        // Fallback: the session may live under a directory whose name follows
        // neither convention
        if !self.projects_root.exists() {
            return Ok(None);
        }
        let entries = fs::read_dir(&self.projects_root).with_context(|| {
            format!("Failed to read projects directory: {}", self.projects_root.display())
        })?;
        for entry in entries {
            let entry = entry.context("Failed to read directory entry")?;
            let path = entry.path();
            if !path.is_dir() {
                continue;
            }
            let candidate = path.join(&file_name);
            if candidate.exists() {
                return Ok(Some(candidate));
            }
        }

        Ok(None)
    }

    /// List every session belonging to the workspace at `cwd`.
    ///
    /// A project directory matches when its name contains the slug or the
    /// slug contains its name. Matching by substring in both directions
    /// tolerates naming-convention drift between log layouts.
    pub fn list_sessions(&self, cwd: &Path) -> Result<Vec<SessionDescriptor>> {
        let slug = self.slug(cwd);
        let mut sessions = Vec::new();

        if !self.projects_root.exists() {
            return Ok(sessions);
        }
        let entries = fs::read_dir(&self.projects_root).with_context(|| {
            format!("Failed to read projects directory: {}", self.projects_root.display())
        })?;
        for entry in entries {
            let entry = entry.context("Failed to read directory entry")?;
            let path = entry.path();
            if !path.is_dir() {
                continue;
            }
            let project = match path.file_name() {
                Some(name) => name.to_string_lossy().to_string(),
                None => continue,
            };
            if !(project.contains(&slug) || slug.contains(&project)) {
                continue;
            }

            let files = match fs::read_dir(&path) {
                Ok(files) => files,
                Err(e) => {
                    eprintln!(
                        "Warning: Failed to read project directory {}: {}",
                        path.display(),
                        e
                    );
                    continue;
                }
            };
            for file in files.flatten() {
                let file_path = file.path();
                if file_path.extension().and_then(|ext| ext.to_str()) != Some(LOG_EXTENSION) {
                    continue;
                }
                let session_id = match file_path.file_stem() {
                    Some(stem) => stem.to_string_lossy().to_string(),
                    None => continue,
                };
                sessions.push(SessionDescriptor {
                    path: file_path,
                    session_id,
                    project: project.clone(),
                });
            }
        }

        Ok(sessions)
    }
}

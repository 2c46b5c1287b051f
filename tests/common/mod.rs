//! Shared test utilities for integration tests
#![allow(dead_code)]

use std::fs;
use std::path::{Path, PathBuf};

use tempfile::TempDir;

/// Builder for creating a fake home directory with a
/// `.claude/projects/<project>/<session>.jsonl` layout
pub struct HomeDirBuilder {
    temp_dir: TempDir,
}

impl HomeDirBuilder {
    pub fn new() -> Self {
        let temp_dir = TempDir::new().expect("Failed to create temp dir");
        Self { temp_dir }
    }

    /// Path of the fake home directory
    pub fn home(&self) -> &Path {
        self.temp_dir.path()
    }

    /// Path of the projects root inside the fake home
    pub fn projects_root(&self) -> PathBuf {
        self.temp_dir.path().join(".claude").join("projects")
    }

    /// Add a session log under `projects/<project>/<session_id>.jsonl`
    pub fn with_session(self, project: &str, session_id: &str, content: &str) -> Self {
        let project_dir = self.projects_root().join(project);
        fs::create_dir_all(&project_dir).expect("Failed to create project dir");
        fs::write(project_dir.join(format!("{}.jsonl", session_id)), content)
            .expect("Failed to write session file");
        self
    }

    /// Add an empty project directory
    pub fn with_empty_project(self, project: &str) -> Self {
        let project_dir = self.projects_root().join(project);
        fs::create_dir_all(project_dir).expect("Failed to create project dir");
        self
    }
}

impl Default for HomeDirBuilder {
    fn default() -> Self {
        Self::new()
    }
}

/// A realistic three-message session log: user text, assistant text plus a
/// tool call, and the matching tool result.
pub fn sample_session_log(cwd: &str) -> String {
    [
        format!(
            r#"{{"type":"user","message":{{"content":"list the files"}},"cwd":"{}","version":"1.0.40","timestamp":"2024-01-15T10:00:00Z"}}"#,
            cwd
        ),
        r#"{"type":"assistant","message":{"content":[{"type":"text","text":"Sure, listing now."},{"type":"tool_use","name":"bash","input":{"command":"ls"}}]},"timestamp":"2024-01-15T10:00:05Z"}"#.to_string(),
        format!(
            r#"{{"type":"user","message":{{"content":[{{"type":"tool_result","content":"a.txt\nb.txt"}}]}},"cwd":"{}","timestamp":"2024-01-15T10:00:06Z"}}"#,
            cwd
        ),
    ]
    .join("\n")
}

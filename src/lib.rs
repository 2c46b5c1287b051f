//! Claude Session Tools - Inspect Claude Code session logs
//!
//! This library provides utilities for working with Claude Code's local
//! session logs stored under `~/.claude/projects/`. It supports:
//!
//! - Extracting a readable conversation transcript from a session JSONL file
//! - Deriving the project slug for a working directory
//! - Locating the log file for a (working directory, session id) pair
//! - Listing sessions that belong to a workspace and summarizing them
//!
//! # Example
//!
//! ```no_run
//! use claude_session_tools::extract_conversation;
//! use std::path::Path;
//!
//! let transcript = extract_conversation(Path::new("session.jsonl"), Some(50))?;
//! for message in &transcript.messages {
//!     println!("[{}]: {}", message.speaker, message.preview());
//! }
//! # Ok::<(), anyhow::Error>(())
//! ```

pub mod cli;
pub mod locator;
pub mod models;
pub mod parsers;
pub mod utils;

// Re-export commonly used types
pub use locator::Locator;
pub use models::{SessionDescriptor, SessionInfo, Speaker, TranscriptMessage};
pub use parsers::conversation::extract_conversation;
pub use utils::paths::{format_path_with_tilde, project_slug};

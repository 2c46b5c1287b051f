//! Data models for Claude Code session logs.
//!
//! This module defines the data structures used throughout the crate:
//!
//! - [`LogRecord`] - One line of a session JSONL file
//! - [`ContentBlock`] - A typed unit within a message's content sequence
//! - [`TranscriptMessage`] - A flattened (speaker, text) conversation message
//! - [`SessionDescriptor`] - A session log file discovered under the projects root
//! - [`SessionInfo`] - On-demand summary of a session log
//!
//! These models use serde for JSON deserialization with a custom timestamp
//! deserializer (epoch milliseconds or RFC3339) in `parsers::deserializers`.

pub mod record;
pub mod session;
pub mod transcript;

pub use record::{ContentBlock, LogRecord, MessageContent, MessagePayload, ToolResultContent};
pub use session::{SessionDescriptor, SessionInfo};
pub use transcript::{Speaker, TranscriptMessage};

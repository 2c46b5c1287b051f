//! JSONL parsing for Claude Code session logs
//!
//! # Error Handling Strategy
//!
//! Session logs are append-only and may end with partially written lines, so
//! parsing follows a **graceful degradation** approach:
//!
//! - **Per-line outcomes**: every line maps to an explicit [`conversation::LineOutcome`]:
//!   messages emitted, ignored (well-formed but not a conversation record), or
//!   skipped with a reason. Skips never abort processing and are carried on
//!   the returned transcript so callers and tests can observe them.
//!
//! - **File-level failures**: only a missing or unreadable file is an error,
//!   propagated via `anyhow::Result` with context.

pub mod conversation;
pub mod deserializers;

pub use conversation::{LineOutcome, Transcript, extract_conversation, parse_line};

use chrono::{DateTime, Utc};
use serde::Deserialize;
use serde_json::Value;

/// One line of a session JSONL file.
///
/// Only the fields the tools care about are modeled; everything else on the
/// line is ignored. Records are read-only projections, never written back.
#[derive(Debug, Clone, Deserialize)]
pub struct LogRecord {
    #[serde(rename = "type", default)]
    pub record_type: String,
    #[serde(default)]
    pub message: Option<MessagePayload>,
    #[serde(default)]
    pub cwd: Option<String>,
    #[serde(default)]
    pub version: Option<String>,
    #[serde(
        default,
        deserialize_with = "crate::parsers::deserializers::deserialize_opt_timestamp"
    )]
    pub timestamp: Option<DateTime<Utc>>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct MessagePayload {
    #[serde(default)]
    pub content: MessageContent,
}

/// Message content is either a plain string (older user records) or an
/// ordered sequence of typed content blocks.
#[derive(Debug, Clone, Deserialize)]
#[serde(untagged)]
pub enum MessageContent {
    Text(String),
    Blocks(Vec<ContentBlock>),
}

impl Default for MessageContent {
    fn default() -> Self {
        MessageContent::Text(String::new())
    }
}

/// A typed unit within a message's content sequence.
///
/// Unknown discriminants (`thinking`, `image`, ...) deserialize to [`ContentBlock::Other`]
/// so a new block type never fails the whole line.
#[derive(Debug, Clone, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum ContentBlock {
    Text {
        #[serde(default)]
        text: String,
    },
    ToolResult {
        #[serde(default)]
        content: ToolResultContent,
    },
    ToolUse {
        #[serde(default)]
        name: String,
        #[serde(default)]
        input: Value,
    },
    #[serde(other)]
    Other,
}

/// `tool_result` content: a plain string, a nested block sequence, or some
/// other JSON shape.
#[derive(Debug, Clone, Deserialize)]
#[serde(untagged)]
pub enum ToolResultContent {
    Text(String),
    Blocks(Vec<ContentBlock>),
    Other(Value),
}

impl Default for ToolResultContent {
    fn default() -> Self {
        ToolResultContent::Text(String::new())
    }
}

impl ToolResultContent {
    /// Flatten to displayable text. Nested block sequences contribute the
    /// text of their `text` blocks, joined by newlines. Null yields an empty
    /// string; any other shape renders as compact JSON.
    pub fn to_text(&self) -> String {
        match self {
            ToolResultContent::Text(text) => text.clone(),
            ToolResultContent::Blocks(blocks) => blocks
                .iter()
                .filter_map(|block| match block {
                    ContentBlock::Text { text } => Some(text.as_str()),
                    _ => None,
                })
                .collect::<Vec<_>>()
                .join("\n"),
            ToolResultContent::Other(Value::Null) => String::new(),
            ToolResultContent::Other(value) => value.to_string(),
        }
    }
}

use std::fmt;

/// Display truncation limit for transcript rendering, in characters.
pub const PREVIEW_MAX_CHARS: usize = 300;

/// Who produced a transcript message.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Speaker {
    User,
    Assistant,
    /// A tool invocation made by the assistant.
    AssistantTool,
}

impl fmt::Display for Speaker {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            Speaker::User => "User",
            Speaker::Assistant => "Assistant",
            Speaker::AssistantTool => "Assistant Tool",
        };
        f.write_str(label)
    }
}

/// One flattened conversation message. The full text is always retained;
/// truncation happens only at display time via [`TranscriptMessage::preview`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TranscriptMessage {
    pub speaker: Speaker,
    pub text: String,
}

impl TranscriptMessage {
    pub fn new(speaker: Speaker, text: impl Into<String>) -> Self {
        Self { speaker, text: text.into() }
    }

    /// Display form: the first [`PREVIEW_MAX_CHARS`] characters, with a
    /// trailing `...` when the text is longer.
    pub fn preview(&self) -> String {
        preview_text(&self.text)
    }
}

/// Truncate text to [`PREVIEW_MAX_CHARS`] characters on a char boundary.
pub fn preview_text(text: &str) -> String {
    match text.char_indices().nth(PREVIEW_MAX_CHARS) {
        Some((byte_idx, _)) => format!("{}...", &text[..byte_idx]),
        None => text.to_string(),
    }
}

use std::fs;
use std::path::Path;

use anyhow::{Context, Result};

use crate::models::{ContentBlock, LogRecord, MessageContent, Speaker, TranscriptMessage};

/// Outcome of parsing a single log line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LineOutcome {
    /// A conversation record; carries zero or more flattened messages.
    Messages(Vec<TranscriptMessage>),
    /// A well-formed record of a non-conversation type (summary, system,
    /// file-history-snapshot, ...). Contributes nothing.
    Ignored,
    /// Malformed JSON or a record that does not match the expected shape.
    /// Contributes nothing; the reason is retained for reporting.
    Skipped(String),
}

/// An extracted conversation plus skip accounting, so callers can observe
/// how many lines were dropped instead of having failures swallowed.
#[derive(Debug, Clone, Default)]
pub struct Transcript {
    pub messages: Vec<TranscriptMessage>,
    pub skipped: Vec<String>,
}

/// Extract the conversation from a session JSONL file.
///
/// With `limit = Some(k)`, only the most recent `k` lines are processed, in
/// file order. Malformed lines are recorded on the transcript and never abort
/// processing of subsequent lines.
///
/// # Errors
///
/// Returns an error only if the file cannot be read.
pub fn extract_conversation(path: &Path, limit: Option<usize>) -> Result<Transcript> {
    let contents = fs::read_to_string(path)
        .with_context(|| format!("Failed to read session file: {}", path.display()))?;

    let lines: Vec<&str> = contents.lines().collect();
    let start = match limit {
        Some(k) if k < lines.len() => lines.len() - k,
        _ => 0,
    };

    let mut transcript = Transcript::default();
    for line in &lines[start..] {
        if line.trim().is_empty() {
            continue;
        }
        match parse_line(line) {
            LineOutcome::Messages(messages) => transcript.messages.extend(messages),
            LineOutcome::Ignored => {}
            LineOutcome::Skipped(reason) => transcript.skipped.push(reason),
        }
    }

    Ok(transcript)
}

/// Parse one log line into its [`LineOutcome`].
pub fn parse_line(line: &str) -> LineOutcome {
    let record: LogRecord = match serde_json::from_str(line) {
        Ok(record) => record,
        Err(e) => return LineOutcome::Skipped(e.to_string()),
    };

    match record.record_type.as_str() {
        "user" => user_messages(record),
        "assistant" => assistant_messages(record),
        _ => LineOutcome::Ignored,
    }
}

fn user_messages(record: LogRecord) -> LineOutcome {
    let Some(message) = record.message else {
        return LineOutcome::Messages(Vec::new());
    };

    let mut messages = Vec::new();
    match message.content {
        MessageContent::Text(text) => {
            if !text.is_empty() {
                messages.push(TranscriptMessage::new(Speaker::User, text));
            }
        }
        MessageContent::Blocks(blocks) => {
            for block in blocks {
                match block {
                    ContentBlock::Text { text } if !text.is_empty() => {
                        messages.push(TranscriptMessage::new(Speaker::User, text));
                    }
                    ContentBlock::ToolResult { content } => {
                        let text = content.to_text();
                        if !text.is_empty() {
                            messages.push(TranscriptMessage::new(Speaker::User, text));
                        }
                    }
                    _ => {}
                }
            }
        }
    }
    LineOutcome::Messages(messages)
}

fn assistant_messages(record: LogRecord) -> LineOutcome {
    let Some(message) = record.message else {
        return LineOutcome::Messages(Vec::new());
    };

    // Assistant content is always a block sequence
    let MessageContent::Blocks(blocks) = message.content else {
        return LineOutcome::Skipped("assistant content is not a block sequence".to_string());
    };

    let mut messages = Vec::new();
    for block in blocks {
        match block {
            ContentBlock::Text { text } if !text.is_empty() => {
                messages.push(TranscriptMessage::new(Speaker::Assistant, text));
            }
            ContentBlock::ToolUse { name, input } => {
                messages.push(TranscriptMessage::new(
                    Speaker::AssistantTool,
                    format!("{}: {}", name, input),
                ));
            }
            _ => {}
        }
    }
    LineOutcome::Messages(messages)
}

#[cfg(test)]
mod tests {
    use std::io::Write;

    use tempfile::NamedTempFile;

    use super::*;

    /// Helper to create a temporary test file with given content
    fn create_test_file(content: &str) -> NamedTempFile {
        let mut file = NamedTempFile::new().expect("Failed to create temp file");
        file.write_all(content.as_bytes()).expect("Failed to write to temp file");
        file.flush().expect("Failed to flush temp file");
        file
    }

    #[test]
    fn test_extract_user_and_assistant_with_trailing_garbage() {
        let content = r#"{"type":"user","message":{"content":"hi"}}
{"type":"assistant","message":{"content":[{"type":"text","text":"hello"}]}}
{"malformed json"#;

        let file = create_test_file(content);
        let transcript = extract_conversation(file.path(), None).unwrap();

        assert_eq!(
            transcript.messages,
            vec![
                TranscriptMessage::new(Speaker::User, "hi"),
                TranscriptMessage::new(Speaker::Assistant, "hello"),
            ]
        );
        assert_eq!(transcript.skipped.len(), 1);
    }

    #[test]
    fn test_extract_empty_file() {
        let file = create_test_file("");
        let transcript = extract_conversation(file.path(), None).unwrap();
        assert!(transcript.messages.is_empty());
        assert!(transcript.skipped.is_empty());
    }

    #[test]
    fn test_extract_nonexistent_file_is_error() {
        let result = extract_conversation(Path::new("/nonexistent/session.jsonl"), None);
        assert!(result.is_err());
        assert!(result.unwrap_err().to_string().contains("Failed to read"));
    }

    #[test]
    fn test_extract_limit_processes_only_last_lines() {
        let content = r#"{"type":"user","message":{"content":"first"}}
{"type":"user","message":{"content":"second"}}
{"type":"user","message":{"content":"third"}}"#;

        let file = create_test_file(content);
        let transcript = extract_conversation(file.path(), Some(2)).unwrap();

        assert_eq!(
            transcript.messages,
            vec![
                TranscriptMessage::new(Speaker::User, "second"),
                TranscriptMessage::new(Speaker::User, "third"),
            ]
        );
    }

    #[test]
    fn test_extract_limit_larger_than_file_processes_everything() {
        let content = r#"{"type":"user","message":{"content":"only"}}"#;
        let file = create_test_file(content);
        let transcript = extract_conversation(file.path(), Some(100)).unwrap();
        assert_eq!(transcript.messages.len(), 1);
    }

    #[test]
    fn test_malformed_line_does_not_abort_processing() {
        let content = r#"{"type":"user","message":{"content":"before"}}
not json at all
{"type":"user","message":{"content":"after"}}"#;

        let file = create_test_file(content);
        let transcript = extract_conversation(file.path(), None).unwrap();

        assert_eq!(transcript.messages.len(), 2);
        assert_eq!(transcript.messages[1].text, "after");
        assert_eq!(transcript.skipped.len(), 1);
    }

    #[test]
    fn test_assistant_multiple_blocks_emit_one_message_each() {
        let content = r#"{"type":"assistant","message":{"content":[{"type":"text","text":"part one"},{"type":"text","text":"part two"},{"type":"tool_use","name":"read_file","input":{"path":"/tmp/x"}}]}}"#;

        let file = create_test_file(content);
        let transcript = extract_conversation(file.path(), None).unwrap();

        assert_eq!(transcript.messages.len(), 3);
        assert_eq!(transcript.messages[0].speaker, Speaker::Assistant);
        assert_eq!(transcript.messages[1].speaker, Speaker::Assistant);
        assert_eq!(transcript.messages[2].speaker, Speaker::AssistantTool);
        assert_eq!(transcript.messages[2].text, r#"read_file: {"path":"/tmp/x"}"#);
    }

    #[test]
    fn test_user_tool_result_blocks() {
        let content = r#"{"type":"user","message":{"content":[{"type":"tool_result","content":"command output"},{"type":"tool_result","content":""}]}}"#;

        let file = create_test_file(content);
        let transcript = extract_conversation(file.path(), None).unwrap();

        // Empty tool_result content emits nothing
        assert_eq!(
            transcript.messages,
            vec![TranscriptMessage::new(Speaker::User, "command output")]
        );
    }

    #[test]
    fn test_user_empty_string_content_emits_nothing() {
        let content = r#"{"type":"user","message":{"content":""}}"#;
        let file = create_test_file(content);
        let transcript = extract_conversation(file.path(), None).unwrap();
        assert!(transcript.messages.is_empty());
        assert!(transcript.skipped.is_empty());
    }

    #[test]
    fn test_non_conversation_record_types_are_ignored() {
        let outcome = parse_line(r#"{"type":"summary","summary":"Did things"}"#);
        assert_eq!(outcome, LineOutcome::Ignored);

        let outcome = parse_line(r#"{"type":"system","content":"notice"}"#);
        assert_eq!(outcome, LineOutcome::Ignored);
    }

    #[test]
    fn test_parse_line_malformed_json_is_skipped() {
        let outcome = parse_line("{{{");
        assert!(matches!(outcome, LineOutcome::Skipped(_)));
    }

    #[test]
    fn test_assistant_string_content_is_skipped() {
        let outcome = parse_line(r#"{"type":"assistant","message":{"content":"plain"}}"#);
        assert!(matches!(outcome, LineOutcome::Skipped(_)));
    }

    #[test]
    fn test_unknown_block_types_are_passed_over() {
        let content = r#"{"type":"assistant","message":{"content":[{"type":"thinking","thinking":"hmm"},{"type":"text","text":"answer"}]}}"#;

        let file = create_test_file(content);
        let transcript = extract_conversation(file.path(), None).unwrap();

        assert_eq!(
            transcript.messages,
            vec![TranscriptMessage::new(Speaker::Assistant, "answer")]
        );
    }
}

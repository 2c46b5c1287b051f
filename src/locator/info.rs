use std::fs;
use std::io;
use std::path::Path;

use crate::models::{LogRecord, SessionInfo};

/// Summarize a session log from its first and last lines.
///
/// A missing file yields the default (all-unset) record. The message count is
/// the line count; cwd, version, and the boundary timestamps come from
/// parsing only the first and last lines. A parse failure there is warned to
/// stderr and the partial record is still returned.
pub fn session_info(path: &Path) -> SessionInfo {
    let mut info = SessionInfo::default();

    let contents = match fs::read_to_string(path) {
        Ok(contents) => contents,
        Err(e) if e.kind() == io::ErrorKind::NotFound => return info,
        Err(e) => {
            eprintln!("Warning: Failed to read {}: {}", path.display(), e);
            return info;
        }
    };

    let lines: Vec<&str> = contents.lines().collect();
    info.message_count = lines.len();

    if let (Some(first), Some(last)) = (lines.first(), lines.last()) {
        match parse_boundaries(first, last) {
            Ok((first_record, last_record)) => {
                info.cwd = first_record.cwd;
                info.version = first_record.version;
                info.first_timestamp = first_record.timestamp;
                info.last_timestamp = last_record.timestamp;
            }
            Err(e) => {
                eprintln!("Warning: Failed to read session info from {}: {}", path.display(), e);
            }
        }
    }

    info
}

fn parse_boundaries(first: &str, last: &str) -> serde_json::Result<(LogRecord, LogRecord)> {
    Ok((serde_json::from_str(first)?, serde_json::from_str(last)?))
}

//! Conversation logging: a plain line log plus one JSON transcript per session.
//!
//! Logging must never break a chat reply, so every failure is reported
//! through `tracing` and swallowed. Transcript updates are read-modify-write
//! without locking; concurrent writers to one session can lose records.

use std::fs::OpenOptions;
use std::io::Write;
use std::path::PathBuf;

use haven_core::{DataPaths, Result};
use serde::{Deserialize, Serialize};
use tracing::{error, info, warn};

/// One logged exchange.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ConversationRecord {
    pub timestamp: String,
    pub user_message: String,
    pub bot_response: String,
}

/// Contents of `logs/session_<id>.json`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SessionLog {
    pub session_id: String,
    #[serde(default)]
    pub conversations: Vec<ConversationRecord>,
}

impl SessionLog {
    fn empty(session_id: &str) -> Self {
        Self {
            session_id: session_id.to_string(),
            conversations: Vec::new(),
        }
    }
}

/// Writes `sessions.log` and the per-session transcripts.
pub struct TranscriptLogger {
    sessions_log: PathBuf,
    logs_dir: PathBuf,
}

impl TranscriptLogger {
    pub fn new(paths: &DataPaths) -> Self {
        Self {
            sessions_log: paths.sessions_log.clone(),
            logs_dir: paths.logs_dir.clone(),
        }
    }

    /// Record one exchange everywhere. Errors are logged, never returned.
    pub fn log(&self, session_id: &str, timestamp: &str, user_message: &str, bot_message: &str) {
        info!(
            session_id,
            user_message, bot_message, "Conversation turn"
        );

        if let Err(e) = self.append_line(timestamp, user_message, bot_message) {
            error!("Failed to write {}: {}", self.sessions_log.display(), e);
        }

        let record = ConversationRecord {
            timestamp: timestamp.to_string(),
            user_message: user_message.to_string(),
            bot_response: bot_message.to_string(),
        };
        if let Err(e) = self.append_record(session_id, record) {
            error!("Failed to update transcript for session {}: {}", session_id, e);
        }
    }

    /// Load a session transcript. Missing or malformed files read as empty.
    pub fn read(&self, session_id: &str) -> SessionLog {
        let path = self.session_file(session_id);
        let data = match std::fs::read_to_string(&path) {
            Ok(data) => data,
            Err(_) => return SessionLog::empty(session_id),
        };

        match serde_json::from_str(&data) {
            Ok(log) => log,
            Err(e) => {
                warn!("Malformed transcript {}: {}. Starting fresh.", path.display(), e);
                SessionLog::empty(session_id)
            }
        }
    }

    /// Path of a session's transcript file.
    pub fn session_file(&self, session_id: &str) -> PathBuf {
        self.logs_dir
            .join(format!("session_{}.json", sanitize_id(session_id)))
    }

    fn append_line(&self, timestamp: &str, user_message: &str, bot_message: &str) -> Result<()> {
        let mut file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(&self.sessions_log)?;
        writeln!(file, "{} | User: {} | Bot: {}", timestamp, user_message, bot_message)?;
        Ok(())
    }

    fn append_record(&self, session_id: &str, record: ConversationRecord) -> Result<()> {
        let mut log = self.read(session_id);
        log.session_id = session_id.to_string();
        log.conversations.push(record);

        std::fs::create_dir_all(&self.logs_dir)?;
        let json = serde_json::to_string_pretty(&log)?;
        std::fs::write(self.session_file(session_id), json)?;
        Ok(())
    }
}

/// Keep session ids filesystem-safe.
fn sanitize_id(session_id: &str) -> String {
    let cleaned: String = session_id
        .chars()
        .filter(|c| c.is_ascii_alphanumeric() || *c == '-' || *c == '_')
        .collect();
    if cleaned.is_empty() {
        "anonymous".into()
    } else {
        cleaned
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn test_logger() -> (TranscriptLogger, tempfile::TempDir) {
        let dir = tempfile::tempdir().unwrap();
        let paths = DataPaths::new(dir.path()).unwrap();
        (TranscriptLogger::new(&paths), dir)
    }

    #[test]
    fn test_log_then_read_back() {
        let (logger, _dir) = test_logger();
        logger.log("abc", "2024-01-01T10:00:00Z", "first", "reply one");
        logger.log("abc", "2024-01-01T10:01:00Z", "hello", "hi there");

        let log = logger.read("abc");
        assert_eq!(log.session_id, "abc");
        assert_eq!(log.conversations.len(), 2);
        assert_eq!(
            log.conversations.last().unwrap(),
            &ConversationRecord {
                timestamp: "2024-01-01T10:01:00Z".into(),
                user_message: "hello".into(),
                bot_response: "hi there".into(),
            }
        );
    }

    #[test]
    fn test_line_log_format() {
        let (logger, dir) = test_logger();
        logger.log("abc", "2024-01-01T10:00:00Z", "hey", "hello");
        let text = std::fs::read_to_string(dir.path().join("sessions.log")).unwrap();
        assert_eq!(text, "2024-01-01T10:00:00Z | User: hey | Bot: hello\n");
    }

    #[test]
    fn test_document_shape() {
        let (logger, _dir) = test_logger();
        logger.log("abc", "t", "u", "b");
        let raw = std::fs::read_to_string(logger.session_file("abc")).unwrap();
        let value: serde_json::Value = serde_json::from_str(&raw).unwrap();
        assert_eq!(value["session_id"], "abc");
        assert_eq!(value["conversations"][0]["user_message"], "u");
        assert_eq!(value["conversations"][0]["bot_response"], "b");
        assert_eq!(value["conversations"][0]["timestamp"], "t");
    }

    #[test]
    fn test_missing_and_malformed_read_empty() {
        let (logger, _dir) = test_logger();
        assert!(logger.read("nobody").conversations.is_empty());

        std::fs::write(logger.session_file("broken"), "{ not json").unwrap();
        let log = logger.read("broken");
        assert_eq!(log.session_id, "broken");
        assert!(log.conversations.is_empty());

        // A malformed file is replaced on the next write.
        logger.log("broken", "t", "u", "b");
        assert_eq!(logger.read("broken").conversations.len(), 1);
    }

    #[test]
    fn test_write_failure_is_swallowed() {
        let dir = tempfile::tempdir().unwrap();
        let blocker = dir.path().join("blocker");
        std::fs::write(&blocker, "file, not a directory").unwrap();
        let logger = TranscriptLogger {
            sessions_log: blocker.join("sessions.log"),
            logs_dir: blocker.join("logs"),
        };

        logger.log("abc", "t", "u", "b");
        assert!(logger.read("abc").conversations.is_empty());
    }

    #[test]
    fn test_session_ids_are_sanitized() {
        let (logger, dir) = test_logger();
        let path = logger.session_file("../../etc/passwd");
        assert_eq!(path, dir.path().join("logs").join("session_etcpasswd.json"));
        assert!(logger.session_file("").ends_with("session_anonymous.json"));
    }
}

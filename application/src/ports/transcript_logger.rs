//! Transcript logger port.
//!
//! Records chat events (session start, user lines, script replies, shared
//! images) for later inspection. Logging is best-effort: implementations
//! swallow their own I/O failures so a full disk never breaks a chat.

use parley_domain::{ChatContent, ChatEntry};

/// A loggable transcript event: a type tag plus a JSON payload.
#[derive(Debug, Clone)]
pub struct TranscriptEvent {
    pub event_type: String,
    pub payload: serde_json::Value,
}

impl TranscriptEvent {
    pub fn new(event_type: impl Into<String>, payload: serde_json::Value) -> Self {
        Self {
            event_type: event_type.into(),
            payload,
        }
    }

    /// Session-start marker carrying the script name.
    pub fn session_started(script_name: &str) -> Self {
        Self::new(
            "session_started",
            serde_json::json!({ "script": script_name }),
        )
    }
}

impl From<&ChatEntry> for TranscriptEvent {
    fn from(entry: &ChatEntry) -> Self {
        match &entry.content {
            ChatContent::Text(text) => Self::new(
                "message",
                serde_json::json!({
                    "author": entry.author.as_str(),
                    "text": text,
                }),
            ),
            ChatContent::Image(image) => Self::new(
                "image",
                serde_json::json!({
                    "author": entry.author.as_str(),
                    "path": image.path().display().to_string(),
                }),
            ),
        }
    }
}

/// Port for transcript persistence.
pub trait TranscriptLoggerPort: Send + Sync {
    /// Append one event. Implementations must not propagate I/O errors.
    fn log(&self, event: TranscriptEvent);
}

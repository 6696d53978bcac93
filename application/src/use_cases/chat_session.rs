//! Chat session use case — one script, one conversation.
//!
//! Wires the script engine to an optional transcript logger. The REPL
//! (presentation layer) drives this: `begin` once, then `submit` per
//! user line.

use crate::ports::script_engine::{ScriptEnginePort, ScriptError};
use crate::ports::transcript_logger::{TranscriptEvent, TranscriptLoggerPort};
use parley_domain::{ChatEntry, ScriptSource};
use std::sync::Arc;
use tracing::debug;

/// A running chat session bound to a loaded script.
pub struct ChatSession {
    engine: Arc<dyn ScriptEnginePort>,
    logger: Option<Arc<dyn TranscriptLoggerPort>>,
}

impl ChatSession {
    pub fn new(engine: Arc<dyn ScriptEnginePort>) -> Self {
        Self {
            engine,
            logger: None,
        }
    }

    /// Attach a transcript logger.
    pub fn with_logger(mut self, logger: Arc<dyn TranscriptLoggerPort>) -> Self {
        self.logger = Some(logger);
        self
    }

    /// Load the script and return its welcome message, if any.
    pub async fn begin(&self, script: &ScriptSource) -> Result<Option<String>, ScriptError> {
        debug!(script = %script.path().display(), "loading chat script");
        self.engine.load_script(script.path())?;
        self.log(TranscriptEvent::session_started(&script.name()));

        let welcome = self.engine.welcome()?;
        if let Some(text) = &welcome {
            self.log(TranscriptEvent::from(&ChatEntry::script_text(text.clone())));
        }
        Ok(welcome)
    }

    /// Forward one user line to the script and return its reply.
    pub async fn submit(&self, input: &str) -> Result<String, ScriptError> {
        self.log(TranscriptEvent::from(&ChatEntry::user_text(input)));

        let reply = self.engine.handle_message(input)?;
        self.log(TranscriptEvent::from(&ChatEntry::script_text(
            reply.clone(),
        )));
        Ok(reply)
    }

    /// The script's help text, if it registered a help handler.
    pub async fn help(&self) -> Result<Option<String>, ScriptError> {
        self.engine.help()
    }

    fn log(&self, event: TranscriptEvent) {
        if let Some(logger) = &self.logger {
            logger.log(event);
        }
    }
}

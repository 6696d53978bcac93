//! Script engine port — interface for the embedded chat script runtime.
//!
//! This port abstracts the scripting engine so that:
//! - The presentation layer doesn't depend on mlua
//! - A no-op implementation (`NoScriptEngine`) is always available
//!
//! A chat script registers up to three handlers: a welcome handler, a
//! message handler (required for a useful chat), and a help handler.

use std::path::Path;

/// Error from a scripting engine operation.
#[derive(Debug, Clone)]
pub struct ScriptError {
    pub message: String,
}

impl ScriptError {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}

impl std::fmt::Display for ScriptError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "script error: {}", self.message)
    }
}

impl std::error::Error for ScriptError {}

/// Port for the chat script engine.
pub trait ScriptEnginePort: Send + Sync {
    /// Load and execute a chat script file. Registration calls inside the
    /// script populate the handler registry.
    fn load_script(&self, path: &Path) -> Result<(), ScriptError>;

    /// Invoke the script's welcome handler, if one is registered.
    fn welcome(&self) -> Result<Option<String>, ScriptError>;

    /// Invoke the script's message handler with the user's line and
    /// return the reply. Errors if no message handler is registered.
    fn handle_message(&self, input: &str) -> Result<String, ScriptError>;

    /// Invoke the script's help handler, if one is registered.
    fn help(&self) -> Result<Option<String>, ScriptError>;

    /// Whether a real engine is behind this port (i.e. not `NoScriptEngine`).
    fn is_available(&self) -> bool;
}

/// No-op engine used for headless runs and tests.
///
/// Loading succeeds silently, welcome/help are absent, and every message
/// produces an empty reply.
pub struct NoScriptEngine;

impl ScriptEnginePort for NoScriptEngine {
    fn load_script(&self, _path: &Path) -> Result<(), ScriptError> {
        Ok(())
    }

    fn welcome(&self) -> Result<Option<String>, ScriptError> {
        Ok(None)
    }

    fn handle_message(&self, _input: &str) -> Result<String, ScriptError> {
        Ok(String::new())
    }

    fn help(&self) -> Result<Option<String>, ScriptError> {
        Ok(None)
    }

    fn is_available(&self) -> bool {
        false
    }
}

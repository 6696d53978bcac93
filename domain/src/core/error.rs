//! Domain error types

use thiserror::Error;

/// Domain-level errors
#[derive(Error, Debug)]
pub enum DomainError {
    #[error("Script path is empty")]
    EmptyScriptPath,

    #[error("Invalid script: {0}")]
    InvalidScript(String),

    #[error("An interactive {0} session is already in progress")]
    SessionBusy(&'static str),

    #[error("Invalid selection: {0}")]
    InvalidSelection(String),

    #[error("Operation cancelled")]
    Cancelled,
}

impl DomainError {
    /// Check if this error represents a cancellation
    pub fn is_cancelled(&self) -> bool {
        matches!(self, DomainError::Cancelled)
    }
}

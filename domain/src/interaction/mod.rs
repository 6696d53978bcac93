//! Interaction state machine
//!
//! The bridge runs at most one interactive operation at a time:
//! `Idle -> AwaitingPopup | AwaitingPicker -> Idle`. Starting a second
//! operation while one is outstanding is a domain error.

use crate::core::error::DomainError;

/// Kind of modal popup.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PopupKind {
    /// Text-input prompt; completion stores the entered line.
    Input,
    /// Message dialog; dismissed without producing a value.
    Message,
}

impl PopupKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Input => "input",
            Self::Message => "message",
        }
    }
}

/// Current interactive state of the UI bridge.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum InteractionState {
    #[default]
    Idle,
    AwaitingPopup(PopupKind),
    AwaitingPicker {
        limit: usize,
    },
}

impl InteractionState {
    /// Enter a popup session. Fails if any interactive session is outstanding.
    pub fn begin_popup(&mut self, kind: PopupKind) -> Result<(), DomainError> {
        self.ensure_idle()?;
        *self = Self::AwaitingPopup(kind);
        Ok(())
    }

    /// Enter a picker session limited to `limit` selections.
    pub fn begin_picker(&mut self, limit: usize) -> Result<(), DomainError> {
        self.ensure_idle()?;
        *self = Self::AwaitingPicker { limit };
        Ok(())
    }

    /// Return to idle after the user confirmed or cancelled.
    pub fn finish(&mut self) {
        *self = Self::Idle;
    }

    pub fn is_idle(&self) -> bool {
        matches!(self, Self::Idle)
    }

    fn ensure_idle(&self) -> Result<(), DomainError> {
        match self {
            Self::Idle => Ok(()),
            Self::AwaitingPopup(_) => Err(DomainError::SessionBusy("popup")),
            Self::AwaitingPicker { .. } => Err(DomainError::SessionBusy("picker")),
        }
    }
}

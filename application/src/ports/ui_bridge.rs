//! UI bridge port — the capability set scripts may invoke.
//!
//! This is the contract between the embedded script and the host UI:
//! transcript output (text, images), modal popups, picker sessions, and
//! the cancellation query. The presentation layer provides the real
//! terminal implementation; `NoUiBridge` is a headless no-op.
//!
//! State rules:
//! - The cancellation flag resets when an interactive operation starts
//!   and is set only by user cancellation of that operation. It is
//!   `false` before any interaction.
//! - The picked buffer is replaced per picker session and consumed once:
//!   `receive_picked` drains it.
//! - At most one interactive operation is outstanding at a time.

use parley_domain::ImageRef;
use std::path::Path;

/// Error from a bridge operation (popup file missing, picker I/O failure).
#[derive(Debug, Clone)]
pub struct BridgeError {
    pub message: String,
}

impl BridgeError {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}

impl std::fmt::Display for BridgeError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "bridge error: {}", self.message)
    }
}

impl std::error::Error for BridgeError {}

/// Port for the UI surface exposed to chat scripts.
///
/// Exactly one bridge exists per chat session. The engine receives it as
/// an `Arc<dyn UiBridgePort>` at construction.
pub trait UiBridgePort: Send + Sync {
    /// Append text to the visible transcript. Best-effort; never errors.
    fn print_text(&self, text: &str);

    /// Render an image on the transcript surface. Best-effort; decode
    /// failures degrade to a textual caption.
    fn print_image(&self, image: &ImageRef);

    /// Whether the most recent interactive operation was cancelled by
    /// the user. Pure query; no side effects.
    fn is_canceled(&self) -> bool;

    /// Open a modal text-input prompt whose prompt text is loaded from
    /// `prompt_path`. Blocks until the user confirms or cancels.
    fn start_popup_input(&self, prompt_path: &Path) -> Result<(), BridgeError>;

    /// Consume the line entered in the most recent input popup.
    /// `None` if the popup was cancelled or already consumed.
    fn receive_input(&self) -> Option<String>;

    /// Open a modal message dialog whose body is loaded from
    /// `message_path`. Blocks until dismissed.
    fn start_popup_message(&self, message_path: &Path) -> Result<(), BridgeError>;

    /// Open an interactive picker over the media library, selecting up
    /// to `count` images. Blocks until the user confirms or cancels;
    /// completion populates the picked buffer.
    fn start_pick_from_library(&self, count: usize) -> Result<(), BridgeError>;

    /// Consume the most recent picker session's selections, in selection
    /// order. Empty if the session was cancelled, none is pending, or
    /// the buffer was already consumed.
    fn receive_picked(&self) -> Vec<ImageRef>;
}

/// Headless no-op bridge for tests and non-interactive runs.
///
/// Prints nothing, popups complete immediately without input, the picker
/// selects nothing, and cancellation is never reported.
pub struct NoUiBridge;

impl UiBridgePort for NoUiBridge {
    fn print_text(&self, _text: &str) {}

    fn print_image(&self, _image: &ImageRef) {}

    fn is_canceled(&self) -> bool {
        false
    }

    fn start_popup_input(&self, _prompt_path: &Path) -> Result<(), BridgeError> {
        Ok(())
    }

    fn receive_input(&self) -> Option<String> {
        None
    }

    fn start_popup_message(&self, _message_path: &Path) -> Result<(), BridgeError> {
        Ok(())
    }

    fn start_pick_from_library(&self, _count: usize) -> Result<(), BridgeError> {
        Ok(())
    }

    fn receive_picked(&self) -> Vec<ImageRef> {
        Vec::new()
    }
}

//! Application layer for parley
//!
//! Use cases and ports. The two central ports mirror the two directions
//! of the scripting-UI bridge:
//!
//! - [`UiBridgePort`]: script-to-UI capability set (print, popups, picker)
//! - [`ScriptEnginePort`]: UI-to-script dispatch (load, welcome, messages)
//!
//! The bridge instance is injected into the engine at construction —
//! there is no process-global accessor.

pub mod ports;
pub mod use_cases;

pub use ports::media_library::{MediaLibraryError, MediaLibraryPort};
pub use ports::script_engine::{NoScriptEngine, ScriptEnginePort, ScriptError};
pub use ports::transcript_logger::{TranscriptEvent, TranscriptLoggerPort};
pub use ports::ui_bridge::{BridgeError, NoUiBridge, UiBridgePort};
pub use use_cases::chat_session::ChatSession;

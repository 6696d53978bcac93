//! Domain layer for parley
//!
//! Core types for a script-driven chat session: transcript entries, the
//! interaction state machine behind modal popups and picker sessions,
//! media references, and validated script sources. This crate has no
//! dependencies on infrastructure or presentation concerns — the Lua
//! runtime and the terminal surface live behind ports in the
//! application layer.

pub mod chat;
pub mod core;
pub mod interaction;
pub mod media;
pub mod script;

// Re-export commonly used types
pub use chat::{Author, ChatContent, ChatEntry};
pub use crate::core::error::DomainError;
pub use interaction::{InteractionState, PopupKind};
pub use media::{ImageRef, PickOutcome};
pub use script::ScriptSource;

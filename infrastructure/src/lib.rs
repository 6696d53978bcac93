//! Infrastructure layer for parley
//!
//! Concrete adapters behind the application ports: the mlua-backed chat
//! script engine, figment configuration loading, the filesystem media
//! library, and the JSONL transcript logger.

pub mod config;
pub mod logging;
pub mod media;
pub mod scripting;

pub use config::{ConfigLoader, FileConfig};
pub use logging::JsonlTranscriptLogger;
pub use media::FsMediaLibrary;
pub use scripting::LuaChatEngine;

//! Ports (interfaces) to infrastructure and presentation adapters

pub mod media_library;
pub mod script_engine;
pub mod transcript_logger;
pub mod ui_bridge;

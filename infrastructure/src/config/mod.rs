//! Configuration loading

pub mod file_config;
pub mod loader;

pub use file_config::{FileConfig, FileLibraryConfig, FileReplConfig, FileTranscriptConfig};
pub use loader::ConfigLoader;

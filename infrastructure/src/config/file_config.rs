//! Raw TOML configuration data types
//!
//! These structs represent the exact structure of the TOML config file
//! and are deserialized directly by the loader.

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Complete file configuration (raw TOML structure)
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct FileConfig {
    /// Media library settings (picker source)
    pub library: FileLibraryConfig,
    /// REPL settings
    pub repl: FileReplConfig,
    /// Transcript logging settings
    pub transcript: FileTranscriptConfig,
}

/// `[library]` section
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct FileLibraryConfig {
    /// Root directory scanned for images
    pub root: PathBuf,
    /// File extensions treated as images (lowercase, without dot)
    pub extensions: Vec<String>,
}

impl Default for FileLibraryConfig {
    fn default() -> Self {
        Self {
            root: PathBuf::from("library"),
            extensions: default_extensions(),
        }
    }
}

/// Extensions scanned when the config does not override them.
pub fn default_extensions() -> Vec<String> {
    ["png", "jpg", "jpeg", "gif", "webp"]
        .iter()
        .map(|s| s.to_string())
        .collect()
}

/// `[repl]` section
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct FileReplConfig {
    /// Prompt shown before each user line
    pub prompt: String,
    /// Show the welcome banner on startup
    pub banner: bool,
}

impl Default for FileReplConfig {
    fn default() -> Self {
        Self {
            prompt: ">>> ".to_string(),
            banner: true,
        }
    }
}

/// `[transcript]` section
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct FileTranscriptConfig {
    /// Write a JSONL transcript per session
    pub enabled: bool,
    /// Directory for transcript files; platform data dir when unset
    pub dir: Option<PathBuf>,
}

impl Default for FileTranscriptConfig {
    fn default() -> Self {
        Self {
            enabled: true,
            dir: None,
        }
    }
}

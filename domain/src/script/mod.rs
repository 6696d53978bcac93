//! Script source value object
//!
//! A chat script is identified by a non-empty filesystem path, fixed at
//! construction. Relative resource paths used by the script (popup prompt
//! files, images) resolve against the script's directory.

use crate::core::error::DomainError;
use std::path::{Path, PathBuf};

/// Validated reference to a chat script on disk.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScriptSource {
    path: PathBuf,
}

impl ScriptSource {
    /// Create a script source. The path must be non-empty; existence is
    /// checked later by the engine when the script is loaded.
    pub fn new(path: impl Into<PathBuf>) -> Result<Self, DomainError> {
        let path = path.into();
        if path.as_os_str().is_empty() {
            return Err(DomainError::EmptyScriptPath);
        }
        Ok(Self { path })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Directory the script lives in; resource paths resolve against this.
    pub fn dir(&self) -> &Path {
        self.path.parent().unwrap_or_else(|| Path::new("."))
    }

    /// Display name derived from the file stem.
    pub fn name(&self) -> String {
        self.path
            .file_stem()
            .map(|s| s.to_string_lossy().into_owned())
            .unwrap_or_else(|| self.path.to_string_lossy().into_owned())
    }
}

/// Extract the description block from a script's leading comment lines.
///
/// Chat scripts conventionally open with a block of `--` comments
/// describing the script. The block ends at the first line that is not a
/// comment. Returns `None` if the script has no leading comments.
pub fn parse_description(source: &str) -> Option<String> {
    let mut lines = Vec::new();
    for line in source.lines() {
        let trimmed = line.trim_start();
        if let Some(rest) = trimmed.strip_prefix("--") {
            lines.push(rest.strip_prefix(' ').unwrap_or(rest).to_string());
        } else if trimmed.is_empty() && lines.is_empty() {
            continue;
        } else {
            break;
        }
    }
    // Trim blank edges of the block
    while lines.first().is_some_and(|l| l.is_empty()) {
        lines.remove(0);
    }
    while lines.last().is_some_and(|l| l.is_empty()) {
        lines.pop();
    }
    if lines.is_empty() {
        None
    } else {
        Some(lines.join("\n"))
    }
}

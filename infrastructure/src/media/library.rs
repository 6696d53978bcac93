//! Directory-backed media library.
//!
//! Scans a root directory (recursively) for image files by extension and
//! returns a stable sorted listing. This is the picker's image source.

use glob::glob;
use parley_application::{MediaLibraryError, MediaLibraryPort};
use parley_domain::ImageRef;
use std::path::{Path, PathBuf};
use tracing::debug;

/// Media library over a local directory tree.
pub struct FsMediaLibrary {
    root: PathBuf,
    extensions: Vec<String>,
}

impl FsMediaLibrary {
    /// Create a library rooted at `root`, matching the given extensions
    /// (lowercase, without dot).
    pub fn new(root: impl Into<PathBuf>, extensions: Vec<String>) -> Self {
        Self {
            root: root.into(),
            extensions,
        }
    }
}

impl MediaLibraryPort for FsMediaLibrary {
    fn list_images(&self) -> Result<Vec<ImageRef>, MediaLibraryError> {
        if !self.root.is_dir() {
            return Err(MediaLibraryError::MissingRoot(self.root.clone()));
        }

        let mut paths: Vec<PathBuf> = Vec::new();
        for ext in &self.extensions {
            let pattern = format!("{}/**/*.{}", self.root.display(), ext);
            let entries = glob(&pattern)
                .map_err(|e| MediaLibraryError::Io(e.to_string()))?;
            for entry in entries {
                match entry {
                    Ok(path) => paths.push(path),
                    Err(e) => return Err(MediaLibraryError::Io(e.to_string())),
                }
            }
        }

        paths.sort();
        paths.dedup();
        debug!(root = %self.root.display(), count = paths.len(), "scanned media library");
        Ok(paths.into_iter().map(ImageRef::new).collect())
    }

    fn root(&self) -> &Path {
        &self.root
    }
}

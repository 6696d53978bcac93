//! Media library port — the picker's source of images.
//!
//! The picker UI lists whatever this port returns. The infrastructure
//! layer implements it over a local directory tree.

use parley_domain::ImageRef;
use std::path::{Path, PathBuf};

/// Error from a media library operation.
#[derive(Debug, Clone)]
pub enum MediaLibraryError {
    /// The configured library root does not exist.
    MissingRoot(PathBuf),
    /// Filesystem error while scanning.
    Io(String),
}

impl std::fmt::Display for MediaLibraryError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            MediaLibraryError::MissingRoot(root) => {
                write!(f, "media library root does not exist: {}", root.display())
            }
            MediaLibraryError::Io(msg) => write!(f, "media library I/O error: {}", msg),
        }
    }
}

impl std::error::Error for MediaLibraryError {}

/// Port for the image source backing picker sessions.
pub trait MediaLibraryPort: Send + Sync {
    /// List every image in the library, in a stable sorted order.
    fn list_images(&self) -> Result<Vec<ImageRef>, MediaLibraryError>;

    /// The library's root directory.
    fn root(&self) -> &Path;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_root_display_includes_path() {
        let err = MediaLibraryError::MissingRoot(PathBuf::from("/no/such/dir"));
        assert!(err.to_string().contains("/no/such/dir"));
    }
}

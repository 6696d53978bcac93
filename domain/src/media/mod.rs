//! Media value objects
//!
//! Images in parley are always referenced by path — the host never holds
//! decoded pixel data in the domain layer. Rendering happens at the
//! presentation surface.

use std::path::{Path, PathBuf};

/// Reference to an image on the local filesystem.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ImageRef {
    path: PathBuf,
}

impl ImageRef {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// File name portion, or the full path if there is none.
    pub fn file_name(&self) -> String {
        self.path
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_else(|| self.path.to_string_lossy().into_owned())
    }
}

impl std::fmt::Display for ImageRef {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.path.display())
    }
}

/// Outcome of one picker session.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PickOutcome {
    /// The user confirmed a selection, in selection order.
    Selected(Vec<ImageRef>),
    /// The user aborted the session.
    Canceled,
}

impl PickOutcome {
    /// The selected images, empty on cancellation.
    pub fn into_images(self) -> Vec<ImageRef> {
        match self {
            PickOutcome::Selected(images) => images,
            PickOutcome::Canceled => Vec::new(),
        }
    }

    pub fn is_canceled(&self) -> bool {
        matches!(self, PickOutcome::Canceled)
    }
}

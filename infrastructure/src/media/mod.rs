//! Filesystem media library

pub mod library;

pub use library::FsMediaLibrary;

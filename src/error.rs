//! Unified error types for dirtree
//!
//! Every filesystem failure carries the path it happened on, so the
//! top-level error message can name it.

use std::io;
use std::path::{Path, PathBuf};

/// Unified error type for tree operations
#[derive(Debug, thiserror::Error)]
pub enum TreeError {
    /// Root or a descended-into path no longer exists
    #[error("Path not found: {}", path.display())]
    PathNotFound { path: PathBuf },

    /// A path expected to be a directory is not one
    #[error("Not a directory: {}", path.display())]
    NotADirectory { path: PathBuf },

    /// Directory contents are unreadable
    #[error("Permission denied: {}", path.display())]
    PermissionDenied { path: PathBuf },

    /// Any other filesystem failure
    #[error("IO error on {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// Writing the tree to the output failed
    #[error("Output error: {0}")]
    Output(#[source] io::Error),
}

/// Convenience Result type using TreeError
pub type Result<T> = std::result::Result<T, TreeError>;

impl TreeError {
    /// Classify an I/O error raised while accessing `path`
    pub fn from_io(path: impl AsRef<Path>, err: io::Error) -> Self {
        let path = path.as_ref().to_path_buf();
        match err.kind() {
            io::ErrorKind::NotFound => Self::PathNotFound { path },
            io::ErrorKind::NotADirectory => Self::NotADirectory { path },
            io::ErrorKind::PermissionDenied => Self::PermissionDenied { path },
            _ => Self::Io { path, source: err },
        }
    }

    /// Create a NotADirectory error
    pub fn not_a_directory(path: impl Into<PathBuf>) -> Self {
        Self::NotADirectory { path: path.into() }
    }

    /// True when the error came from a closed output pipe
    pub fn is_broken_pipe(&self) -> bool {
        matches!(self, Self::Output(e) if e.kind() == io::ErrorKind::BrokenPipe)
    }

    /// Short reason used in unreadable-directory markers
    pub fn reason(&self) -> String {
        match self {
            Self::PathNotFound { .. } => "not found".to_string(),
            Self::NotADirectory { .. } => "not a directory".to_string(),
            Self::PermissionDenied { .. } => "permission denied".to_string(),
            Self::Io { source, .. } => source.to_string(),
            Self::Output(e) => e.to_string(),
        }
    }
}

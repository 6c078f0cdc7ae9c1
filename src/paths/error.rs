use std::path::PathBuf;

use thiserror::Error;

/// Why a local directory cannot be used as a download destination.
///
/// The `Display` strings are part of the public contract: callers that only
/// see the text form may match on them.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum LocalPathError {
    #[error("Empty path provided")]
    Empty,
    #[error("Path must be absolute, got relative path: {}", .0.display())]
    Relative(PathBuf),
    #[error("Parent directory does not exist: {}", .0.display())]
    ParentMissing(PathBuf),
    #[error("Parent path is not a directory: {}", .0.display())]
    ParentNotDirectory(PathBuf),
    #[error("Parent directory is not writable: {}", .0.display())]
    ParentNotWritable(PathBuf),
    #[error("Path exists but is not a directory: {}", .0.display())]
    NotDirectory(PathBuf),
    #[error("Directory is not writable: {}", .0.display())]
    NotWritable(PathBuf),
}

impl LocalPathError {
    /// Stable machine-readable code.
    pub fn code(&self) -> &'static str {
        match self {
            Self::Empty => "empty",
            Self::Relative(_) => "relative",
            Self::ParentMissing(_) => "parent_missing",
            Self::ParentNotDirectory(_) => "parent_not_directory",
            Self::ParentNotWritable(_) => "parent_not_writable",
            Self::NotDirectory(_) => "not_directory",
            Self::NotWritable(_) => "not_writable",
        }
    }

    /// Path the failure refers to; `None` for [`LocalPathError::Empty`].
    pub fn path(&self) -> Option<&std::path::Path> {
        match self {
            Self::Empty => None,
            Self::Relative(p)
            | Self::ParentMissing(p)
            | Self::ParentNotDirectory(p)
            | Self::ParentNotWritable(p)
            | Self::NotDirectory(p)
            | Self::NotWritable(p) => Some(p.as_path()),
        }
    }
}

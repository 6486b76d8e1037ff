//! FileStore port - abstraction over the file operations the pipeline needs
//!
//! The ingestion flow never touches `std::fs` directly. Going through this
//! trait lets tests swap in stores that fail on purpose.

use std::path::{Path, PathBuf};

/// Result type for file store operations
pub type FsResult<T> = Result<T, FsError>;

/// File store operation errors
#[derive(Debug)]
pub enum FsError {
    /// File not found
    NotFound(PathBuf),
    /// Permission denied
    PermissionDenied(PathBuf),
    /// Destination already exists (no-clobber write lost a race)
    AlreadyExists(PathBuf),
    /// Any other I/O error
    Io {
        path: PathBuf,
        source: std::io::Error,
    },
}

impl FsError {
    /// Classify an I/O error that happened while working on `path`
    pub fn from_io(path: &Path, err: std::io::Error) -> Self {
        match err.kind() {
            std::io::ErrorKind::NotFound => FsError::NotFound(path.to_path_buf()),
            std::io::ErrorKind::PermissionDenied => FsError::PermissionDenied(path.to_path_buf()),
            std::io::ErrorKind::AlreadyExists => FsError::AlreadyExists(path.to_path_buf()),
            _ => FsError::Io {
                path: path.to_path_buf(),
                source: err,
            },
        }
    }
}

impl std::fmt::Display for FsError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            FsError::NotFound(path) => write!(f, "File not found: {}", path.display()),
            FsError::PermissionDenied(path) => {
                write!(f, "Permission denied: {}", path.display())
            }
            FsError::AlreadyExists(path) => write!(f, "Already exists: {}", path.display()),
            FsError::Io { path, source } => write!(f, "I/O error on {}: {}", path.display(), source),
        }
    }
}

impl std::error::Error for FsError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            FsError::Io { source, .. } => Some(source),
            _ => None,
        }
    }
}

/// Abstract file store
///
/// Implementations:
/// - `LocalFs` - local disk, advisory locks via `fs2`
/// - test stores that inject failures
pub trait FileStore {
    /// Check if a file or directory exists
    fn exists(&self, path: &Path) -> bool;

    /// Open the file read-write and take an exclusive lock, releasing both
    /// immediately. Any error means someone else still holds the file.
    fn probe_exclusive(&self, path: &Path) -> FsResult<()>;

    /// Read the raw bytes of a file
    fn read(&self, path: &Path) -> FsResult<Vec<u8>>;

    /// Write a new file; fails with `AlreadyExists` instead of overwriting
    fn write_new(&self, path: &Path, content: &[u8]) -> FsResult<()>;

    /// Create a directory and its parents
    fn create_dir_all(&self, path: &Path) -> FsResult<()>;

    /// Move a file
    fn rename(&self, from: &Path, to: &Path) -> FsResult<()>;
}

impl<T: FileStore + ?Sized> FileStore for &T {
    fn exists(&self, path: &Path) -> bool {
        (**self).exists(path)
    }

    fn probe_exclusive(&self, path: &Path) -> FsResult<()> {
        (**self).probe_exclusive(path)
    }

    fn read(&self, path: &Path) -> FsResult<Vec<u8>> {
        (**self).read(path)
    }

    fn write_new(&self, path: &Path, content: &[u8]) -> FsResult<()> {
        (**self).write_new(path, content)
    }

    fn create_dir_all(&self, path: &Path) -> FsResult<()> {
        (**self).create_dir_all(path)
    }

    fn rename(&self, from: &Path, to: &Path) -> FsResult<()> {
        (**self).rename(from, to)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fs_error_display() {
        let err = FsError::NotFound(PathBuf::from("test.txt"));
        assert!(err.to_string().contains("test.txt"));
    }

    #[test]
    fn fs_error_from_io_classifies_kind() {
        let io_err = std::io::Error::new(std::io::ErrorKind::AlreadyExists, "exists");
        let fs_err = FsError::from_io(Path::new("out.txt"), io_err);
        assert!(matches!(fs_err, FsError::AlreadyExists(ref p) if p == Path::new("out.txt")));

        let io_err = std::io::Error::other("disk full");
        let fs_err = FsError::from_io(Path::new("out.txt"), io_err);
        assert!(matches!(fs_err, FsError::Io { .. }));
    }
}

//! Local File System Implementation
//!
//! Implements the FileStore port for local disk operations.

use std::fs::{self, OpenOptions};
use std::io::Write;
use std::path::Path;

use fs2::FileExt;
use tempfile::NamedTempFile;

use crate::domain::ports::file_store::{FileStore, FsError, FsResult};

/// Local file system implementation
///
/// Lock probes use advisory locks (`flock` / `LockFileEx`). Writes go
/// through a temp file in the destination directory and are persisted
/// without clobbering an existing file.
#[derive(Debug, Clone, Copy, Default)]
pub struct LocalFs;

impl LocalFs {
    /// Create a new LocalFs instance
    pub fn new() -> Self {
        Self
    }

    /// Make sure `path` is a usable directory, creating it if needed.
    pub fn ensure_dir(&self, path: &Path) -> FsResult<()> {
        if path.as_os_str().is_empty() {
            return Err(FsError::Io {
                path: path.to_path_buf(),
                source: std::io::Error::new(
                    std::io::ErrorKind::InvalidInput,
                    "invalid directory",
                ),
            });
        }
        if path.is_dir() {
            return Ok(());
        }
        self.create_dir_all(path)
    }
}

impl FileStore for LocalFs {
    fn exists(&self, path: &Path) -> bool {
        path.exists()
    }

    fn probe_exclusive(&self, path: &Path) -> FsResult<()> {
        let file = OpenOptions::new()
            .read(true)
            .write(true)
            .open(path)
            .map_err(|e| FsError::from_io(path, e))?;
        FileExt::try_lock_exclusive(&file).map_err(|e| FsError::from_io(path, e))?;
        let _ = FileExt::unlock(&file);
        Ok(())
    }

    fn read(&self, path: &Path) -> FsResult<Vec<u8>> {
        fs::read(path).map_err(|e| FsError::from_io(path, e))
    }

    fn write_new(&self, path: &Path, content: &[u8]) -> FsResult<()> {
        let dir = match path.parent() {
            Some(parent) if !parent.as_os_str().is_empty() => parent,
            _ => Path::new("."),
        };

        let mut tmp = NamedTempFile::new_in(dir).map_err(|e| FsError::from_io(dir, e))?;
        tmp.write_all(content)
            .and_then(|_| tmp.as_file().sync_all())
            .map_err(|e| FsError::from_io(path, e))?;
        tmp.persist_noclobber(path)
            .map_err(|e| FsError::from_io(path, e.error))?;
        Ok(())
    }

    fn create_dir_all(&self, path: &Path) -> FsResult<()> {
        fs::create_dir_all(path).map_err(|e| FsError::from_io(path, e))
    }

    fn rename(&self, from: &Path, to: &Path) -> FsResult<()> {
        fs::rename(from, to).map_err(|e| FsError::from_io(from, e))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn local_fs_write_and_read() {
        let dir = tempdir().unwrap();
        let file = dir.path().join("report.txt");
        let fs = LocalFs::new();

        fs.write_new(&file, b"Circle, 3.14, red\n").unwrap();
        let content = fs.read(&file).unwrap();

        assert_eq!(content, b"Circle, 3.14, red\n");
    }

    #[test]
    fn local_fs_write_new_never_overwrites() {
        let dir = tempdir().unwrap();
        let file = dir.path().join("report.txt");
        let fs = LocalFs::new();

        fs.write_new(&file, b"first").unwrap();
        let err = fs.write_new(&file, b"second").unwrap_err();

        assert!(matches!(err, FsError::AlreadyExists(_)));
        assert_eq!(std::fs::read(&file).unwrap(), b"first");
        // no temp file left behind
        assert_eq!(std::fs::read_dir(dir.path()).unwrap().count(), 1);
    }

    #[test]
    fn local_fs_probe_free_file() {
        let dir = tempdir().unwrap();
        let file = dir.path().join("in.txt");
        std::fs::write(&file, "circle, 1, red").unwrap();

        LocalFs::new().probe_exclusive(&file).unwrap();
    }

    #[test]
    fn local_fs_probe_locked_file() {
        let dir = tempdir().unwrap();
        let file = dir.path().join("in.txt");
        std::fs::write(&file, "circle, 1, red").unwrap();

        let holder = std::fs::File::open(&file).unwrap();
        FileExt::lock_exclusive(&holder).unwrap();

        assert!(LocalFs::new().probe_exclusive(&file).is_err());

        FileExt::unlock(&holder).unwrap();
        LocalFs::new().probe_exclusive(&file).unwrap();
    }

    #[test]
    fn local_fs_probe_missing_file() {
        let dir = tempdir().unwrap();
        let err = LocalFs::new()
            .probe_exclusive(&dir.path().join("missing.txt"))
            .unwrap_err();
        assert!(matches!(err, FsError::NotFound(_)));
    }

    #[test]
    fn local_fs_rename() {
        let dir = tempdir().unwrap();
        let from = dir.path().join("in.txt");
        let to = dir.path().join("Processed").join("in.txt");
        std::fs::write(&from, "x").unwrap();
        let fs = LocalFs::new();

        fs.create_dir_all(to.parent().unwrap()).unwrap();
        fs.rename(&from, &to).unwrap();

        assert!(!from.exists());
        assert!(to.exists());
    }

    #[test]
    fn local_fs_ensure_dir() {
        let dir = tempdir().unwrap();
        let nested = dir.path().join("a").join("b");
        let fs = LocalFs::new();

        fs.ensure_dir(&nested).unwrap();
        assert!(nested.is_dir());
        fs.ensure_dir(&nested).unwrap();

        assert!(fs.ensure_dir(Path::new("")).is_err());
    }
}

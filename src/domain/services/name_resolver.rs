//! Unique-name resolver - picks a destination name that is not taken yet
//!
//! `reports/20240131_All.txt` becomes `reports/20240131_All_01.txt`,
//! `_02`, ... until a free name is found. A numeric `_NN` suffix already on
//! the name is replaced rather than stacked, so `log_01.txt` never turns
//! into `log_01_01.txt`. Counters past 99 simply widen (`_100`).
//!
//! The check is not atomic: another writer can take the name between
//! `resolve` and the create that follows.

use std::ffi::{OsStr, OsString};
use std::path::{Path, PathBuf};

use crate::domain::ports::FileStore;

/// Resolves collision-free destination paths against a file store
#[derive(Debug, Clone)]
pub struct UniqueNameResolver<F> {
    store: F,
}

impl<F: FileStore> UniqueNameResolver<F> {
    pub fn new(store: F) -> Self {
        Self { store }
    }

    /// Return `candidate` if it is free, otherwise the first free
    /// `{stem}_{NN}{.ext}` sibling.
    pub fn resolve(&self, candidate: &Path) -> PathBuf {
        if candidate.as_os_str().is_empty() {
            return PathBuf::new();
        }

        let dir = candidate.parent().unwrap_or_else(|| Path::new(""));
        let ext = candidate.extension();

        let mut result = candidate.to_path_buf();
        let mut counter: u64 = 1;
        while self.store.exists(&result) {
            let stem = result.file_stem().unwrap_or_default().to_os_string();
            result = dir.join(numbered_name(&stem, counter, ext));
            counter += 1;
        }
        result
    }
}

fn numbered_name(stem: &OsStr, counter: u64, ext: Option<&OsStr>) -> OsString {
    let mut name = match stem.to_str() {
        Some(stem) => OsString::from(strip_counter_suffix(stem)),
        None => stem.to_os_string(),
    };
    name.push(format!("_{counter:02}"));
    if let Some(ext) = ext {
        name.push(".");
        name.push(ext);
    }
    name
}

/// Drop a trailing `_<digits>` suffix. An underscore at position 0 is part
/// of the name.
pub fn strip_counter_suffix(stem: &str) -> &str {
    match stem.rfind('_') {
        Some(pos) if pos > 0 => {
            let digits = &stem[pos + 1..];
            if !digits.is_empty() && digits.bytes().all(|b| b.is_ascii_digit()) {
                &stem[..pos]
            } else {
                stem
            }
        }
        _ => stem,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::ports::{FsError, FsResult};
    use std::collections::HashSet;

    /// In-memory store that only answers `exists`
    struct NameSet(HashSet<PathBuf>);

    impl NameSet {
        fn new(names: &[&str]) -> Self {
            Self(names.iter().map(PathBuf::from).collect())
        }
    }

    impl FileStore for NameSet {
        fn exists(&self, path: &Path) -> bool {
            self.0.contains(path)
        }

        fn probe_exclusive(&self, _path: &Path) -> FsResult<()> {
            Ok(())
        }

        fn read(&self, path: &Path) -> FsResult<Vec<u8>> {
            Err(FsError::NotFound(path.to_path_buf()))
        }

        fn write_new(&self, _path: &Path, _content: &[u8]) -> FsResult<()> {
            Ok(())
        }

        fn create_dir_all(&self, _path: &Path) -> FsResult<()> {
            Ok(())
        }

        fn rename(&self, _from: &Path, _to: &Path) -> FsResult<()> {
            Ok(())
        }
    }

    fn resolve(existing: &[&str], candidate: &str) -> PathBuf {
        UniqueNameResolver::new(NameSet::new(existing)).resolve(Path::new(candidate))
    }

    #[test]
    fn free_name_is_returned_unchanged() {
        assert_eq!(resolve(&[], "out/log.txt"), PathBuf::from("out/log.txt"));
    }

    #[test]
    fn skips_taken_counters() {
        assert_eq!(
            resolve(&["out/log.txt", "out/log_01.txt"], "out/log.txt"),
            PathBuf::from("out/log_02.txt")
        );
    }

    #[test]
    fn existing_counter_is_replaced_not_stacked() {
        assert_eq!(
            resolve(&["out/log_01.txt"], "out/log_01.txt"),
            PathBuf::from("out/log_02.txt")
        );
    }

    #[test]
    fn non_numeric_suffix_is_kept() {
        assert_eq!(
            resolve(&["out/20240131_All.txt"], "out/20240131_All.txt"),
            PathBuf::from("out/20240131_All_01.txt")
        );
    }

    #[test]
    fn counter_widens_past_99() {
        let mut existing = vec!["out/log.txt".to_string()];
        existing.extend((1..=99).map(|n| format!("out/log_{n:02}.txt")));
        let refs: Vec<&str> = existing.iter().map(String::as_str).collect();

        assert_eq!(resolve(&refs, "out/log.txt"), PathBuf::from("out/log_100.txt"));
    }

    #[test]
    fn names_without_extension_get_a_bare_suffix() {
        assert_eq!(resolve(&["out/data"], "out/data"), PathBuf::from("out/data_01"));
    }

    #[test]
    fn empty_candidate_resolves_to_empty() {
        assert_eq!(resolve(&[], ""), PathBuf::new());
    }

    #[test]
    fn strip_counter_suffix_cases() {
        assert_eq!(strip_counter_suffix("log_01"), "log");
        assert_eq!(strip_counter_suffix("log_"), "log_");
        assert_eq!(strip_counter_suffix("_01"), "_01");
        assert_eq!(strip_counter_suffix("a_b_7"), "a_b");
        assert_eq!(strip_counter_suffix("log_x1"), "log_x1");
    }
}

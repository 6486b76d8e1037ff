//! Property tests for unique-name resolution.

use std::collections::HashSet;
use std::path::{Path, PathBuf};

use proptest::prelude::*;

use shapewatch::domain::ports::{FileStore, FsError, FsResult};
use shapewatch::domain::services::{strip_counter_suffix, UniqueNameResolver};

/// In-memory store that only answers `exists`
struct Taken(HashSet<PathBuf>);

impl FileStore for Taken {
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

fn stem() -> impl Strategy<Value = String> {
    proptest::string::string_regex("[A-Za-z][A-Za-z0-9]{0,10}").unwrap()
}

proptest! {
    #![proptest_config(ProptestConfig {
        cases: 128,
        .. ProptestConfig::default()
    })]

    /// PROPERTY: The resolved name is never taken and keeps dir and extension.
    #[test]
    fn property_resolved_name_is_free(stem in stem(), taken in 0usize..120) {
        let dir = PathBuf::from("drop");
        let candidate = dir.join(format!("{stem}.txt"));

        let mut names: HashSet<PathBuf> = HashSet::new();
        if taken > 0 {
            names.insert(candidate.clone());
            for n in 1..taken {
                names.insert(dir.join(format!("{stem}_{n:02}.txt")));
            }
        }

        let resolved = UniqueNameResolver::new(Taken(names.clone())).resolve(&candidate);

        prop_assert!(!names.contains(&resolved));
        prop_assert_eq!(resolved.parent(), Some(dir.as_path()));
        prop_assert_eq!(resolved.extension().and_then(|e| e.to_str()), Some("txt"));
        if taken == 0 {
            prop_assert_eq!(resolved, candidate);
        } else {
            let expected = dir.join(format!("{stem}_{taken:02}.txt"));
            prop_assert_eq!(resolved, expected);
        }
    }

    /// PROPERTY: Stripping a counter is idempotent on names without one.
    #[test]
    fn property_strip_counter_suffix(stem in stem(), counter in 0u32..1000) {
        let numbered = format!("{stem}_{counter:02}");
        prop_assert_eq!(strip_counter_suffix(&numbered), stem.as_str());
        prop_assert_eq!(strip_counter_suffix(&stem), stem.as_str());
    }
}

//! Input file name patterns
//!
//! `*`, `*.*` and the empty pattern accept every file. Otherwise `*` and
//! `?` are wildcards and everything else must match literally, ignoring
//! case: `*.txt` is an extension filter, `shapes.csv` a single file name.

use std::path::Path;

/// Case-insensitive file name pattern
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FilePattern {
    raw: String,
    /// Lowercased glob; `None` accepts everything
    glob: Option<Vec<char>>,
}

impl FilePattern {
    pub fn new(raw: &str) -> Self {
        let raw = raw.trim();
        let glob = match raw {
            "" | "*" | "*.*" => None,
            other => Some(other.to_lowercase().chars().collect()),
        };
        Self {
            raw: raw.to_string(),
            glob,
        }
    }

    /// Pattern accepting every file
    pub fn any() -> Self {
        Self::new("*")
    }

    /// Pattern as configured; `*` when empty
    pub fn as_str(&self) -> &str {
        if self.raw.is_empty() {
            "*"
        } else {
            &self.raw
        }
    }

    pub fn matches_name(&self, name: &str) -> bool {
        match &self.glob {
            None => true,
            Some(glob) => {
                let name: Vec<char> = name.to_lowercase().chars().collect();
                wildcard_match(glob, &name)
            }
        }
    }

    /// Match on the final path component. Non-UTF-8 names only pass the
    /// accept-all pattern.
    pub fn matches(&self, path: &Path) -> bool {
        match path.file_name() {
            None => false,
            Some(name) => match name.to_str() {
                Some(name) => self.matches_name(name),
                None => self.glob.is_none(),
            },
        }
    }
}

impl Default for FilePattern {
    fn default() -> Self {
        Self::any()
    }
}

impl std::fmt::Display for FilePattern {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// `*` matches any run of characters, `?` exactly one
fn wildcard_match(pattern: &[char], text: &[char]) -> bool {
    let (mut p, mut t) = (0, 0);
    let mut backtrack: Option<(usize, usize)> = None;

    while t < text.len() {
        match pattern.get(p) {
            Some('*') => {
                backtrack = Some((p, t));
                p += 1;
            }
            Some(&c) if c == '?' || c == text[t] => {
                p += 1;
                t += 1;
            }
            _ => match backtrack {
                Some((star, from)) => {
                    p = star + 1;
                    t = from + 1;
                    backtrack = Some((star, from + 1));
                }
                None => return false,
            },
        }
    }

    pattern[p..].iter().all(|&c| c == '*')
}

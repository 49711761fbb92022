//! Collision-free naming for collected files.
//!
//! A [`RenameRegistry`] remembers every base filename it has handed out during
//! one run and appends `_<n>` suffixes to later occurrences so that no two
//! results ever share a name. It only decides names; it never touches the
//! filesystem.

use std::collections::HashMap;
use std::collections::hash_map::Entry;
use std::path::Path;

/// Session-scoped map from base filename to its collision counter.
///
/// Counters start at 0 on first sight and only ever grow. Single-threaded by
/// design: callers performing concurrent transfers must serialize access
/// externally.
#[derive(Debug, Default)]
pub struct RenameRegistry {
    counters: HashMap<String, u64>,
}

impl RenameRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Return a filename for `path` that is unique among everything this
    /// registry has returned so far.
    ///
    /// The directory portion of `path` is ignored; only the final component
    /// matters for naming. On a collision the current name's counter is
    /// bumped and a `_<n>` suffix is inserted before the first `.` of the
    /// name (`a.tar.gz` -> `a_1.tar.gz`, `README` -> `README_1`). The
    /// generated candidate is then checked against the registry again, so a
    /// candidate that was itself seen earlier (say an input literally named
    /// `a_1.txt`) keeps the search going instead of silently duplicating.
    pub fn resolve(&mut self, path: &str) -> String {
        let mut name = base_name(path);
        loop {
            match self.counters.entry(name) {
                Entry::Vacant(slot) => {
                    let resolved = slot.key().clone();
                    slot.insert(0);
                    return resolved;
                }
                Entry::Occupied(mut slot) => {
                    let n = {
                        let count = slot.get_mut();
                        *count += 1;
                        *count
                    };
                    name = with_suffix(slot.key(), n);
                }
            }
        }
    }

    /// Number of distinct names the registry has seen.
    pub fn len(&self) -> usize {
        self.counters.len()
    }

    pub fn is_empty(&self) -> bool {
        self.counters.is_empty()
    }
}

/// Final path component of `path`; the whole string if no component splits off.
fn base_name(path: &str) -> String {
    Path::new(path)
        .file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_else(|| path.to_string())
}

/// Insert `_<n>` before the first `.` of `name`, or append it when there is
/// no extension. Splitting at the first dot keeps compound extensions intact.
fn with_suffix(name: &str, n: u64) -> String {
    match name.split_once('.') {
        Some((stem, ext)) => format!("{stem}_{n}.{ext}"),
        None => format!("{name}_{n}"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn base_name_strips_directories() {
        assert_eq!(base_name("/tmp/x/a.txt"), "a.txt");
        assert_eq!(base_name("dir/a.txt"), "a.txt");
        assert_eq!(base_name("a.txt"), "a.txt");
    }

    #[test]
    fn suffix_splits_at_first_dot() {
        assert_eq!(with_suffix("a.txt", 1), "a_1.txt");
        assert_eq!(with_suffix("archive.tar.gz", 2), "archive_2.tar.gz");
        assert_eq!(with_suffix("README", 1), "README_1");
    }

    #[test]
    fn first_occurrence_is_unchanged() {
        let mut reg = RenameRegistry::new();
        assert_eq!(reg.resolve("a.txt"), "a.txt");
        assert_eq!(reg.len(), 1);
    }

    #[test]
    fn repeated_name_counts_up() {
        let mut reg = RenameRegistry::new();
        assert_eq!(reg.resolve("a.txt"), "a.txt");
        assert_eq!(reg.resolve("a.txt"), "a_1.txt");
        assert_eq!(reg.resolve("a.txt"), "a_2.txt");
    }

    #[test]
    fn generated_candidate_is_rechecked() {
        let mut reg = RenameRegistry::new();
        // An input that happens to look like a future candidate.
        assert_eq!(reg.resolve("a_1.txt"), "a_1.txt");
        assert_eq!(reg.resolve("a.txt"), "a.txt");
        // The candidate a_1.txt is taken; the search must continue.
        let third = reg.resolve("a.txt");
        assert_ne!(third, "a_1.txt");
        assert_eq!(third, "a_1_1.txt");
    }
}

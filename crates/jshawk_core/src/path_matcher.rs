//! Exclusion matching for discovered paths.

use std::path::{Path, PathBuf};

use globset::{Glob, GlobMatcher};
use tracing::debug;

/// One cached exclusion verdict.
///
/// Whether an entry names a directory or a glob is decided once, at
/// construction, by probing the filesystem. Checking a path never probes
/// again.
enum ExclusionRule {
    /// An existing directory under the root; excludes everything below it.
    Directory(PathBuf),
    /// A glob pattern matched against root-relative paths.
    Pattern(GlobMatcher),
}

/// Decides whether a discovered path falls under an excluded directory or
/// matches an excluded glob pattern.
pub struct PathMatcher {
    rules: Vec<ExclusionRule>,
}

impl PathMatcher {
    /// Builds a matcher for the given exclusion entries.
    ///
    /// Entries are interpreted relative to `root`. An entry that is
    /// neither an existing directory nor a valid glob matches nothing;
    /// that is not an error.
    pub fn new(root: &Path, exclusions: &[String]) -> Self {
        let mut rules = Vec::with_capacity(exclusions.len());

        for entry in exclusions {
            if root.join(entry).is_dir() {
                rules.push(ExclusionRule::Directory(PathBuf::from(entry)));
            } else {
                match Glob::new(entry) {
                    Ok(glob) => rules.push(ExclusionRule::Pattern(glob.compile_matcher())),
                    Err(e) => {
                        debug!("Exclusion entry '{}' matches nothing: {}", entry, e);
                    }
                }
            }
        }

        Self { rules }
    }

    /// Returns true when the root-relative `path` is excluded.
    ///
    /// Directory rules match any path below the directory, at any depth,
    /// on component boundaries only: entry `a/b` excludes `a/b/c.js` and
    /// `a/b/d/e.js` but never `a/b-extra/c.js`.
    pub fn is_excluded(&self, path: &Path) -> bool {
        self.rules.iter().any(|rule| match rule {
            ExclusionRule::Directory(dir) => path
                .strip_prefix(dir)
                .is_ok_and(|rest| !rest.as_os_str().is_empty()),
            ExclusionRule::Pattern(matcher) => matcher.is_match(path),
        })
    }
}

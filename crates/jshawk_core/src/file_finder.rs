//! File discovery.

use std::path::PathBuf;

use globset::{Glob, GlobMatcher};
use tracing::info;
use walkdir::WalkDir;

use crate::path_matcher::PathMatcher;
use crate::LintError;

/// Produces the list of files to lint.
///
/// A trait so the runner can be driven by fakes in tests; the production
/// implementation is `WalkDiscovery`.
pub trait FileDiscovery {
    /// Returns root-relative paths, already exclusion-filtered. A fresh
    /// call re-walks the tree.
    fn discover(&self) -> Result<Vec<PathBuf>, LintError>;
}

/// Walks a project root with an inclusion glob and drops excluded paths.
pub struct WalkDiscovery {
    root: PathBuf,
    include: GlobMatcher,
    matcher: PathMatcher,
}

impl WalkDiscovery {
    /// Creates a discovery over `root` for files matching `include`,
    /// minus anything matched by the exclusion entries.
    pub fn new(
        root: impl Into<PathBuf>,
        include: &str,
        exclusions: &[String],
    ) -> Result<Self, LintError> {
        let root = root.into();
        let include = Glob::new(include)
            .map_err(|e| LintError::config(format!("Invalid include pattern '{}': {}", include, e)))?
            .compile_matcher();
        let matcher = PathMatcher::new(&root, exclusions);

        Ok(Self {
            root,
            include,
            matcher,
        })
    }
}

impl FileDiscovery for WalkDiscovery {
    fn discover(&self) -> Result<Vec<PathBuf>, LintError> {
        let mut files = Vec::new();

        for entry in WalkDir::new(&self.root).into_iter().filter_map(|e| e.ok()) {
            if !entry.file_type().is_file() {
                continue;
            }

            // Matching happens on root-relative paths; that is also the
            // form callers use as store keys.
            let Ok(relative) = entry.path().strip_prefix(&self.root) else {
                continue;
            };

            if !self.include.is_match(relative) {
                continue;
            }

            if self.matcher.is_excluded(relative) {
                continue;
            }

            files.push(relative.to_path_buf());
        }

        files.sort();

        info!("Discovered {} files to lint", files.len());
        Ok(files)
    }
}

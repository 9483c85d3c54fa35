//! Content loading.

use std::fs;
use std::path::{Path, PathBuf};

use jshawk_engine::SourcePayload;

use crate::LintError;

/// Converts raw source text into the engine's transport format.
///
/// Pure; separated from the filesystem read so higher layers can build
/// payloads directly.
pub fn to_payload(path: &Path, source: String) -> SourcePayload {
    SourcePayload::new(Some(path.to_string_lossy().into_owned()), source)
}

/// Reads a file and produces the engine payload.
///
/// A trait so the runner can be driven by fakes in tests; the production
/// implementation is `FsLoader`.
pub trait ContentLoader {
    /// Loads the root-relative `path`. Fails when the file cannot be read,
    /// which aborts the whole run.
    fn load(&self, path: &Path) -> Result<SourcePayload, LintError>;
}

/// Loads file contents from disk under a fixed root.
pub struct FsLoader {
    root: PathBuf,
}

impl FsLoader {
    /// Creates a loader rooted at `root`.
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }
}

impl ContentLoader for FsLoader {
    fn load(&self, path: &Path) -> Result<SourcePayload, LintError> {
        let full = self.root.join(path);
        let source = fs::read_to_string(&full)
            .map_err(|e| LintError::file(format!("Failed to read {}: {}", full.display(), e)))?;

        Ok(to_payload(path, source))
    }
}

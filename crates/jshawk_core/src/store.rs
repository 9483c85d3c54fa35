//! Diagnostic aggregation.

use std::path::{Path, PathBuf};

use jshawk_engine::Diagnostic;

/// Diagnostics accumulated during a single run, keyed by file path.
///
/// Insertion order is discovery order. Populated by the runner, read-only
/// afterwards; a new run builds a new store. A key with an empty list
/// means the file was checked and came back clean.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct DiagnosticStore {
    entries: Vec<(PathBuf, Vec<Diagnostic>)>,
}

impl DiagnosticStore {
    /// Creates an empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Records the diagnostics for a file, replacing any earlier entry
    /// for the same path.
    pub fn record(&mut self, path: impl Into<PathBuf>, diagnostics: Vec<Diagnostic>) {
        let path = path.into();
        if let Some(entry) = self.entries.iter_mut().find(|(p, _)| *p == path) {
            entry.1 = diagnostics;
        } else {
            self.entries.push((path, diagnostics));
        }
    }

    /// Returns the diagnostics recorded for a path, if the file was checked.
    pub fn diagnostics_for(&self, path: impl AsRef<Path>) -> Option<&[Diagnostic]> {
        let path = path.as_ref();
        self.entries
            .iter()
            .find(|(p, _)| p == path)
            .map(|(_, diagnostics)| diagnostics.as_slice())
    }

    /// True when the file was checked in this run.
    pub fn contains(&self, path: impl AsRef<Path>) -> bool {
        self.diagnostics_for(path).is_some()
    }

    /// True iff every checked file came back clean.
    pub fn is_clean(&self) -> bool {
        self.entries.iter().all(|(_, diagnostics)| diagnostics.is_empty())
    }

    /// Total number of diagnostics across all files.
    pub fn total_count(&self) -> usize {
        self.entries.iter().map(|(_, diagnostics)| diagnostics.len()).sum()
    }

    /// Number of checked files.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// True when no file was checked.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Iterates entries in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = (&Path, &[Diagnostic])> {
        self.entries
            .iter()
            .map(|(path, diagnostics)| (path.as_path(), diagnostics.as_slice()))
    }
}

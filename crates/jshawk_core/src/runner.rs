//! The lint run orchestrator.

use tracing::{debug, info};

use jshawk_engine::LintEngine;

use crate::file_finder::{FileDiscovery, WalkDiscovery};
use crate::loader::{ContentLoader, FsLoader};
use crate::store::DiagnosticStore;
use crate::{LintConfig, LintError};

/// Runs the pipeline: discovery, loading, engine invocation, aggregation.
///
/// One runner owns one run's `DiagnosticStore`; files are processed
/// strictly one at a time in discovery order. Any load or engine failure
/// aborts the run and discards the partial store. Linting is a pure
/// function of file content and configuration, so aborted runs are simply
/// re-run.
pub struct LintRunner {
    config: LintConfig,
    discovery: Box<dyn FileDiscovery>,
    loader: Box<dyn ContentLoader>,
    engine: Box<dyn LintEngine>,
}

impl LintRunner {
    /// Creates a runner with the default filesystem discovery and loader.
    ///
    /// Validates the configuration; a missing root fails here, before the
    /// run starts.
    pub fn new(config: LintConfig, engine: Box<dyn LintEngine>) -> Result<Self, LintError> {
        config.validate()?;

        let root = config.resolved_root();
        let discovery = WalkDiscovery::new(root.clone(), &config.include, &config.exclude)?;
        let loader = FsLoader::new(root);

        Ok(Self::with_parts(
            config,
            Box::new(discovery),
            Box::new(loader),
            engine,
        ))
    }

    /// Creates a runner from explicit parts. Tests substitute fake
    /// discovery, loader, or engine implementations here.
    pub fn with_parts(
        config: LintConfig,
        discovery: Box<dyn FileDiscovery>,
        loader: Box<dyn ContentLoader>,
        engine: Box<dyn LintEngine>,
    ) -> Self {
        Self {
            config,
            discovery,
            loader,
            engine,
        }
    }

    /// Lints every discovered, non-excluded file and returns the
    /// populated store.
    pub fn run(&mut self) -> Result<DiagnosticStore, LintError> {
        let files = self.discovery.discover()?;

        let mut store = DiagnosticStore::new();
        for path in files {
            debug!("Linting {}", path.display());

            let payload = self.loader.load(&path)?;
            let diagnostics =
                self.engine
                    .check_source(&payload, &self.config.options, &self.config.globals)?;

            // Recorded even when empty: the key proves the file was checked.
            store.record(path, diagnostics);
        }

        info!(
            "Checked {} files, found {} issues",
            store.len(),
            store.total_count()
        );
        Ok(store)
    }
}

//! The lint engine seam.

use crate::{Diagnostic, EngineError, SourcePayload};

/// The pre-existing rule-checking engine, invoked as an opaque dependency.
///
/// Implementations receive a payload wrapping raw source text together
/// with the configured style-rule options and global declarations, and
/// return zero or more diagnostics for that payload. Invocation errors are
/// propagated unchanged; linting is deterministic over the same inputs, so
/// callers never retry.
///
/// The trait is the injection point for tests: the runner accepts any
/// `LintEngine`, so a scripted fake can stand in for the WASM host.
pub trait LintEngine {
    /// Checks a single payload and returns the diagnostics it raises.
    fn check_source(
        &mut self,
        payload: &SourcePayload,
        options: &serde_json::Value,
        globals: &serde_json::Value,
    ) -> Result<Vec<Diagnostic>, EngineError>;
}

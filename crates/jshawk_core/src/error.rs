//! Pipeline error types.

use thiserror::Error;

use jshawk_engine::EngineError;

/// Errors that can occur during a lint run.
///
/// None of these are retried: linting is deterministic over fixed inputs,
/// so retrying without changing inputs reproduces the same error.
#[derive(Debug, Error)]
pub enum LintError {
    /// Configuration error. Surfaced before the run starts.
    #[error("Configuration error: {0}")]
    Config(String),

    /// File unreadable during content load. Aborts the run.
    #[error("File error: {0}")]
    File(String),

    /// The external engine rejected an invocation. Propagated unchanged.
    #[error("Engine error: {0}")]
    Engine(#[from] EngineError),

    /// I/O error.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

impl LintError {
    /// Creates a configuration error.
    pub fn config(message: impl Into<String>) -> Self {
        Self::Config(message.into())
    }

    /// Creates a file error.
    pub fn file(message: impl Into<String>) -> Self {
        Self::File(message.into())
    }
}

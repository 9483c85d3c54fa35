//! Wire types exchanged with the external engine.
//!
//! The engine consumes a JSON envelope wrapping the raw source text plus
//! the configured options and global declarations, and answers with a list
//! of diagnostics. Building the envelope is a pure transform so the layers
//! above can exercise it without touching the filesystem or the engine.

use serde::{Deserialize, Serialize};

use crate::Diagnostic;

/// Serialized form of a file's content, as expected by the engine.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SourcePayload {
    /// Root-relative path of the file, when known.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub path: Option<String>,

    /// Raw source text.
    pub source: String,
}

impl SourcePayload {
    /// Wraps raw source text into the engine's transport format.
    pub fn new(path: Option<String>, source: impl Into<String>) -> Self {
        Self {
            path,
            source: source.into(),
        }
    }
}

/// Request sent to the engine's `check_source` function.
#[derive(Debug, Serialize)]
pub struct CheckRequest<'a> {
    /// The payload under analysis.
    pub payload: &'a SourcePayload,
    /// Style-rule options, passed through verbatim.
    pub options: &'a serde_json::Value,
    /// Declared global symbols, passed through verbatim.
    pub globals: &'a serde_json::Value,
}

/// Response from the engine's `check_source` function.
#[derive(Debug, Deserialize)]
pub struct CheckResponse {
    /// Diagnostics reported for the payload.
    pub diagnostics: Vec<Diagnostic>,
}

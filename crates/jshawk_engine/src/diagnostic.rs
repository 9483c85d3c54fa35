//! Diagnostic types for lint results.

use serde::{Deserialize, Serialize};

/// Severity level for diagnostics.
///
/// The engine reports every issue as an error unless it says otherwise.
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize,
)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    /// Error - must be fixed.
    #[default]
    Error,
    /// Warning - should be reviewed.
    Warning,
    /// Info - informational message.
    Info,
}

/// A single reported rule violation: message plus source location.
///
/// The wire format accepts `reason` for the message field, which is what
/// JSHint-family engines emit.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct Diagnostic {
    /// The diagnostic message.
    #[serde(alias = "reason")]
    pub message: String,

    /// One-based line of the offending location.
    pub line: u32,

    /// One-based column of the offending location.
    pub character: u32,

    /// Severity level.
    #[serde(default)]
    pub severity: Severity,
}

impl Diagnostic {
    /// Creates a new diagnostic.
    pub fn new(message: impl Into<String>, line: u32, character: u32) -> Self {
        Self {
            message: message.into(),
            line,
            character,
            severity: Severity::Error,
        }
    }

    /// Sets the severity level.
    pub fn with_severity(mut self, severity: Severity) -> Self {
        self.severity = severity;
        self
    }
}

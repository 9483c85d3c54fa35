//! Engine error types.

use thiserror::Error;

/// Errors that can occur at the engine boundary.
#[derive(Debug, Error)]
pub enum EngineError {
    /// The engine module could not be loaded.
    #[error("Engine load error: {0}")]
    Load(String),

    /// The engine rejected an invocation.
    #[error("Engine call error: {0}")]
    Call(String),

    /// The engine produced a response we could not understand.
    #[error("Invalid engine response: {0}")]
    InvalidResponse(String),
}

impl EngineError {
    /// Creates a load error.
    pub fn load(message: impl Into<String>) -> Self {
        Self::Load(message.into())
    }

    /// Creates a call error.
    pub fn call(message: impl Into<String>) -> Self {
        Self::Call(message.into())
    }

    /// Creates an invalid-response error.
    pub fn invalid_response(message: impl Into<String>) -> Self {
        Self::InvalidResponse(message.into())
    }
}

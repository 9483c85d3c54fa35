//! # jshawk_engine
//!
//! External lint engine boundary for JSHawk.
//!
//! This crate provides:
//! - The `LintEngine` trait, the seam between the pipeline and the
//!   pre-existing rule-checking engine
//! - The `Diagnostic` data model returned by the engine
//! - The `SourcePayload` wire type submitted to the engine
//! - A WASM-hosted engine implementation (`WasmEngine`)
//!
//! The engine itself is an opaque dependency: a WASM module exporting a
//! `check_source` function. JSHawk never implements or interprets lint
//! rules; it only submits payloads and collects diagnostics.
//!
//! ## Example
//!
//! ```rust,ignore
//! use jshawk_engine::{LintEngine, WasmEngine};
//!
//! let mut engine = WasmEngine::from_file("jshint.wasm")?;
//! let diagnostics = engine.check_source(&payload, &options, &globals)?;
//! ```

mod diagnostic;
mod engine;
mod error;
mod payload;
mod wasm;

pub use diagnostic::{Diagnostic, Severity};
pub use engine::LintEngine;
pub use error::EngineError;
pub use payload::{CheckRequest, CheckResponse, SourcePayload};
pub use wasm::WasmEngine;

//! # jshawk_core
//!
//! Core pipeline for JSHawk.
//!
//! This crate provides:
//! - Configuration loading
//! - File discovery and exclusion filtering
//! - Content loading and payload serialization
//! - The `LintRunner` orchestrator and its `DiagnosticStore`
//!
//! The actual rule checking lives behind the `LintEngine` trait from
//! `jshawk_engine`; this crate only feeds it payloads and aggregates what
//! it reports.
//!
//! ## Example
//!
//! ```rust,ignore
//! use jshawk_core::{LintConfig, LintRunner};
//! use jshawk_engine::WasmEngine;
//!
//! let config = LintConfig::from_file(".jshawk.jsonc")?;
//! let engine = WasmEngine::from_file("jshint.wasm")?;
//! let mut runner = LintRunner::new(config, Box::new(engine))?;
//!
//! let store = runner.run()?;
//! for (path, diagnostics) in store.iter() {
//!     println!("{}: {} issues", path.display(), diagnostics.len());
//! }
//! ```

mod config;
mod error;
pub mod file_finder;
pub mod loader;
mod path_matcher;
mod runner;
mod store;

pub use config::LintConfig;
pub use error::LintError;
pub use file_finder::{FileDiscovery, WalkDiscovery};
pub use loader::{ContentLoader, FsLoader, to_payload};
pub use path_matcher::PathMatcher;
pub use runner::LintRunner;
pub use store::DiagnosticStore;

pub use jshawk_engine::{Diagnostic, LintEngine, Severity, SourcePayload};

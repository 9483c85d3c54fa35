//! Extism-based WASM host for the external lint engine.
//!
//! The engine ships as a WASM module exporting a `check_source` function.
//! Hosting it through Extism gives us wasmtime JIT execution plus memory
//! and timeout limits around the untrusted module.

use std::path::Path;

use extism::{Manifest, Plugin, Wasm};
use extism_manifest::MemoryOptions;
use tracing::{debug, info};

use crate::{CheckRequest, CheckResponse, Diagnostic, EngineError, LintEngine, SourcePayload};

/// Memory limit for the engine instance (128 MB = 2048 pages of 64KB).
const DEFAULT_MEMORY_MAX_PAGES: u32 = 2048;

/// Timeout for a single `check_source` invocation (5000 ms).
const DEFAULT_TIMEOUT_MS: u64 = 5000;

/// A lint engine hosted as a WASM module.
pub struct WasmEngine {
    /// The Extism plugin instance wrapping the engine module.
    plugin: Plugin,
}

impl WasmEngine {
    /// Loads the engine from a WASM file on disk.
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, EngineError> {
        let path = path.as_ref();
        info!("Loading lint engine from {}", path.display());

        let wasm = Wasm::file(path);
        let manifest = Self::configure_manifest(Manifest::new([wasm]));

        let plugin = Plugin::new(&manifest, [], true)
            .map_err(|e| EngineError::load(format!("Failed to load {}: {}", path.display(), e)))?;

        Ok(Self { plugin })
    }

    /// Loads the engine from in-memory WASM bytes.
    pub fn from_bytes(wasm_bytes: &[u8]) -> Result<Self, EngineError> {
        info!("Loading lint engine ({} bytes)", wasm_bytes.len());

        let wasm = Wasm::data(wasm_bytes.to_vec());
        let manifest = Self::configure_manifest(Manifest::new([wasm]));

        let plugin = Plugin::new(&manifest, [], true)
            .map_err(|e| EngineError::load(format!("Failed to load engine: {}", e)))?;

        Ok(Self { plugin })
    }

    /// Configures the manifest with execution limits.
    fn configure_manifest(mut manifest: Manifest) -> Manifest {
        manifest.timeout_ms = Some(DEFAULT_TIMEOUT_MS);
        manifest.memory = MemoryOptions {
            max_pages: Some(DEFAULT_MEMORY_MAX_PAGES),
            max_http_response_bytes: None,
            max_var_bytes: None,
        };
        manifest
    }
}

impl LintEngine for WasmEngine {
    fn check_source(
        &mut self,
        payload: &SourcePayload,
        options: &serde_json::Value,
        globals: &serde_json::Value,
    ) -> Result<Vec<Diagnostic>, EngineError> {
        let request = CheckRequest {
            payload,
            options,
            globals,
        };
        let request_json = serde_json::to_string(&request)
            .map_err(|e| EngineError::call(format!("Failed to serialize request: {}", e)))?;

        debug!(
            "Invoking check_source for {}",
            payload.path.as_deref().unwrap_or("<unnamed>")
        );

        let response_json: String = self
            .plugin
            .call("check_source", request_json)
            .map_err(|e| EngineError::call(format!("check_source failed: {}", e)))?;

        let response: CheckResponse = serde_json::from_str(&response_json)
            .map_err(|e| EngineError::invalid_response(e.to_string()))?;

        Ok(response.diagnostics)
    }
}

//! Lint run configuration.

use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::LintError;

fn default_root() -> PathBuf {
    PathBuf::from(".")
}

fn default_include() -> String {
    "**/*.js".to_string()
}

fn default_bag() -> serde_json::Value {
    serde_json::Value::Object(serde_json::Map::new())
}

/// Configuration for a lint run.
///
/// `options` and `globals` are opaque bags consumed verbatim by the
/// external engine; the pipeline never interprets them.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct LintConfig {
    /// Project root to walk.
    #[serde(default = "default_root")]
    pub root: PathBuf,

    /// Inclusion glob, relative to the root.
    #[serde(default = "default_include")]
    pub include: String,

    /// Excluded directories and glob patterns, relative to the root.
    #[serde(default)]
    pub exclude: Vec<String>,

    /// Style-rule options for the engine.
    #[serde(default = "default_bag")]
    pub options: serde_json::Value,

    /// Declared global symbols for the engine.
    #[serde(default = "default_bag")]
    pub globals: serde_json::Value,

    /// Path to the engine WASM module.
    #[serde(default)]
    pub engine: Option<PathBuf>,

    /// Directory containing the configuration file, used to resolve
    /// relative paths. Not part of the file format.
    #[serde(skip)]
    pub base_dir: Option<PathBuf>,
}

impl LintConfig {
    /// Config filenames probed by `discover`, in priority order.
    pub const CONFIG_FILES: [&'static str; 2] = [".jshawk.jsonc", ".jshawk.json"];

    /// Creates a configuration with defaults.
    pub fn new() -> Self {
        Self {
            root: default_root(),
            include: default_include(),
            exclude: Vec::new(),
            options: default_bag(),
            globals: default_bag(),
            engine: None,
            base_dir: None,
        }
    }

    /// Loads configuration from a file.
    ///
    /// Supports `.jshawk.jsonc` and `.jshawk.json`.
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, LintError> {
        let path = path.as_ref();
        let content = fs::read_to_string(path)
            .map_err(|e| LintError::config(format!("Failed to read config: {}", e)))?;

        let mut config = Self::from_json(&content)?;

        if let Some(parent) = path.parent() {
            config.base_dir = Some(parent.to_path_buf());
        }

        Ok(config)
    }

    /// Parses configuration from a JSON (with comments) string.
    pub fn from_json(json: &str) -> Result<Self, LintError> {
        let value = jsonc_parser::parse_to_serde_value(json, &Default::default())
            .map_err(|e| LintError::config(format!("Invalid JSON: {}", e)))?
            .unwrap_or(serde_json::Value::Object(serde_json::Map::new()));

        serde_json::from_value(value)
            .map_err(|e| LintError::config(format!("Invalid config: {}", e)))
    }

    /// Looks for a config file in the given directory.
    pub fn discover(dir: impl AsRef<Path>) -> Option<PathBuf> {
        let dir = dir.as_ref();
        Self::CONFIG_FILES
            .iter()
            .map(|name| dir.join(name))
            .find(|candidate| candidate.is_file())
    }

    /// The root with `base_dir` applied when the configured root is relative.
    pub fn resolved_root(&self) -> PathBuf {
        match &self.base_dir {
            Some(base) if self.root.is_relative() => base.join(&self.root),
            _ => self.root.clone(),
        }
    }

    /// The engine path with `base_dir` applied when relative.
    pub fn resolved_engine(&self) -> Option<PathBuf> {
        let engine = self.engine.as_ref()?;
        Some(match &self.base_dir {
            Some(base) if engine.is_relative() => base.join(engine),
            _ => engine.clone(),
        })
    }

    /// Checks the configuration before a run starts.
    pub fn validate(&self) -> Result<(), LintError> {
        let root = self.resolved_root();
        if !root.is_dir() {
            return Err(LintError::config(format!(
                "Root path does not exist: {}",
                root.display()
            )));
        }
        Ok(())
    }
}

impl Default for LintConfig {
    fn default() -> Self {
        Self::new()
    }
}

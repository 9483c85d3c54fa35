//! End-to-end pipeline tests over real directory trees.
//!
//! The engine is scripted: it flags unterminated statements and unbraced
//! conditional bodies, which is enough to drive the pipeline without real
//! rule logic. Discovery, exclusion, loading, and aggregation are all the
//! production implementations.

use std::path::Path;
use std::sync::{Arc, Mutex};

use pretty_assertions::assert_eq;
use tempfile::TempDir;

use jshawk_core::{Diagnostic, LintConfig, LintEngine, LintRunner, SourcePayload};
use jshawk_engine::EngineError;

const INVALID_SOURCE: &str = r#"var foo = "bar",
    baz = "qux",
    bat;

if (foo == baz) bat = "gorge"
"#;

const VALID_SOURCE: &str = r#"var foo = "bar",
    baz = "qux",
    bat;

if (foo == baz) {
  bat = "gorge";
}
"#;

/// Scripted stand-in for the external engine.
struct ScriptedEngine {
    /// Options and globals seen on the last invocation, for pass-through
    /// assertions.
    seen: Arc<Mutex<Option<(serde_json::Value, serde_json::Value)>>>,
}

impl ScriptedEngine {
    fn new() -> Self {
        Self {
            seen: Arc::new(Mutex::new(None)),
        }
    }

    fn with_sink(seen: Arc<Mutex<Option<(serde_json::Value, serde_json::Value)>>>) -> Self {
        Self { seen }
    }
}

impl LintEngine for ScriptedEngine {
    fn check_source(
        &mut self,
        payload: &SourcePayload,
        options: &serde_json::Value,
        globals: &serde_json::Value,
    ) -> Result<Vec<Diagnostic>, EngineError> {
        *self.seen.lock().unwrap() = Some((options.clone(), globals.clone()));

        let mut diagnostics = Vec::new();
        for (index, line) in payload.source.lines().enumerate() {
            let line_no = (index + 1) as u32;
            let trimmed = line.trim_end();
            if trimmed.is_empty() {
                continue;
            }
            if trimmed.contains("== ") && !trimmed.contains('{') {
                diagnostics.push(Diagnostic::new(
                    "Expected '{' and instead saw 'bat'.",
                    line_no,
                    17,
                ));
            }
            if !trimmed.ends_with(';')
                && !trimmed.ends_with('{')
                && !trimmed.ends_with('}')
                && !trimmed.ends_with(',')
            {
                diagnostics.push(Diagnostic::new(
                    "Missing semicolon.",
                    line_no,
                    trimmed.len() as u32,
                ));
            }
        }
        Ok(diagnostics)
    }
}

fn write_file(root: &Path, relative: &str, content: &str) {
    let path = root.join(relative);
    std::fs::create_dir_all(path.parent().unwrap()).unwrap();
    std::fs::write(path, content).unwrap();
}

fn project_config(dir: &TempDir) -> LintConfig {
    let mut config = LintConfig::new();
    config.root = dir.path().to_path_buf();
    config
}

fn run(config: LintConfig) -> jshawk_core::DiagnosticStore {
    let mut runner = LintRunner::new(config, Box::new(ScriptedEngine::new())).unwrap();
    runner.run().unwrap()
}

#[test]
fn excluded_directory_scenario() {
    // foo/bar/baz.js has 2 violations; the two i18n files sit under an
    // excluded directory and must never reach the engine.
    let dir = TempDir::new().unwrap();
    write_file(dir.path(), "foo/bar/baz.js", INVALID_SOURCE);
    write_file(dir.path(), "app/assets/javascripts/i18n/test.js", VALID_SOURCE);
    write_file(
        dir.path(),
        "app/assets/javascripts/i18n/js/test.js",
        VALID_SOURCE,
    );

    let mut config = project_config(&dir);
    config.exclude = vec!["app/assets/javascripts/i18n".to_string()];

    let store = run(config);

    assert_eq!(store.len(), 1);
    assert_eq!(store.diagnostics_for("foo/bar/baz.js").unwrap().len(), 2);
    assert!(!store.contains("app/assets/javascripts/i18n/test.js"));
    assert!(!store.contains("app/assets/javascripts/i18n/js/test.js"));
}

#[test]
fn excluded_glob_scenario() {
    // Same tree, but i18n is excluded by glob pattern rather than as a
    // real directory entry. `*` matches across separators here, so one
    // pattern covers the nested file as well.
    let dir = TempDir::new().unwrap();
    write_file(dir.path(), "foo/bar/baz.js", INVALID_SOURCE);
    write_file(dir.path(), "app/assets/javascripts/i18n/test.js", VALID_SOURCE);
    write_file(
        dir.path(),
        "app/assets/javascripts/i18n/js/test.js",
        VALID_SOURCE,
    );

    let mut config = project_config(&dir);
    config.exclude = vec!["app/assets/javascripts/i18n/*.js".to_string()];

    let store = run(config);

    assert_eq!(store.len(), 1);
    assert_eq!(store.diagnostics_for("foo/bar/baz.js").unwrap().len(), 2);
    assert!(!store.contains("app/assets/javascripts/i18n/test.js"));
    assert!(!store.contains("app/assets/javascripts/i18n/js/test.js"));
}

#[test]
fn sibling_directory_sharing_prefix_is_not_excluded() {
    let dir = TempDir::new().unwrap();
    write_file(dir.path(), "app/assets/javascripts/i18n/test.js", VALID_SOURCE);
    write_file(
        dir.path(),
        "app/assets/javascripts/i18n-extra/test.js",
        VALID_SOURCE,
    );

    let mut config = project_config(&dir);
    config.exclude = vec!["app/assets/javascripts/i18n".to_string()];

    let store = run(config);

    assert!(store.contains("app/assets/javascripts/i18n-extra/test.js"));
    assert!(!store.contains("app/assets/javascripts/i18n/test.js"));
}

#[test]
fn clean_file_is_recorded_with_empty_list() {
    let dir = TempDir::new().unwrap();
    write_file(dir.path(), "src/app.js", VALID_SOURCE);

    let store = run(project_config(&dir));

    assert_eq!(store.diagnostics_for("src/app.js").unwrap().len(), 0);
    assert!(store.is_clean());
}

#[test]
fn every_discovered_file_gets_a_store_key() {
    let dir = TempDir::new().unwrap();
    write_file(dir.path(), "a.js", VALID_SOURCE);
    write_file(dir.path(), "b/c.js", INVALID_SOURCE);
    write_file(dir.path(), "d/e/f.js", VALID_SOURCE);

    let store = run(project_config(&dir));

    assert_eq!(store.len(), 3);
    for key in ["a.js", "b/c.js", "d/e/f.js"] {
        assert!(store.contains(key), "missing key for {}", key);
    }
    assert_eq!(store.total_count(), 2);
}

#[test]
fn identical_runs_are_idempotent() {
    let dir = TempDir::new().unwrap();
    write_file(dir.path(), "foo/bar/baz.js", INVALID_SOURCE);
    write_file(dir.path(), "src/app.js", VALID_SOURCE);

    let first = run(project_config(&dir));
    let second = run(project_config(&dir));

    assert_eq!(first, second);
}

#[test]
fn default_include_only_picks_up_js_files() {
    let dir = TempDir::new().unwrap();
    write_file(dir.path(), "src/app.js", VALID_SOURCE);
    write_file(dir.path(), "src/readme.md", "# notes\n");
    write_file(dir.path(), "src/data.json", "{}\n");

    let store = run(project_config(&dir));

    assert_eq!(store.len(), 1);
    assert!(store.contains("src/app.js"));
}

#[test]
fn options_and_globals_pass_through_verbatim() {
    let dir = TempDir::new().unwrap();
    write_file(dir.path(), "src/app.js", VALID_SOURCE);

    let mut config = project_config(&dir);
    config.options = serde_json::json!({ "curly": true, "newcap": true });
    config.globals = serde_json::json!({ "jquery": true, "app": true });

    let sink = Arc::new(Mutex::new(None));
    let engine = ScriptedEngine::with_sink(Arc::clone(&sink));

    let mut runner = LintRunner::new(config, Box::new(engine)).unwrap();
    runner.run().unwrap();

    let (options, globals) = sink.lock().unwrap().take().unwrap();
    assert_eq!(options, serde_json::json!({ "curly": true, "newcap": true }));
    assert_eq!(globals, serde_json::json!({ "jquery": true, "app": true }));
}

//! JSHawk CLI
//!
//! Lightweight static-analysis wrapper for JavaScript projects.

use std::path::PathBuf;
use std::process::ExitCode;

use clap::{Parser, Subcommand};
use miette::{IntoDiagnostic, Result};
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

use jshawk_core::{DiagnosticStore, LintConfig, LintRunner};
use jshawk_engine::WasmEngine;

/// JSHawk - lightweight static-analysis wrapper for JavaScript
#[derive(Parser)]
#[command(name = "jshawk")]
#[command(author, version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Configuration file path
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,

    /// Enable verbose output
    #[arg(short, long, global = true)]
    verbose: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Lint the configured project root
    Lint {
        /// Output format (text, json)
        #[arg(short, long, default_value = "text")]
        format: String,
    },

    /// Initialize configuration
    Init {
        /// Force overwrite existing config
        #[arg(long)]
        force: bool,
    },
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    // Initialize logging
    let filter = if cli.verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::new("info")
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();

    match run(cli) {
        Ok(has_diagnostics) => {
            if has_diagnostics {
                ExitCode::from(1)
            } else {
                ExitCode::SUCCESS
            }
        }
        Err(e) => {
            error!("{:?}", e);
            ExitCode::from(2)
        }
    }
}

fn run(cli: Cli) -> Result<bool> {
    match &cli.command {
        Commands::Lint { format } => run_lint(&cli, format),
        Commands::Init { force } => run_init(*force).map(|_| false),
    }
}

fn run_lint(cli: &Cli, format: &str) -> Result<bool> {
    // Load configuration
    let config = if let Some(ref path) = cli.config {
        LintConfig::from_file(path).into_diagnostic()?
    } else {
        find_config()?
    };

    let engine_path = config.resolved_engine().ok_or_else(|| {
        miette::miette!("No lint engine configured. Set \"engine\" in your config file.")
    })?;

    let engine = WasmEngine::from_file(&engine_path).into_diagnostic()?;
    let mut runner = LintRunner::new(config, Box::new(engine)).into_diagnostic()?;

    let store = runner.run().into_diagnostic()?;

    output_store(&store, format)?;
    Ok(!store.is_clean())
}

fn find_config() -> Result<LintConfig> {
    if let Some(path) = LintConfig::discover(".") {
        info!("Using config: {}", path.display());
        return LintConfig::from_file(&path).into_diagnostic();
    }

    // Default config still needs an engine; run_lint reports that.
    info!("No config file found, using defaults");
    Ok(LintConfig::new())
}

fn output_store(store: &DiagnosticStore, format: &str) -> Result<()> {
    match format {
        "json" => {
            let output: Vec<_> = store
                .iter()
                .map(|(path, diagnostics)| {
                    serde_json::json!({
                        "path": path.display().to_string(),
                        "diagnostics": diagnostics,
                    })
                })
                .collect();
            println!(
                "{}",
                serde_json::to_string_pretty(&output).into_diagnostic()?
            );
        }
        _ => {
            // Text format: diagnostics grouped by file
            for (path, diagnostics) in store.iter() {
                if diagnostics.is_empty() {
                    continue;
                }

                println!("\n{}:", path.display());
                for diag in diagnostics {
                    println!("  {}:{} {}", diag.line, diag.character, diag.message);
                }
            }

            println!();
            println!(
                "Checked {} files, found {} issues",
                store.len(),
                store.total_count()
            );
        }
    }

    Ok(())
}

fn run_init(force: bool) -> Result<()> {
    let config_path = PathBuf::from(LintConfig::CONFIG_FILES[0]);

    let default_config = r#"{
  // Project root to walk; files are matched by the include glob below.
  "root": ".",
  "include": "**/*.js",
  "exclude": [],
  // Passed verbatim to the lint engine.
  "options": {},
  "globals": {},
  // Path to the engine WASM module.
  "engine": "jshint.wasm"
}
"#;

    if config_path.exists() && !force {
        return Err(miette::miette!(
            "Config file already exists. Use --force to overwrite."
        ));
    }

    std::fs::write(&config_path, default_config).into_diagnostic()?;
    info!("Created {}", config_path.display());
    Ok(())
}

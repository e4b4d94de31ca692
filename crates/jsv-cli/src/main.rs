//! # jsv CLI entry point
//!
//! Parses command-line arguments, runs the schema pipeline, and maps the
//! outcome to an exit code: 0 when the instance conforms, 1 when the schema
//! or instance is rejected, 2 on operational errors such as unreadable
//! files.

use std::path::PathBuf;
use std::process::ExitCode;

use anyhow::Context as _;
use clap::Parser;
use tracing_subscriber::EnvFilter;

use jsv_schema::{parse_schema_from_str, resolve_refs, validate_str, Context};

/// jsv — JSON Schema (2020-12) validator
///
/// Validates a JSON instance document against a JSON Schema. Prints the
/// failing constraint kind when validation fails.
#[derive(Parser, Debug)]
#[command(name = "jsv", version, about, long_about = None)]
struct Cli {
    /// Path to the instance JSON file to validate.
    #[arg(value_name = "INSTANCE")]
    instance: PathBuf,

    /// Path to the schema JSON file.
    #[arg(long, value_name = "PATH")]
    schema: PathBuf,

    /// Enable verbose output. Repeat for more verbosity (-v, -vv, -vvv).
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    // Initialize tracing based on verbosity level.
    let filter = match cli.verbose {
        0 => EnvFilter::new("warn"),
        1 => EnvFilter::new("info"),
        2 => EnvFilter::new("debug"),
        _ => EnvFilter::new("trace"),
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .init();

    match run(&cli) {
        Ok(code) => ExitCode::from(code),
        Err(e) => {
            tracing::error!("{e:#}");
            ExitCode::from(2)
        }
    }
}

/// Execute the pipeline. Returns the process exit code for non-operational
/// outcomes; operational failures bubble up as errors.
fn run(cli: &Cli) -> anyhow::Result<u8> {
    let schema_text = std::fs::read_to_string(&cli.schema)
        .with_context(|| format!("failed to read schema {}", cli.schema.display()))?;
    let instance_text = std::fs::read_to_string(&cli.instance)
        .with_context(|| format!("failed to read instance {}", cli.instance.display()))?;

    let mut ctx = Context::new();
    let root = match parse_schema_from_str(&schema_text, &mut ctx) {
        Ok(idx) => idx,
        Err(e) => {
            println!("FAIL: {} — {e}", cli.schema.display());
            return Ok(1);
        }
    };
    ctx.set_root(root);

    if let Err(e) = resolve_refs(root, &mut ctx) {
        println!("FAIL: {} — {e}", cli.schema.display());
        return Ok(1);
    }

    tracing::debug!(schemas = ctx.len(), "schema pool ready");

    match validate_str(&instance_text, root, &ctx) {
        Ok(()) => {
            println!("OK: {}", cli.instance.display());
            Ok(0)
        }
        Err(e) => {
            println!("FAIL: {} — {e}", cli.instance.display());
            Ok(1)
        }
    }
}

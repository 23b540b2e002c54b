//! json-accessors: Generate typed accessors from a sample JSON document
//!
//! Usage:
//!   # Emit Rust accessor functions for a sample
//!   json-accessors generate sample.json > accessors.rs
//!
//!   # Dump the accessor specs as JSON
//!   json-accessors generate sample.json --emit specs
//!
//!   # Evaluate every accessor of a sample against another document
//!   json-accessors eval sample.json live.json --collectors

// Use MiMalloc allocator for better performance
#[global_allocator]
static GLOBAL: mimalloc::MiMalloc = mimalloc::MiMalloc;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand, ValueEnum};
use json_accessors::{emit_rust, AccessorSet, GeneratorConfig, JsonCtx};
use serde_json::{json, Map, Value};
use std::fs::File;
use std::io::BufReader;
use std::path::PathBuf;
use tracing::debug;

#[derive(Parser, Debug)]
#[command(name = "json-accessors")]
#[command(about = "Generate typed accessors from a sample JSON document", long_about = None)]
struct Args {
    #[command(subcommand)]
    command: Command,

    /// Log generation details to stderr
    #[arg(short, long, global = true)]
    verbose: bool,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Print the accessors inferred from a sample document
    Generate {
        /// Sample JSON file
        #[arg(value_name = "SAMPLE")]
        sample: PathBuf,

        /// Output form
        #[arg(long, value_enum, default_value_t = Emit::Rust)]
        emit: Emit,

        #[command(flatten)]
        options: GenerateOptions,

        /// Compact output (no pretty-printing) for --emit specs
        #[arg(long)]
        compact: bool,
    },

    /// Evaluate every accessor of SAMPLE against DOCUMENT
    Eval {
        /// Sample JSON file the accessors are inferred from
        #[arg(value_name = "SAMPLE")]
        sample: PathBuf,

        /// Document to evaluate the accessors against
        #[arg(value_name = "DOCUMENT")]
        document: PathBuf,

        #[command(flatten)]
        options: GenerateOptions,
    },
}

#[derive(clap::Args, Debug)]
struct GenerateOptions {
    /// Also generate collector accessors for arrays of objects
    #[arg(long)]
    collectors: bool,

    /// Separator used when joining path segments into identifiers (default: "_")
    #[arg(long)]
    separator: Option<String>,

    /// Crate path emitted code imports the runtime from (default: "json_accessors")
    #[arg(long)]
    runtime_crate: Option<String>,
}

#[derive(ValueEnum, Clone, Copy, Debug, PartialEq, Eq)]
enum Emit {
    Rust,
    Specs,
}

impl GenerateOptions {
    fn to_config(&self) -> GeneratorConfig {
        let mut config = GeneratorConfig::default().with_collectors(self.collectors);
        if let Some(sep) = &self.separator {
            config.separator = sep.clone();
        }
        if let Some(krate) = &self.runtime_crate {
            config.runtime_crate = krate.clone();
        }
        config
    }
}

fn main() -> Result<()> {
    let args = Args::parse();

    let level = if args.verbose { "debug" } else { "warn" };
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(level)),
        )
        .init();

    match args.command {
        Command::Generate { sample, emit, options, compact } => {
            generate(sample, emit, &options.to_config(), compact)
        }
        Command::Eval { sample, document, options } => eval(sample, document, &options.to_config()),
    }
}

fn generate(sample: PathBuf, emit: Emit, config: &GeneratorConfig, compact: bool) -> Result<()> {
    let set = AccessorSet::from_file(&sample, config)
        .with_context(|| format!("Failed to generate accessors from {}", sample.display()))?;

    let output = match emit {
        Emit::Rust => emit_rust(&set, config).context("Failed to emit Rust source")?,
        Emit::Specs if compact => serde_json::to_string(set.specs())?,
        Emit::Specs => serde_json::to_string_pretty(set.specs())?,
    };

    println!("{}", output);

    Ok(())
}

fn eval(sample: PathBuf, document: PathBuf, config: &GeneratorConfig) -> Result<()> {
    let set = AccessorSet::from_file(&sample, config)
        .with_context(|| format!("Failed to generate accessors from {}", sample.display()))?;

    let file = File::open(&document)
        .with_context(|| format!("Failed to open document {}", document.display()))?;
    let ctx = JsonCtx::from_reader(BufReader::new(file))
        .with_context(|| format!("Failed to parse document {}", document.display()))?;

    let mut results = Map::new();
    for (identifier, result) in set.evaluate_all(&ctx) {
        let value = match result {
            Ok(value) => serde_json::to_value(value)?,
            Err(err) => {
                debug!(identifier, error = %err, "accessor failed");
                json!({ "error": err.to_string() })
            }
        };
        results.insert(identifier.to_string(), value);
    }

    println!("{}", serde_json::to_string_pretty(&Value::Object(results))?);

    Ok(())
}

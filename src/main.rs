//! Command-line interface for jsonl-harness
//!
//! # Usage Examples
//!
//! ## Generate
//! ```bash
//! # 100 records that all carry user.id == 42, written to stdout
//! jsonl-harness generate --lines 100 --path user.id --type number --value 42 \
//!   --match-rate 1.0 --missing-rate 0.0
//!
//! # Edge-case corpus: malformed and oversized lines, CRLF, no final newline
//! jsonl-harness generate --out data/edge.jsonl --lines 1000 --path a \
//!   --malformed-rate 0.05 --oversize-rate 0.01 --max-line-bytes 4096 \
//!   --crlf-rate 0.5 --no-final-newline
//! ```
//!
//! ## Bench
//! ```bash
//! jsonl-harness bench --file data/edge.jsonl --path a --value b --runs 5
//! ```
//!
//! ## Exit Codes
//! - `0`: success
//! - `1`: I/O or other runtime failure
//! - `2`: invalid arguments or configuration
//! - any other: exit code of a failing matcher run during `bench`

use clap::{CommandFactory, Parser, Subcommand};
use corpus_generator::ConfigError;
use corpus_populate_jsonl::GenerateArgs;
use jsonl_harness::{run_bench, run_generate};
use matcher_bench::{BenchArgs, BenchError};

#[derive(Parser)]
#[command(name = "jsonl-harness")]
#[command(about = "Generate JSONL corpora and benchmark line-oriented JSON matchers")]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Generate a deterministic JSONL corpus with controlled faults
    Generate(GenerateArgs),

    /// Time repeated matcher runs over a JSONL file
    Bench(BenchArgs),
}

fn main() {
    if let Err(e) = run() {
        if let Some(config_error) = e.downcast_ref::<ConfigError>() {
            Cli::command()
                .error(clap::error::ErrorKind::ValueValidation, config_error)
                .exit();
        }
        eprintln!("Error: {e:#}");
        let code = e
            .downcast_ref::<BenchError>()
            .and_then(BenchError::matcher_exit_code)
            .unwrap_or(1);
        std::process::exit(code);
    }
}

fn run() -> anyhow::Result<()> {
    // Logs go to stderr so `--out -` keeps stdout a clean corpus
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Generate(args) => {
            run_generate(&args)?;
        }
        Commands::Bench(args) => {
            run_bench(&args)?;
        }
    }
    Ok(())
}

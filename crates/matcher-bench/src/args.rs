//! CLI argument definitions for the benchmark runner.

use crate::command::{MatcherCommand, DEFAULT_MATCHER};
use crate::runner::RunPlan;
use clap::Args;
use corpus_generator::ValueType;
use std::path::PathBuf;

/// Arguments of the `bench` command.
#[derive(Args, Clone, Debug)]
pub struct BenchArgs {
    /// Path to the matcher executable
    #[arg(long, default_value = DEFAULT_MATCHER, env = "JSONL_BENCH_MATCHER")]
    pub matcher: PathBuf,

    /// Path to the JSONL file
    #[arg(long, env = "JSONL_BENCH_FILE")]
    pub file: PathBuf,

    /// Dot path, e.g. a.b.c (passed to the matcher as given)
    #[arg(long, allow_hyphen_values = true)]
    pub path: String,

    /// Type of the target value
    #[arg(long = "type", value_enum, default_value_t = ValueType::String)]
    pub value_type: ValueType,

    /// Value text (ignored for --type null)
    #[arg(long, default_value = "", allow_hyphen_values = true)]
    pub value: String,

    /// Pass --strict to the matcher
    #[arg(long)]
    pub strict: bool,

    /// Pass --threads to the matcher
    #[arg(long, default_value_t = 1, value_parser = clap::value_parser!(u64).range(1..))]
    pub threads: u64,

    /// Warmup runs
    #[arg(long, default_value_t = 1, env = "JSONL_BENCH_WARMUPS")]
    pub warmups: u64,

    /// Measured runs
    #[arg(
        long,
        default_value_t = 5,
        value_parser = clap::value_parser!(u64).range(1..),
        env = "JSONL_BENCH_RUNS"
    )]
    pub runs: u64,

    /// Optional JSON summary output path
    #[arg(long)]
    pub json_out: Option<PathBuf>,
}

impl BenchArgs {
    pub fn command(&self) -> MatcherCommand {
        MatcherCommand::new(
            self.matcher.clone(),
            self.file.clone(),
            self.path.clone(),
            self.value_type,
            self.value.clone(),
        )
        .with_strict(self.strict)
        .with_threads(self.threads)
    }

    pub fn plan(&self) -> RunPlan {
        RunPlan {
            warmups: self.warmups,
            runs: self.runs,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::Parser;

    #[derive(Parser)]
    struct TestCli {
        #[command(flatten)]
        args: BenchArgs,
    }

    fn parse(argv: &[&str]) -> Result<BenchArgs, clap::Error> {
        let mut full = vec!["bench"];
        full.extend_from_slice(argv);
        TestCli::try_parse_from(full).map(|cli| cli.args)
    }

    #[test]
    fn test_defaults() {
        let args = parse(&["--file", "data.jsonl", "--path", "a.b"]).unwrap();

        assert_eq!(args.matcher, PathBuf::from("./build/debug/bin/jlq"));
        assert_eq!(args.plan(), RunPlan { warmups: 1, runs: 5 });
        assert_eq!(args.threads, 1);
        assert!(!args.strict);
        assert!(args.json_out.is_none());
    }

    #[test]
    fn test_command_from_args() {
        let args = parse(&[
            "--matcher",
            "/opt/jlq",
            "--file",
            "data.jsonl",
            "--path",
            "user.id",
            "--type",
            "number",
            "--value",
            "42",
            "--threads",
            "4",
            "--strict",
        ])
        .unwrap();

        assert_eq!(
            args.command().display(),
            "/opt/jlq data.jsonl --path user.id --type number --value 42 --threads 4 --strict"
        );
    }

    #[test]
    fn test_path_is_not_validated() {
        let args = parse(&["--file", "f", "--path", ".a..b"]).unwrap();
        assert_eq!(args.command().path, ".a..b");
    }

    #[test]
    fn test_rejects_invalid_counts() {
        assert!(parse(&["--file", "f", "--path", "a", "--runs", "0"]).is_err());
        assert!(parse(&["--file", "f", "--path", "a", "--threads", "0"]).is_err());
        assert!(parse(&["--file", "f", "--path", "a", "--warmups", "-1"]).is_err());
        assert!(parse(&["--file", "f", "--path", "a", "--warmups", "0"]).is_ok());
    }
}

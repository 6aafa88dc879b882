//! Bench command handler.

use anyhow::Context;
use matcher_bench::{BenchArgs, BenchReport, BenchRunner, ProcessExecutor};

/// Run the bench command and print the report to stdout.
///
/// A failing matcher run surfaces as `BenchError::MatcherFailed` so the
/// caller can exit with the matcher's own code.
pub fn run_bench(args: &BenchArgs) -> anyhow::Result<BenchReport> {
    let mut runner = BenchRunner::new(ProcessExecutor, args.command(), args.plan());
    let report = runner.benchmark(&args.file)?;

    println!("{}", report.summary());

    if let Some(json_out) = &args.json_out {
        report
            .write_json(json_out)
            .with_context(|| format!("Failed to write JSON summary to {}", json_out.display()))?;
        tracing::info!("Wrote JSON summary to {}", json_out.display());
    }
    Ok(report)
}

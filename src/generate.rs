//! Generate command handler.

use anyhow::Context;
use corpus_generator::GeneratorConfig;
use corpus_populate_jsonl::{GenerateArgs, JsonlPopulator, PopulateMetrics};

/// Run the generate command.
///
/// Configuration errors are returned unwrapped so the caller can report them
/// as usage errors; everything else carries context.
pub fn run_generate(args: &GenerateArgs) -> anyhow::Result<PopulateMetrics> {
    let config = GeneratorConfig::try_from(args)?;
    tracing::info!(
        "Generating {} lines (seed={}, path={}, type={})",
        config.lines,
        config.seed,
        config.path,
        config.value_type
    );
    tracing::debug!("Rates: {:?}", config.rates);

    let mut populator = JsonlPopulator::new(config)?;
    let metrics = populator
        .populate_target(&args.out)
        .with_context(|| format!("Failed to write corpus to {}", args.out))?;

    tracing::info!(
        "Wrote {} lines ({} bytes) to {}: {}",
        metrics.lines_written,
        metrics.bytes_written,
        args.out,
        metrics.outcomes
    );
    Ok(metrics)
}

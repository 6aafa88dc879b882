//! JSONL corpus populator.

use crate::args::OutputTarget;
use crate::emitter::LineEmitter;
use crate::error::JsonlPopulatorError;
use corpus_generator::{CorpusGenerator, GeneratorConfig, LineOutcome};
use std::fmt;
use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::path::Path;
use std::time::{Duration, Instant};
use tracing::{debug, info};

/// Default buffer size for JSONL writing.
pub const DEFAULT_BUFFER_SIZE: usize = 64 * 1024;

/// Lines between progress log records.
const PROGRESS_INTERVAL: u64 = 10_000;

/// Number of lines generated per outcome category.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct OutcomeCounts {
    pub empty: u64,
    pub oversized: u64,
    pub malformed: u64,
    pub matched: u64,
    pub missing: u64,
    pub mismatched: u64,
}

impl OutcomeCounts {
    pub fn record(&mut self, outcome: LineOutcome) {
        *self.slot(outcome) += 1;
    }

    pub fn get(&self, outcome: LineOutcome) -> u64 {
        match outcome {
            LineOutcome::Empty => self.empty,
            LineOutcome::Oversized => self.oversized,
            LineOutcome::Malformed => self.malformed,
            LineOutcome::Match => self.matched,
            LineOutcome::Missing => self.missing,
            LineOutcome::Mismatch => self.mismatched,
        }
    }

    fn slot(&mut self, outcome: LineOutcome) -> &mut u64 {
        match outcome {
            LineOutcome::Empty => &mut self.empty,
            LineOutcome::Oversized => &mut self.oversized,
            LineOutcome::Malformed => &mut self.malformed,
            LineOutcome::Match => &mut self.matched,
            LineOutcome::Missing => &mut self.missing,
            LineOutcome::Mismatch => &mut self.mismatched,
        }
    }
}

impl fmt::Display for OutcomeCounts {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, outcome) in LineOutcome::ALL.into_iter().enumerate() {
            if i > 0 {
                f.write_str(", ")?;
            }
            write!(f, "{} {}", self.get(outcome), outcome)?;
        }
        Ok(())
    }
}

/// Metrics from a populate operation.
#[derive(Debug, Clone, Default)]
pub struct PopulateMetrics {
    /// Number of lines written.
    pub lines_written: u64,
    /// Number of bytes written, terminators included.
    pub bytes_written: u64,
    /// Lines per outcome category.
    pub outcomes: OutcomeCounts,
    /// Total time taken.
    pub total_duration: Duration,
    /// Time spent generating lines.
    pub generation_duration: Duration,
    /// Time spent writing lines.
    pub write_duration: Duration,
}

impl PopulateMetrics {
    /// Calculate lines per second.
    pub fn lines_per_second(&self) -> f64 {
        if self.total_duration.as_secs_f64() > 0.0 {
            self.lines_written as f64 / self.total_duration.as_secs_f64()
        } else {
            0.0
        }
    }

    /// Calculate bytes per second.
    pub fn bytes_per_second(&self) -> f64 {
        if self.total_duration.as_secs_f64() > 0.0 {
            self.bytes_written as f64 / self.total_duration.as_secs_f64()
        } else {
            0.0
        }
    }
}

/// Drives a [`CorpusGenerator`] into an output stream.
pub struct JsonlPopulator {
    generator: CorpusGenerator,
}

impl JsonlPopulator {
    /// Create a populator, validating `config`.
    ///
    /// # Example
    ///
    /// ```ignore
    /// let mut populator = JsonlPopulator::new(config)?;
    /// let metrics = populator.populate("corpus.jsonl")?;
    /// ```
    pub fn new(config: GeneratorConfig) -> Result<Self, JsonlPopulatorError> {
        Ok(Self {
            generator: CorpusGenerator::new(config)?,
        })
    }

    pub fn config(&self) -> &GeneratorConfig {
        self.generator.config()
    }

    /// Write the corpus to a file or stdout.
    pub fn populate_target(
        &mut self,
        target: &OutputTarget,
    ) -> Result<PopulateMetrics, JsonlPopulatorError> {
        match target {
            OutputTarget::Stdout => {
                let stdout = io::stdout();
                let writer = BufWriter::with_capacity(DEFAULT_BUFFER_SIZE, stdout.lock());
                self.populate_to_writer(writer)
            }
            OutputTarget::File(path) => self.populate(path),
        }
    }

    /// Write the corpus to `output_path`, creating parent directories.
    pub fn populate<P: AsRef<Path>>(
        &mut self,
        output_path: P,
    ) -> Result<PopulateMetrics, JsonlPopulatorError> {
        let output_path = output_path.as_ref();
        if let Some(parent) = output_path.parent() {
            if !parent.as_os_str().is_empty() {
                std::fs::create_dir_all(parent)?;
            }
        }

        info!(
            "Generating JSONL file '{}' with {} lines",
            output_path.display(),
            self.generator.remaining()
        );
        let file = File::create(output_path)?;
        let writer = BufWriter::with_capacity(DEFAULT_BUFFER_SIZE, file);
        self.populate_to_writer(writer)
    }

    /// Write every remaining line to `writer`, then flush it.
    ///
    /// Bytes written before an I/O error stay in the stream.
    pub fn populate_to_writer<W: Write>(
        &mut self,
        writer: W,
    ) -> Result<PopulateMetrics, JsonlPopulatorError> {
        let start_time = Instant::now();
        let mut metrics = PopulateMetrics::default();
        let mut emitter = LineEmitter::new(writer, self.generator.config().final_newline);

        let mut generation_time = Duration::ZERO;
        let mut write_time = Duration::ZERO;

        loop {
            let gen_start = Instant::now();
            let Some(line) = self.generator.next_line() else {
                break;
            };
            generation_time += gen_start.elapsed();

            let write_start = Instant::now();
            emitter.emit(&line)?;
            write_time += write_start.elapsed();

            metrics.outcomes.record(line.outcome);
            metrics.lines_written += 1;

            if metrics.lines_written % PROGRESS_INTERVAL == 0 {
                debug!("Written {} lines", metrics.lines_written);
            }
        }

        metrics.bytes_written = emitter.bytes_written();
        emitter.finish()?;

        metrics.total_duration = start_time.elapsed();
        metrics.generation_duration = generation_time;
        metrics.write_duration = write_time;

        info!(
            "JSONL generation complete: {} lines, {} bytes in {:?} ({:.2} lines/sec)",
            metrics.lines_written,
            metrics.bytes_written,
            metrics.total_duration,
            metrics.lines_per_second()
        );
        debug!(
            "Generation took {:?}, writing took {:?} ({:.0} bytes/sec)",
            metrics.generation_duration,
            metrics.write_duration,
            metrics.bytes_per_second()
        );

        Ok(metrics)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use corpus_generator::{FaultRates, PathSpec, ValueType};
    use serde_json::Value;
    use tempfile::TempDir;

    fn no_faults() -> FaultRates {
        FaultRates {
            match_rate: 0.0,
            missing_rate: 0.0,
            malformed_rate: 0.0,
            empty_rate: 0.0,
            crlf_rate: 0.0,
            oversize_rate: 0.0,
        }
    }

    fn test_config(lines: u64) -> GeneratorConfig {
        GeneratorConfig::new(lines, PathSpec::parse("a.b").unwrap(), ValueType::String, "x")
            .with_seed(42)
    }

    fn render(config: GeneratorConfig) -> Vec<u8> {
        let mut populator = JsonlPopulator::new(config).unwrap();
        let mut out = Vec::new();
        populator.populate_to_writer(&mut out).unwrap();
        out
    }

    /// Split output into lines, keeping terminators.
    fn split_terminated(out: &[u8]) -> Vec<&[u8]> {
        out.split_inclusive(|b| *b == b'\n').collect()
    }

    #[test]
    fn test_metrics() {
        let metrics = PopulateMetrics {
            lines_written: 1000,
            bytes_written: 100000,
            total_duration: Duration::from_secs(10),
            ..PopulateMetrics::default()
        };

        assert_eq!(metrics.lines_per_second(), 100.0);
        assert_eq!(metrics.bytes_per_second(), 10000.0);
        assert_eq!(PopulateMetrics::default().lines_per_second(), 0.0);
    }

    #[test]
    fn test_outcome_counts() {
        let mut counts = OutcomeCounts::default();
        counts.record(LineOutcome::Match);
        counts.record(LineOutcome::Match);
        counts.record(LineOutcome::Empty);

        assert_eq!(counts.get(LineOutcome::Match), 2);
        assert_eq!(counts.get(LineOutcome::Empty), 1);
        assert_eq!(
            counts.to_string(),
            "2 match, 0 missing, 0 mismatch, 1 empty, 0 oversized, 0 malformed"
        );
    }

    #[test]
    fn test_populate_jsonl() {
        let temp_dir = TempDir::new().unwrap();
        let output_path = temp_dir.path().join("nested").join("test.jsonl");
        let mut populator =
            JsonlPopulator::new(test_config(10).with_rates(FaultRates::all_match())).unwrap();

        let metrics = populator.populate(&output_path).unwrap();

        assert_eq!(metrics.lines_written, 10);
        assert_eq!(metrics.outcomes.matched, 10);
        let content = std::fs::read_to_string(&output_path).unwrap();
        assert_eq!(metrics.bytes_written, content.len() as u64);

        let lines: Vec<&str> = content.lines().collect();
        assert_eq!(lines.len(), 10);
        for (i, line) in lines.into_iter().enumerate() {
            let json: Value = serde_json::from_str(line).unwrap();
            assert_eq!(json["id"], i as u64);
            assert_eq!(json["a"]["b"], "x");
        }
    }

    #[test]
    fn test_deterministic_generation() {
        let config = test_config(300).with_rates(FaultRates {
            empty_rate: 0.05,
            crlf_rate: 0.5,
            malformed_rate: 0.05,
            oversize_rate: 0.02,
            ..FaultRates::default()
        });
        let config = config.with_max_line_bytes(128).with_pad_bytes(100);

        assert_eq!(render(config.clone()), render(config));
    }

    #[test]
    fn test_line_count_with_faults() {
        let config = test_config(100)
            .with_rates(FaultRates {
                empty_rate: 0.3,
                malformed_rate: 0.3,
                ..FaultRates::default()
            })
            .with_max_line_bytes(16);

        let out = render(config);

        assert_eq!(split_terminated(&out).len(), 100);
        assert!(out.ends_with(b"\n"));
    }

    #[test]
    fn test_crlf_rate_one() {
        let config = test_config(50).with_rates(FaultRates {
            crlf_rate: 1.0,
            ..FaultRates::all_match()
        });

        let out = render(config);
        let lines = split_terminated(&out);

        assert_eq!(lines.len(), 50);
        for line in lines {
            assert!(line.ends_with(b"\r\n"));
        }
    }

    #[test]
    fn test_final_newline_suppressed() {
        let config = test_config(20)
            .with_rates(FaultRates {
                crlf_rate: 0.5,
                ..FaultRates::all_match()
            })
            .with_final_newline(false);

        let out = render(config);
        let lines = split_terminated(&out);

        assert_eq!(lines.len(), 20);
        let (last, preceding) = lines.split_last().unwrap();
        assert!(!last.ends_with(b"\n"));
        assert!(!last.ends_with(b"\r"));
        for line in preceding {
            assert!(line.ends_with(b"\n"));
        }
    }

    #[test]
    fn test_malformed_lines() {
        let config = test_config(10).with_rates(FaultRates {
            malformed_rate: 1.0,
            ..no_faults()
        });

        let out = String::from_utf8(render(config)).unwrap();

        for line in out.lines() {
            assert_eq!(line, r#"{"a": 1"#);
        }
        assert_eq!(out.lines().count(), 10);
    }

    #[test]
    fn test_oversized_lines() {
        let config = test_config(4)
            .with_rates(FaultRates {
                oversize_rate: 1.0,
                ..no_faults()
            })
            .with_max_line_bytes(1000);

        let out = String::from_utf8(render(config)).unwrap();

        for line in out.lines() {
            assert!(line.len() > 1000);
            assert!(line.starts_with('{'));
            assert!(serde_json::from_str::<Value>(line).is_err());
        }
    }

    #[test]
    fn test_padding_floor() {
        let config = test_config(30)
            .with_rates(FaultRates {
                malformed_rate: 0.0,
                ..FaultRates::default()
            })
            .with_pad_bytes(512);

        let out = String::from_utf8(render(config)).unwrap();

        for line in out.lines() {
            assert!(line.len() >= 512 - 32, "line too short: {}", line.len());
            let json: Value = serde_json::from_str(line).unwrap();
            assert!(json["pad"].as_str().unwrap().chars().all(|c| c == 'p'));
        }
    }

    #[test]
    fn test_invalid_config() {
        let config = test_config(1).with_rates(FaultRates {
            match_rate: 7.0,
            ..FaultRates::default()
        });

        assert!(matches!(
            JsonlPopulator::new(config),
            Err(JsonlPopulatorError::Config(_))
        ));
    }
}

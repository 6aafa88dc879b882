//! Main corpus generator producing one line at a time.

use crate::config::GeneratorConfig;
use crate::error::ConfigError;
use crate::fault::{Fault, FaultInjector, LineOutcome, RecordOutcome};
use crate::line::{GeneratedLine, LineContent};
use crate::noise::append_noise_fields;
use crate::padding::pad_record;
use crate::record::Record;
use crate::value::TargetValue;
use rand::rngs::StdRng;
use rand::SeedableRng;
use serde_json::Value;

/// Corpus generator that produces deterministic JSONL lines.
///
/// All randomness comes from a single `StdRng` seeded from the config, and
/// every line consumes draws in the order documented in [`crate::fault`].
/// Two generators built from equal configs therefore yield identical lines.
pub struct CorpusGenerator {
    /// Validated configuration
    config: GeneratorConfig,
    /// Decoded target placed on matching lines
    target: Value,
    /// Value placed on mismatching lines
    mismatch: Value,
    injector: FaultInjector,
    /// Seeded random number generator for reproducibility
    rng: StdRng,
    /// Index of the next line
    index: u64,
}

impl CorpusGenerator {
    /// Validate `config` and create a generator positioned at line 0.
    pub fn new(config: GeneratorConfig) -> Result<Self, ConfigError> {
        let target: TargetValue = config.validate()?;
        Ok(Self {
            target: target.to_json(),
            mismatch: target.mismatch(),
            injector: FaultInjector::new(config.rates),
            rng: StdRng::seed_from_u64(config.seed as u64),
            index: 0,
            config,
        })
    }

    pub fn config(&self) -> &GeneratorConfig {
        &self.config
    }

    /// Get the index of the next line.
    pub fn current_index(&self) -> u64 {
        self.index
    }

    /// Number of lines not yet generated.
    pub fn remaining(&self) -> u64 {
        self.config.lines - self.index
    }

    /// Generate the next line, or `None` once `lines` have been produced.
    pub fn next_line(&mut self) -> Option<GeneratedLine> {
        if self.index >= self.config.lines {
            return None;
        }
        let index = self.index;
        self.index += 1;

        let terminator = self.injector.pick_terminator(&mut self.rng);
        let (outcome, content) = match self.injector.pick_fault(&mut self.rng) {
            Some(fault) => (LineOutcome::from(fault), self.fault_content(fault)),
            None => self.record_line(index),
        };

        Some(GeneratedLine {
            index,
            outcome,
            terminator,
            content,
            is_last: index + 1 == self.config.lines,
        })
    }

    /// Iterate over all remaining lines.
    pub fn lines(&mut self) -> GeneratedLineIterator<'_> {
        GeneratedLineIterator { generator: self }
    }

    fn fault_content(&self, fault: Fault) -> LineContent {
        match fault {
            Fault::Empty => LineContent::Empty,
            Fault::Oversized => LineContent::Oversized {
                filler_len: self.config.max_line_bytes.saturating_add(1),
            },
            Fault::Malformed => LineContent::Malformed,
        }
    }

    fn record_line(&mut self, index: u64) -> (LineOutcome, LineContent) {
        let mut record = Record::new(index);
        append_noise_fields(&mut record, self.config.noise_fields, &mut self.rng);

        let outcome = self.injector.pick_record_outcome(&mut self.rng);
        match outcome {
            RecordOutcome::Missing => {}
            RecordOutcome::Match => record.set_path(&self.config.path, self.target.clone()),
            RecordOutcome::Mismatch => {
                record.set_path(&self.config.path, self.mismatch.clone())
            }
        }

        let encoded = record.encode();
        let encoded = pad_record(&mut record, encoded, self.config.pad_bytes);
        (outcome.into(), LineContent::Json(encoded))
    }
}

/// Iterator that lazily generates lines.
pub struct GeneratedLineIterator<'a> {
    generator: &'a mut CorpusGenerator,
}

impl Iterator for GeneratedLineIterator<'_> {
    type Item = GeneratedLine;

    fn next(&mut self) -> Option<Self::Item> {
        self.generator.next_line()
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = self.generator.remaining() as usize;
        (remaining, Some(remaining))
    }
}

impl ExactSizeIterator for GeneratedLineIterator<'_> {}

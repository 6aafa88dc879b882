//! Generator configuration.

use crate::error::ConfigError;
use crate::fault::FaultRates;
use crate::path::PathSpec;
use crate::value::{TargetValue, ValueType};

/// Default number of noise fields per record.
pub const DEFAULT_NOISE_FIELDS: usize = 2;

/// Default reference maximum line length (64 MiB).
pub const DEFAULT_MAX_LINE_BYTES: u64 = 64 * 1024 * 1024;

/// Default seed.
pub const DEFAULT_SEED: i64 = 1;

/// Everything that determines a corpus. Same config, same bytes.
#[derive(Debug, Clone, PartialEq)]
pub struct GeneratorConfig {
    /// Number of lines to produce (> 0)
    pub lines: u64,
    /// Any signed seed; its two's-complement bits seed the RNG
    pub seed: i64,
    /// Path the target value is placed at
    pub path: PathSpec,
    pub value_type: ValueType,
    /// Value text, decoded according to `value_type`
    pub value_text: String,
    pub rates: FaultRates,
    pub noise_fields: usize,
    /// Minimum byte length of record lines (0 disables padding)
    pub pad_bytes: usize,
    /// Reference line limit; oversized lines exceed it by one filler byte
    pub max_line_bytes: u64,
    /// Whether the final line carries its terminator
    pub final_newline: bool,
}

impl GeneratorConfig {
    /// Create a config with default rates and options.
    pub fn new(
        lines: u64,
        path: PathSpec,
        value_type: ValueType,
        value_text: impl Into<String>,
    ) -> Self {
        Self {
            lines,
            seed: DEFAULT_SEED,
            path,
            value_type,
            value_text: value_text.into(),
            rates: FaultRates::default(),
            noise_fields: DEFAULT_NOISE_FIELDS,
            pad_bytes: 0,
            max_line_bytes: DEFAULT_MAX_LINE_BYTES,
            final_newline: true,
        }
    }

    pub fn with_seed(mut self, seed: i64) -> Self {
        self.seed = seed;
        self
    }

    pub fn with_rates(mut self, rates: FaultRates) -> Self {
        self.rates = rates;
        self
    }

    pub fn with_noise_fields(mut self, noise_fields: usize) -> Self {
        self.noise_fields = noise_fields;
        self
    }

    pub fn with_pad_bytes(mut self, pad_bytes: usize) -> Self {
        self.pad_bytes = pad_bytes;
        self
    }

    pub fn with_max_line_bytes(mut self, max_line_bytes: u64) -> Self {
        self.max_line_bytes = max_line_bytes;
        self
    }

    pub fn with_final_newline(mut self, final_newline: bool) -> Self {
        self.final_newline = final_newline;
        self
    }

    /// Validate ranges and decode the target value.
    pub fn validate(&self) -> Result<TargetValue, ConfigError> {
        if self.lines == 0 {
            return Err(ConfigError::NonPositiveLines);
        }
        if self.max_line_bytes == 0 {
            return Err(ConfigError::NonPositiveMaxLineBytes);
        }
        self.rates.validate()?;
        self.value_type.decode(&self.value_text)
    }
}

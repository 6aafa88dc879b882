//! CLI argument definitions for the corpus generator.

use clap::Args;
use corpus_generator::config::{DEFAULT_MAX_LINE_BYTES, DEFAULT_NOISE_FIELDS, DEFAULT_SEED};
use corpus_generator::fault::{DEFAULT_MALFORMED_RATE, DEFAULT_MATCH_RATE, DEFAULT_MISSING_RATE};
use corpus_generator::{ConfigError, FaultRates, GeneratorConfig, PathSpec, ValueType};
use std::convert::Infallible;
use std::fmt;
use std::path::PathBuf;
use std::str::FromStr;

/// Where the corpus is written.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum OutputTarget {
    #[default]
    Stdout,
    File(PathBuf),
}

impl FromStr for OutputTarget {
    type Err = Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(match s {
            "-" => OutputTarget::Stdout,
            path => OutputTarget::File(PathBuf::from(path)),
        })
    }
}

impl fmt::Display for OutputTarget {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            OutputTarget::Stdout => f.write_str("<stdout>"),
            OutputTarget::File(path) => write!(f, "{}", path.display()),
        }
    }
}

/// Parse a rate argument, accepting only values in `[0, 1]`.
pub fn parse_rate(s: &str) -> Result<f64, String> {
    let value: f64 = s
        .parse()
        .map_err(|_| format!("'{s}' is not a valid number"))?;
    if (0.0..=1.0).contains(&value) {
        Ok(value)
    } else {
        Err(format!("{value} is not in [0,1]"))
    }
}

/// Arguments of the `generate` command.
#[derive(Args, Clone, Debug)]
pub struct GenerateArgs {
    /// Output path, or '-' for stdout
    #[arg(long, default_value = "-", env = "JSONL_GEN_OUT")]
    pub out: OutputTarget,

    /// Number of lines to generate
    #[arg(long, env = "JSONL_GEN_LINES", value_parser = clap::value_parser!(u64).range(1..))]
    pub lines: u64,

    /// Random seed for deterministic generation (same seed = same bytes)
    #[arg(
        long,
        default_value_t = DEFAULT_SEED,
        allow_hyphen_values = true,
        env = "JSONL_GEN_SEED"
    )]
    pub seed: i64,

    /// Dot path to set (e.g. a.b.c)
    #[arg(long, env = "JSONL_GEN_PATH")]
    pub path: PathSpec,

    /// Type of the target value
    #[arg(long = "type", value_enum, default_value_t = ValueType::String, env = "JSONL_GEN_TYPE")]
    pub value_type: ValueType,

    /// Value text (ignored for --type null)
    #[arg(long, default_value = "", allow_hyphen_values = true, env = "JSONL_GEN_VALUE")]
    pub value: String,

    /// Fraction of records that carry the target value
    #[arg(
        long,
        default_value_t = DEFAULT_MATCH_RATE,
        value_parser = parse_rate,
        env = "JSONL_GEN_MATCH_RATE"
    )]
    pub match_rate: f64,

    /// Fraction of records missing the path
    #[arg(
        long,
        default_value_t = DEFAULT_MISSING_RATE,
        value_parser = parse_rate,
        env = "JSONL_GEN_MISSING_RATE"
    )]
    pub missing_rate: f64,

    /// Fraction of malformed JSON lines
    #[arg(
        long,
        default_value_t = DEFAULT_MALFORMED_RATE,
        value_parser = parse_rate,
        env = "JSONL_GEN_MALFORMED_RATE"
    )]
    pub malformed_rate: f64,

    /// Fraction of empty lines
    #[arg(
        long,
        default_value_t = 0.0,
        value_parser = parse_rate,
        env = "JSONL_GEN_EMPTY_RATE"
    )]
    pub empty_rate: f64,

    /// Fraction of lines terminated by CRLF
    #[arg(
        long,
        default_value_t = 0.0,
        value_parser = parse_rate,
        env = "JSONL_GEN_CRLF_RATE"
    )]
    pub crlf_rate: f64,

    /// Fraction of lines exceeding --max-line-bytes
    #[arg(
        long,
        default_value_t = 0.0,
        value_parser = parse_rate,
        env = "JSONL_GEN_OVERSIZE_RATE"
    )]
    pub oversize_rate: f64,

    /// Extra fields per record
    #[arg(long, default_value_t = DEFAULT_NOISE_FIELDS, env = "JSONL_GEN_NOISE_FIELDS")]
    pub noise_fields: usize,

    /// Pad each valid JSON line to at least this many bytes
    #[arg(long, default_value_t = 0, env = "JSONL_GEN_PAD_BYTES")]
    pub pad_bytes: usize,

    /// Reference max line length; oversized lines exceed it
    #[arg(
        long,
        default_value_t = DEFAULT_MAX_LINE_BYTES,
        value_parser = clap::value_parser!(u64).range(1..),
        env = "JSONL_GEN_MAX_LINE_BYTES"
    )]
    pub max_line_bytes: u64,

    /// End the last line with a newline (default)
    #[arg(long, overrides_with = "no_final_newline", env = "JSONL_GEN_FINAL_NEWLINE")]
    pub final_newline: bool,

    /// Leave the last line without a newline
    #[arg(long, overrides_with = "final_newline", env = "JSONL_GEN_NO_FINAL_NEWLINE")]
    pub no_final_newline: bool,
}

impl GenerateArgs {
    /// Whether the last line keeps its terminator.
    pub fn final_newline(&self) -> bool {
        !self.no_final_newline
    }

    pub fn rates(&self) -> FaultRates {
        FaultRates {
            match_rate: self.match_rate,
            missing_rate: self.missing_rate,
            malformed_rate: self.malformed_rate,
            empty_rate: self.empty_rate,
            crlf_rate: self.crlf_rate,
            oversize_rate: self.oversize_rate,
        }
    }
}

impl TryFrom<&GenerateArgs> for GeneratorConfig {
    type Error = ConfigError;

    fn try_from(args: &GenerateArgs) -> Result<Self, Self::Error> {
        let config = GeneratorConfig::new(
            args.lines,
            args.path.clone(),
            args.value_type,
            args.value.clone(),
        )
        .with_seed(args.seed)
        .with_rates(args.rates())
        .with_noise_fields(args.noise_fields)
        .with_pad_bytes(args.pad_bytes)
        .with_max_line_bytes(args.max_line_bytes)
        .with_final_newline(args.final_newline());
        config.validate()?;
        Ok(config)
    }
}

//! Deterministic JSONL corpus generator for exercising line-oriented JSON
//! query tools.
//!
//! This crate provides the `CorpusGenerator` which produces JSONL lines with
//! controlled rates of matching, missing and mismatching records plus
//! structural faults (empty, oversized and malformed lines). The generator
//! uses a single seeded RNG so the same configuration always yields the same
//! bytes.
//!
//! # Architecture
//!
//! ```text
//! GeneratorConfig
//!        │
//!        ▼
//! ┌──────────────────────┐
//! │   CorpusGenerator    │
//! │                      │
//! │  - FaultInjector     │──► terminator, fault, record outcome
//! │  - rng (StdRng)      │
//! │  - index             │
//! └──────────┬───────────┘
//!            │  Record + noise fields + padding
//!            ▼
//!    GeneratedLine { index, outcome, terminator, content, is_last }
//! ```
//!
//! # Example
//!
//! ```rust
//! use corpus_generator::{CorpusGenerator, FaultRates, GeneratorConfig, PathSpec, ValueType};
//!
//! let path = PathSpec::parse("user.id").unwrap();
//! let config = GeneratorConfig::new(3, path, ValueType::Number, "42")
//!     .with_rates(FaultRates::all_match());
//!
//! let mut generator = CorpusGenerator::new(config).unwrap();
//! for line in generator.lines() {
//!     println!("{}", line.content.to_text());
//! }
//! ```

pub mod config;
pub mod error;
pub mod fault;
pub mod generator;
pub mod line;
pub mod noise;
pub mod padding;
pub mod path;
pub mod record;
pub mod value;

// Re-exports for convenience
pub use config::GeneratorConfig;
pub use error::ConfigError;
pub use fault::{FaultInjector, FaultRates, LineOutcome};
pub use generator::{CorpusGenerator, GeneratedLineIterator};
pub use line::{GeneratedLine, LineContent, Terminator};
pub use path::PathSpec;
pub use record::Record;
pub use value::{TargetValue, ValueType};

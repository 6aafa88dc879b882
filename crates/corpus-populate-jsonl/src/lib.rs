//! JSONL corpus populator.
//!
//! This crate drives the `corpus-generator` line stream into a file or
//! stdout, writing each line with its chosen terminator and honouring the
//! final-newline setting.
//!
//! # Example
//!
//! ```ignore
//! use corpus_populate_jsonl::JsonlPopulator;
//!
//! let mut populator = JsonlPopulator::new(config)?;
//! let metrics = populator.populate("corpus.jsonl")?;
//! println!("Generated {} lines in {:?}", metrics.lines_written, metrics.total_duration);
//! ```

pub mod args;
pub mod emitter;
pub mod error;
pub mod populator;

pub use args::{GenerateArgs, OutputTarget};
pub use emitter::LineEmitter;
pub use error::JsonlPopulatorError;
pub use populator::{JsonlPopulator, OutcomeCounts, PopulateMetrics};

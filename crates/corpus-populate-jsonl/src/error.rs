//! Error types for JSONL corpus population.

use corpus_generator::ConfigError;
use thiserror::Error;

/// Errors that can occur while writing a corpus.
#[derive(Error, Debug)]
pub enum JsonlPopulatorError {
    /// Invalid generator configuration.
    #[error("Invalid configuration: {0}")]
    Config(#[from] ConfigError),

    /// IO error.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

//! Error types for the benchmark runner.

use crate::runner::RunPhase;
use thiserror::Error;

/// Errors that can occur while benchmarking a matcher.
#[derive(Error, Debug)]
pub enum BenchError {
    /// The matcher could not be started.
    #[error("Failed to spawn matcher '{program}': {source}")]
    Spawn {
        program: String,
        #[source]
        source: std::io::Error,
    },

    /// The matcher exited unsuccessfully.
    #[error("{phase} failed (exit {code}).\nCommand: {command}")]
    MatcherFailed {
        phase: RunPhase,
        code: i32,
        command: String,
        stderr: String,
    },

    /// IO error.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON serialization error.
    #[error("JSON serialization error: {0}")]
    Json(#[from] serde_json::Error),
}

impl BenchError {
    /// Exit code the harness should terminate with, if the matcher set one.
    pub fn matcher_exit_code(&self) -> Option<i32> {
        match self {
            BenchError::MatcherFailed { code, .. } => Some(*code),
            _ => None,
        }
    }
}

//! Benchmark runner for external JSONL matchers.
//!
//! Runs a matcher repeatedly over a corpus file, discarding its output, and
//! reports median wall time and throughput in GiB/s based on the file size.
//!
//! # Architecture
//!
//! ```text
//! BenchArgs ──► MatcherCommand ──► BenchRunner<Executor>
//!                                       │  warmups, measured runs
//!                                       ▼
//!                                  TimingStats ──► BenchReport (text / JSON)
//! ```

pub mod args;
pub mod command;
pub mod error;
pub mod report;
pub mod runner;
pub mod stats;

pub use args::BenchArgs;
pub use command::MatcherCommand;
pub use error::BenchError;
pub use report::BenchReport;
pub use runner::{BenchRunner, Executor, ProcessExecutor, RunPhase, RunPlan, RunResult};
pub use stats::TimingStats;

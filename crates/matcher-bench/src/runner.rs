//! Repeated, timed matcher invocations.

use crate::command::MatcherCommand;
use crate::error::BenchError;
use crate::report::BenchReport;
use std::fmt;
use std::path::Path;
use std::process::Stdio;
use std::time::{Duration, Instant};
use tracing::{debug, info, warn};

/// Which part of a benchmark a run belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RunPhase {
    Warmup,
    Measured,
}

impl fmt::Display for RunPhase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RunPhase::Warmup => f.write_str("Warmup"),
            RunPhase::Measured => f.write_str("Run"),
        }
    }
}

/// Outcome of a single matcher invocation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RunResult {
    pub elapsed: Duration,
    /// Exit code, `None` when terminated by a signal
    pub exit_code: Option<i32>,
    pub stderr: String,
}

impl RunResult {
    pub fn success(&self) -> bool {
        self.exit_code == Some(0)
    }
}

/// Runs a matcher command once.
pub trait Executor {
    fn execute(&mut self, command: &MatcherCommand) -> Result<RunResult, BenchError>;
}

/// Spawns the matcher as a child process with stdout discarded.
#[derive(Debug, Default, Clone, Copy)]
pub struct ProcessExecutor;

impl Executor for ProcessExecutor {
    fn execute(&mut self, command: &MatcherCommand) -> Result<RunResult, BenchError> {
        let start = Instant::now();
        let output = command
            .to_command()
            .stdin(Stdio::null())
            .stdout(Stdio::null())
            .stderr(Stdio::piped())
            .output()
            .map_err(|source| BenchError::Spawn {
                program: command.program.display().to_string(),
                source,
            })?;
        let elapsed = start.elapsed();

        Ok(RunResult {
            elapsed,
            exit_code: output.status.code(),
            stderr: String::from_utf8_lossy(&output.stderr).into_owned(),
        })
    }
}

/// Warmup and measured run counts.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RunPlan {
    pub warmups: u64,
    /// Measured runs (> 0)
    pub runs: u64,
}

impl Default for RunPlan {
    fn default() -> Self {
        Self { warmups: 1, runs: 5 }
    }
}

/// Benchmark runner for one matcher command.
pub struct BenchRunner<E: Executor> {
    executor: E,
    command: MatcherCommand,
    plan: RunPlan,
}

impl<E: Executor> BenchRunner<E> {
    pub fn new(executor: E, command: MatcherCommand, plan: RunPlan) -> Self {
        Self {
            executor,
            command,
            plan,
        }
    }

    pub fn command(&self) -> &MatcherCommand {
        &self.command
    }

    /// Run warmups then measured runs, returning measured times in seconds.
    ///
    /// The first unsuccessful run aborts the benchmark.
    pub fn measure(&mut self) -> Result<Vec<f64>, BenchError> {
        for i in 0..self.plan.warmups {
            let result = self.run_checked(RunPhase::Warmup)?;
            debug!("Warmup {} took {:?}", i + 1, result.elapsed);
        }

        let mut times = Vec::with_capacity(self.plan.runs as usize);
        for i in 0..self.plan.runs {
            let result = self.run_checked(RunPhase::Measured)?;
            debug!("Run {} took {:?}", i + 1, result.elapsed);
            times.push(result.elapsed.as_secs_f64());
        }
        Ok(times)
    }

    /// Measure and build a report for `file`.
    pub fn benchmark(&mut self, file: &Path) -> Result<BenchReport, BenchError> {
        let file_size_bytes = std::fs::metadata(file)?.len();
        info!(
            "Benchmarking '{}' ({} bytes): {} warmups, {} runs",
            self.command.display(),
            file_size_bytes,
            self.plan.warmups,
            self.plan.runs
        );

        let times = self.measure()?;
        Ok(BenchReport::new(
            file.display().to_string(),
            file_size_bytes,
            self.command.argv(),
            self.plan,
            times,
        ))
    }

    fn run_checked(&mut self, phase: RunPhase) -> Result<RunResult, BenchError> {
        let result = self.executor.execute(&self.command)?;
        if result.success() {
            Ok(result)
        } else {
            if !result.stderr.trim().is_empty() {
                warn!("Matcher stderr: {}", result.stderr.trim());
            }
            Err(BenchError::MatcherFailed {
                phase,
                code: result.exit_code.unwrap_or(1),
                command: self.command.display(),
                stderr: result.stderr,
            })
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use corpus_generator::ValueType;
    use std::collections::VecDeque;
    use tempfile::TempDir;

    /// Replays scripted results and counts invocations.
    struct ScriptedExecutor {
        results: VecDeque<RunResult>,
        calls: usize,
    }

    impl ScriptedExecutor {
        fn new(results: Vec<RunResult>) -> Self {
            Self {
                results: results.into(),
                calls: 0,
            }
        }
    }

    impl Executor for ScriptedExecutor {
        fn execute(&mut self, _command: &MatcherCommand) -> Result<RunResult, BenchError> {
            self.calls += 1;
            Ok(self.results.pop_front().expect("unexpected extra run"))
        }
    }

    fn ok(millis: u64) -> RunResult {
        RunResult {
            elapsed: Duration::from_millis(millis),
            exit_code: Some(0),
            stderr: String::new(),
        }
    }

    fn failed(code: i32) -> RunResult {
        RunResult {
            elapsed: Duration::from_millis(1),
            exit_code: Some(code),
            stderr: "line 3: malformed".to_string(),
        }
    }

    fn command() -> MatcherCommand {
        MatcherCommand::new(
            "jlq",
            "data.jsonl",
            "a",
            ValueType::String,
            "b",
        )
    }

    #[test]
    fn test_warmups_are_not_measured() {
        let executor = ScriptedExecutor::new(vec![ok(900), ok(100), ok(300), ok(200)]);
        let plan = RunPlan { warmups: 1, runs: 3 };
        let mut runner = BenchRunner::new(executor, command(), plan);

        let times = runner.measure().unwrap();

        assert_eq!(times, vec![0.1, 0.3, 0.2]);
        assert_eq!(runner.executor.calls, 4);
    }

    #[test]
    fn test_failed_warmup_aborts() {
        let executor = ScriptedExecutor::new(vec![failed(3)]);
        let mut runner = BenchRunner::new(executor, command().with_strict(true), RunPlan::default());

        let err = runner.measure().unwrap_err();

        assert_eq!(err.matcher_exit_code(), Some(3));
        assert!(err.to_string().starts_with("Warmup failed (exit 3)."));
        assert!(err.to_string().contains("--strict"));
        assert_eq!(runner.executor.calls, 1);
    }

    #[test]
    fn test_failed_run_aborts() {
        let executor = ScriptedExecutor::new(vec![ok(10), failed(2)]);
        let plan = RunPlan { warmups: 1, runs: 5 };
        let mut runner = BenchRunner::new(executor, command(), plan);

        let err = runner.measure().unwrap_err();

        assert!(matches!(
            err,
            BenchError::MatcherFailed {
                phase: RunPhase::Measured,
                code: 2,
                ..
            }
        ));
    }

    #[test]
    fn test_signal_exit_maps_to_failure() {
        let mut killed = failed(0);
        killed.exit_code = None;
        assert!(!killed.success());

        let mut runner = BenchRunner::new(
            ScriptedExecutor::new(vec![killed]),
            command(),
            RunPlan { warmups: 0, runs: 1 },
        );
        assert_eq!(runner.measure().unwrap_err().matcher_exit_code(), Some(1));
    }

    #[test]
    fn test_benchmark_report() {
        let temp_dir = TempDir::new().unwrap();
        let file = temp_dir.path().join("data.jsonl");
        std::fs::write(&file, b"{\"a\":\"b\"}\n").unwrap();

        let executor = ScriptedExecutor::new(vec![ok(100), ok(200)]);
        let plan = RunPlan { warmups: 0, runs: 2 };
        let mut runner = BenchRunner::new(executor, command(), plan);

        let report = runner.benchmark(&file).unwrap();

        assert_eq!(report.file_size_bytes, 10);
        assert_eq!(report.runs, 2);
        assert_eq!(report.warmups, 0);
        assert!((report.median_s - 0.15).abs() < 1e-9);
        assert_eq!(report.cmd[0], "jlq");
    }

    #[test]
    fn test_missing_file() {
        let mut runner = BenchRunner::new(
            ScriptedExecutor::new(vec![]),
            command(),
            RunPlan::default(),
        );
        let err = runner
            .benchmark(Path::new("/nonexistent/data.jsonl"))
            .unwrap_err();
        assert!(matches!(err, BenchError::Io(_)));
    }
}

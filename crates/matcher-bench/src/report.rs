//! Benchmark report types.

use crate::error::BenchError;
use crate::runner::RunPlan;
use crate::stats::{throughput_gib_s, TimingStats, GIB};
use serde::Serialize;
use std::path::Path;

/// Result of a benchmark, serialized as the JSON summary.
///
/// An infinite throughput (zero median time) serializes as `null`.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct BenchReport {
    pub file: String,
    pub file_size_bytes: u64,
    pub cmd: Vec<String>,
    pub runs: u64,
    pub warmups: u64,
    pub times_s: Vec<f64>,
    pub median_s: f64,
    pub mean_s: f64,
    pub stdev_s: f64,
    pub throughput_gib_s_median: f64,
}

impl BenchReport {
    /// Build a report from measured times in seconds.
    pub fn new(
        file: String,
        file_size_bytes: u64,
        cmd: Vec<String>,
        plan: RunPlan,
        times_s: Vec<f64>,
    ) -> Self {
        let stats = TimingStats::from_samples(&times_s).unwrap_or(TimingStats {
            median_s: 0.0,
            mean_s: 0.0,
            stdev_s: 0.0,
        });
        Self {
            file,
            file_size_bytes,
            cmd,
            runs: plan.runs,
            warmups: plan.warmups,
            times_s,
            median_s: stats.median_s,
            mean_s: stats.mean_s,
            stdev_s: stats.stdev_s,
            throughput_gib_s_median: throughput_gib_s(file_size_bytes, stats.median_s),
        }
    }

    /// File size in GiB.
    pub fn file_size_gib(&self) -> f64 {
        self.file_size_bytes as f64 / GIB
    }

    /// Generate a human-readable summary.
    pub fn summary(&self) -> String {
        format!(
            "file: {}\n\
             size: {} bytes ({:.3} GiB)\n\
             command: {}\n\
             runs: {} (warmups: {})\n\
             time (median): {:.6} s\n\
             time (mean):   {:.6} s\n\
             time (stdev):  {:.6} s\n\
             throughput (median): {:.3} GiB/s",
            self.file,
            self.file_size_bytes,
            self.file_size_gib(),
            self.cmd.join(" "),
            self.runs,
            self.warmups,
            self.median_s,
            self.mean_s,
            self.stdev_s,
            self.throughput_gib_s_median
        )
    }

    /// Indented JSON with a trailing newline.
    pub fn to_json(&self) -> Result<String, BenchError> {
        let mut json = serde_json::to_string_pretty(self)?;
        json.push('\n');
        Ok(json)
    }

    /// Write the JSON summary to `path`, creating parent directories.
    pub fn write_json(&self, path: &Path) -> Result<(), BenchError> {
        if let Some(parent) = path.parent() {
            if !parent.as_os_str().is_empty() {
                std::fs::create_dir_all(parent)?;
            }
        }
        std::fs::write(path, self.to_json()?)?;
        Ok(())
    }
}

//! Timing statistics for benchmark runs.

/// Bytes per GiB.
pub const GIB: f64 = 1024.0 * 1024.0 * 1024.0;

/// Summary statistics over measured run times, in seconds.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TimingStats {
    pub median_s: f64,
    pub mean_s: f64,
    /// Population standard deviation; 0 for a single sample.
    pub stdev_s: f64,
}

impl TimingStats {
    /// Compute statistics, or `None` for an empty sample set.
    pub fn from_samples(samples: &[f64]) -> Option<Self> {
        if samples.is_empty() {
            return None;
        }
        let mean_s = mean(samples);
        let stdev_s = if samples.len() > 1 {
            population_stdev(samples, mean_s)
        } else {
            0.0
        };
        Some(Self {
            median_s: median(samples),
            mean_s,
            stdev_s,
        })
    }
}

/// Median of a non-empty sample set; mean of the middle pair for even sizes.
pub fn median(samples: &[f64]) -> f64 {
    let mut sorted = samples.to_vec();
    sorted.sort_by(f64::total_cmp);
    let mid = sorted.len() / 2;
    if sorted.len() % 2 == 0 {
        (sorted[mid - 1] + sorted[mid]) / 2.0
    } else {
        sorted[mid]
    }
}

pub fn mean(samples: &[f64]) -> f64 {
    samples.iter().sum::<f64>() / samples.len() as f64
}

fn population_stdev(samples: &[f64], mean: f64) -> f64 {
    let variance =
        samples.iter().map(|s| (s - mean).powi(2)).sum::<f64>() / samples.len() as f64;
    variance.sqrt()
}

/// Throughput in GiB/s for `bytes` processed in `seconds`.
///
/// Infinite when `seconds` is not positive.
pub fn throughput_gib_s(bytes: u64, seconds: f64) -> f64 {
    if seconds > 0.0 {
        bytes as f64 / GIB / seconds
    } else {
        f64::INFINITY
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_median_odd_and_even() {
        assert_eq!(median(&[3.0, 1.0, 2.0]), 2.0);
        assert_eq!(median(&[4.0, 1.0, 3.0, 2.0]), 2.5);
        assert_eq!(median(&[5.0]), 5.0);
    }

    #[test]
    fn test_stats() {
        let stats = TimingStats::from_samples(&[2.0, 4.0, 4.0, 4.0, 5.0, 5.0, 7.0, 9.0]).unwrap();
        assert_eq!(stats.mean_s, 5.0);
        assert_eq!(stats.median_s, 4.5);
        assert!((stats.stdev_s - 2.0).abs() < 1e-12);
    }

    #[test]
    fn test_single_sample_has_zero_stdev() {
        let stats = TimingStats::from_samples(&[1.25]).unwrap();
        assert_eq!(stats.stdev_s, 0.0);
        assert_eq!(stats.median_s, 1.25);
    }

    #[test]
    fn test_empty_samples() {
        assert!(TimingStats::from_samples(&[]).is_none());
    }

    #[test]
    fn test_throughput() {
        assert_eq!(throughput_gib_s(1024 * 1024 * 1024, 0.5), 2.0);
        assert_eq!(throughput_gib_s(100, 0.0), f64::INFINITY);
    }
}

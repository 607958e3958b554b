//! Trial Aggregation
//!
//! The outer driver of a benchmark run: discover a resolution if none was
//! given, run `num` independent regressions, and aggregate their slopes
//! into a mean and population standard deviation. A reporter thread is
//! spawned before the aggregation loop and joined after it; the loop itself
//! is the sole writer of the shared window counter.

use crate::config::{BenchConfig, ConfigError};
use crate::reporter::ProgressReporter;
use slopebench_core::{find_resolution, sample, ProgressCounter, Workload};
use slopebench_stats::{fit_slope, RegressionError, Stats};
use std::sync::Arc;

/// A benchmark run failed before producing a result.
#[derive(Debug, thiserror::Error)]
pub enum BenchError {
    /// The shape parameters were rejected up front.
    #[error("invalid configuration: {0}")]
    Config(#[from] ConfigError),
    /// The slope fit was numerically undefined.
    #[error(transparent)]
    Regression(#[from] RegressionError),
}

/// One overhead-cancelling regression at a fixed resolution.
///
/// Point `i` of `point_count` sums `i` independent samples, so total time
/// grows linearly with `i` while the fixed per-window overhead stays
/// constant per sample. The fitted slope is the summed noise-filtered time
/// of `resolution` invocations per index unit; callers divide by
/// `resolution` for per-call cost.
pub fn regress<W: Workload>(
    point_count: u64,
    sample_count: u64,
    resolution: u64,
    progress: &ProgressCounter,
) -> Result<f64, RegressionError> {
    let mut points = Vec::with_capacity(point_count as usize);

    for i in 1..=point_count {
        let mut y = 0.0;
        for _ in 0..i {
            y += sample::<W>(sample_count, resolution, progress);
        }
        points.push((i as f64, y));
    }

    fit_slope(&points)
}

/// Run a full benchmark with explicit shape parameters.
///
/// Validates the configuration, derives the resolution when not given, and
/// aggregates `num` regression slopes into per-call [`Stats`].
pub fn benchmark<W: Workload>(config: BenchConfig) -> Result<Stats, BenchError> {
    config.validate()?;

    let resolution = match config.resolution {
        Some(r) => r,
        None => find_resolution::<W>(config.sample_count),
    };

    let counter = Arc::new(ProgressCounter::new());
    let target = config.progress_target();

    let reporter = if config.quiet {
        ProgressReporter::spawn_hidden(Arc::clone(&counter), target)
    } else {
        ProgressReporter::spawn(Arc::clone(&counter), target, resolution)
    };

    // The reporter exits only when the counter reaches its target. The loop
    // lands there exactly on success; the guard walks the counter forward on
    // the error path and when a workload panic unwinds through here, so the
    // reporter thread never outlives the run.
    let records = {
        let _unblock = CounterUnblock {
            counter: &counter,
            target,
        };
        run_trials::<W>(&config, resolution, &counter)
    };
    reporter.join();

    Ok(Stats::compute(&records?))
}

/// Run a benchmark with the default shape (20 trials, 20 regression points,
/// minimum of 10 windows per sample) and an auto-derived resolution.
pub fn benchmark_auto<W: Workload>() -> Result<Stats, BenchError> {
    benchmark::<W>(BenchConfig::default())
}

/// Walks the shared counter to its target on drop. A no-op after a completed
/// run; on an error return or an unwinding workload panic it releases the
/// reporter thread, which only exits at the target.
struct CounterUnblock<'a> {
    counter: &'a ProgressCounter,
    target: u64,
}

impl Drop for CounterUnblock<'_> {
    fn drop(&mut self) {
        while self.counter.get() < self.target {
            self.counter.advance();
        }
    }
}

/// The aggregation loop: `num` independent slope estimates, each divided by
/// `resolution` to denominate in per-call nanoseconds.
fn run_trials<W: Workload>(
    config: &BenchConfig,
    resolution: u64,
    counter: &ProgressCounter,
) -> Result<Vec<f64>, RegressionError> {
    let mut records = Vec::with_capacity(config.num as usize);
    for _ in 0..config.num {
        let slope = regress::<W>(config.point_count, config.sample_count, resolution, counter)?;
        records.push(slope / resolution as f64);
    }
    Ok(records)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Default)]
    struct SmallWork {
        acc: u64,
    }

    impl Workload for SmallWork {
        fn invoke(&mut self) {
            for i in 0..32u64 {
                self.acc = self.acc.wrapping_add(i.wrapping_mul(self.acc | 1));
            }
        }
    }

    #[test]
    fn test_regress_counts_windows() {
        let counter = ProgressCounter::new();
        regress::<SmallWork>(4, 3, 50, &counter).unwrap();
        // Triangular sample count times windows per sample.
        assert_eq!(counter.get(), 3 * (1 + 2 + 3 + 4));
    }

    #[test]
    fn test_invalid_config_is_rejected() {
        let cfg = BenchConfig {
            point_count: 1,
            quiet: true,
            ..BenchConfig::default()
        };
        let err = benchmark::<SmallWork>(cfg).unwrap_err();
        assert!(matches!(
            err,
            BenchError::Config(ConfigError::TooFewPoints(1))
        ));
    }

    #[derive(Default)]
    struct ExplodingWork;

    impl Workload for ExplodingWork {
        fn invoke(&mut self) {
            panic!("workload blew up");
        }
    }

    #[test]
    fn test_counter_unblock_walks_to_target_on_unwind() {
        let counter = ProgressCounter::new();
        let result = std::panic::catch_unwind(std::panic::AssertUnwindSafe(|| {
            let _unblock = CounterUnblock {
                counter: &counter,
                target: 12,
            };
            counter.advance();
            panic!("mid-run failure");
        }));
        assert!(result.is_err());
        assert_eq!(counter.get(), 12);
    }

    #[test]
    fn test_counter_unblock_is_noop_at_target() {
        let counter = ProgressCounter::new();
        for _ in 0..3 {
            counter.advance();
        }
        drop(CounterUnblock {
            counter: &counter,
            target: 3,
        });
        assert_eq!(counter.get(), 3);
    }

    #[test]
    fn test_workload_panic_propagates_and_releases_reporter() {
        let cfg = BenchConfig {
            num: 2,
            point_count: 3,
            sample_count: 2,
            resolution: Some(10),
            quiet: true,
        };
        let result = std::panic::catch_unwind(|| benchmark::<ExplodingWork>(cfg));
        assert!(result.is_err(), "workload panic must propagate uncaught");

        // The run above must not leave state behind that disturbs later runs.
        let stats = benchmark::<SmallWork>(BenchConfig {
            num: 2,
            point_count: 3,
            sample_count: 2,
            resolution: Some(50),
            quiet: true,
        })
        .unwrap();
        assert!(stats.avg > 0.0);
    }

    #[test]
    fn test_benchmark_produces_positive_estimate() {
        let cfg = BenchConfig {
            num: 3,
            point_count: 5,
            sample_count: 2,
            resolution: Some(200),
            quiet: true,
        };
        let stats = benchmark::<SmallWork>(cfg).unwrap();
        assert!(stats.avg > 0.0, "estimated {} ns per call", stats.avg);
        assert!(stats.dev >= 0.0);
    }
}

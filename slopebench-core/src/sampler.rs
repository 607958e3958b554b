//! Batched Sampling
//!
//! One timed window packs `resolution` workload invocations back-to-back so
//! the window cost dominates timer-call overhead and scheduler jitter. A
//! sample is the minimum over several windows: observed time is true cost
//! plus nonnegative noise, so the minimum is the estimator closest to truth
//! (averaging would retain all the jitter instead).

use crate::measure::Clock;
use crate::progress::ProgressCounter;
use crate::workload::Workload;
use std::hint::black_box;

/// Time one window of `resolution` back-to-back invocations.
///
/// A fresh workload instance is constructed inside the window and dropped
/// with it, so each call is an independent trial and one-time construction
/// cost stays in the fixed per-window overhead.
///
/// Returns elapsed nanoseconds for the whole window.
#[inline]
pub fn run_window<W: Workload>(resolution: u64) -> f64 {
    let mut workload = W::default();
    let clock = Clock::mark();
    for _ in 0..resolution {
        black_box(&mut workload).invoke();
    }
    clock.elapsed_ns()
}

/// Minimum window time over `sample_count` trials at a fixed resolution.
///
/// Advances `progress` once per completed window; the counter is only
/// touched between windows, never inside the timed region.
pub fn sample<W: Workload>(sample_count: u64, resolution: u64, progress: &ProgressCounter) -> f64 {
    let mut result = f64::MAX;

    for _ in 0..sample_count {
        let measured = run_window::<W>(resolution);
        if measured < result {
            result = measured;
        }
        progress.advance();
    }

    result
}

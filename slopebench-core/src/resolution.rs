//! Adaptive Resolution Discovery
//!
//! Timing very few invocations measures mostly timer-call overhead and
//! scheduler jitter. Before regression begins, the harness searches for the
//! smallest window size (resolution) whose sampled time reliably clears a
//! fixed noise floor, so every subsequent window carries a stable signal.

use crate::progress::ProgressCounter;
use crate::sampler::sample;
use crate::workload::Workload;

/// Noise floor a sampled window must clear, in nanoseconds.
pub const NOISE_FLOOR_NS: f64 = 2_000.0;

/// Overshoot factor applied when projecting the next window size, so one
/// projection step normally lands above the floor instead of just under it.
pub const SAFETY_MARGIN: f64 = 1.5;

/// Find the smallest resolution whose sampled window time clears
/// [`NOISE_FLOOR_NS`].
///
/// Starts at 1 and escalates: a nonzero reading projects the needed window
/// size as `resolution * SAFETY_MARGIN * NOISE_FLOOR_NS / measured`; a
/// reading that rounds to zero (window too short for the timer to see)
/// doubles instead. Always terminates and always returns at least 1: a
/// projection that rounds to zero falls back to 1, and a search that can no
/// longer grow the window gives up with the current size. A workload too
/// cheap to ever clear the floor yields a noisy result, surfaced through the
/// reported deviation rather than an error.
///
/// Sampling here uses a scratch counter; discovery happens before the shared
/// progress target is meaningful.
pub fn find_resolution<W: Workload>(sample_count: u64) -> u64 {
    let scratch = ProgressCounter::new();
    let mut resolution: u64 = 1;

    loop {
        let measured = sample::<W>(sample_count, resolution, &scratch);

        if measured >= NOISE_FLOOR_NS {
            return resolution;
        }

        if measured > 0.0 {
            let projected = (resolution as f64 * SAFETY_MARGIN * NOISE_FLOOR_NS / measured) as u64;
            if projected == 0 {
                return 1;
            }
            // A projection that fails to grow the window would loop forever
            // on a timer that quantizes to the same reading.
            resolution = projected.max(resolution.saturating_add(1));
        } else {
            let doubled = resolution.saturating_mul(2);
            if doubled == resolution {
                return resolution;
            }
            resolution = doubled;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sampler::sample;

    #[derive(Default)]
    struct TinyWork {
        acc: u64,
    }

    impl Workload for TinyWork {
        fn invoke(&mut self) {
            self.acc = self.acc.wrapping_mul(6364136223846793005).wrapping_add(1);
        }
    }

    #[derive(Default)]
    struct HeavyWork {
        acc: u64,
    }

    impl Workload for HeavyWork {
        fn invoke(&mut self) {
            for i in 0..4096u64 {
                self.acc = self.acc.wrapping_add(i * i);
            }
        }
    }

    #[test]
    fn test_returns_at_least_one() {
        assert!(find_resolution::<TinyWork>(3) >= 1);
    }

    #[test]
    fn test_found_resolution_clears_the_floor() {
        let resolution = find_resolution::<TinyWork>(5);
        let scratch = ProgressCounter::new();
        let measured = sample::<TinyWork>(5, resolution, &scratch);
        assert!(
            measured >= NOISE_FLOOR_NS,
            "resolution {resolution} sampled at {measured}ns, below the floor"
        );
    }

    #[test]
    fn test_expensive_workload_needs_few_iterations() {
        // ~4096 adds per call should clear 2µs within a handful of calls.
        let resolution = find_resolution::<HeavyWork>(3);
        assert!(resolution < 10_000);
    }
}

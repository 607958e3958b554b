//! Monotonic Timing
//!
//! Wraps the platform's monotonic counter behind a mark/elapsed contract
//! returning floating-point nanoseconds. The counter is immune to wall-clock
//! adjustments; its frequency scaling is resolved once by the standard
//! library, so reading it is a cheap fixed-cost operation.

use std::time::Instant;

/// Monotonic stopwatch for timed measurement windows.
///
/// `mark` records an origin; `elapsed_ns` reads nanoseconds since that
/// origin. All error sources on this path are additive delays, so a reading
/// is always an upper bound on the true window cost.
#[derive(Debug, Clone, Copy)]
pub struct Clock {
    origin: Instant,
}

impl Clock {
    /// Create a clock marked at the current instant.
    #[inline(always)]
    pub fn mark() -> Self {
        Self {
            origin: Instant::now(),
        }
    }

    /// Nanoseconds elapsed since the last mark, as a non-negative float.
    #[inline(always)]
    pub fn elapsed_ns(&self) -> f64 {
        self.origin.elapsed().as_nanos() as f64
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Duration;

    #[test]
    fn test_elapsed_is_nonnegative() {
        let clock = Clock::mark();
        assert!(clock.elapsed_ns() >= 0.0);
    }

    #[test]
    fn test_elapsed_tracks_sleep() {
        let clock = Clock::mark();
        std::thread::sleep(Duration::from_millis(10));
        let ns = clock.elapsed_ns();

        // At least 5ms, under 100ms (accounting for scheduling)
        assert!(ns >= 5_000_000.0);
        assert!(ns < 100_000_000.0);
    }

    #[test]
    fn test_elapsed_is_monotonic() {
        let clock = Clock::mark();
        let a = clock.elapsed_ns();
        let b = clock.elapsed_ns();
        assert!(b >= a);
    }
}

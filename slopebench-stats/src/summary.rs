//! Trial Statistics
//!
//! Aggregates the independent regression estimates of one benchmark run into
//! a mean and a population standard deviation (divide by n, not n−1 — the
//! estimates are the whole population of trials taken, and the formula is
//! kept bit-compatible with established output).

use std::fmt;

/// Time unit for rendering a [`Stats`] value.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TimeUnit {
    /// Nanoseconds.
    Nanos,
    /// Microseconds.
    Micros,
    /// Milliseconds.
    Millis,
    /// Seconds.
    Secs,
}

impl TimeUnit {
    /// Multiplier converting nanoseconds into this unit.
    pub fn scale(self) -> f64 {
        match self {
            TimeUnit::Nanos => 1e0,
            TimeUnit::Micros => 1e-3,
            TimeUnit::Millis => 1e-6,
            TimeUnit::Secs => 1e-9,
        }
    }

    /// Display suffix.
    pub fn suffix(self) -> &'static str {
        match self {
            TimeUnit::Nanos => "ns",
            TimeUnit::Micros => "µs",
            TimeUnit::Millis => "ms",
            TimeUnit::Secs => "s",
        }
    }
}

/// Final result of a benchmark run: mean and population standard deviation
/// over the independent per-trial cost estimates, in nanoseconds.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Stats {
    /// Mean per-call cost estimate, nanoseconds.
    pub avg: f64,
    /// Population standard deviation across trials, nanoseconds.
    pub dev: f64,
}

impl Stats {
    /// Aggregate trial estimates into mean and population deviation.
    ///
    /// Empty input yields zeros rather than NaN.
    pub fn compute(records: &[f64]) -> Self {
        if records.is_empty() {
            return Self { avg: 0.0, dev: 0.0 };
        }

        let n = records.len() as f64;
        let avg = records.iter().sum::<f64>() / n;
        let dev = (records.iter().map(|r| (avg - r) * (avg - r)).sum::<f64>() / n).sqrt();

        Self { avg, dev }
    }

    /// Unit whose magnitude fits the mean: above 1e9 ns → seconds, above
    /// 1e6 → milliseconds, above 1e3 → microseconds, else nanoseconds.
    pub fn auto_unit(&self) -> TimeUnit {
        if self.avg > 1e9 {
            TimeUnit::Secs
        } else if self.avg > 1e6 {
            TimeUnit::Millis
        } else if self.avg > 1e3 {
            TimeUnit::Micros
        } else {
            TimeUnit::Nanos
        }
    }

    /// Render in a specific unit, e.g. `"avg 12.345 ±0.678 µs"`.
    pub fn format_in(&self, unit: TimeUnit) -> String {
        let scale = unit.scale();
        format!(
            "avg {:.3} ±{:.3} {}",
            self.avg * scale,
            self.dev * scale,
            unit.suffix()
        )
    }
}

impl fmt::Display for Stats {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.format_in(self.auto_unit()))
    }
}

//! Run Configuration
//!
//! Shape parameters for one benchmark run. Validation happens once, up
//! front, so the measurement loop itself cannot fail midway.

/// Invalid shape parameters.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ConfigError {
    /// At least one outer trial is required.
    #[error("trial count must be at least 1")]
    ZeroTrials,
    /// A line needs two points; fewer makes the slope undefined.
    #[error("regression needs at least 2 points, got {0}")]
    TooFewPoints(u64),
    /// The minimum-of-samples filter needs at least one observation.
    #[error("sample count must be at least 1")]
    ZeroSamples,
    /// A timed window must contain at least one invocation.
    #[error("resolution must be at least 1 when given explicitly")]
    ZeroResolution,
}

/// Shape parameters for a benchmark run.
#[derive(Debug, Clone)]
pub struct BenchConfig {
    /// Outer trial count: independent regression estimates to aggregate.
    pub num: u64,
    /// Regression points per trial.
    pub point_count: u64,
    /// Timed windows per sample (minimum is kept).
    pub sample_count: u64,
    /// Workload invocations per timed window; auto-derived when `None`.
    pub resolution: Option<u64>,
    /// Suppress the progress bar (hidden reporter, same lifecycle).
    pub quiet: bool,
}

impl Default for BenchConfig {
    fn default() -> Self {
        Self {
            num: 20,
            point_count: 20,
            sample_count: 10,
            resolution: None,
            quiet: false,
        }
    }
}

impl BenchConfig {
    /// Check the shape parameters, failing fast on degenerate values.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.num == 0 {
            return Err(ConfigError::ZeroTrials);
        }
        if self.point_count < 2 {
            return Err(ConfigError::TooFewPoints(self.point_count));
        }
        if self.sample_count == 0 {
            return Err(ConfigError::ZeroSamples);
        }
        if self.resolution == Some(0) {
            return Err(ConfigError::ZeroResolution);
        }
        Ok(())
    }

    /// Total timed windows one run performs: regression point `i` takes `i`
    /// samples of `sample_count` windows each, so each trial contributes the
    /// triangular sum times `sample_count`.
    pub fn progress_target(&self) -> u64 {
        self.num * self.sample_count * self.point_count * (self.point_count + 1) / 2
    }
}

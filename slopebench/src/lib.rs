#![warn(missing_docs)]
//! # Slopebench
//!
//! A statistical micro-benchmark harness that estimates the true marginal
//! per-call cost of a workload, with fixed overhead and environmental noise
//! cancelled out:
//! - **Batched windows**: `resolution` invocations per timed window, sized
//!   adaptively so the window dominates timer and scheduler noise
//! - **Min-of-samples filtering**: noise is an additive delay, never
//!   negative, so the minimum of repeated windows is the estimator closest
//!   to the true cost
//! - **Overhead-cancelling regression**: total time is fitted against
//!   repetition count; fixed per-window cost lands in the intercept and the
//!   slope is the marginal cost alone
//! - **Trial aggregation**: independent regressions yield a mean and
//!   population standard deviation in nanoseconds
//! - **Live progress**: a reporter thread renders a bar with percentage and
//!   ETA without ever touching the timed path
//!
//! ## Quick start
//!
//! ```no_run
//! use slopebench::prelude::*;
//!
//! #[derive(Default)]
//! struct Fibonacci {
//!     a: u64,
//!     b: u64,
//! }
//!
//! impl Workload for Fibonacci {
//!     fn invoke(&mut self) {
//!         let next = self.a.wrapping_add(self.b);
//!         self.a = self.b;
//!         self.b = next;
//!     }
//! }
//!
//! fn main() -> Result<(), slopebench::BenchError> {
//!     let stats = benchmark_auto::<Fibonacci>()?;
//!     println!("{stats}");
//!     Ok(())
//! }
//! ```

mod config;
mod reporter;
mod runner;

pub use config::{BenchConfig, ConfigError};
pub use reporter::ProgressReporter;
pub use runner::{benchmark, benchmark_auto, regress, BenchError};

// Re-export the measurement engine and the estimation math.
pub use slopebench_core::{
    find_resolution, run_window, sample, Clock, ProgressCounter, Workload, NOISE_FLOOR_NS,
};
pub use slopebench_stats::{fit_slope, RegressionError, Stats, TimeUnit};

/// Prelude for convenient imports.
pub mod prelude {
    pub use crate::{benchmark, benchmark_auto, BenchConfig, Stats, TimeUnit, Workload};
}

#![warn(missing_docs)]
//! Slopebench Statistical Engine
//!
//! The estimation math behind the harness:
//! - Closed-form least-squares slope fitting, with the intercept discarded
//!   to cancel fixed per-window overhead
//! - Mean and population standard deviation across independent trials
//! - Magnitude-appropriate time rendering (ns/µs/ms/s)

mod regression;
mod summary;

pub use regression::{fit_slope, RegressionError};
pub use summary::{Stats, TimeUnit};

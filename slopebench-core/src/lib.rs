#![warn(missing_docs)]
//! Slopebench Core - Measurement Engine
//!
//! This crate provides the timed path of the harness:
//! - `Clock` for monotonic mark/elapsed timing in nanoseconds
//! - `Workload` capability for the code under measurement
//! - Batched windows and min-of-samples noise filtering
//! - Adaptive resolution discovery against a fixed noise floor
//! - The shared progress counter read by the reporter thread

mod measure;
mod progress;
mod resolution;
mod sampler;
mod workload;

pub use measure::Clock;
pub use progress::ProgressCounter;
pub use resolution::{find_resolution, NOISE_FLOOR_NS, SAFETY_MARGIN};
pub use sampler::{run_window, sample};
pub use workload::Workload;

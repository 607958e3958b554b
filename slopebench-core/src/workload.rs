//! The Workload Capability
//!
//! A workload is the unit of code under measurement: default-constructible,
//! invocable with no arguments, free to carry mutable state across
//! invocations so the optimizer cannot collapse repeated calls. Workloads
//! are resolved by monomorphization; there is no virtual dispatch on the
//! timed path, since an indirect call would pollute the very cost being
//! measured.

/// A repeatable zero-argument operation under measurement.
///
/// The harness constructs one fresh instance per timed window and drops it
/// when the window closes, so one-time construction cost lands in the fixed
/// per-window overhead that the regression step cancels.
///
/// Invocations should perform comparable work each time; that is the
/// caller's responsibility, not enforced here.
///
/// # Examples
///
/// ```
/// use slopebench_core::Workload;
///
/// #[derive(Default)]
/// struct Accumulate {
///     state: u64,
/// }
///
/// impl Workload for Accumulate {
///     fn invoke(&mut self) {
///         self.state = self.state.wrapping_mul(6364136223846793005).wrapping_add(1);
///     }
/// }
/// ```
pub trait Workload: Default {
    /// Perform one unit of work.
    fn invoke(&mut self);
}

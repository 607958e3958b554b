//! Shared Progress Counter
//!
//! The single cross-thread resource in the harness: the measurement loop is
//! the sole writer, a reporter thread the sole reader. Relaxed ordering is
//! sufficient on both sides — the reader only needs an approximately fresh
//! value for display, not a linearizable snapshot.

use std::sync::atomic::{AtomicU64, Ordering};

/// Monotone counter of completed timed windows.
#[derive(Debug, Default)]
pub struct ProgressCounter {
    completed: AtomicU64,
}

impl ProgressCounter {
    /// Create a counter at zero.
    pub fn new() -> Self {
        Self::default()
    }

    /// Record one completed timed window. Called only from the measurement
    /// thread, between windows, never inside one.
    #[inline]
    pub fn advance(&self) {
        self.completed.fetch_add(1, Ordering::Relaxed);
    }

    /// Current count, approximately fresh.
    #[inline]
    pub fn get(&self) -> u64 {
        self.completed.load(Ordering::Relaxed)
    }
}

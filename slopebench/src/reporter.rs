//! Progress Reporting
//!
//! A reporter thread polls the shared window counter at a coarse interval
//! and drives a terminal progress bar with percentage and ETA. It is purely
//! observational: the measurement loop never waits on it, and it terminates
//! on its own once the counter reaches the target. Rendering between polls
//! is cheap enough that the reporter's wakeups do not contend with timed
//! windows, which only run on the measurement thread.

use indicatif::{HumanDuration, ProgressBar, ProgressStyle};
use slopebench_core::{Clock, ProgressCounter};
use std::sync::Arc;
use std::thread::{self, JoinHandle};
use std::time::Duration;

/// How often the reporter wakes to re-render.
const POLL_INTERVAL: Duration = Duration::from_millis(200);

/// Remaining time projected from elapsed time and fractional completion:
/// `elapsed * (1 - progress) / progress`. `None` until the first window
/// completes (no rate to extrapolate from) and once the target is reached.
fn eta_ns(elapsed_ns: f64, completed: u64, target: u64) -> Option<f64> {
    if completed == 0 || completed >= target {
        return None;
    }
    let progress = completed as f64 / target as f64;
    Some(elapsed_ns * (1.0 - progress) / progress)
}

/// Handle to the reporter thread for one benchmark run.
pub struct ProgressReporter {
    handle: JoinHandle<()>,
}

impl ProgressReporter {
    /// Spawn a reporter rendering to the terminal.
    pub fn spawn(counter: Arc<ProgressCounter>, target: u64, resolution: u64) -> Self {
        let bar = ProgressBar::new(target);
        bar.set_style(
            ProgressStyle::default_bar()
                .template("{prefix} [{bar:40}] {percent:>3}% {msg}")
                .unwrap_or_else(|_| ProgressStyle::default_bar())
                .progress_chars("=> "),
        );
        bar.set_prefix(format!("benchmarking (resolution {resolution})"));
        Self::spawn_with_bar(counter, target, bar)
    }

    /// Spawn a reporter with no visible output. Same polling lifecycle, so
    /// quiet runs exercise the identical thread structure.
    pub fn spawn_hidden(counter: Arc<ProgressCounter>, target: u64) -> Self {
        Self::spawn_with_bar(counter, target, ProgressBar::hidden())
    }

    fn spawn_with_bar(counter: Arc<ProgressCounter>, target: u64, bar: ProgressBar) -> Self {
        let handle = thread::spawn(move || {
            let clock = Clock::mark();
            loop {
                let completed = counter.get();
                if completed >= target {
                    break;
                }
                bar.set_position(completed);
                match eta_ns(clock.elapsed_ns(), completed, target) {
                    Some(remaining) => bar.set_message(format!(
                        "(eta {})",
                        HumanDuration(Duration::from_nanos(remaining as u64))
                    )),
                    None => bar.set_message("(eta --)"),
                }
                thread::sleep(POLL_INTERVAL);
            }
            bar.set_position(target);
            bar.finish_with_message("done");
        });
        Self { handle }
    }

    /// Wait for the reporter to observe completion and exit.
    pub fn join(self) {
        // The reporter only sleeps and renders; a panic there is a bug, so
        // resume it on the measurement thread rather than swallow it.
        if let Err(panic) = self.handle.join() {
            std::panic::resume_unwind(panic);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_hidden_reporter_terminates_at_target() {
        let counter = Arc::new(ProgressCounter::new());
        let reporter = ProgressReporter::spawn_hidden(Arc::clone(&counter), 5);

        for _ in 0..5 {
            counter.advance();
        }
        reporter.join();
        assert_eq!(counter.get(), 5);
    }

    #[test]
    fn test_reporter_with_zero_target_exits_immediately() {
        let counter = Arc::new(ProgressCounter::new());
        ProgressReporter::spawn_hidden(counter, 0).join();
    }

    #[test]
    fn test_eta_extrapolates_remaining_fraction() {
        // A quarter done in 100ns leaves three quarters: 300ns to go.
        let eta = eta_ns(100.0, 25, 100).unwrap();
        assert!((eta - 300.0).abs() < 1e-9);

        // Halfway: remaining equals elapsed.
        let eta = eta_ns(4e9, 50, 100).unwrap();
        assert!((eta - 4e9).abs() < 1e-3);
    }

    #[test]
    fn test_eta_undefined_at_the_edges() {
        assert_eq!(eta_ns(100.0, 0, 100), None);
        assert_eq!(eta_ns(100.0, 100, 100), None);
        assert_eq!(eta_ns(100.0, 150, 100), None);
    }
}

//! Compute-time accounting
//!
//! The streaming tracker reports only the time spent on its own work, not
//! the time spent waiting on the entity source. [`Stopwatch`] accumulates
//! running intervals and is paused around every source pull.

use std::time::{Duration, Instant};

/// Pausable wall-clock accumulator
#[derive(Debug, Clone, Copy, Default)]
pub struct Stopwatch {
    accumulated: Duration,
    running_since: Option<Instant>,
}

impl Stopwatch {
    /// Create a stopwatch that is already running
    #[must_use]
    pub fn start() -> Self {
        Self {
            accumulated: Duration::ZERO,
            running_since: Some(Instant::now()),
        }
    }

    /// Stop accumulating. No-op if already paused.
    pub fn pause(&mut self) {
        if let Some(since) = self.running_since.take() {
            self.accumulated += since.elapsed();
        }
    }

    /// Continue accumulating. No-op if already running.
    pub fn resume(&mut self) {
        if self.running_since.is_none() {
            self.running_since = Some(Instant::now());
        }
    }

    /// Run `f` with the stopwatch paused.
    pub fn paused<R>(&mut self, f: impl FnOnce() -> R) -> R {
        self.pause();
        let out = f();
        self.resume();
        out
    }

    /// Total accumulated time, including the current running interval
    #[must_use]
    pub fn elapsed(&self) -> Duration {
        self.accumulated + self.running_since.map_or(Duration::ZERO, |since| since.elapsed())
    }

    /// Stop the stopwatch and return the total.
    #[must_use]
    pub fn stop(mut self) -> Duration {
        self.pause();
        self.accumulated
    }
}

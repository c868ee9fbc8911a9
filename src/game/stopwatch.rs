//! Cancellable game timer
//!
//! The stopwatch has no thread of its own. The UI loop calls [`Stopwatch::tick`]
//! periodically; a stopped stopwatch ignores ticks, so a finished or replaced
//! game can never keep counting.

use std::time::{Duration, Instant};

#[derive(Debug, Clone, Default)]
pub struct Stopwatch {
    started_at: Option<Instant>,
    elapsed: Duration,
}

impl Stopwatch {
    /// Start timing now, discarding any previous run
    pub fn start(&mut self) {
        self.start_at(Instant::now());
    }

    pub fn start_at(&mut self, now: Instant) {
        self.started_at = Some(now);
        self.elapsed = Duration::ZERO;
    }

    /// Freeze the elapsed time; further ticks have no effect
    pub fn stop(&mut self) {
        self.stop_at(Instant::now());
    }

    pub fn stop_at(&mut self, now: Instant) {
        if let Some(started_at) = self.started_at.take() {
            self.elapsed = now.saturating_duration_since(started_at);
        }
    }

    /// Refresh the elapsed time of a running stopwatch
    pub fn tick(&mut self) -> Duration {
        self.tick_at(Instant::now())
    }

    pub fn tick_at(&mut self, now: Instant) -> Duration {
        if let Some(started_at) = self.started_at {
            self.elapsed = now.saturating_duration_since(started_at);
        }
        self.elapsed
    }

    #[inline]
    #[must_use]
    pub const fn is_running(&self) -> bool {
        self.started_at.is_some()
    }

    /// Elapsed time as of the last tick or stop
    #[inline]
    #[must_use]
    pub const fn elapsed(&self) -> Duration {
        self.elapsed
    }

    #[inline]
    #[must_use]
    pub const fn elapsed_secs(&self) -> u64 {
        self.elapsed.as_secs()
    }
}

//! Monotonic interval timer

use std::time::{Duration, Instant};

use gpies_core::GpFloat;
use thiserror::Error;

/// Timer errors
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum TimerError {
    #[error("Timer stopped before it was started")]
    NotStarted,
}

/// Interval timer on the monotonic clock.
///
/// Two states: idle (no start point) and started. `start` always moves to
/// started and discards any previous start point. `stop` samples the elapsed
/// time without changing state, so it may be called repeatedly against the
/// same start point.
///
/// `Instant` never goes backwards and ignores wall-clock adjustments, so an
/// interval spanning an NTP correction still measures correctly.
#[derive(Clone, Copy, Debug, Default)]
pub struct Timer {
    start: Option<Instant>,
}

impl Timer {
    /// Create an idle timer
    pub fn new() -> Self {
        Timer { start: None }
    }

    /// Create a timer that is already started
    pub fn started() -> Self {
        Timer {
            start: Some(Instant::now()),
        }
    }

    /// Capture the current instant as the start point
    pub fn start(&mut self) {
        self.start = Some(Instant::now());
    }

    /// Seconds elapsed since the last `start`
    pub fn stop(&self) -> Result<GpFloat, TimerError> {
        self.elapsed().map(duration_secs)
    }

    /// Elapsed time since the last `start` as a `Duration`
    pub fn elapsed(&self) -> Result<Duration, TimerError> {
        self.start
            .map(|start| start.elapsed())
            .ok_or(TimerError::NotStarted)
    }

    pub fn is_started(&self) -> bool {
        self.start.is_some()
    }

    /// Return to the idle state
    pub fn reset(&mut self) {
        self.start = None;
    }
}

/// Time a closure once, returning its value and the seconds it took
pub fn measure<T>(f: impl FnOnce() -> T) -> (T, GpFloat) {
    let start = Instant::now();
    let value = f();
    (value, duration_secs(start.elapsed()))
}

#[inline]
fn duration_secs(duration: Duration) -> GpFloat {
    duration.as_secs_f64() as GpFloat
}

//! Time sources and per-frame delta computation.

use std::cell::Cell;
use std::time::Instant;

/// A monotonically increasing time source, in seconds.
pub trait Clock {
    fn now(&self) -> f64;
}

/// Wall-clock time measured from construction.
pub struct SystemClock {
    start: Instant,
}

impl SystemClock {
    pub fn new() -> Self {
        Self {
            start: Instant::now(),
        }
    }
}

impl Default for SystemClock {
    fn default() -> Self {
        Self::new()
    }
}

impl Clock for SystemClock {
    fn now(&self) -> f64 {
        self.start.elapsed().as_secs_f64()
    }
}

/// Hand-driven clock for deterministic runs.
#[derive(Debug, Default)]
pub struct ManualClock {
    now: Cell<f64>,
}

impl ManualClock {
    pub fn new(start: f64) -> Self {
        Self {
            now: Cell::new(start),
        }
    }

    pub fn advance(&self, seconds: f64) {
        self.now.set(self.now.get() + seconds);
    }

    pub fn set(&self, seconds: f64) {
        self.now.set(seconds);
    }
}

impl Clock for ManualClock {
    fn now(&self) -> f64 {
        self.now.get()
    }
}

/// Converts successive clock samples into a bounded frame delta.
///
/// The first sample yields 0 so an uninitialized previous time cannot produce
/// a huge opening step. Later deltas are clamped to `[0, max_dt]`.
#[derive(Debug, Clone)]
pub struct FrameTimer {
    last: Option<f64>,
    max_dt: f64,
}

impl FrameTimer {
    pub fn new(max_dt: f64) -> Self {
        debug_assert!(max_dt > 0.0, "max_dt must be positive");
        Self { last: None, max_dt }
    }

    /// Record `now` and return the clamped time since the previous sample.
    pub fn delta(&mut self, now: f64) -> f64 {
        let dt = match self.last {
            Some(last) => (now - last).clamp(0.0, self.max_dt),
            None => 0.0,
        };
        self.last = Some(now);
        dt
    }
}

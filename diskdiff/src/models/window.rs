// src/models/window.rs
use std::time::{SystemTime, UNIX_EPOCH};

// Stat times can show up slightly before the wall-clock start, so the
// window opens with a small backdated skew.
const START_SKEW_SECS: f64 = 0.02;

/// A capture whose start has been recorded but whose end is still pending.
/// Closing it is the only way to obtain a [`CaptureWindow`], so the end
/// timestamp is set exactly once.
#[derive(Debug)]
pub struct OpenCapture {
    start: f64,
}

impl OpenCapture {
    /// Records the start of the observed operation.
    #[must_use]
    pub fn begin() -> Self {
        Self {
            start: epoch_now() - START_SKEW_SECS,
        }
    }

    /// Records the end of the observed operation and seals the window.
    #[must_use]
    pub fn close(self) -> CaptureWindow {
        CaptureWindow {
            start: self.start,
            end: epoch_now(),
        }
    }
}

/// The immutable time interval the observed operation ran in, as seconds
/// since the epoch.
#[derive(Debug, Clone, Copy)]
pub struct CaptureWindow {
    start: f64,
    end: f64,
}

impl CaptureWindow {
    #[must_use]
    pub const fn new(start: f64, end: f64) -> Self {
        Self { start, end }
    }

    #[must_use]
    pub const fn start(&self) -> f64 {
        self.start
    }

    #[must_use]
    pub const fn end(&self) -> f64 {
        self.end
    }

    /// True when the timestamp lies strictly inside the window. Both ends
    /// are exclusive: a timestamp equal to either boundary is outside.
    #[must_use]
    pub fn contains(&self, timestamp: f64) -> bool {
        self.start < timestamp && timestamp < self.end
    }
}

/// Current wall-clock time as fractional seconds since the epoch.
#[must_use]
pub fn epoch_now() -> f64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map_or(0.0, |elapsed| elapsed.as_secs_f64())
}

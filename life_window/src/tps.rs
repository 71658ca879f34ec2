// tps.rs - Ticks-per-second meter for the overlay

use std::time::{Duration, Instant};

const WINDOW: Duration = Duration::from_secs(1);

/// Counts ticks over rolling one-second windows and reports the rate of the
/// last complete window.
pub struct TickMeter {
    window_start: Instant,
    ticks: u32,
    rate: f64,
}

impl TickMeter {
    pub fn new(now: Instant) -> Self {
        Self {
            window_start: now,
            ticks: 0,
            rate: 0.0,
        }
    }

    pub fn tick(&mut self, now: Instant) {
        self.ticks += 1;
        let elapsed = now.saturating_duration_since(self.window_start);
        if elapsed >= WINDOW {
            self.rate = f64::from(self.ticks) / elapsed.as_secs_f64();
            self.ticks = 0;
            self.window_start = now;
        }
    }

    pub fn rate(&self) -> f64 {
        self.rate
    }

    /// Restarts measuring, e.g. after a pause.
    pub fn reset(&mut self, now: Instant) {
        *self = Self::new(now);
    }
}

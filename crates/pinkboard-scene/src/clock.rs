//! Frame clock producing per-frame deltas

use std::time::Instant;

/// Tracks frame time. The first tick always yields a zero delta and later
/// deltas are never negative.
pub struct FrameClock {
    /// Total elapsed time in seconds
    pub total_time: f64,
    /// Time since last frame in seconds
    pub delta_time: f64,
    /// Number of ticks so far
    pub frame_count: u64,
    /// Timestamp of the previous tick, in seconds
    last: Option<f64>,
    /// Origin for wall-clock ticks
    origin: Instant,
}

impl Default for FrameClock {
    fn default() -> Self {
        Self {
            total_time: 0.0,
            delta_time: 0.0,
            frame_count: 0,
            last: None,
            origin: Instant::now(),
        }
    }
}

impl FrameClock {
    pub fn new() -> Self {
        Self::default()
    }

    /// Advance using the wall clock. Returns the delta in seconds.
    pub fn tick(&mut self) -> f64 {
        let now = self.origin.elapsed().as_secs_f64();
        self.tick_at(now)
    }

    /// Advance to an externally supplied timestamp (seconds, any origin).
    /// Timestamps that go backwards produce a zero delta.
    pub fn tick_at(&mut self, now: f64) -> f64 {
        self.delta_time = match self.last {
            Some(last) => (now - last).max(0.0),
            None => 0.0,
        };
        self.last = Some(now);
        self.total_time += self.delta_time;
        self.frame_count += 1;
        self.delta_time
    }
}

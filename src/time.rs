//! Fixed-timestep frame clock using an accumulator pattern.
//!
//! The host calls `update()` once per animation frame with a wall-clock
//! timestamp. `FrameClock` turns the variable frame delta into a whole number
//! of fixed ticks, each of which is fed to `Game::update` as a `Duration`.

use std::time::Duration;

pub struct FrameClock {
    /// Milliseconds per tick (e.g. 50ms = 20 ticks/sec)
    ms_per_tick: f64,
    /// Largest frame delta honoured; longer gaps (backgrounded tab) are cut.
    max_frame_ms: f64,
    /// Accumulated milliseconds not yet consumed as ticks
    accumulator: f64,
    /// Total elapsed ticks since creation
    pub total_ticks: u64,
    /// Timestamp of the last update (ms), None if first frame
    last_timestamp: Option<f64>,
}

impl FrameClock {
    pub fn new(ticks_per_sec: u32, max_frame_ms: f64) -> Self {
        Self {
            ms_per_tick: 1000.0 / ticks_per_sec.max(1) as f64,
            max_frame_ms: max_frame_ms.max(0.0),
            accumulator: 0.0,
            total_ticks: 0,
            last_timestamp: None,
        }
    }

    /// Simulated time covered by one tick.
    pub fn tick_duration(&self) -> Duration {
        Duration::from_nanos((self.ms_per_tick * 1_000_000.0).round() as u64)
    }

    /// Feed a wall-clock timestamp (ms). Returns the number of ticks to run.
    pub fn update(&mut self, now_ms: f64) -> u32 {
        let delta = match self.last_timestamp {
            Some(prev) => (now_ms - prev).clamp(0.0, self.max_frame_ms),
            None => 0.0,
        };
        self.last_timestamp = Some(now_ms);

        self.accumulator += delta;
        let ticks = (self.accumulator / self.ms_per_tick) as u32;
        self.accumulator -= ticks as f64 * self.ms_per_tick;
        self.total_ticks += ticks as u64;
        ticks
    }

    /// Forget the last timestamp, e.g. after loading a save.
    pub fn resync(&mut self) {
        self.last_timestamp = None;
        self.accumulator = 0.0;
    }
}

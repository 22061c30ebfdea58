//! Frame timing.
//!
//! [`FrameClock`] hands the simulation the time elapsed since the previous
//! frame. The first tick, and every tick while paused, yields zero.
//!
//! ```ignore
//! let mut clock = FrameClock::new();
//! loop {
//!     let dt = clock.tick();
//!     step.apply(&mut particles, dt, cursor, viewport, &mut rng);
//! }
//! ```

use std::time::{Duration, Instant};

/// Default upper bound on a single frame's delta, in seconds.
pub const DEFAULT_MAX_DELTA: f32 = 0.1;

/// Per-frame delta source.
#[derive(Debug)]
pub struct FrameClock {
    /// Previous tick, `None` before the first one.
    last_tick: Option<Instant>,
    /// Delta returned by the latest tick.
    delta_secs: f32,
    /// Ticks since creation, paused ones included.
    frame_count: u64,
    /// Replaces the measured delta when set.
    fixed_delta: Option<f32>,
    /// Measured deltas are clamped to this before scaling.
    max_delta: f32,
    time_scale: f32,
    paused: bool,
    fps: f32,
    fps_frames: u64,
    fps_window_start: Option<Instant>,
    fps_interval: Duration,
}

impl FrameClock {
    pub fn new() -> Self {
        Self {
            last_tick: None,
            delta_secs: 0.0,
            frame_count: 0,
            fixed_delta: None,
            max_delta: DEFAULT_MAX_DELTA,
            time_scale: 1.0,
            paused: false,
            fps: 0.0,
            fps_frames: 0,
            fps_window_start: None,
            fps_interval: Duration::from_secs(1),
        }
    }

    /// Advance the clock to now and return the frame delta in seconds.
    pub fn tick(&mut self) -> f32 {
        self.tick_at(Instant::now())
    }

    /// Advance the clock to `now`.
    pub fn tick_at(&mut self, now: Instant) -> f32 {
        let measured = match self.last_tick {
            Some(last) => now.saturating_duration_since(last).as_secs_f32(),
            None => 0.0,
        };
        let first = self.last_tick.is_none();
        self.last_tick = Some(now);
        self.frame_count += 1;
        self.update_fps(now);

        self.delta_secs = if self.paused || first {
            0.0
        } else {
            self.fixed_delta.unwrap_or(measured.min(self.max_delta)) * self.time_scale
        };
        self.delta_secs
    }

    fn update_fps(&mut self, now: Instant) {
        let start = *self.fps_window_start.get_or_insert(now);
        self.fps_frames += 1;

        let window = now.saturating_duration_since(start);
        if window >= self.fps_interval {
            self.fps = self.fps_frames as f32 / window.as_secs_f32();
            self.fps_frames = 0;
            self.fps_window_start = Some(now);
        }
    }

    /// Delta returned by the latest tick.
    #[inline]
    pub fn delta(&self) -> f32 {
        self.delta_secs
    }

    #[inline]
    pub fn frame(&self) -> u64 {
        self.frame_count
    }

    /// Frames per second over the last full measurement window.
    #[inline]
    pub fn fps(&self) -> f32 {
        self.fps
    }

    #[inline]
    pub fn is_paused(&self) -> bool {
        self.paused
    }

    pub fn set_paused(&mut self, paused: bool) {
        self.paused = paused;
    }

    pub fn toggle_pause(&mut self) {
        self.paused = !self.paused;
    }

    /// Use a constant delta instead of wall-clock time.
    pub fn set_fixed_delta(&mut self, delta: Option<f32>) {
        self.fixed_delta = delta.map(|d| d.max(0.0));
    }

    pub fn set_max_delta(&mut self, max: f32) {
        self.max_delta = max.max(0.0);
    }

    /// Negative scales are clamped to zero.
    pub fn set_time_scale(&mut self, scale: f32) {
        self.time_scale = scale.max(0.0);
    }

    #[inline]
    pub fn time_scale(&self) -> f32 {
        self.time_scale
    }
}

impl Default for FrameClock {
    fn default() -> Self {
        Self::new()
    }
}

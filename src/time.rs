//! Frame timing.
//!
//! The animation itself is frame-driven: particles move a fixed number of
//! pixels per frame, not per second. [`FrameClock`] only measures how fast
//! frames arrive so the shell can report it.
//!
//! ```ignore
//! let mut clock = FrameClock::new();
//!
//! // once per frame:
//! if clock.tick() {
//!     window.set_title(&format!("plexus - {:.0} fps", clock.fps()));
//! }
//! ```

use std::time::{Duration, Instant};

/// How often the FPS figure is recomputed.
pub const FPS_UPDATE_INTERVAL: Duration = Duration::from_millis(500);

#[derive(Debug)]
pub struct FrameClock {
    /// Total frames since start.
    frame_count: u64,
    /// Last computed FPS.
    fps: f32,
    /// Frame count at the last FPS update.
    fps_frame_count: u64,
    /// Time of the last FPS update.
    fps_update_time: Instant,
}

impl FrameClock {
    pub fn new() -> Self {
        Self::starting_at(Instant::now())
    }

    /// Clock whose first FPS interval is measured from `now`.
    pub fn starting_at(now: Instant) -> Self {
        Self {
            frame_count: 0,
            fps: 0.0,
            fps_frame_count: 0,
            fps_update_time: now,
        }
    }

    /// Record a frame now. Returns true when the FPS figure was refreshed.
    pub fn tick(&mut self) -> bool {
        self.tick_at(Instant::now())
    }

    /// Record a frame at `now`. Returns true when the FPS figure was refreshed.
    pub fn tick_at(&mut self, now: Instant) -> bool {
        self.frame_count += 1;

        let since_update = now.saturating_duration_since(self.fps_update_time);
        if since_update < FPS_UPDATE_INTERVAL {
            return false;
        }

        let frames = self.frame_count - self.fps_frame_count;
        self.fps = frames as f32 / since_update.as_secs_f32();
        self.fps_frame_count = self.frame_count;
        self.fps_update_time = now;
        true
    }

    #[inline]
    pub fn frame(&self) -> u64 {
        self.frame_count
    }

    #[inline]
    pub fn fps(&self) -> f32 {
        self.fps
    }
}

impl Default for FrameClock {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_clock_new() {
        let clock = FrameClock::new();
        assert_eq!(clock.frame(), 0);
        assert_eq!(clock.fps(), 0.0);
    }

    #[test]
    fn test_fps_refreshes_after_interval() {
        let t0 = Instant::now();
        let mut clock = FrameClock::starting_at(t0);
        let frame = Duration::from_millis(10);

        // 49 frames at 10ms stay under the 500ms interval.
        for i in 1..50 {
            assert!(!clock.tick_at(t0 + frame * i));
        }
        assert!(clock.tick_at(t0 + frame * 50));
        assert!((clock.fps() - 100.0).abs() < 0.5);
        assert_eq!(clock.frame(), 50);
    }

    #[test]
    fn test_fps_counts_only_frames_since_refresh() {
        let t0 = Instant::now();
        let mut clock = FrameClock::starting_at(t0);
        assert!(clock.tick_at(t0 + Duration::from_millis(500)));
        assert!((clock.fps() - 2.0).abs() < 1e-3);

        // 10 frames over the next 500ms.
        let t1 = t0 + Duration::from_millis(500);
        for i in 1..10 {
            assert!(!clock.tick_at(t1 + Duration::from_millis(50 * i)));
        }
        assert!(clock.tick_at(t1 + Duration::from_millis(500)));
        assert!((clock.fps() - 20.0).abs() < 1e-3);
        assert_eq!(clock.frame(), 11);
    }
}

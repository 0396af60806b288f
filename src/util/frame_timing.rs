//! Frame pacing for the host render loop.

use web_time::{Duration, Instant};

/// Frame clock with elapsed scene time, FPS smoothing and optional frame
/// limiting.
pub struct FrameTiming {
    /// Target FPS (0 = unlimited)
    target_fps: u32,
    /// Minimum frame duration based on target FPS
    min_frame_duration: Duration,
    /// When the clock was started; idle motion is measured from here
    started: Instant,
    /// Last frame timestamp
    last_frame: Instant,
    /// Smoothed FPS using exponential moving average
    smoothed_fps: f32,
    /// Smoothing factor (lower = smoother, 0.0-1.0)
    smoothing: f32,
    /// Frames completed since start
    frame_count: u64,
}

impl FrameTiming {
    /// Create a new frame clock with the given FPS target (0 = unlimited).
    #[must_use]
    pub fn new(target_fps: u32) -> Self {
        let min_frame_duration = if target_fps > 0 {
            Duration::from_secs_f64(1.0 / f64::from(target_fps))
        } else {
            Duration::ZERO
        };
        let now = Instant::now();

        Self {
            target_fps,
            min_frame_duration,
            started: now,
            last_frame: now,
            smoothed_fps: 60.0,
            smoothing: 0.05,
            frame_count: 0,
        }
    }

    /// Whether enough time has passed since the last frame to render again.
    #[must_use]
    pub fn should_render(&self) -> bool {
        if self.target_fps == 0 {
            return true;
        }
        self.last_frame.elapsed() >= self.min_frame_duration
    }

    /// Time left until the next frame is due (zero when unlimited).
    #[must_use]
    pub fn until_next_frame(&self) -> Duration {
        self.min_frame_duration
            .saturating_sub(self.last_frame.elapsed())
    }

    /// Call after rendering. Returns the scene time elapsed since the
    /// clock started.
    pub fn end_frame(&mut self) -> Duration {
        let now = Instant::now();
        let frame_time = now.duration_since(self.last_frame).as_secs_f32();
        self.last_frame = now;
        self.frame_count += 1;

        if frame_time > 0.0 {
            let instant_fps = 1.0 / frame_time;
            self.smoothed_fps = self.smoothed_fps * (1.0 - self.smoothing)
                + instant_fps * self.smoothing;
        }
        now.duration_since(self.started)
    }

    /// Scene time elapsed since the clock started.
    #[must_use]
    pub fn elapsed(&self) -> Duration {
        self.started.elapsed()
    }

    /// Get the current FPS (smoothed)
    #[must_use]
    pub fn fps(&self) -> f32 {
        self.smoothed_fps
    }

    /// Number of frames completed.
    #[must_use]
    pub fn frame_count(&self) -> u64 {
        self.frame_count
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unlimited_always_renders() {
        let timing = FrameTiming::new(0);
        assert!(timing.should_render());
        assert_eq!(timing.until_next_frame(), Duration::ZERO);
    }

    #[test]
    fn limited_clock_waits_for_next_frame() {
        let timing = FrameTiming::new(1);
        assert!(!timing.should_render());
        assert!(timing.until_next_frame() > Duration::ZERO);
    }

    #[test]
    fn end_frame_counts_and_reports_elapsed() {
        let mut timing = FrameTiming::new(0);
        let first = timing.end_frame();
        let second = timing.end_frame();
        assert_eq!(timing.frame_count(), 2);
        assert!(second >= first);
        assert!(timing.fps() > 0.0);
    }
}

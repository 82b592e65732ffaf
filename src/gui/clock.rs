use std::thread;
use std::time::{Duration, Instant};

use tracing::debug;

pub struct FpsCounter {
    instant: Instant,
    counter: usize,
    window_size_millis: usize,
    previous_fps: f64,
}

impl FpsCounter {
    pub fn new(window_size_millis: usize) -> Self {
        FpsCounter {
            instant: Instant::now(),
            counter: 0,
            previous_fps: 0.0,
            window_size_millis,
        }
    }

    pub fn reset(&mut self) {
        self.instant = Instant::now();
        self.counter = 0;
    }

    pub fn value(&self) -> f64 {
        self.previous_fps
    }

    pub fn increment(&mut self) {
        self.counter += 1;

        let elapsed = self.instant.elapsed();
        if elapsed.as_millis() > self.window_size_millis as u128 {
            self.previous_fps = (1000 * self.counter) as f64 / elapsed.as_millis() as f64;
            debug!(fps = self.previous_fps, "frame rate");
            self.reset();
        }
    }
}

/// Paces the frame loop to a fixed rate.
pub struct FrameClock {
    interval: Duration,
    frame_start: Instant,
    frames: u64,
    fps_counter: FpsCounter,
}

impl FrameClock {
    pub fn new(fps: u64) -> Self {
        assert!(fps > 0, "Frame rate must be positive");
        FrameClock {
            interval: Duration::from_secs_f64(1.0 / fps as f64),
            frame_start: Instant::now(),
            frames: 0,
            fps_counter: FpsCounter::new(1000),
        }
    }

    pub fn interval(&self) -> Duration {
        self.interval
    }

    pub fn frames(&self) -> u64 {
        self.frames
    }

    pub fn fps(&self) -> f64 {
        self.fps_counter.value()
    }

    /// How long to wait, as of `now`, before the next frame may start.
    pub fn remaining(&self, now: Instant) -> Duration {
        (self.frame_start + self.interval).saturating_duration_since(now)
    }

    /// Blocks until a full interval has passed since the current frame began,
    /// then starts the next one.
    pub fn wait(&mut self) {
        let remaining = self.remaining(Instant::now());
        if !remaining.is_zero() {
            thread::sleep(remaining);
        }
        self.frame_start = Instant::now();
        self.frames += 1;
        self.fps_counter.increment();
    }
}

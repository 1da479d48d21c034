//! Clocks and frame pacing

use std::thread;
use std::time::{Duration, Instant};

use crate::consts::{FRAME_DT, TARGET_FPS};

/// Source of monotonic time for the simulation
pub trait Clock {
    /// Seconds since the clock's origin
    fn now_secs(&self) -> f64;

    /// Called once after every simulated frame
    fn end_frame(&mut self);
}

/// Sleeps out whatever is left of each frame's time budget
#[derive(Debug)]
pub struct FrameLimiter {
    budget: Duration,
    last: Instant,
}

impl FrameLimiter {
    pub fn new(fps: u32) -> Self {
        Self {
            budget: Duration::from_secs_f64(1.0 / fps.max(1) as f64),
            last: Instant::now(),
        }
    }

    /// Block until one frame budget has passed since the previous call
    pub fn wait(&mut self) {
        let elapsed = self.last.elapsed();
        if elapsed < self.budget {
            thread::sleep(self.budget - elapsed);
        }
        self.last = Instant::now();
    }
}

/// Wall-clock time, paced to the target frame rate
#[derive(Debug)]
pub struct SystemClock {
    origin: Instant,
    limiter: FrameLimiter,
}

impl SystemClock {
    pub fn new() -> Self {
        Self {
            origin: Instant::now(),
            limiter: FrameLimiter::new(TARGET_FPS),
        }
    }
}

impl Default for SystemClock {
    fn default() -> Self {
        Self::new()
    }
}

impl Clock for SystemClock {
    fn now_secs(&self) -> f64 {
        self.origin.elapsed().as_secs_f64()
    }

    fn end_frame(&mut self) {
        self.limiter.wait();
    }
}

/// Simulated time that advances a fixed step per frame without sleeping
#[derive(Debug, Clone)]
pub struct FixedStepClock {
    step: f64,
    frames: u64,
}

impl FixedStepClock {
    pub fn new(step: f64) -> Self {
        Self { step, frames: 0 }
    }
}

impl Default for FixedStepClock {
    fn default() -> Self {
        Self::new(FRAME_DT)
    }
}

impl Clock for FixedStepClock {
    fn now_secs(&self) -> f64 {
        self.frames as f64 * self.step
    }

    fn end_frame(&mut self) {
        self.frames += 1;
    }
}

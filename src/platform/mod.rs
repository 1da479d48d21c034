//! Platform abstraction layer
//!
//! Handles the parts of the frame loop that depend on the host:
//! - Monotonic time for the obstacle cycle
//! - Frame pacing at the target rate

pub mod time;

pub use time::{Clock, FixedStepClock, FrameLimiter, SystemClock};

//! Starfield Pong - a classic paddle duel with timed obstacle blocks
//!
//! Core modules:
//! - `sim`: Deterministic simulation (movement, collisions, scoring, effects)
//! - `audio`: Sound events and the playback sink
//! - `platform`: Timing sources and frame pacing
//! - `settings`: Startup configuration and validation

pub mod audio;
pub mod platform;
pub mod settings;
pub mod sim;

pub use audio::{AudioSink, LogAudioSink, NullAudioSink, SoundEffect};
pub use settings::{ConfigError, FieldDims, Settings};

/// Game configuration constants
///
/// Speeds and durations counted in frames assume the fixed 60 Hz step.
pub mod consts {
    /// Fixed simulation rate
    pub const TARGET_FPS: u32 = 60;
    /// Duration of one frame in seconds
    pub const FRAME_DT: f64 = 1.0 / TARGET_FPS as f64;

    /// Default field dimensions
    pub const FIELD_WIDTH: f32 = 800.0;
    pub const FIELD_HEIGHT: f32 = 600.0;

    /// Paddle defaults
    pub const PADDLE_WIDTH: f32 = 15.0;
    pub const PADDLE_HEIGHT: f32 = 90.0;
    pub const PADDLE_SPEED: f32 = 8.0;
    /// Horizontal distance between a paddle and its side wall
    pub const PADDLE_INSET: f32 = 50.0;

    /// Ball defaults
    pub const BALL_SIZE: f32 = 15.0;
    /// Per-axis speed magnitude (pixels per frame)
    pub const BALL_SPEED: f32 = 4.0;
    /// Number of past centers kept for the fade trail
    pub const TRAIL_LENGTH: usize = 10;

    /// Obstacle blocks are as thin as paddles and as tall as paddles
    pub const BLOCK_WIDTH: f32 = PADDLE_WIDTH;
    pub const BLOCK_HEIGHT: f32 = PADDLE_HEIGHT;
    pub const BLOCK_VISIBLE_SECS: f64 = 8.0;
    pub const BLOCK_HIDDEN_SECS: f64 = 10.0;
    pub const MAX_BLOCKS_PER_SPAWN: u32 = 2;

    /// Screen shake
    pub const SHAKE_INTENSITY: i32 = 10;
    pub const SHAKE_DURATION_FRAMES: u32 = 20;

    /// Starfield decoration
    pub const STAR_COUNT: usize = 50;
    pub const STAR_MAX_SPEED: f32 = 2.0;
    pub const STAR_MAX_SIZE: u8 = 3;
    /// Mixed into the session seed for the star RNG
    pub const STAR_SEED_SALT: u64 = 0x57A2_F1E1_D000_0001;
}

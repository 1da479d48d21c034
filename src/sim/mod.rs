//! Deterministic simulation module
//!
//! All gameplay logic lives here. This module must be pure and deterministic:
//! - Fixed per-frame steps
//! - Seeded RNG only, owned by the session
//! - Stable iteration order (blocks in spawn order)
//! - No rendering, audio playback or platform dependencies

pub mod collision;
pub mod obstacles;
pub mod opponent;
pub mod rect;
pub mod shake;
pub mod starfield;
pub mod state;
pub mod tick;

pub use collision::resolve_collisions;
pub use obstacles::{ObstacleCycle, ObstaclePhase};
pub use opponent::opponent_intent;
pub use rect::{Rect, intersects};
pub use shake::ShakeState;
pub use starfield::{Star, Starfield};
pub use state::{Ball, Block, Direction, GameEvent, Paddle, Session, Side};
pub use tick::{FrameOutput, TickInput, tick};

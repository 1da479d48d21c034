//! Game state and core simulation types
//!
//! The `Session` aggregate owns every piece of mutable game state. Subsystems
//! receive the parts they need by reference each frame.

use std::collections::VecDeque;

use glam::Vec2;
use rand::{Rng, SeedableRng};
use rand_pcg::Pcg32;
use serde::{Deserialize, Serialize};

use super::obstacles::ObstacleCycle;
use super::rect::Rect;
use super::shake::ShakeState;
use super::starfield::Starfield;
use crate::audio::SoundEffect;
use crate::consts::*;
use crate::settings::FieldDims;

/// Vertical movement directive for a paddle
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Direction {
    Up,
    Down,
}

/// Which paddle an event belongs to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Side {
    /// Human-controlled paddle on the left
    Player,
    /// Scripted paddle on the right
    Opponent,
}

/// Something that happened during a frame
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GameEvent {
    /// Ball bounced off a paddle
    PaddleHit { side: Side },
    /// Ball destroyed an obstacle block (player scores)
    BlockDestroyed {
        block_id: u32,
        /// (player, opponent) right after this point
        scores: (u32, u32),
    },
    /// Ball crossed a side wall
    Goal {
        scorer: Side,
        /// (player, opponent) right after this point
        scores: (u32, u32),
    },
}

impl GameEvent {
    /// Sound the audio sink should play for this event
    pub fn sound(&self) -> SoundEffect {
        match self {
            GameEvent::PaddleHit { .. } => SoundEffect::PaddleHit,
            GameEvent::BlockDestroyed { .. } | GameEvent::Goal { .. } => SoundEffect::Boom,
        }
    }
}

/// A paddle
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Paddle {
    pub rect: Rect,
    /// Pixels moved per frame
    pub speed: f32,
    pub score: u32,
}

impl Paddle {
    /// Create a paddle at `x`, vertically centered in the field
    pub fn new(x: f32, field: FieldDims) -> Self {
        Self {
            rect: Rect::new(
                x,
                field.height / 2.0 - PADDLE_HEIGHT / 2.0,
                PADDLE_WIDTH,
                PADDLE_HEIGHT,
            ),
            speed: PADDLE_SPEED,
            score: 0,
        }
    }

    /// Shift one step in `direction`, clamped to `[0, field_height]`
    pub fn move_in(&mut self, direction: Direction, field_height: f32) {
        let dy = match direction {
            Direction::Up => -self.speed,
            Direction::Down => self.speed,
        };
        let max_y = (field_height - self.rect.h).max(0.0);
        self.rect.y = (self.rect.y + dy).min(max_y).max(0.0);
    }
}

/// The ball
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Ball {
    pub rect: Rect,
    /// Per-frame displacement; each component is nonzero
    pub vel: Vec2,
    /// Recent centers, oldest first (rendering only)
    pub trail: VecDeque<Vec2>,
}

impl Ball {
    /// Create a centered ball with random direction signs
    pub fn new<R: Rng + ?Sized>(field: FieldDims, rng: &mut R) -> Self {
        Self {
            rect: Rect::from_center(field.center(), BALL_SIZE, BALL_SIZE),
            vel: Vec2::new(BALL_SPEED * random_sign(rng), BALL_SPEED * random_sign(rng)),
            trail: VecDeque::with_capacity(TRAIL_LENGTH),
        }
    }

    /// Record the current center, advance one frame and bounce off the
    /// top/bottom walls.
    ///
    /// The position is not corrected on a bounce, so the ball may sit slightly
    /// past the wall for the frame it reflects.
    pub fn advance(&mut self, field_height: f32) {
        self.record_trail();
        self.rect.translate(self.vel);

        if self.rect.top() <= 0.0 || self.rect.bottom() >= field_height {
            self.vel.y = -self.vel.y;
        }
    }

    /// Recenter, re-roll both direction signs and drop the trail
    pub fn reset<R: Rng + ?Sized>(&mut self, field: FieldDims, rng: &mut R) {
        self.rect.set_center(field.center());
        self.vel.x *= random_sign(rng);
        self.vel.y *= random_sign(rng);
        self.trail.clear();
    }

    fn record_trail(&mut self) {
        if self.trail.len() == TRAIL_LENGTH {
            self.trail.pop_front();
        }
        self.trail.push_back(self.rect.center());
    }

    /// Fade alpha per trail point: oldest is transparent, newest nearly opaque
    pub fn trail_alphas(&self) -> Vec<u8> {
        let len = self.trail.len();
        (0..len).map(|i| (255 * i / len) as u8).collect()
    }
}

/// A transient obstacle block
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Block {
    pub id: u32,
    pub rect: Rect,
}

/// Complete game session
#[derive(Debug, Clone)]
pub struct Session {
    pub field: FieldDims,
    /// Seed the session RNG was created from
    pub seed: u64,
    pub(crate) rng: Pcg32,
    /// Frames simulated so far
    pub frame: u64,
    pub player: Paddle,
    pub opponent: Paddle,
    pub ball: Ball,
    pub obstacles: ObstacleCycle,
    pub shake: ShakeState,
    /// Background decoration (not gameplay-affecting)
    pub stars: Starfield,
}

impl Session {
    /// Start a session; `now_secs` starts the obstacle phase timer
    pub fn new(field: FieldDims, seed: u64, now_secs: f64) -> Self {
        let mut rng = Pcg32::seed_from_u64(seed);
        let ball = Ball::new(field, &mut rng);
        let stars = Starfield::new(STAR_COUNT, field, seed ^ STAR_SEED_SALT);

        log::debug!("Session started (seed {seed}, field {}x{})", field.width, field.height);

        Self {
            field,
            seed,
            rng,
            frame: 0,
            player: Paddle::new(PADDLE_INSET, field),
            opponent: Paddle::new(field.width - PADDLE_INSET - PADDLE_WIDTH, field),
            ball,
            obstacles: ObstacleCycle::new(now_secs),
            shake: ShakeState::new(SHAKE_INTENSITY),
            stars,
        }
    }

    /// Enable or disable the starfield decoration
    pub fn with_starfield(mut self, enabled: bool) -> Self {
        if !enabled {
            self.stars.clear();
        }
        self
    }

    /// Score pair as (player, opponent)
    pub fn scores(&self) -> (u32, u32) {
        (self.player.score, self.opponent.score)
    }
}

/// +1.0 or -1.0 with equal probability
pub(crate) fn random_sign<R: Rng + ?Sized>(rng: &mut R) -> f32 {
    if rng.random_bool(0.5) { 1.0 } else { -1.0 }
}

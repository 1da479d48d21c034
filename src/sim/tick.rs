//! Per-frame simulation step
//!
//! One call to [`tick`] advances the session by exactly one frame and returns
//! everything rendering and audio need for that frame.

use glam::Vec2;
use serde::{Deserialize, Serialize};

use super::collision::resolve_collisions;
use super::obstacles::ObstaclePhase;
use super::opponent::opponent_intent;
use super::rect::Rect;
use super::starfield::Star;
use super::state::{Direction, GameEvent, Session, Side};
use crate::audio::SoundEffect;
use crate::settings::Settings;

/// Human input for a single frame
#[derive(Debug, Clone, Copy, Default)]
pub struct TickInput {
    pub up: bool,
    pub down: bool,
}

/// Read-only view of a frame, handed to rendering and audio
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FrameOutput {
    pub frame: u64,
    pub player: Rect,
    pub player_score: u32,
    pub opponent: Rect,
    pub opponent_score: u32,
    pub ball: Rect,
    /// Past ball centers, oldest first
    pub trail: Vec<Vec2>,
    /// Fade alpha per trail point
    pub trail_alphas: Vec<u8>,
    pub blocks: Vec<Rect>,
    pub obstacle_phase: ObstaclePhase,
    pub stars: Vec<Star>,
    /// Offset to apply to every drawn position
    pub shake_offset: Vec2,
    pub events: Vec<GameEvent>,
    /// Sounds to play, in emission order
    pub sounds: Vec<SoundEffect>,
}

impl FrameOutput {
    /// Strip effects the player has turned off
    pub fn apply_settings(&mut self, settings: &Settings) {
        if !settings.effective_screen_shake() {
            self.shake_offset = Vec2::ZERO;
        }
        if !settings.trails {
            self.trail.clear();
            self.trail_alphas.clear();
        }
    }
}

/// Advance the session by one frame at wall-clock time `now` (seconds)
pub fn tick(session: &mut Session, input: &TickInput, now: f64) -> FrameOutput {
    let field = session.field;

    session.obstacles.update(now, field, &mut session.rng);

    if input.up {
        session.player.move_in(Direction::Up, field.height);
    }
    if input.down {
        session.player.move_in(Direction::Down, field.height);
    }

    if let Some(direction) = opponent_intent(&session.opponent, &session.ball) {
        session.opponent.move_in(direction, field.height);
    }

    session.ball.advance(field.height);

    let events = resolve_collisions(session);
    for event in &events {
        let (scorer, (player, opponent)) = match *event {
            GameEvent::Goal { scorer, scores } => (scorer, scores),
            GameEvent::BlockDestroyed { scores, .. } => (Side::Player, scores),
            GameEvent::PaddleHit { .. } => continue,
        };
        log::info!(
            "{:?} scores ({player} - {opponent}) at frame {}",
            scorer,
            session.frame
        );
    }

    let shake_offset = session.shake.next_offset(&mut session.rng);
    session.stars.update(field);
    session.frame += 1;

    snapshot(session, shake_offset, events)
}

fn snapshot(session: &Session, shake_offset: Vec2, events: Vec<GameEvent>) -> FrameOutput {
    FrameOutput {
        frame: session.frame,
        player: session.player.rect,
        player_score: session.player.score,
        opponent: session.opponent.rect,
        opponent_score: session.opponent.score,
        ball: session.ball.rect,
        trail: session.ball.trail.iter().copied().collect(),
        trail_alphas: session.ball.trail_alphas(),
        blocks: session.obstacles.blocks.iter().map(|b| b.rect).collect(),
        obstacle_phase: session.obstacles.phase,
        stars: session.stars.stars.clone(),
        shake_offset,
        sounds: events.iter().map(GameEvent::sound).collect(),
        events,
    }
}

//! Collision detection, response and scoring
//!
//! Runs once per frame after the ball has moved. Checks happen in a fixed
//! order: paddles, then blocks, then the side walls. Each check sees the ball
//! as left by the previous one, so a block hit that resets the ball to the
//! center also prevents a goal on the same frame.

use super::state::{GameEvent, Session, Side};
use crate::consts::SHAKE_DURATION_FRAMES;

/// Resolve every collision for this frame and return what happened, in order.
pub fn resolve_collisions(session: &mut Session) -> Vec<GameEvent> {
    let mut events = Vec::new();

    check_paddles(session, &mut events);
    check_blocks(session, &mut events);
    check_goals(session, &mut events);

    events
}

/// Reflect horizontally off either paddle.
///
/// The ball is not pushed out of the paddle, so an overlap lasting several
/// frames reflects once per frame.
fn check_paddles(session: &mut Session, events: &mut Vec<GameEvent>) {
    let ball = &mut session.ball;
    let side = if ball.rect.intersects(&session.player.rect) {
        Side::Player
    } else if ball.rect.intersects(&session.opponent.rect) {
        Side::Opponent
    } else {
        return;
    };

    ball.vel.x = -ball.vel.x;
    events.push(GameEvent::PaddleHit { side });
}

/// Destroy any block the ball touches; each one scores for the player.
fn check_blocks(session: &mut Session, events: &mut Vec<GameEvent>) {
    let Session {
        field,
        rng,
        player,
        opponent,
        ball,
        obstacles,
        ..
    } = session;

    let mut i = 0;
    while i < obstacles.blocks.len() {
        if !ball.rect.intersects(&obstacles.blocks[i].rect) {
            i += 1;
            continue;
        }

        let block = obstacles.blocks.remove(i);
        player.score += 1;
        ball.reset(*field, rng);
        events.push(GameEvent::BlockDestroyed {
            block_id: block.id,
            scores: (player.score, opponent.score),
        });
    }
}

/// Score when the ball reaches a side wall, then reset and shake
fn check_goals(session: &mut Session, events: &mut Vec<GameEvent>) {
    if session.ball.rect.left() <= 0.0 {
        session.opponent.score += 1;
        goal(session, Side::Opponent, events);
    }
    if session.ball.rect.right() >= session.field.width {
        session.player.score += 1;
        goal(session, Side::Player, events);
    }
}

fn goal(session: &mut Session, scorer: Side, events: &mut Vec<GameEvent>) {
    session.ball.reset(session.field, &mut session.rng);
    session.shake.trigger(SHAKE_DURATION_FRAMES);
    events.push(GameEvent::Goal {
        scorer,
        scores: session.scores(),
    });
}

//! Scripted opponent: chase the ball's height, nothing more

use std::cmp::Ordering;

use super::state::{Ball, Direction, Paddle};

/// Movement intent for `paddle` given the ball's position.
///
/// Moves toward the ball's vertical center; stays put on an exact match.
pub fn opponent_intent(paddle: &Paddle, ball: &Ball) -> Option<Direction> {
    match paddle.rect.center_y().partial_cmp(&ball.rect.center_y()) {
        Some(Ordering::Less) => Some(Direction::Down),
        Some(Ordering::Greater) => Some(Direction::Up),
        _ => None,
    }
}

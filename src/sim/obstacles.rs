//! Timed obstacle block cycle
//!
//! Blocks alternate between a hidden phase and a visible phase. Entering the
//! visible phase spawns one or two blocks in the middle band of the field;
//! leaving it removes whatever blocks are left. The ball may destroy blocks
//! early, which never changes the phase.

use rand::Rng;
use serde::{Deserialize, Serialize};

use super::rect::Rect;
use super::state::Block;
use crate::consts::*;
use crate::settings::FieldDims;

/// Current obstacle phase
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ObstaclePhase {
    /// No blocks on the field
    Hidden,
    /// Blocks spawned and collidable
    Visible,
}

/// Obstacle lifecycle state
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ObstacleCycle {
    pub phase: ObstaclePhase,
    /// Timestamp (seconds) of the last phase transition
    pub phase_started: f64,
    /// Active blocks; always empty while hidden
    pub blocks: Vec<Block>,
    pub hidden_secs: f64,
    pub visible_secs: f64,
    next_id: u32,
}

impl ObstacleCycle {
    /// Start hidden with the phase timer at `now`
    pub fn new(now: f64) -> Self {
        Self {
            phase: ObstaclePhase::Hidden,
            phase_started: now,
            blocks: Vec::new(),
            hidden_secs: BLOCK_HIDDEN_SECS,
            visible_secs: BLOCK_VISIBLE_SECS,
            next_id: 1,
        }
    }

    /// Advance the cycle to `now`. Returns the new phase if a transition happened.
    pub fn update<R: Rng + ?Sized>(
        &mut self,
        now: f64,
        field: FieldDims,
        rng: &mut R,
    ) -> Option<ObstaclePhase> {
        let elapsed = now - self.phase_started;

        match self.phase {
            ObstaclePhase::Hidden if elapsed >= self.hidden_secs => {
                self.spawn_blocks(field, rng);
                self.phase = ObstaclePhase::Visible;
            }
            ObstaclePhase::Visible if elapsed >= self.visible_secs => {
                self.blocks.clear();
                self.phase = ObstaclePhase::Hidden;
            }
            _ => return None,
        }

        self.phase_started = now;
        log::debug!(
            "Obstacles now {:?} at t={:.2}s ({} blocks)",
            self.phase,
            now,
            self.blocks.len()
        );
        Some(self.phase)
    }

    /// Replace the block set with 1..=MAX_BLOCKS_PER_SPAWN fresh blocks
    fn spawn_blocks<R: Rng + ?Sized>(&mut self, field: FieldDims, rng: &mut R) {
        let (x_min, x_max) = spawn_x_range(field);
        let (y_min, y_max) = spawn_y_range(field);

        self.blocks.clear();
        let count = rng.random_range(1..=MAX_BLOCKS_PER_SPAWN);
        for _ in 0..count {
            let x = rng.random_range(x_min..=x_max);
            let y = rng.random_range(y_min..=y_max);
            let id = self.next_id;
            self.next_id += 1;
            self.blocks.push(Block {
                id,
                rect: Rect::new(x, y, BLOCK_WIDTH, BLOCK_HEIGHT),
            });
        }
    }

    /// Seconds until the next phase change
    pub fn time_remaining(&self, now: f64) -> f64 {
        let duration = match self.phase {
            ObstaclePhase::Hidden => self.hidden_secs,
            ObstaclePhase::Visible => self.visible_secs,
        };
        (duration - (now - self.phase_started)).max(0.0)
    }
}

/// Allowed block left edges: the middle half of the field
pub fn spawn_x_range(field: FieldDims) -> (f32, f32) {
    (field.width / 4.0, 3.0 * field.width / 4.0 - BLOCK_WIDTH)
}

/// Allowed block top edges
pub fn spawn_y_range(field: FieldDims) -> (f32, f32) {
    (BLOCK_HEIGHT, field.height - BLOCK_HEIGHT)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand_pcg::Pcg32;

    fn field() -> FieldDims {
        FieldDims::default()
    }

    #[test]
    fn test_stays_hidden_before_duration() {
        let mut rng = Pcg32::seed_from_u64(1);
        let mut cycle = ObstacleCycle::new(100.0);
        assert_eq!(cycle.update(109.9, field(), &mut rng), None);
        assert_eq!(cycle.phase, ObstaclePhase::Hidden);
        assert!(cycle.blocks.is_empty());
    }

    #[test]
    fn test_full_cycle() {
        let mut rng = Pcg32::seed_from_u64(2);
        let mut cycle = ObstacleCycle::new(0.0);

        assert_eq!(cycle.update(10.0, field(), &mut rng), Some(ObstaclePhase::Visible));
        assert!((1..=2).contains(&cycle.blocks.len()));
        assert_eq!(cycle.phase_started, 10.0);

        // Still visible just before the visible duration runs out
        assert_eq!(cycle.update(17.5, field(), &mut rng), None);
        assert!(!cycle.blocks.is_empty());

        assert_eq!(cycle.update(18.0, field(), &mut rng), Some(ObstaclePhase::Hidden));
        assert!(cycle.blocks.is_empty());
        assert_eq!(cycle.phase_started, 18.0);
    }

    #[test]
    fn test_spawned_blocks_within_bounds() {
        let (x_min, x_max) = spawn_x_range(field());
        let (y_min, y_max) = spawn_y_range(field());
        assert_eq!((x_min, x_max), (200.0, 585.0));
        assert_eq!((y_min, y_max), (90.0, 510.0));

        for seed in 0..200 {
            let mut rng = Pcg32::seed_from_u64(seed);
            let mut cycle = ObstacleCycle::new(0.0);
            cycle.update(10.0, field(), &mut rng);
            assert!((1..=2).contains(&cycle.blocks.len()));
            for block in &cycle.blocks {
                assert!(block.rect.x >= x_min && block.rect.x <= x_max);
                assert!(block.rect.y >= y_min && block.rect.y <= y_max);
                assert_eq!((block.rect.w, block.rect.h), (BLOCK_WIDTH, BLOCK_HEIGHT));
            }
        }
    }

    #[test]
    fn test_spawn_count_covers_one_and_two() {
        let mut counts = [0usize; 3];
        for seed in 0..100 {
            let mut rng = Pcg32::seed_from_u64(seed);
            let mut cycle = ObstacleCycle::new(0.0);
            cycle.update(10.0, field(), &mut rng);
            counts[cycle.blocks.len()] += 1;
        }
        assert_eq!(counts[0], 0);
        assert!(counts[1] > 0 && counts[2] > 0);
    }

    #[test]
    fn test_early_removal_keeps_phase() {
        let mut rng = Pcg32::seed_from_u64(5);
        let mut cycle = ObstacleCycle::new(0.0);
        cycle.update(10.0, field(), &mut rng);

        // Every block knocked out before the visible timer runs down
        cycle.blocks.clear();

        assert_eq!(cycle.update(12.0, field(), &mut rng), None);
        assert_eq!(cycle.phase, ObstaclePhase::Visible);
        assert_eq!(cycle.update(18.0, field(), &mut rng), Some(ObstaclePhase::Hidden));
    }

    #[test]
    fn test_block_ids_are_unique_across_spawns() {
        let mut rng = Pcg32::seed_from_u64(9);
        let mut cycle = ObstacleCycle::new(0.0);
        let mut seen = Vec::new();
        let mut now = 0.0;
        for _ in 0..5 {
            now += 10.0;
            cycle.update(now, field(), &mut rng);
            seen.extend(cycle.blocks.iter().map(|b| b.id));
            now += 8.0;
            cycle.update(now, field(), &mut rng);
        }
        let mut dedup = seen.clone();
        dedup.dedup();
        assert_eq!(seen, dedup);
    }

    #[test]
    fn test_time_remaining() {
        let cycle = ObstacleCycle::new(0.0);
        assert_eq!(cycle.time_remaining(4.0), 6.0);
        assert_eq!(cycle.time_remaining(30.0), 0.0);
    }
}

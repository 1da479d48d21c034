//! Screen shake countdown
//!
//! Only affects where things are drawn; simulation positions never move.

use glam::Vec2;
use rand::Rng;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ShakeState {
    /// Frames of shake left (0 = inactive)
    pub remaining: u32,
    /// Maximum offset per axis in pixels
    pub intensity: i32,
}

impl ShakeState {
    pub fn new(intensity: i32) -> Self {
        Self {
            remaining: 0,
            intensity,
        }
    }

    /// Start (or restart) a shake lasting `frames`
    pub fn trigger(&mut self, frames: u32) {
        self.remaining = frames;
    }

    #[inline]
    pub fn is_active(&self) -> bool {
        self.remaining > 0
    }

    /// Offset for this frame; consumes one frame of shake when active
    pub fn next_offset<R: Rng + ?Sized>(&mut self, rng: &mut R) -> Vec2 {
        if !self.is_active() {
            return Vec2::ZERO;
        }
        let i = self.intensity;
        let dx = rng.random_range(-i..=i);
        let dy = rng.random_range(-i..=i);
        self.remaining -= 1;
        Vec2::new(dx as f32, dy as f32)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;
    use rand::SeedableRng;
    use rand_pcg::Pcg32;

    #[test]
    fn test_idle_shake_is_zero() {
        let mut rng = Pcg32::seed_from_u64(0);
        let mut shake = ShakeState::new(10);
        assert_eq!(shake.next_offset(&mut rng), Vec2::ZERO);
        assert_eq!(shake.remaining, 0);
    }

    #[test]
    fn test_offsets_within_intensity() {
        let mut rng = Pcg32::seed_from_u64(4);
        let mut shake = ShakeState::new(10);
        shake.trigger(20);
        for _ in 0..20 {
            let offset = shake.next_offset(&mut rng);
            assert!(offset.x.abs() <= 10.0 && offset.y.abs() <= 10.0);
        }
        assert!(!shake.is_active());
        assert_eq!(shake.next_offset(&mut rng), Vec2::ZERO);
    }

    #[test]
    fn test_retrigger_restarts_countdown() {
        let mut rng = Pcg32::seed_from_u64(4);
        let mut shake = ShakeState::new(10);
        shake.trigger(20);
        for _ in 0..15 {
            shake.next_offset(&mut rng);
        }
        shake.trigger(20);
        assert_eq!(shake.remaining, 20);
    }

    proptest! {
        #[test]
        fn prop_counter_decreases_by_one_until_zero(seed in any::<u64>(), start in 0u32..40, frames in 0usize..80) {
            let mut rng = Pcg32::seed_from_u64(seed);
            let mut shake = ShakeState::new(10);
            shake.trigger(start);
            for _ in 0..frames {
                let before = shake.remaining;
                shake.next_offset(&mut rng);
                let expected = before.saturating_sub(1);
                prop_assert_eq!(shake.remaining, expected);
            }
        }
    }
}

//! Drifting background stars
//!
//! Decoration only. Stars wrap around the field edges and pick a new drift
//! speed on the axis they wrapped.

use glam::Vec2;
use rand::{Rng, SeedableRng};
use rand_pcg::Pcg32;
use serde::{Deserialize, Serialize};

use crate::consts::{STAR_MAX_SIZE, STAR_MAX_SPEED};
use crate::settings::FieldDims;

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Star {
    pub pos: Vec2,
    pub vel: Vec2,
    /// Radius in pixels (1..=3)
    pub size: u8,
}

/// Star decoration with its own RNG, so drawing it never shifts gameplay draws
#[derive(Debug, Clone)]
pub struct Starfield {
    pub stars: Vec<Star>,
    rng: Pcg32,
}

impl Starfield {
    pub fn new(count: usize, field: FieldDims, seed: u64) -> Self {
        let mut rng = Pcg32::seed_from_u64(seed);
        let stars = (0..count)
            .map(|_| Star {
                pos: Vec2::new(
                    rng.random_range(0..=field.width as u32) as f32,
                    rng.random_range(0..=field.height as u32) as f32,
                ),
                vel: Vec2::new(drift(&mut rng), drift(&mut rng)),
                size: rng.random_range(1..=STAR_MAX_SIZE),
            })
            .collect();
        Self { stars, rng }
    }

    /// Remove every star; later updates are no-ops
    pub fn clear(&mut self) {
        self.stars.clear();
    }

    /// Drift every star one frame
    pub fn update(&mut self, field: FieldDims) {
        let rng = &mut self.rng;
        for star in &mut self.stars {
            star.pos += star.vel;

            if star.pos.x < 0.0 {
                star.pos.x = field.width;
                star.vel.x = drift(rng);
            } else if star.pos.x > field.width {
                star.pos.x = 0.0;
                star.vel.x = drift(rng);
            }

            if star.pos.y < 0.0 {
                star.pos.y = field.height;
                star.vel.y = drift(rng);
            } else if star.pos.y > field.height {
                star.pos.y = 0.0;
                star.vel.y = drift(rng);
            }
        }
    }
}

fn drift<R: Rng + ?Sized>(rng: &mut R) -> f32 {
    rng.random_range(-STAR_MAX_SPEED..=STAR_MAX_SPEED)
}

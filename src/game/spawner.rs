//! Food respawning
//!
//! Free slots are refilled at random rather than on a schedule: each frame
//! there is a small chance that one free slot comes back. Mostly good food.

use rand::Rng;
use crate::config::{GameConfig, Metrics};
use super::food::{FoodKind, FoodPool, FOOD_POOL_SIZE};

#[derive(Debug, Clone, Copy)]
pub struct Spawner {
    /// Per-frame chance of refilling a free slot
    pub spawn_chance: f32,
    /// Chance that refilled food is good
    pub good_chance: f32,
}

impl Spawner {
    pub fn from_config(config: &GameConfig) -> Self {
        Self {
            spawn_chance: config.spawn_chance,
            good_chance: config.good_chance,
        }
    }

    /// Maybe bring back one free slot. Returns the slot index if it did.
    pub fn maybe_spawn<R: Rng>(
        &self,
        pool: &mut FoodPool,
        metrics: &Metrics,
        rng: &mut R,
    ) -> Option<usize> {
        if pool.active_count() >= FOOD_POOL_SIZE || rng.gen::<f32>() >= self.spawn_chance {
            return None;
        }

        let kind = if rng.gen::<f32>() < self.good_chance {
            FoodKind::Good
        } else {
            FoodKind::Bad
        };

        let index = pool.first_inactive()?;
        pool.get_mut(index)?.reset(kind, metrics, rng);
        Some(index)
    }
}

//! Frame-counted spawners for pillars and pickups
//!
//! Both spawners count frames independently. When a counter goes past its
//! interval it resets to zero and a spawn attempt happens.
//!
//! # Pickup odds
//!
//! The pickup kind comes from up to three independent uniform draws with
//! early exit, not from one categorical draw:
//!
//! | draw | test     | result        | net chance |
//! |------|----------|---------------|------------|
//! | 1    | `< 0.35` | LifeRestore   | 0.35       |
//! | 2    | `< 0.35` | Hazard        | 0.2275     |
//! | 3    | `< 0.30` | Invincibility | 0.1275     |
//! | -    | -        | nothing       | 0.29       |

use crate::config::GameConfig;
use crate::obstacle::Obstacle;
use crate::pickup::{Pickup, PickupKind};
use rand::Rng;

/// Counts frames and fires once the count exceeds `interval`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SpawnTimer {
    frames: u32,
    interval: u32,
}

impl SpawnTimer {
    pub fn new(interval: u32) -> Self {
        SpawnTimer { frames: 0, interval }
    }

    /// Advance one frame. Returns true (and resets) when the count goes
    /// strictly past the interval, so an interval of 120 fires every 121
    /// frames.
    pub fn tick(&mut self) -> bool {
        self.frames += 1;
        if self.frames > self.interval {
            self.frames = 0;
            true
        } else {
            false
        }
    }
}

/// Emits a pillar pair with a random gap center
#[derive(Debug, Clone)]
pub struct ObstacleSpawner {
    timer: SpawnTimer,
}

impl ObstacleSpawner {
    pub fn new(config: &GameConfig) -> Self {
        ObstacleSpawner {
            timer: SpawnTimer::new(config.obstacle_spawn_interval),
        }
    }

    pub fn tick<R: Rng>(&mut self, rng: &mut R, config: &GameConfig) -> Option<Obstacle> {
        if !self.timer.tick() {
            return None;
        }

        let gap_center = rng.random_range(config.gap_center_min..=config.gap_center_max);
        Some(Obstacle::new(config.spawn_x, gap_center, config.half_gap()))
    }
}

/// Emits at most one pickup or hazard per attempt
#[derive(Debug, Clone)]
pub struct PickupSpawner {
    timer: SpawnTimer,
}

impl PickupSpawner {
    pub fn new(config: &GameConfig) -> Self {
        PickupSpawner {
            timer: SpawnTimer::new(config.pickup_spawn_interval),
        }
    }

    /// Position and size are drawn on every attempt, even ones that end up
    /// spawning nothing.
    pub fn tick<R: Rng>(&mut self, rng: &mut R, config: &GameConfig) -> Option<Pickup> {
        if !self.timer.tick() {
            return None;
        }

        let y = rng.random_range(config.pickup_y_min..=config.pickup_y_max);
        let size = rng.random_range(config.pickup_size_min..=config.pickup_size_max);
        let kind = select_pickup_kind(|| rng.random::<f64>(), config)?;

        Some(Pickup::new(config.spawn_x, y as f32, size as f32, kind))
    }
}

/// Chained Bernoulli trials; `draw` is only called as often as needed.
pub fn select_pickup_kind(mut draw: impl FnMut() -> f64, config: &GameConfig) -> Option<PickupKind> {
    if draw() < config.life_restore_chance {
        Some(PickupKind::LifeRestore)
    } else if draw() < config.hazard_chance {
        Some(PickupKind::Hazard)
    } else if draw() < config.invincibility_chance {
        Some(PickupKind::Invincibility)
    } else {
        None
    }
}

// GameState - the single owner of everything that changes during a run

use super::events::{FrameEvents, PendingInput};
use super::update;
use crate::config::GameConfig;
use crate::obstacle::Obstacle;
use crate::pickup::Pickup;
use crate::player::Player;
use crate::spawner::{ObstacleSpawner, PickupSpawner};
use crate::sprite::SpriteSizes;
use rand::SeedableRng;
use rand_pcg::Pcg32;

/// Current phase of the run
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GamePhase {
    Playing,
    /// Lives ran out. Terminal: `step` does nothing from here on.
    GameOver,
}

/// All mutable game state
///
/// Entity lists are plain `Vec`s in spawn order; collision checks walk them
/// in that order and stop at the first hit.
pub struct GameState {
    pub config: GameConfig,
    pub sprites: SpriteSizes,
    pub player: Player,
    pub obstacles: Vec<Obstacle>,
    pub pickups: Vec<Pickup>,
    pub score: u32,
    pub phase: GamePhase,
    /// Frames stepped so far
    pub frame: u64,
    pub(crate) obstacle_spawner: ObstacleSpawner,
    pub(crate) pickup_spawner: PickupSpawner,
    pub(crate) rng: Pcg32,
    pub(crate) pending: PendingInput,
    seed: u64,
}

impl GameState {
    /// Start a fresh run. The player's bounding box comes from the scaled
    /// player sprite.
    pub fn new(config: GameConfig, sprites: SpriteSizes, seed: u64) -> Self {
        let player = Player::new(&config, sprites.player);
        let obstacle_spawner = ObstacleSpawner::new(&config);
        let pickup_spawner = PickupSpawner::new(&config);

        GameState {
            config,
            sprites,
            player,
            obstacles: Vec::new(),
            pickups: Vec::new(),
            score: 0,
            phase: GamePhase::Playing,
            frame: 0,
            obstacle_spawner,
            pickup_spawner,
            rng: Pcg32::seed_from_u64(seed),
            pending: PendingInput::default(),
            seed,
        }
    }

    pub fn seed(&self) -> u64 {
        self.seed
    }

    /// Record a jump press. It takes effect at the start of the next step,
    /// before gravity is integrated.
    pub fn queue_jump(&mut self) {
        self.pending.queue_jump();
    }

    pub fn is_game_over(&self) -> bool {
        self.phase == GamePhase::GameOver
    }

    /// Advance the simulation by one frame.
    ///
    /// Order: pending input, invulnerability tick, gravity, pillar spawn and
    /// scroll, pickup spawn and scroll, collisions, game-over check.
    pub fn step(&mut self) -> FrameEvents {
        let mut events = FrameEvents::default();
        if self.is_game_over() {
            return events;
        }
        self.frame += 1;

        if self.pending.take_jump() {
            self.player.jump(self.config.jump_strength);
            events.jumped = true;
        }

        self.player.tick_invulnerability(self.config.blink_period_frames);
        update::integrate(&mut self.player, &self.config);

        events.obstacle_spawned = update::update_obstacles(self);
        events.obstacles_passed = update::scroll_obstacles(self);
        events.pickup_spawned = update::update_pickups(self);
        update::scroll_pickups(self);

        events.collision = update::resolve_collisions(self);

        if self.player.is_dead() {
            self.phase = GamePhase::GameOver;
            events.game_over = true;
        }

        events
    }
}

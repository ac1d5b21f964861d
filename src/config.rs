//! Gameplay configuration
//!
//! Every tuning constant of the game lives in [`GameConfig`]. The defaults
//! are the canonical values; a JSON file at [`DEFAULT_CONFIG_PATH`] may
//! override any subset of them.
//!
//! # Example
//!
//! ```rust
//! use woodpecker_dash::config::GameConfig;
//!
//! let config = GameConfig::load_or_default("assets/config/game.json")?;
//! assert_eq!(config.screen_width, 800.0);
//! # Ok::<(), woodpecker_dash::error::GameError>(())
//! ```

use crate::error::GameError;
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Where the binary looks for overrides
pub const DEFAULT_CONFIG_PATH: &str = "assets/config/game.json";

/// Paths of the four sprites the game needs at startup
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AssetPaths {
    pub player: String,
    pub life_restore: String,
    pub hazard: String,
    pub invincibility: String,
}

impl Default for AssetPaths {
    fn default() -> Self {
        AssetPaths {
            player: "assets/sprites/woody.png".to_string(),
            life_restore: "assets/sprites/lives.png".to_string(),
            hazard: "assets/sprites/buzzard.png".to_string(),
            invincibility: "assets/sprites/invincible.png".to_string(),
        }
    }
}

/// All gameplay and presentation constants
///
/// Screen coordinates are Y-up: `y = 0` is the bottom edge of the window.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GameConfig {
    // === Window ===
    pub window_title: String,
    pub screen_width: f32,
    pub screen_height: f32,

    // === Player physics ===
    pub player_x: f32,
    pub player_start_y: f32,
    pub gravity: f32,
    pub jump_strength: f32,
    /// Width every sprite is scaled to; height keeps the aspect ratio
    pub sprite_width: u32,

    // === Lives ===
    pub starting_lives: u32,
    pub max_lives: u32,
    pub hit_invulnerability_frames: u32,
    pub invincibility_frames: u32,
    pub blink_period_frames: u32,

    // === Obstacles ===
    pub obstacle_width: f32,
    pub obstacle_gap: i32,
    pub obstacle_speed: f32,
    pub obstacle_spawn_interval: u32,
    pub gap_center_min: i32,
    pub gap_center_max: i32,
    pub obstacle_margin: f32,

    // === Pickups ===
    pub pickup_speed: f32,
    pub pickup_spawn_interval: u32,
    pub pickup_y_min: i32,
    pub pickup_y_max: i32,
    pub pickup_size_min: i32,
    pub pickup_size_max: i32,
    pub life_restore_chance: f64,
    pub hazard_chance: f64,
    pub invincibility_chance: f64,

    // === Shared ===
    pub spawn_x: f32,
    pub despawn_x: f32,

    // === Loop ===
    pub frame_delay_ms: u64,
    pub game_over_hold_ms: u64,
    /// Fixed RNG seed for reproducible runs; `None` seeds from the OS
    pub seed: Option<u64>,

    pub assets: AssetPaths,
}

impl Default for GameConfig {
    fn default() -> Self {
        GameConfig {
            window_title: "Woody Woodpecker Game".to_string(),
            screen_width: 800.0,
            screen_height: 600.0,

            player_x: 100.0,
            player_start_y: 300.0,
            gravity: -0.5,
            jump_strength: 10.0,
            sprite_width: 56,

            starting_lives: 3,
            max_lives: 7,
            hit_invulnerability_frames: 60,
            invincibility_frames: 240,
            blink_period_frames: 5,

            obstacle_width: 50.0,
            obstacle_gap: 200,
            obstacle_speed: 3.0,
            obstacle_spawn_interval: 120,
            gap_center_min: 100,
            gap_center_max: 500,
            obstacle_margin: 10.0,

            pickup_speed: 6.0,
            pickup_spawn_interval: 100,
            pickup_y_min: 100,
            pickup_y_max: 500,
            pickup_size_min: 10,
            pickup_size_max: 30,
            life_restore_chance: 0.35,
            hazard_chance: 0.35,
            invincibility_chance: 0.30,

            spawn_x: 800.0,
            despawn_x: -50.0,

            frame_delay_ms: 16,
            game_over_hold_ms: 2000,
            seed: None,

            assets: AssetPaths::default(),
        }
    }
}

impl GameConfig {
    /// Parse a config from JSON text. Missing fields fall back to defaults.
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }

    /// Load a config file, failing if it is missing, malformed or
    /// out of range
    pub fn load_from_file(path: impl AsRef<Path>) -> Result<Self, GameError> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path).map_err(|source| GameError::ConfigIo {
            path: path.display().to_string(),
            source,
        })?;
        let config = Self::from_json(&content).map_err(|source| GameError::Config {
            path: path.display().to_string(),
            source,
        })?;
        config
            .validate()
            .inspect_err(|_| log::error!("Rejected config {}", path.display()))?;
        Ok(config)
    }

    /// Reject values that would only fail once the game loop is running,
    /// such as an empty spawn range.
    pub fn validate(&self) -> Result<(), GameError> {
        let checks = [
            (
                self.screen_width > 0.0 && self.screen_height > 0.0,
                "screen_width and screen_height must be positive",
            ),
            (self.sprite_width > 0, "sprite_width must be positive"),
            (self.blink_period_frames > 0, "blink_period_frames must be positive"),
            (
                self.starting_lives > 0 && self.starting_lives <= self.max_lives,
                "starting_lives must be between 1 and max_lives",
            ),
            (self.obstacle_gap >= 0, "obstacle_gap must not be negative"),
            (
                self.gap_center_min <= self.gap_center_max,
                "gap_center_min exceeds gap_center_max",
            ),
            (
                self.pickup_y_min <= self.pickup_y_max,
                "pickup_y_min exceeds pickup_y_max",
            ),
            (
                0 <= self.pickup_size_min && self.pickup_size_min <= self.pickup_size_max,
                "pickup size range must be non-negative and ordered",
            ),
        ];

        match checks.iter().find(|(ok, _)| !ok) {
            Some((_, reason)) => Err(GameError::InvalidConfig(reason.to_string())),
            None => Ok(()),
        }
    }

    /// Load a config file if it exists, otherwise use the defaults
    ///
    /// A file that exists but cannot be parsed is still an error.
    pub fn load_or_default(path: impl AsRef<Path>) -> Result<Self, GameError> {
        let path = path.as_ref();
        if path.exists() {
            let config = Self::load_from_file(path)?;
            log::info!("Loaded config from {}", path.display());
            Ok(config)
        } else {
            log::warn!("No config at {}, using defaults", path.display());
            Ok(Self::default())
        }
    }

    /// Half of the pillar gap, with integer halving
    pub fn half_gap(&self) -> i32 {
        self.obstacle_gap / 2
    }
}

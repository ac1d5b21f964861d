//! Woodpecker Dash core
//!
//! Platform-free game logic for a side-scrolling "fly between the pillars"
//! arcade game: physics, spawning, collision and render dispatch. The SDL2
//! frontend in `main.rs` owns the window, textures and event pump and
//! drives [`game::GameState::step`] once per frame.
//!
//! # Module map
//!
//! - [`config`]: every tuning constant, optionally loaded from JSON
//! - [`player`], [`obstacle`], [`pickup`]: the three entity types
//! - [`spawner`]: frame-counted spawners and the pickup odds
//! - [`collision`]: AABB tests and the per-frame collision query
//! - [`game`]: `GameState` and the step functions
//! - [`render`]: the `DrawTarget` seam and frame/game-over dispatch

pub mod collision;
pub mod config;
pub mod error;
pub mod game;
pub mod obstacle;
pub mod pickup;
pub mod player;
pub mod render;
pub mod spawner;
pub mod sprite;

pub use config::GameConfig;
pub use error::GameError;
pub use game::{GameAction, GamePhase, GameState};

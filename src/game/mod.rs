// Game module - all mutable game state and the per-frame step
//
// This module contains:
// - state.rs: GameState, the single owner of every entity list
// - update.rs: the step functions (physics, spawning, scrolling, collisions)
// - events.rs: input actions, pending input slot, per-frame event report

pub mod events;
pub mod state;
pub mod update;

pub use events::{FrameEvents, GameAction, PendingInput};
pub use state::{GamePhase, GameState};

// Input actions and per-frame event reporting

use crate::collision::Collision;
use crate::pickup::PickupKind;

/// High-level actions produced by the input layer
///
/// The frontend translates raw window events into these; the game loop
/// handles `Quit` itself and forwards `Jump` to [`PendingInput`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameAction {
    Jump,
    Quit,
}

/// Input collected between frames, drained at the start of the next step
///
/// A single slot: several jump presses before one frame collapse into one
/// jump, which is all a velocity override can express anyway.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct PendingInput {
    jump: bool,
}

impl PendingInput {
    pub fn queue_jump(&mut self) {
        self.jump = true;
    }

    /// Take the pending jump, leaving the slot empty
    pub fn take_jump(&mut self) -> bool {
        std::mem::take(&mut self.jump)
    }
}

/// What happened during one call to `GameState::step`
#[derive(Debug, Clone, Default, PartialEq)]
pub struct FrameEvents {
    pub jumped: bool,
    pub obstacle_spawned: bool,
    pub pickup_spawned: Option<PickupKind>,
    /// Pillars scored this frame
    pub obstacles_passed: u32,
    pub collision: Option<Collision>,
    /// Set only on the frame the last life is lost
    pub game_over: bool,
}

impl FrameEvents {
    pub fn is_quiet(&self) -> bool {
        *self == FrameEvents::default()
    }
}

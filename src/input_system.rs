use sdl2::event::Event;
use sdl2::keyboard::Keycode;
use sdl2::EventPump;
use woodpecker_dash::GameAction;

/// The one gameplay key
pub const JUMP_KEY: Keycode = Keycode::Space;

/// InputSystem turns SDL2 events into GameActions
///
/// Jump is edge-triggered: only the initial key-down counts, auto-repeat
/// while the key is held is ignored. Closing the window quits.
pub struct InputSystem {
    jump_key: Keycode,
}

impl InputSystem {
    pub fn new() -> Self {
        InputSystem { jump_key: JUMP_KEY }
    }

    /// Drain all pending SDL2 events for this frame
    ///
    /// This is the only place input is read, so every action it returns
    /// happens before the frame's physics step.
    pub fn poll_events(&self, event_pump: &mut EventPump) -> Vec<GameAction> {
        event_pump
            .poll_iter()
            .filter_map(|event| self.translate_event(&event))
            .collect()
    }

    pub fn translate_event(&self, event: &Event) -> Option<GameAction> {
        match event {
            Event::Quit { .. } => Some(GameAction::Quit),
            Event::KeyDown {
                keycode: Some(key),
                repeat,
                ..
            } => self.handle_keydown(*key, *repeat),
            _ => None,
        }
    }

    fn handle_keydown(&self, key: Keycode, repeat: bool) -> Option<GameAction> {
        if key == self.jump_key && !repeat {
            Some(GameAction::Jump)
        } else {
            None
        }
    }
}

impl Default for InputSystem {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_space_jumps() {
        let input = InputSystem::new();
        assert_eq!(input.handle_keydown(Keycode::Space, false), Some(GameAction::Jump));
    }

    #[test]
    fn test_held_key_repeat_ignored() {
        let input = InputSystem::new();
        assert_eq!(input.handle_keydown(Keycode::Space, true), None);
    }

    #[test]
    fn test_other_keys_ignored() {
        let input = InputSystem::new();
        assert_eq!(input.handle_keydown(Keycode::Up, false), None);
        assert_eq!(input.handle_keydown(Keycode::Escape, false), None);
    }

    #[test]
    fn test_quit_event() {
        let input = InputSystem::new();
        let event = Event::Quit { timestamp: 0 };
        assert_eq!(input.translate_event(&event), Some(GameAction::Quit));
    }
}

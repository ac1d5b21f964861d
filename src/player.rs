use crate::collision::{Aabb, Collidable};
use crate::config::GameConfig;
use crate::sprite::SpriteSize;

/// The flying character
///
/// Only the vertical axis moves; `x` is fixed for the whole run.
/// `invulnerable_timer` counts down once per frame and drives both the
/// collision bypass and the blink effect.
#[derive(Debug, Clone, PartialEq)]
pub struct Player {
    pub x: f32,
    pub y: f32,
    pub velocity_y: f32,
    pub width: f32,
    pub height: f32,
    pub lives: u32,
    pub invulnerable_timer: u32,
    pub visible: bool,
}

impl Player {
    pub fn new(config: &GameConfig, size: SpriteSize) -> Self {
        Player {
            x: config.player_x,
            y: config.player_start_y,
            velocity_y: 0.0,
            width: size.width as f32,
            height: size.height as f32,
            lives: config.starting_lives,
            invulnerable_timer: 0,
            visible: true,
        }
    }

    /// Override the current velocity with an upward kick.
    ///
    /// Works in any state: mid-fall, mid-blink, anywhere.
    pub fn jump(&mut self, strength: f32) {
        self.velocity_y = strength;
    }

    /// One explicit Euler step: velocity first, then position.
    pub fn apply_gravity(&mut self, gravity: f32) {
        self.velocity_y += gravity;
        self.y += self.velocity_y;
    }

    /// Count the invulnerability window down by one frame and update the
    /// blink state.
    pub fn tick_invulnerability(&mut self, blink_period: u32) {
        if self.invulnerable_timer > 0 {
            self.invulnerable_timer -= 1;
            self.visible = (self.invulnerable_timer / blink_period.max(1)) % 2 == 0;
        } else {
            self.visible = true;
        }
    }

    pub fn is_invulnerable(&self) -> bool {
        self.invulnerable_timer > 0
    }

    pub fn is_dead(&self) -> bool {
        self.lives == 0
    }

    /// Lose a life and start the post-hit grace window
    pub fn register_hit(&mut self, grace_frames: u32) {
        self.lives = self.lives.saturating_sub(1);
        self.invulnerable_timer = grace_frames;
    }

    /// Gain a life unless already at `max_lives`. Returns whether a life
    /// was actually added.
    pub fn restore_life(&mut self, max_lives: u32) -> bool {
        if self.lives < max_lives {
            self.lives += 1;
            true
        } else {
            false
        }
    }

    pub fn grant_invincibility(&mut self, frames: u32) {
        self.invulnerable_timer = frames;
    }
}

impl Collidable for Player {
    fn get_bounds(&self) -> Aabb {
        Aabb::new(self.x, self.y, self.width, self.height)
    }
}

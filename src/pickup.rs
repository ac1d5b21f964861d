use crate::collision::{Aabb, Collidable};

/// What a floating object does when the player touches it
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PickupKind {
    /// Extra life, up to the cap
    LifeRestore,
    /// The buzzard: costs a life like a pillar
    Hazard,
    /// Long invulnerability window
    Invincibility,
}

impl PickupKind {
    pub fn name(&self) -> &str {
        match self {
            Self::LifeRestore => "life",
            Self::Hazard => "buzzard",
            Self::Invincibility => "invincible",
        }
    }
}

/// A square pickup or hazard drifting left
#[derive(Debug, Clone, PartialEq)]
pub struct Pickup {
    pub x: f32,
    pub y: f32,
    pub size: f32,
    pub kind: PickupKind,
}

impl Pickup {
    pub fn new(x: f32, y: f32, size: f32, kind: PickupKind) -> Self {
        Pickup { x, y, size, kind }
    }

    pub fn advance(&mut self, speed: f32) {
        self.x -= speed;
    }

    pub fn is_alive(&self, despawn_x: f32) -> bool {
        self.x > despawn_x
    }
}

impl Collidable for Pickup {
    fn get_bounds(&self) -> Aabb {
        Aabb::new(self.x, self.y, self.size, self.size)
    }
}

//! Sprite identities and on-screen sizes
//!
//! The core never touches textures. It only knows which sprite an entity
//! uses and how large that sprite is drawn; the frontend maps each
//! [`SpriteKind`] to a loaded texture.

use crate::pickup::PickupKind;

/// Every textured thing the game draws
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SpriteKind {
    Player,
    LifeRestore,
    Hazard,
    Invincibility,
}

impl From<PickupKind> for SpriteKind {
    fn from(kind: PickupKind) -> Self {
        match kind {
            PickupKind::LifeRestore => SpriteKind::LifeRestore,
            PickupKind::Hazard => SpriteKind::Hazard,
            PickupKind::Invincibility => SpriteKind::Invincibility,
        }
    }
}

/// Display size of a sprite in screen pixels
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SpriteSize {
    pub width: u32,
    pub height: u32,
}

impl SpriteSize {
    pub fn new(width: u32, height: u32) -> Self {
        SpriteSize { width, height }
    }

    /// Scale an image to `target_width`, keeping its aspect ratio.
    ///
    /// The height is truncated, so a 128x100 image at width 56 becomes 56x43.
    pub fn scaled_to_width(image_width: u32, image_height: u32, target_width: u32) -> Self {
        if image_width == 0 {
            return SpriteSize::new(target_width, 0);
        }
        let ratio = target_width as f64 / image_width as f64;
        SpriteSize {
            width: target_width,
            height: (ratio * image_height as f64) as u32,
        }
    }
}

/// Display sizes for all four sprites
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SpriteSizes {
    pub player: SpriteSize,
    pub life_restore: SpriteSize,
    pub hazard: SpriteSize,
    pub invincibility: SpriteSize,
}

impl SpriteSizes {
    /// Same size for every sprite (handy for tests and headless runs)
    pub fn uniform(size: SpriteSize) -> Self {
        SpriteSizes {
            player: size,
            life_restore: size,
            hazard: size,
            invincibility: size,
        }
    }

    pub fn get(&self, kind: SpriteKind) -> SpriteSize {
        match kind {
            SpriteKind::Player => self.player,
            SpriteKind::LifeRestore => self.life_restore,
            SpriteKind::Hazard => self.hazard,
            SpriteKind::Invincibility => self.invincibility,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_scale_keeps_aspect_ratio() {
        assert_eq!(SpriteSize::scaled_to_width(112, 80, 56), SpriteSize::new(56, 40));
        assert_eq!(SpriteSize::scaled_to_width(28, 28, 56), SpriteSize::new(56, 56));
    }

    #[test]
    fn test_scale_truncates_height() {
        // 56 / 128 * 100 = 43.75
        assert_eq!(SpriteSize::scaled_to_width(128, 100, 56), SpriteSize::new(56, 43));
    }

    #[test]
    fn test_zero_width_image() {
        assert_eq!(SpriteSize::scaled_to_width(0, 10, 56), SpriteSize::new(56, 0));
    }

    #[test]
    fn test_pickup_sprite_mapping() {
        assert_eq!(SpriteKind::from(PickupKind::Hazard), SpriteKind::Hazard);
        assert_eq!(SpriteKind::from(PickupKind::LifeRestore), SpriteKind::LifeRestore);
        assert_eq!(SpriteKind::from(PickupKind::Invincibility), SpriteKind::Invincibility);
    }

    #[test]
    fn test_sizes_lookup() {
        let sizes = SpriteSizes {
            player: SpriteSize::new(56, 60),
            ..SpriteSizes::uniform(SpriteSize::new(56, 56))
        };
        assert_eq!(sizes.get(SpriteKind::Player), SpriteSize::new(56, 60));
        assert_eq!(sizes.get(SpriteKind::Hazard), SpriteSize::new(56, 56));
    }
}

use sdl2::image::LoadTexture;
use sdl2::render::{Texture, TextureCreator};
use sdl2::video::WindowContext;
use woodpecker_dash::config::AssetPaths;
use woodpecker_dash::sprite::{SpriteKind, SpriteSize, SpriteSizes};
use woodpecker_dash::GameError;

/// Texture loading helper
///
/// Loads a texture from the given path and reports the size it is drawn
/// at: `sprite_width` wide, height scaled to keep the aspect ratio.
fn load_texture<'a>(
    texture_creator: &'a TextureCreator<WindowContext>,
    path: &str,
    sprite_width: u32,
) -> Result<(Texture<'a>, SpriteSize), GameError> {
    let texture = texture_creator
        .load_texture(path)
        .map_err(|reason| GameError::Asset {
            path: path.to_string(),
            reason,
        })?;

    let query = texture.query();
    let size = SpriteSize::scaled_to_width(query.width, query.height, sprite_width);
    log::info!(
        "Loaded {} ({}x{} -> {}x{})",
        path,
        query.width,
        query.height,
        size.width,
        size.height
    );

    Ok((texture, size))
}

/// All game textures, loaded once at startup
pub struct SpriteAtlas<'a> {
    player: Texture<'a>,
    life_restore: Texture<'a>,
    hazard: Texture<'a>,
    invincibility: Texture<'a>,
    sizes: SpriteSizes,
}

impl<'a> SpriteAtlas<'a> {
    /// Load every sprite. Any missing or unreadable file is fatal.
    pub fn load(
        texture_creator: &'a TextureCreator<WindowContext>,
        paths: &AssetPaths,
        sprite_width: u32,
    ) -> Result<Self, GameError> {
        let (player, player_size) = load_texture(texture_creator, &paths.player, sprite_width)?;
        let (life_restore, life_size) =
            load_texture(texture_creator, &paths.life_restore, sprite_width)?;
        let (hazard, hazard_size) = load_texture(texture_creator, &paths.hazard, sprite_width)?;
        let (invincibility, invincibility_size) =
            load_texture(texture_creator, &paths.invincibility, sprite_width)?;

        Ok(SpriteAtlas {
            player,
            life_restore,
            hazard,
            invincibility,
            sizes: SpriteSizes {
                player: player_size,
                life_restore: life_size,
                hazard: hazard_size,
                invincibility: invincibility_size,
            },
        })
    }

    pub fn texture(&self, kind: SpriteKind) -> &Texture<'a> {
        match kind {
            SpriteKind::Player => &self.player,
            SpriteKind::LifeRestore => &self.life_restore,
            SpriteKind::Hazard => &self.hazard,
            SpriteKind::Invincibility => &self.invincibility,
        }
    }

    pub fn sizes(&self) -> SpriteSizes {
        self.sizes
    }
}

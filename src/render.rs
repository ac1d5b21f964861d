/// Render dispatch for one frame
///
/// The core describes *what* to draw through the [`DrawTarget`] trait; the
/// frontend decides *how* (SDL2 canvas, or a recorder in tests).
///
/// # Architecture
///
/// - `DrawTarget` trait: clear, solid rectangles, sprites, text
/// - `Renderable` enum: one variant per kind of thing on screen
/// - `render_frame()`: collects renderables in layer order and draws them
/// - `render_game_over()`: the terminal screen
///
/// All coordinates are the game's Y-up space: `(0, 0)` is the bottom-left
/// corner of an 800x600 view. Converting to the window's Y-down pixels is
/// the target's job.
use crate::collision::Aabb;
use crate::config::GameConfig;
use crate::game::GameState;
use crate::obstacle::Obstacle;
use crate::pickup::Pickup;
use crate::player::Player;
use crate::sprite::{SpriteKind, SpriteSizes};

/// 24-bit color
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Rgb(pub u8, pub u8, pub u8);

impl Rgb {
    pub const BLACK: Rgb = Rgb(0, 0, 0);
    pub const RED: Rgb = Rgb(255, 0, 0);
    /// Tree-trunk brown used for the pillars
    pub const TRUNK: Rgb = Rgb(128, 89, 13);
}

pub const HUD_LIFE_SIZE: f32 = 20.0;
pub const HUD_LIFE_SPACING: f32 = 30.0;
pub const HUD_LIFE_ORIGIN: (f32, f32) = (10.0, 560.0);
pub const SCORE_POSITION: (f32, f32) = (650.0, 560.0);
pub const SCORE_TEXT_SIZE: u32 = 28;

/// Backend capable of drawing a frame
pub trait DrawTarget {
    fn clear(&mut self, color: Rgb) -> Result<(), String>;

    fn fill_rect(&mut self, rect: Aabb, color: Rgb) -> Result<(), String>;

    /// Draw a textured quad covering `rect`
    fn draw_sprite(&mut self, sprite: SpriteKind, rect: Aabb) -> Result<(), String>;

    /// Draw `text` with its bottom-left corner at `(x, y)`. `size` is the
    /// nominal font size in pixels.
    fn draw_text(&mut self, text: &str, x: f32, y: f32, size: u32, color: Rgb) -> Result<(), String>;
}

/// One thing on screen
pub enum Renderable<'a> {
    Player(&'a Player),
    Obstacle(&'a Obstacle),
    Pickup(&'a Pickup),
    /// HUD life marker, by slot index
    LifeIcon(u32),
    Score(u32),
}

impl<'a> Renderable<'a> {
    fn render(
        &self,
        target: &mut dyn DrawTarget,
        config: &GameConfig,
        sprites: &SpriteSizes,
    ) -> Result<(), String> {
        match self {
            Renderable::Player(player) => {
                target.draw_sprite(
                    SpriteKind::Player,
                    Aabb::new(player.x, player.y, player.width, player.height),
                )
            }
            Renderable::Obstacle(obstacle) => {
                target.fill_rect(
                    obstacle.top_segment(config.obstacle_width, config.screen_height),
                    Rgb::TRUNK,
                )?;
                target.fill_rect(obstacle.bottom_segment(config.obstacle_width), Rgb::TRUNK)
            }
            Renderable::Pickup(pickup) => {
                // Drawn at the sprite's own size; the hitbox is `pickup.size`
                let kind = SpriteKind::from(pickup.kind);
                let size = sprites.get(kind);
                target.draw_sprite(
                    kind,
                    Aabb::new(pickup.x, pickup.y, size.width as f32, size.height as f32),
                )
            }
            Renderable::LifeIcon(slot) => {
                let (x, y) = HUD_LIFE_ORIGIN;
                target.fill_rect(
                    Aabb::new(
                        x + *slot as f32 * HUD_LIFE_SPACING,
                        y,
                        HUD_LIFE_SIZE,
                        HUD_LIFE_SIZE,
                    ),
                    Rgb::RED,
                )
            }
            Renderable::Score(score) => {
                let (x, y) = SCORE_POSITION;
                target.draw_text(&format!("SCORE: {}", score), x, y, SCORE_TEXT_SIZE, Rgb::RED)
            }
        }
    }
}

/// Everything visible this frame, back to front
pub fn collect_renderables(state: &GameState) -> Vec<Renderable<'_>> {
    let mut renderables = Vec::with_capacity(
        2 + state.obstacles.len() + state.pickups.len() + state.player.lives as usize,
    );

    if state.player.visible {
        renderables.push(Renderable::Player(&state.player));
    }
    for obstacle in &state.obstacles {
        renderables.push(Renderable::Obstacle(obstacle));
    }
    for pickup in &state.pickups {
        renderables.push(Renderable::Pickup(pickup));
    }
    for slot in 0..state.player.lives {
        renderables.push(Renderable::LifeIcon(slot));
    }
    renderables.push(Renderable::Score(state.score));

    renderables
}

/// Clear and draw one gameplay frame
pub fn render_frame(target: &mut dyn DrawTarget, state: &GameState) -> Result<(), String> {
    target.clear(Rgb::BLACK)?;

    for renderable in collect_renderables(state) {
        renderable.render(target, &state.config, &state.sprites)?;
    }

    Ok(())
}

/// Draw the final score screen
pub fn render_game_over(target: &mut dyn DrawTarget, score: u32, config: &GameConfig) -> Result<(), String> {
    target.clear(Rgb::BLACK)?;
    target.fill_rect(
        Aabb::new(0.0, 0.0, config.screen_width, config.screen_height),
        Rgb::BLACK,
    )?;
    target.draw_text("GAME OVER", 220.0, 300.0, 64, Rgb::RED)?;
    target.draw_text(&format!("SCORE: {}", score), 300.0, 220.0, 48, Rgb::RED)?;
    Ok(())
}

#[cfg(test)]
pub(crate) mod tests {
    use super::*;
    use crate::pickup::PickupKind;
    use crate::sprite::SpriteSize;

    /// Records every draw call instead of drawing
    #[derive(Default)]
    pub struct RecordingTarget {
        pub calls: Vec<DrawCall>,
    }

    #[derive(Debug, Clone, PartialEq)]
    pub enum DrawCall {
        Clear(Rgb),
        Rect(Aabb, Rgb),
        Sprite(SpriteKind, Aabb),
        Text(String, f32, f32, u32, Rgb),
    }

    impl DrawTarget for RecordingTarget {
        fn clear(&mut self, color: Rgb) -> Result<(), String> {
            self.calls.push(DrawCall::Clear(color));
            Ok(())
        }

        fn fill_rect(&mut self, rect: Aabb, color: Rgb) -> Result<(), String> {
            self.calls.push(DrawCall::Rect(rect, color));
            Ok(())
        }

        fn draw_sprite(&mut self, sprite: SpriteKind, rect: Aabb) -> Result<(), String> {
            self.calls.push(DrawCall::Sprite(sprite, rect));
            Ok(())
        }

        fn draw_text(&mut self, text: &str, x: f32, y: f32, size: u32, color: Rgb) -> Result<(), String> {
            self.calls.push(DrawCall::Text(text.to_string(), x, y, size, color));
            Ok(())
        }
    }

    fn new_state() -> GameState {
        let sprites = SpriteSizes {
            player: SpriteSize::new(56, 50),
            ..SpriteSizes::uniform(SpriteSize::new(56, 40))
        };
        GameState::new(GameConfig::default(), sprites, 1)
    }

    #[test]
    fn test_fresh_frame() {
        let state = new_state();
        let mut target = RecordingTarget::default();
        render_frame(&mut target, &state).unwrap();

        assert_eq!(
            target.calls,
            vec![
                DrawCall::Clear(Rgb::BLACK),
                DrawCall::Sprite(SpriteKind::Player, Aabb::new(100.0, 300.0, 56.0, 50.0)),
                DrawCall::Rect(Aabb::new(10.0, 560.0, 20.0, 20.0), Rgb::RED),
                DrawCall::Rect(Aabb::new(40.0, 560.0, 20.0, 20.0), Rgb::RED),
                DrawCall::Rect(Aabb::new(70.0, 560.0, 20.0, 20.0), Rgb::RED),
                DrawCall::Text("SCORE: 0".to_string(), 650.0, 560.0, 28, Rgb::RED),
            ]
        );
    }

    #[test]
    fn test_hidden_player_not_drawn() {
        let mut state = new_state();
        state.player.visible = false;
        let mut target = RecordingTarget::default();
        render_frame(&mut target, &state).unwrap();

        assert!(!target
            .calls
            .iter()
            .any(|c| matches!(c, DrawCall::Sprite(SpriteKind::Player, _))));
    }

    #[test]
    fn test_obstacles_and_pickups() {
        let mut state = new_state();
        state.obstacles.push(Obstacle::new(400.0, 300, 100));
        state.pickups.push(Pickup::new(600.0, 250.0, 12.0, PickupKind::Hazard));
        state.player.lives = 0;
        state.score = 4;

        let mut target = RecordingTarget::default();
        render_frame(&mut target, &state).unwrap();

        assert_eq!(
            &target.calls[2..],
            &[
                DrawCall::Rect(Aabb::new(400.0, 400.0, 50.0, 200.0), Rgb::TRUNK),
                DrawCall::Rect(Aabb::new(400.0, 0.0, 50.0, 200.0), Rgb::TRUNK),
                DrawCall::Sprite(SpriteKind::Hazard, Aabb::new(600.0, 250.0, 56.0, 40.0)),
                DrawCall::Text("SCORE: 4".to_string(), 650.0, 560.0, 28, Rgb::RED),
            ]
        );
    }

    #[test]
    fn test_game_over_screen() {
        let mut target = RecordingTarget::default();
        render_game_over(&mut target, 17, &GameConfig::default()).unwrap();

        assert_eq!(
            target.calls,
            vec![
                DrawCall::Clear(Rgb::BLACK),
                DrawCall::Rect(Aabb::new(0.0, 0.0, 800.0, 600.0), Rgb::BLACK),
                DrawCall::Text("GAME OVER".to_string(), 220.0, 300.0, 64, Rgb::RED),
                DrawCall::Text("SCORE: 17".to_string(), 300.0, 220.0, 48, Rgb::RED),
            ]
        );
    }
}

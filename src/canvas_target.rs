//! SDL2 canvas implementation of the core's `DrawTarget`
//!
//! The game works in a Y-up 800x600 space. SDL2 is Y-down, so every
//! rectangle is flipped here: `top = screen_height - (y + height)`. This is
//! the fixed orthographic projection; the canvas's logical size takes care
//! of scaling to the real window.

use crate::assets::SpriteAtlas;
use crate::text::{draw_simple_text, scale_for_size, text_height, text_width};
use sdl2::pixels::Color;
use sdl2::rect::Rect;
use sdl2::render::Canvas;
use sdl2::video::Window;
use woodpecker_dash::collision::Aabb;
use woodpecker_dash::render::{DrawTarget, Rgb};
use woodpecker_dash::sprite::SpriteKind;

fn to_color(rgb: Rgb) -> Color {
    Color::RGB(rgb.0, rgb.1, rgb.2)
}

/// Flip a Y-up game rectangle into SDL2 window space.
///
/// Returns `None` for rectangles with no area.
pub fn to_sdl_rect(rect: Aabb, screen_height: f32) -> Option<Rect> {
    if rect.width <= 0.0 || rect.height <= 0.0 {
        return None;
    }
    let top = screen_height - (rect.y + rect.height);
    Some(Rect::new(
        rect.x.round() as i32,
        top.round() as i32,
        rect.width.round() as u32,
        rect.height.round() as u32,
    ))
}

/// Keep a line of text inside the window by sliding it left.
///
/// The bitmap font is wider than a proportional one, so "SCORE: 100" at the
/// HUD position would otherwise run off the right edge.
pub fn fit_text_x(x: f32, width: u32, screen_width: f32) -> f32 {
    x.min(screen_width - width as f32).max(0.0)
}

pub struct CanvasTarget<'c, 'a> {
    canvas: &'c mut Canvas<Window>,
    atlas: &'c SpriteAtlas<'a>,
    screen_width: f32,
    screen_height: f32,
}

impl<'c, 'a> CanvasTarget<'c, 'a> {
    pub fn new(
        canvas: &'c mut Canvas<Window>,
        atlas: &'c SpriteAtlas<'a>,
        screen_width: f32,
        screen_height: f32,
    ) -> Self {
        CanvasTarget {
            canvas,
            atlas,
            screen_width,
            screen_height,
        }
    }

    /// Swap buffers
    pub fn present(&mut self) {
        self.canvas.present();
    }
}

impl DrawTarget for CanvasTarget<'_, '_> {
    fn clear(&mut self, color: Rgb) -> Result<(), String> {
        self.canvas.set_draw_color(to_color(color));
        self.canvas.clear();
        Ok(())
    }

    fn fill_rect(&mut self, rect: Aabb, color: Rgb) -> Result<(), String> {
        let Some(sdl_rect) = to_sdl_rect(rect, self.screen_height) else {
            return Ok(());
        };
        self.canvas.set_draw_color(to_color(color));
        self.canvas.fill_rect(sdl_rect)
    }

    fn draw_sprite(&mut self, sprite: SpriteKind, rect: Aabb) -> Result<(), String> {
        let Some(sdl_rect) = to_sdl_rect(rect, self.screen_height) else {
            return Ok(());
        };
        self.canvas.copy(self.atlas.texture(sprite), None, Some(sdl_rect))
    }

    fn draw_text(&mut self, text: &str, x: f32, y: f32, size: u32, color: Rgb) -> Result<(), String> {
        let scale = scale_for_size(size);
        let left = fit_text_x(x, text_width(text, scale), self.screen_width);
        let top = self.screen_height - y - text_height(scale) as f32;
        draw_simple_text(
            &mut *self.canvas,
            text,
            left.round() as i32,
            top.round() as i32,
            to_color(color),
            scale,
        )
    }
}

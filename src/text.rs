//! Bitmap Text Rendering
//!
//! HUD and game-over text drawn with a 5x7 bitmap font. Each lit pixel of a
//! glyph becomes one filled SDL2 rectangle, scaled by an integer factor.
//! Only the glyphs the game prints are defined; anything else renders as a
//! solid block.

use sdl2::pixels::Color;
use sdl2::rect::Rect;
use sdl2::render::Canvas;
use sdl2::video::Window;

pub const GLYPH_WIDTH: u32 = 5;
pub const GLYPH_HEIGHT: u32 = 7;
/// Horizontal advance per character, including one column of spacing
pub const GLYPH_ADVANCE: u32 = GLYPH_WIDTH + 1;

/// 5x7 rows for a character (1 = pixel on), case-insensitive
fn glyph(c: char) -> [u8; 7] {
    match c.to_ascii_uppercase() {
        'A' => [0b01110, 0b10001, 0b10001, 0b11111, 0b10001, 0b10001, 0b10001],
        'C' => [0b01110, 0b10001, 0b10000, 0b10000, 0b10000, 0b10001, 0b01110],
        'E' => [0b11111, 0b10000, 0b10000, 0b11110, 0b10000, 0b10000, 0b11111],
        'G' => [0b01110, 0b10001, 0b10000, 0b10111, 0b10001, 0b10001, 0b01110],
        'M' => [0b10001, 0b11011, 0b10101, 0b10001, 0b10001, 0b10001, 0b10001],
        'O' => [0b01110, 0b10001, 0b10001, 0b10001, 0b10001, 0b10001, 0b01110],
        'R' => [0b11110, 0b10001, 0b10001, 0b11110, 0b10100, 0b10010, 0b10001],
        'S' => [0b01110, 0b10001, 0b10000, 0b01110, 0b00001, 0b10001, 0b01110],
        'V' => [0b10001, 0b10001, 0b10001, 0b10001, 0b10001, 0b01010, 0b00100],
        '0' => [0b01110, 0b10001, 0b10011, 0b10101, 0b11001, 0b10001, 0b01110],
        '1' => [0b00100, 0b01100, 0b00100, 0b00100, 0b00100, 0b00100, 0b01110],
        '2' => [0b01110, 0b10001, 0b00001, 0b00110, 0b01000, 0b10000, 0b11111],
        '3' => [0b11111, 0b00010, 0b00100, 0b00010, 0b00001, 0b10001, 0b01110],
        '4' => [0b00010, 0b00110, 0b01010, 0b10010, 0b11111, 0b00010, 0b00010],
        '5' => [0b11111, 0b10000, 0b11110, 0b00001, 0b00001, 0b10001, 0b01110],
        '6' => [0b00110, 0b01000, 0b10000, 0b11110, 0b10001, 0b10001, 0b01110],
        '7' => [0b11111, 0b00001, 0b00010, 0b00100, 0b01000, 0b01000, 0b01000],
        '8' => [0b01110, 0b10001, 0b10001, 0b01110, 0b10001, 0b10001, 0b01110],
        '9' => [0b01110, 0b10001, 0b10001, 0b01111, 0b00001, 0b00010, 0b01100],
        ':' => [0b00000, 0b00000, 0b00100, 0b00000, 0b00100, 0b00000, 0b00000],
        ' ' => [0; 7],
        _ => [0b11111; 7], // Full block for unknown
    }
}

/// Pixel scale that makes a glyph roughly `size` pixels tall
///
/// A 5x7 glyph at scale `s` is `7 * s` pixels high, so size 28 maps to
/// scale 3 and size 64 to scale 8.
pub fn scale_for_size(size: u32) -> u32 {
    (size / 8).max(1)
}

pub fn text_height(scale: u32) -> u32 {
    GLYPH_HEIGHT * scale
}

pub fn text_width(text: &str, scale: u32) -> u32 {
    text.chars().count() as u32 * GLYPH_ADVANCE * scale
}

/// Lit cells of a glyph as `(column, row)`, row 0 at the top
fn lit_cells(c: char) -> impl Iterator<Item = (u32, u32)> {
    let rows = glyph(c);
    (0..GLYPH_HEIGHT).flat_map(move |row| {
        (0..GLYPH_WIDTH)
            .filter(move |col| (rows[row as usize] >> (GLYPH_WIDTH - 1 - col)) & 1 == 1)
            .map(move |col| (col, row))
    })
}

/// One square per lit cell, laid out from the top-left corner `(x, y)`
pub fn text_rects(text: &str, x: i32, y: i32, scale: u32) -> Vec<Rect> {
    let step = scale as i32;
    text.chars()
        .zip((0..).map(|i: i32| x + i * (GLYPH_ADVANCE as i32) * step))
        .flat_map(|(c, origin)| {
            lit_cells(c).map(move |(col, row)| {
                Rect::new(origin + col as i32 * step, y + row as i32 * step, scale, scale)
            })
        })
        .collect()
}

/// Renders bitmap text with its top-left corner at `(x, y)` in window pixels
pub fn draw_simple_text(
    canvas: &mut Canvas<Window>,
    text: &str,
    x: i32,
    y: i32,
    color: Color,
    scale: u32,
) -> Result<(), String> {
    canvas.set_draw_color(color);
    canvas.fill_rects(&text_rects(text, x, y, scale))
}

// A tiny 5x7 bitmap font for the row index labels painted into the cached background.
// Only the characters a row label can contain are defined.

use image::{Pixel, Rgba, RgbaImage};

pub const GLYPH_COLUMNS: u32 = 5;
pub const GLYPH_ROWS: u32 = 7;
/// Blank columns between two characters, in font pixels.
const GLYPH_SPACING: u32 = 1;

/// Returns the 5x7 bitmap for a character. Each row uses the low 5 bits, MSB leftmost.
fn char_bitmap(ch: u8) -> Option<[u8; 7]> {
    let bitmap = match ch {
        b'0' => [0b01110, 0b10001, 0b10011, 0b10101, 0b11001, 0b10001, 0b01110],
        b'1' => [0b00100, 0b01100, 0b00100, 0b00100, 0b00100, 0b00100, 0b01110],
        b'2' => [0b01110, 0b10001, 0b00001, 0b00010, 0b00100, 0b01000, 0b11111],
        b'3' => [0b11111, 0b00010, 0b00100, 0b00010, 0b00001, 0b10001, 0b01110],
        b'4' => [0b00010, 0b00110, 0b01010, 0b10010, 0b11111, 0b00010, 0b00010],
        b'5' => [0b11111, 0b10000, 0b11110, 0b00001, 0b00001, 0b10001, 0b01110],
        b'6' => [0b00110, 0b01000, 0b10000, 0b11110, 0b10001, 0b10001, 0b01110],
        b'7' => [0b11111, 0b00001, 0b00010, 0b00100, 0b01000, 0b01000, 0b01000],
        b'8' => [0b01110, 0b10001, 0b10001, 0b01110, 0b10001, 0b10001, 0b01110],
        b'9' => [0b01110, 0b10001, 0b10001, 0b01111, 0b00001, 0b00010, 0b01100],
        b'-' => [0b00000, 0b00000, 0b00000, 0b11111, 0b00000, 0b00000, 0b00000],
        _ => return None,
    };
    Some(bitmap)
}

/// Width in image pixels of `text` drawn at `scale`.
pub fn text_width(text: &str, scale: u32) -> u32 {
    let count = text.len() as u32;
    if count == 0 {
        return 0;
    }
    (count * GLYPH_COLUMNS + (count - 1) * GLYPH_SPACING) * scale
}

/// Draws `text` with its top-left corner at (`x`, `y`), alpha-blended over the image.
/// Pixels falling outside the image are clipped; unknown characters advance the pen without drawing.
pub fn draw_text(image: &mut RgbaImage, text: &str, x: u32, y: u32, scale: u32, color: Rgba<u8>) {
    let scale = scale.max(1);
    let mut pen_x = x;
    for ch in text.bytes() {
        if let Some(bitmap) = char_bitmap(ch) {
            for (row, bits) in bitmap.iter().enumerate() {
                for col in 0..GLYPH_COLUMNS {
                    if (bits >> (GLYPH_COLUMNS - 1 - col)) & 1 == 1 {
                        fill_block(image, pen_x + col * scale, y + row as u32 * scale, scale, color);
                    }
                }
            }
        }
        pen_x += (GLYPH_COLUMNS + GLYPH_SPACING) * scale;
    }
}

fn fill_block(image: &mut RgbaImage, x: u32, y: u32, size: u32, color: Rgba<u8>) {
    let (width, height) = image.dimensions();
    for py in y..(y + size).min(height) {
        for px in x..(x + size).min(width) {
            image.get_pixel_mut(px, py).blend(&color);
        }
    }
}

//! Built-in 5x7 glyph set used to rasterize code characters.
//!
//! The renderer ships no font asset: glyphs come from a fixed bitmap table
//! covering digits and uppercase latin letters. Lowercase input is folded to
//! uppercase and anything else renders as a hollow box, so arbitrary caller
//! input never fails to produce pixels.

use image::{Rgba, RgbaImage};
use imageproc::drawing::draw_filled_rect_mut;
use imageproc::rect::Rect;

/// Bitmap columns per glyph (low 5 bits of each row byte)
pub(crate) const GLYPH_COLS: u32 = 5;

/// Bitmap rows per glyph
pub(crate) const GLYPH_ROWS: u32 = 7;

/// Fallback for characters outside the table
const FALLBACK: [u8; 7] = [0x1F, 0x11, 0x11, 0x11, 0x11, 0x11, 0x1F];

const DIGITS: [[u8; 7]; 10] = [
    [0x0E, 0x11, 0x13, 0x15, 0x19, 0x11, 0x0E], // 0
    [0x04, 0x0C, 0x04, 0x04, 0x04, 0x04, 0x0E], // 1
    [0x0E, 0x11, 0x01, 0x02, 0x04, 0x08, 0x1F], // 2
    [0x1F, 0x02, 0x04, 0x02, 0x01, 0x11, 0x0E], // 3
    [0x02, 0x06, 0x0A, 0x12, 0x1F, 0x02, 0x02], // 4
    [0x1F, 0x10, 0x1E, 0x01, 0x01, 0x11, 0x0E], // 5
    [0x06, 0x08, 0x10, 0x1E, 0x11, 0x11, 0x0E], // 6
    [0x1F, 0x01, 0x02, 0x04, 0x08, 0x08, 0x08], // 7
    [0x0E, 0x11, 0x11, 0x0E, 0x11, 0x11, 0x0E], // 8
    [0x0E, 0x11, 0x11, 0x0F, 0x01, 0x02, 0x0C], // 9
];

const LETTERS: [[u8; 7]; 26] = [
    [0x0E, 0x11, 0x11, 0x1F, 0x11, 0x11, 0x11], // A
    [0x1E, 0x11, 0x11, 0x1E, 0x11, 0x11, 0x1E], // B
    [0x0E, 0x11, 0x10, 0x10, 0x10, 0x11, 0x0E], // C
    [0x1C, 0x12, 0x11, 0x11, 0x11, 0x12, 0x1C], // D
    [0x1F, 0x10, 0x10, 0x1E, 0x10, 0x10, 0x1F], // E
    [0x1F, 0x10, 0x10, 0x1E, 0x10, 0x10, 0x10], // F
    [0x0E, 0x11, 0x10, 0x17, 0x11, 0x11, 0x0F], // G
    [0x11, 0x11, 0x11, 0x1F, 0x11, 0x11, 0x11], // H
    [0x0E, 0x04, 0x04, 0x04, 0x04, 0x04, 0x0E], // I
    [0x07, 0x02, 0x02, 0x02, 0x02, 0x12, 0x0C], // J
    [0x11, 0x12, 0x14, 0x18, 0x14, 0x12, 0x11], // K
    [0x10, 0x10, 0x10, 0x10, 0x10, 0x10, 0x1F], // L
    [0x11, 0x1B, 0x15, 0x15, 0x11, 0x11, 0x11], // M
    [0x11, 0x11, 0x19, 0x15, 0x13, 0x11, 0x11], // N
    [0x0E, 0x11, 0x11, 0x11, 0x11, 0x11, 0x0E], // O
    [0x1E, 0x11, 0x11, 0x1E, 0x10, 0x10, 0x10], // P
    [0x0E, 0x11, 0x11, 0x11, 0x15, 0x12, 0x0D], // Q
    [0x1E, 0x11, 0x11, 0x1E, 0x14, 0x12, 0x11], // R
    [0x0F, 0x10, 0x10, 0x0E, 0x01, 0x01, 0x1E], // S
    [0x1F, 0x04, 0x04, 0x04, 0x04, 0x04, 0x04], // T
    [0x11, 0x11, 0x11, 0x11, 0x11, 0x11, 0x0E], // U
    [0x11, 0x11, 0x11, 0x11, 0x11, 0x0A, 0x04], // V
    [0x11, 0x11, 0x11, 0x15, 0x15, 0x1B, 0x11], // W
    [0x11, 0x11, 0x0A, 0x04, 0x0A, 0x11, 0x11], // X
    [0x11, 0x11, 0x0A, 0x04, 0x04, 0x04, 0x04], // Y
    [0x1F, 0x01, 0x02, 0x04, 0x08, 0x10, 0x1F], // Z
];

/// Bitmap rows for a character, folding lowercase to uppercase
pub(crate) fn rows_for(c: char) -> &'static [u8; 7] {
    match c.to_ascii_uppercase() {
        d @ '0'..='9' => &DIGITS[(d as u8 - b'0') as usize],
        l @ 'A'..='Z' => &LETTERS[(l as u8 - b'A') as usize],
        _ => &FALLBACK,
    }
}

/// Draw one glyph with its top-left corner at `(x, y)`, each bitmap cell
/// scaled to a `scale` x `scale` block. Drawing clips at the canvas edges.
pub(crate) fn draw_glyph(
    img: &mut RgbaImage,
    c: char,
    x: i32,
    y: i32,
    scale: u32,
    color: Rgba<u8>,
) {
    let scale = scale.max(1);
    for (row, &bits) in rows_for(c).iter().enumerate() {
        for col in 0..GLYPH_COLS {
            if bits & (1 << (GLYPH_COLS - 1 - col)) != 0 {
                let rx = x + (col * scale) as i32;
                let ry = y + (row as u32 * scale) as i32;
                draw_filled_rect_mut(img, Rect::at(rx, ry).of_size(scale, scale), color);
            }
        }
    }
}

/// Glyph cell layout for a code on a canvas: scale chosen so the tallest
/// glyph takes roughly three quarters of the canvas height without
/// overflowing its cell.
pub(crate) struct CodeLayout {
    pub scale: u32,
    pub base_y: i32,
    cell_w: f32,
}

impl CodeLayout {
    pub fn for_canvas(width: u32, height: u32, code_len: usize) -> Self {
        let len = code_len.max(1) as u32;
        let cell_w = width as f32 / (len + 1) as f32;
        let scale_h = (height * 3 / 4) / GLYPH_ROWS;
        let scale_w = (cell_w as u32) / GLYPH_COLS;
        let scale = scale_h.min(scale_w).max(1);
        let base_y = (height.saturating_sub(GLYPH_ROWS * scale) / 2) as i32;
        Self {
            scale,
            base_y,
            cell_w,
        }
    }

    /// Left edge of the glyph cell for index `idx`
    pub fn x_for(&self, idx: usize) -> i32 {
        (self.cell_w * (idx as f32 + 0.5)) as i32
    }
}

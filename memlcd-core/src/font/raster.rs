//! Glyph rasterization into the frame buffer
//!
//! These functions only touch the buffer. Pushing the affected rows to the
//! panel is the driver's job.

use super::bits::pixel_value;
use super::glyph::{Font, Glyph};
use crate::color::Color;
use crate::framebuffer::FrameBuffer;

/// Write `glyph` with its top-left corner at `(x0, y0)`
///
/// Ink pixels get `color`. Background pixels get `bg`, or keep their value
/// when `bg` is transparent. Pixels off the panel are dropped.
pub fn draw_glyph<B>(
    fb: &mut FrameBuffer<B>,
    x0: u16,
    y0: u16,
    font: &Font<'_>,
    glyph: &Glyph<'_>,
    color: Color,
    bg: Color,
) where
    B: AsRef<[u8]> + AsMut<[u8]>,
{
    let stride = font.row_bytes(glyph);

    for py in 0..font.height {
        let Some(y) = y0.checked_add(py) else {
            break;
        };
        let start = (py as usize * stride).min(glyph.data.len());
        let end = (start + stride).min(glyph.data.len());
        let row = &glyph.data[start..end];

        for px in 0..glyph.width {
            let Some(x) = x0.checked_add(px) else {
                break;
            };
            if pixel_value(row, px, font.bpp, font.endianness) != 0 {
                fb.set_pixel(x, y, color);
            } else {
                fb.set_pixel(x, y, bg);
            }
        }
    }
}

/// Draw one code point
///
/// Returns the glyph's advance width, or `None` without touching the buffer
/// if the font has no glyph for `code`.
pub fn draw_char<B>(
    fb: &mut FrameBuffer<B>,
    x0: u16,
    y0: u16,
    font: &Font<'_>,
    code: u16,
    color: Color,
    bg: Color,
) -> Option<u16>
where
    B: AsRef<[u8]> + AsMut<[u8]>,
{
    let glyph = font.glyph(code)?;
    draw_glyph(fb, x0, y0, font, glyph, color, bg);
    Some(glyph.width)
}

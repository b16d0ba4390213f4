//! Monochrome image blitting
//!
//! Image rows are `ceil(width/8)` bytes with the leftmost pixel in the most
//! significant bit, the horizontal 8-bit block layout most bitmap
//! converters emit. A set bit is white. Note this is the opposite bit order
//! from the frame buffer, so rows cannot be copied verbatim.

use crate::color::Color;
use crate::framebuffer::FrameBuffer;

/// Packed 1-bpp image
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Image<'a> {
    pub width: u16,
    pub height: u16,
    pub data: &'a [u8],
}

impl<'a> Image<'a> {
    pub const fn new(width: u16, height: u16, data: &'a [u8]) -> Self {
        Self {
            width,
            height,
            data,
        }
    }

    /// Bytes per image row
    pub const fn stride(&self) -> usize {
        (self.width as usize).div_ceil(8)
    }

    /// Color of pixel `(x, y)`, optionally inverted
    ///
    /// Returns `None` outside the image. Bytes missing from short data read
    /// as black (white when inverted).
    pub fn pixel(&self, x: u16, y: u16, invert: bool) -> Option<Color> {
        if x >= self.width || y >= self.height {
            return None;
        }
        let index = y as usize * self.stride() + (x / 8) as usize;
        let byte = self.data.get(index).copied().unwrap_or(0);
        let color = if (byte << (x % 8)) >> 7 == 1 {
            Color::White
        } else {
            Color::Black
        };
        Some(if invert { color.invert() } else { color })
    }

    /// Copy the image into `fb` with its top-left corner at `(left, top)`
    ///
    /// Pixels falling off the panel are dropped.
    pub fn blit<B>(&self, fb: &mut FrameBuffer<B>, left: u16, top: u16, invert: bool)
    where
        B: AsRef<[u8]> + AsMut<[u8]>,
    {
        for y in 0..self.height {
            let Some(fb_y) = top.checked_add(y) else {
                break;
            };
            for x in 0..self.width {
                let Some(fb_x) = left.checked_add(x) else {
                    break;
                };
                if let Some(color) = self.pixel(x, y, invert) {
                    fb.set_pixel(fb_x, fb_y, color);
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::geometry::Geometry;

    // 10x2: row 0 = white, black, white..., row 1 = all black except x=9
    const CHECKER: Image<'static> = Image::new(10, 2, &[0xAA, 0x80, 0x00, 0x40]);

    #[test]
    fn test_pixel_msb_first() {
        assert_eq!(CHECKER.pixel(0, 0, false), Some(Color::White));
        assert_eq!(CHECKER.pixel(1, 0, false), Some(Color::Black));
        assert_eq!(CHECKER.pixel(8, 0, false), Some(Color::White));
        assert_eq!(CHECKER.pixel(9, 0, false), Some(Color::Black));
        assert_eq!(CHECKER.pixel(9, 1, false), Some(Color::White));
        assert_eq!(CHECKER.pixel(10, 0, false), None);
    }

    #[test]
    fn test_pixel_inverted() {
        assert_eq!(CHECKER.pixel(0, 0, true), Some(Color::Black));
        assert_eq!(CHECKER.pixel(1, 0, true), Some(Color::White));
    }

    #[test]
    fn test_blit_into_buffer() {
        let mut fb = FrameBuffer::new([0u8; 16 * 2], Geometry::new(16, 16)).unwrap();

        CHECKER.blit(&mut fb, 3, 4, false);

        // Row 4: image pixels 0..10 land at x 3..13, LSB-first in the buffer
        for x in 0..10u16 {
            assert_eq!(fb.pixel(3 + x, 4), CHECKER.pixel(x, 0, false), "x={x}");
        }
        assert_eq!(fb.pixel(12, 5), Some(Color::White));
        assert_eq!(fb.pixel(11, 5), Some(Color::Black));
        // Outside the image untouched
        assert_eq!(fb.pixel(2, 4), Some(Color::Black));
        assert_eq!(fb.pixel(13, 4), Some(Color::Black));
    }

    #[test]
    fn test_blit_clips() {
        let mut fb = FrameBuffer::new([0u8; 2 * 4], Geometry::new(16, 4)).unwrap();
        CHECKER.blit(&mut fb, 12, 3, true);

        // Only (12..16, 3) is on the panel: inverted row 0 = B W B W
        assert_eq!(fb.row(3).unwrap(), &[0x00, 0xA0]);
    }
}

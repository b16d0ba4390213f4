//! Bitmap font decoding
//!
//! Fonts are immutable tables, usually `static` data generated offline. A
//! [`Font`] has a fixed line height, a pixel depth and a packing order, and
//! maps code points to [`Glyph`]s through a list of contiguous ranges.
//!
//! Glyph rows are `ceil(width * bpp / 8)` bytes. Any non-zero pixel value
//! is ink; the depth only controls how the bits are laid out.

pub mod bits;
pub mod glyph;
pub mod raster;

pub use bits::{bit_offset, extract, pixel_value};
pub use glyph::{Bpp, Endianness, Font, Glyph, GlyphRange};
pub use raster::{draw_char, draw_glyph};

/// Code units of a NUL-terminated (or slice-ended) byte string
pub fn narrow_codes(text: &[u8]) -> impl Iterator<Item = u16> + '_ {
    text.iter()
        .take_while(|&&unit| unit != 0)
        .map(|&unit| u16::from(unit))
}

/// Code units of a NUL-terminated (or slice-ended) 16-bit string
pub fn wide_codes(text: &[u16]) -> impl Iterator<Item = u16> + '_ {
    text.iter().copied().take_while(|&unit| unit != 0)
}

/// Code points of a `str` that fit in 16 bits, up to the first NUL
///
/// Characters outside the Basic Multilingual Plane are skipped.
pub fn text_codes(text: &str) -> impl Iterator<Item = u16> + '_ {
    text.chars()
        .take_while(|&c| c != '\0')
        .filter_map(|c| u16::try_from(u32::from(c)).ok())
}

//! Pixel field extraction from packed glyph rows
//!
//! A byte holds `8 / bpp` pixels. Big-endian fonts put the first pixel in
//! the most significant field, little-endian fonts in the least
//! significant one.

use super::glyph::{Bpp, Endianness};

/// Left shift that moves pixel `px`'s field to the top of its byte
pub const fn bit_offset(px: u16, bpp: Bpp, endianness: Endianness) -> u32 {
    let bits = bpp.bits() as u32;
    let within = (px as u32 * bits) % 8;
    match endianness {
        Endianness::Big => within,
        Endianness::Little => (8 - bits) - within,
    }
}

/// Isolate the `bpp`-wide field at `offset`
///
/// Shifting left drops the pixels in front, shifting right by `8 - bpp`
/// drops the ones behind. The result is in `0..2^bpp`.
pub const fn extract(byte: u8, offset: u32, bpp: Bpp) -> u8 {
    (byte << offset) >> (8 - bpp.bits() as u32)
}

/// Value of pixel `px` in a packed glyph row
///
/// Bytes missing from a short row read as zero.
pub fn pixel_value(row: &[u8], px: u16, bpp: Bpp, endianness: Endianness) -> u8 {
    let index = (px as usize * bpp.bits() as usize) / 8;
    let byte = row.get(index).copied().unwrap_or(0);
    extract(byte, bit_offset(px, bpp, endianness), bpp)
}

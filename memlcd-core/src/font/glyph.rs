//! Font and glyph tables

use super::{narrow_codes, text_codes, wide_codes};

/// Bits per glyph pixel
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Bpp {
    #[default]
    One,
    Two,
    Four,
    Eight,
}

impl Bpp {
    /// Field width in bits
    pub const fn bits(self) -> u8 {
        match self {
            Bpp::One => 1,
            Bpp::Two => 2,
            Bpp::Four => 4,
            Bpp::Eight => 8,
        }
    }

    /// Bytes per glyph row for a glyph `width` pixels wide
    pub const fn row_bytes(self, width: u16) -> usize {
        (width as usize * self.bits() as usize).div_ceil(8)
    }
}

/// Pixel packing order inside a glyph byte
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Endianness {
    /// First pixel in the most significant bits
    #[default]
    Big,
    /// First pixel in the least significant bits
    Little,
}

/// One packed glyph bitmap
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Glyph<'a> {
    /// Advance width in pixels
    pub width: u16,
    /// `font.height` rows of `bpp.row_bytes(width)` bytes
    pub data: &'a [u8],
}

impl<'a> Glyph<'a> {
    pub const fn new(width: u16, data: &'a [u8]) -> Self {
        Self { width, data }
    }
}

/// Contiguous run of code points `first..=last`
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GlyphRange<'a> {
    pub first: u16,
    pub last: u16,
    /// One glyph per code point, in order
    pub glyphs: &'a [Glyph<'a>],
}

impl<'a> GlyphRange<'a> {
    pub const fn new(first: u16, last: u16, glyphs: &'a [Glyph<'a>]) -> Self {
        Self {
            first,
            last,
            glyphs,
        }
    }

    /// Look up a code point in this range
    pub fn get(&self, code: u16) -> Option<&'a Glyph<'a>> {
        if code < self.first || code > self.last {
            return None;
        }
        self.glyphs.get((code - self.first) as usize)
    }
}

/// Immutable bitmap font
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Font<'a> {
    /// Line height in pixels
    pub height: u16,
    pub bpp: Bpp,
    pub endianness: Endianness,
    pub ranges: &'a [GlyphRange<'a>],
}

impl<'a> Font<'a> {
    pub const fn new(
        height: u16,
        bpp: Bpp,
        endianness: Endianness,
        ranges: &'a [GlyphRange<'a>],
    ) -> Self {
        Self {
            height,
            bpp,
            endianness,
            ranges,
        }
    }

    /// Find the glyph for a code point
    pub fn glyph(&self, code: u16) -> Option<&'a Glyph<'a>> {
        self.ranges.iter().find_map(|range| range.get(code))
    }

    /// Bytes per row of `glyph`
    pub fn row_bytes(&self, glyph: &Glyph<'_>) -> usize {
        self.bpp.row_bytes(glyph.width)
    }

    /// Advance width of a code point, 0 if the font lacks it
    pub fn char_width(&self, code: u16) -> u16 {
        self.glyph(code).map_or(0, |glyph| glyph.width)
    }

    /// Width of a NUL-terminated byte string
    pub fn string_width(&self, text: &[u8]) -> u16 {
        self.width_of(narrow_codes(text))
    }

    /// Width of a NUL-terminated 16-bit string
    pub fn wide_string_width(&self, text: &[u16]) -> u16 {
        self.width_of(wide_codes(text))
    }

    /// Width of a `str`
    pub fn text_width(&self, text: &str) -> u16 {
        self.width_of(text_codes(text))
    }

    fn width_of(&self, codes: impl Iterator<Item = u16>) -> u16 {
        codes.fold(0u16, |width, code| {
            width.saturating_add(self.char_width(code))
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const NARROW: Glyph<'static> = Glyph::new(3, &[0; 4]);
    const WIDE: Glyph<'static> = Glyph::new(5, &[0; 4]);

    static DIGITS: [Glyph<'static>; 3] = [NARROW, WIDE, NARROW];
    static KANA: [Glyph<'static>; 1] = [Glyph::new(8, &[0; 4])];
    static RANGES: [GlyphRange<'static>; 2] = [
        GlyphRange::new(0x30, 0x32, &DIGITS),
        GlyphRange::new(0x3053, 0x3053, &KANA),
    ];
    static FONT: Font<'static> = Font::new(4, Bpp::One, Endianness::Big, &RANGES);

    #[test]
    fn test_glyph_lookup() {
        assert_eq!(FONT.glyph(0x31).map(|g| g.width), Some(5));
        assert_eq!(FONT.glyph(0x3053).map(|g| g.width), Some(8));
        assert!(FONT.glyph(0x2F).is_none());
        assert!(FONT.glyph(0x33).is_none());
    }

    #[test]
    fn test_range_shorter_than_declared() {
        static SHORT: [Glyph<'static>; 1] = [NARROW];
        let range = GlyphRange::new(0x41, 0x43, &SHORT);
        assert!(range.get(0x41).is_some());
        assert!(range.get(0x42).is_none());
    }

    #[test]
    fn test_widths() {
        assert_eq!(FONT.char_width(0x30), 3);
        assert_eq!(FONT.char_width(0x41), 0);
        assert_eq!(FONT.string_width(b"012"), 11);
        assert_eq!(FONT.string_width(b"0\x001"), 3);
        assert_eq!(FONT.string_width(b""), 0);
        assert_eq!(FONT.wide_string_width(&[0x3053, 0x30, 0]), 11);
        assert_eq!(FONT.text_width("10x"), 8);
    }

    #[test]
    fn test_width_saturates() {
        static HUGE: [Glyph<'static>; 1] = [Glyph::new(u16::MAX, &[])];
        static HUGE_RANGES: [GlyphRange<'static>; 1] = [GlyphRange::new(0x41, 0x41, &HUGE)];
        let font = Font::new(1, Bpp::One, Endianness::Big, &HUGE_RANGES);
        assert_eq!(font.string_width(b"AA"), u16::MAX);
    }

    #[test]
    fn test_row_bytes() {
        assert_eq!(Bpp::One.row_bytes(8), 1);
        assert_eq!(Bpp::One.row_bytes(9), 2);
        assert_eq!(Bpp::Two.row_bytes(2), 1);
        assert_eq!(Bpp::Four.row_bytes(3), 2);
        assert_eq!(Bpp::Eight.row_bytes(3), 3);
    }
}

//! Pixel colors

/// Drawing color
///
/// The panel is strictly monochrome. `Transparent` is only meaningful as a
/// background argument: it leaves whatever the buffer already holds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Color {
    /// Reflective pixel off (bit = 0)
    Black,
    /// Reflective pixel on (bit = 1)
    #[default]
    White,
    /// Keep the existing pixel
    Transparent,
}

impl Color {
    /// Check if this color leaves pixels untouched
    pub const fn is_transparent(self) -> bool {
        matches!(self, Color::Transparent)
    }

    /// Swap black and white; transparent stays transparent
    pub const fn invert(self) -> Self {
        match self {
            Color::Black => Color::White,
            Color::White => Color::Black,
            Color::Transparent => Color::Transparent,
        }
    }

    /// Fill byte for a whole run of this color
    ///
    /// Returns `None` for `Transparent`.
    pub const fn fill_byte(self) -> Option<u8> {
        match self {
            Color::Black => Some(0x00),
            Color::White => Some(0xFF),
            Color::Transparent => None,
        }
    }
}

//! Text drawing and metrics
//!
//! A character is decoded into the buffer and its line band (font height
//! rows starting at `y`) is sent right away. Strings are drawn character by
//! character, advancing the cursor by each glyph's width; code points the
//! font lacks are skipped without advancing. A bus error does not stop a
//! string: the rest is still drawn and the first error is reported with
//! the width covered.

use memlcd_core::font::{draw_char, narrow_codes, text_codes, wide_codes};
use memlcd_core::{Color, Font};
use memlcd_hal::{Clock, OutputPin, PulseService, Transport};

use crate::display::Display;
use crate::error::{discard, Error};

impl<T, P, C, S, B> Display<T, P, C, S, B>
where
    T: Transport,
    P: OutputPin,
    C: Clock,
    S: PulseService,
    B: AsRef<[u8]> + AsMut<[u8]>,
{
    /// Draw one code point with its top-left corner at `(x, y)`
    ///
    /// Returns the advance width. A transparent `bg` leaves background
    /// pixels as they are.
    pub fn try_put_char(
        &mut self,
        x: u16,
        y: u16,
        font: &Font<'_>,
        code: u16,
        color: Color,
        bg: Color,
    ) -> Result<u16, Error<T::Error>> {
        let width = draw_char(&mut self.fb, x, y, font, code, color, bg)
            .ok_or(Error::UnknownGlyph)?;

        if font.height > 0 {
            self.flush_rows(y, y.saturating_add(font.height - 1))?;
        }
        Ok(width)
    }

    /// Draw a NUL-terminated byte string, returning its width
    pub fn try_put_string(
        &mut self,
        x: u16,
        y: u16,
        font: &Font<'_>,
        text: &[u8],
        color: Color,
        bg: Color,
    ) -> Result<u16, Error<T::Error>> {
        let (width, result) = self.put_codes(x, y, font, narrow_codes(text), color, bg);
        result.map(|()| width)
    }

    /// Draw a NUL-terminated 16-bit string, returning its width
    pub fn try_put_wide_string(
        &mut self,
        x: u16,
        y: u16,
        font: &Font<'_>,
        text: &[u16],
        color: Color,
        bg: Color,
    ) -> Result<u16, Error<T::Error>> {
        let (width, result) = self.put_codes(x, y, font, wide_codes(text), color, bg);
        result.map(|()| width)
    }

    /// Draw a `str`, returning its width
    pub fn try_put_text(
        &mut self,
        x: u16,
        y: u16,
        font: &Font<'_>,
        text: &str,
        color: Color,
        bg: Color,
    ) -> Result<u16, Error<T::Error>> {
        let (width, result) = self.put_codes(x, y, font, text_codes(text), color, bg);
        result.map(|()| width)
    }

    /// Draw one code point; 0 if the font lacks it
    pub fn put_char(
        &mut self,
        x: u16,
        y: u16,
        font: &Font<'_>,
        code: u16,
        color: Color,
        bg: Color,
    ) -> u16 {
        let (width, result) = self.put_codes(x, y, font, core::iter::once(code), color, bg);
        discard(result, "put_char");
        width
    }

    pub fn put_string(
        &mut self,
        x: u16,
        y: u16,
        font: &Font<'_>,
        text: &[u8],
        color: Color,
        bg: Color,
    ) -> u16 {
        let (width, result) = self.put_codes(x, y, font, narrow_codes(text), color, bg);
        discard(result, "put_string");
        width
    }

    pub fn put_wide_string(
        &mut self,
        x: u16,
        y: u16,
        font: &Font<'_>,
        text: &[u16],
        color: Color,
        bg: Color,
    ) -> u16 {
        let (width, result) = self.put_codes(x, y, font, wide_codes(text), color, bg);
        discard(result, "put_wide_string");
        width
    }

    pub fn put_text(
        &mut self,
        x: u16,
        y: u16,
        font: &Font<'_>,
        text: &str,
        color: Color,
        bg: Color,
    ) -> u16 {
        let (width, result) = self.put_codes(x, y, font, text_codes(text), color, bg);
        discard(result, "put_text");
        width
    }

    /// Advance width of a code point, 0 if the font lacks it
    pub fn char_width(&self, font: &Font<'_>, code: u16) -> u16 {
        font.char_width(code)
    }

    pub fn font_height(&self, font: &Font<'_>) -> u16 {
        font.height
    }

    /// Width a byte string would take, without drawing
    pub fn string_width(&self, font: &Font<'_>, text: &[u8]) -> u16 {
        font.string_width(text)
    }

    /// Width a 16-bit string would take, without drawing
    pub fn wide_string_width(&self, font: &Font<'_>, text: &[u16]) -> u16 {
        font.wide_string_width(text)
    }

    /// Width a `str` would take, without drawing
    pub fn text_width(&self, font: &Font<'_>, text: &str) -> u16 {
        font.text_width(text)
    }

    /// Draw `codes` left to right from `x`
    ///
    /// Returns the width covered and the first bus error, if any. Drawing
    /// carries on past a failed line band so the buffer holds the whole
    /// string either way.
    fn put_codes(
        &mut self,
        x: u16,
        y: u16,
        font: &Font<'_>,
        codes: impl Iterator<Item = u16>,
        color: Color,
        bg: Color,
    ) -> (u16, Result<(), Error<T::Error>>) {
        let mut cursor = x;
        let mut result = Ok(());
        for code in codes {
            let Some(width) = draw_char(&mut self.fb, cursor, y, font, code, color, bg) else {
                continue;
            };

            if font.height > 0 {
                let flushed = self.flush_rows(y, y.saturating_add(font.height - 1));
                if result.is_ok() {
                    result = flushed;
                }
            }
            cursor = cursor.saturating_add(width);
        }
        (cursor - x, result)
    }
}

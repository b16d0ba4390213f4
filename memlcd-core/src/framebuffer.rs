//! Packed monochrome frame buffer
//!
//! One bit per pixel, rows of `ceil(W/8)` bytes, row-major. Inside a byte
//! pixels are LSB first (pixel `x` is bit `x % 8`) which is also the order
//! the panel shifts them in, so rows go out on the wire verbatim.
//!
//! A set bit is a white pixel. The buffer never reallocates: it wraps
//! caller-provided storage (a static array on target, anything
//! `AsRef<[u8]> + AsMut<[u8]>` in tests).

use crate::color::Color;
use crate::geometry::Geometry;

/// Frame buffer construction errors
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum FrameBufferError {
    /// Storage is shorter than `geometry.buffer_len()`
    StorageTooSmall,
}

/// Packed 1-bpp canvas
pub struct FrameBuffer<B> {
    storage: B,
    geometry: Geometry,
}

impl<B> FrameBuffer<B>
where
    B: AsRef<[u8]> + AsMut<[u8]>,
{
    /// Wrap `storage` as a frame buffer for `geometry`
    ///
    /// Existing contents are kept; call [`FrameBuffer::clear`] for a white
    /// baseline. Storage beyond `geometry.buffer_len()` is ignored.
    pub fn new(storage: B, geometry: Geometry) -> Result<Self, FrameBufferError> {
        if storage.as_ref().len() < geometry.buffer_len() {
            return Err(FrameBufferError::StorageTooSmall);
        }
        Ok(Self { storage, geometry })
    }

    /// Give the storage back
    pub fn release(self) -> B {
        self.storage
    }

    /// Panel geometry this buffer is laid out for
    pub fn geometry(&self) -> Geometry {
        self.geometry
    }

    /// Bytes per row
    pub fn stride(&self) -> usize {
        self.geometry.stride()
    }

    /// Write one pixel
    ///
    /// Out-of-range coordinates are ignored. `White` sets the bit, `Black`
    /// clears it and `Transparent` leaves it alone.
    pub fn set_pixel(&mut self, x: u16, y: u16, color: Color) {
        let Some(index) = self.byte_index(x, y) else {
            return;
        };
        let mask = 1u8 << (x & 0x07);
        let bytes = self.storage.as_mut();

        match color {
            Color::White => bytes[index] |= mask,
            Color::Black => bytes[index] &= !mask,
            Color::Transparent => {}
        }
    }

    /// Read one pixel back
    ///
    /// Returns `None` for out-of-range coordinates.
    pub fn pixel(&self, x: u16, y: u16) -> Option<Color> {
        let index = self.byte_index(x, y)?;
        let mask = 1u8 << (x & 0x07);
        if self.storage.as_ref()[index] & mask != 0 {
            Some(Color::White)
        } else {
            Some(Color::Black)
        }
    }

    /// Fill the whole buffer with one color
    ///
    /// `Transparent` is a no-op.
    pub fn fill(&mut self, color: Color) {
        if let Some(byte) = color.fill_byte() {
            self.as_bytes_mut().fill(byte);
        }
    }

    /// Set every pixel white (all bytes 0xFF)
    pub fn clear(&mut self) {
        self.fill(Color::White);
    }

    /// Packed bytes of row `y`
    pub fn row(&self, y: u16) -> Option<&[u8]> {
        if y >= self.geometry.height() {
            return None;
        }
        let stride = self.stride();
        let start = y as usize * stride;
        Some(&self.as_bytes()[start..start + stride])
    }

    /// Contiguous bytes of rows `top..=bottom`
    ///
    /// `bottom` is clamped to the last row. Returns an empty slice when
    /// `top` is past the end or the range is reversed.
    pub fn rows(&self, top: u16, bottom: u16) -> &[u8] {
        let height = self.geometry.height();
        if top >= height || top > bottom {
            return &[];
        }
        let bottom = bottom.min(height - 1);
        let stride = self.stride();
        &self.as_bytes()[top as usize * stride..(bottom as usize + 1) * stride]
    }

    /// The whole buffer, row-major
    pub fn as_bytes(&self) -> &[u8] {
        &self.storage.as_ref()[..self.geometry.buffer_len()]
    }

    /// The whole buffer, mutable
    pub fn as_bytes_mut(&mut self) -> &mut [u8] {
        let len = self.geometry.buffer_len();
        &mut self.storage.as_mut()[..len]
    }

    fn byte_index(&self, x: u16, y: u16) -> Option<usize> {
        if !self.geometry.contains(x, y) {
            return None;
        }
        Some(y as usize * self.stride() + (x >> 3) as usize)
    }
}

//! Line frame encoding and refresh range handling
//!
//! Frame format for one line:
//! - HEADER (2 bytes): command + gate address, see [`AddressMode::header`]
//! - ROW (ceil(W/8) bytes): packed pixels, copied verbatim from the buffer
//! - TRAILER (2 bytes): 0x00 0x00, mandatory
//!
//! Block writes repeat HEADER + ROW for every line and close with a single
//! TRAILER.

use core::ops::RangeInclusive;

use heapless::Vec;

use crate::address::AddressMode;

/// Command + address bytes in front of every line
pub const HEADER_SIZE: usize = 2;

/// Dummy bytes closing every transaction
pub const TRAILER_SIZE: usize = 2;

/// Transaction trailer
pub const TRAILER: [u8; TRAILER_SIZE] = [0x00, 0x00];

/// Widest row supported by the fixed-size encoder (512 pixels)
pub const MAX_ROW_BYTES: usize = 64;

/// Maximum single-line frame size (HEADER + ROW + TRAILER)
pub const MAX_LINE_FRAME_SIZE: usize = HEADER_SIZE + MAX_ROW_BYTES + TRAILER_SIZE;

/// Errors that can occur while encoding a frame
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum FrameError {
    /// Line number is 0 or beyond the panel height
    LineOutOfRange,
    /// Row is wider than [`MAX_ROW_BYTES`]
    RowTooLarge,
    /// Buffer too small for encoding
    BufferTooSmall,
}

/// A request to push lines `start_line..=end_line` to the panel
///
/// Line numbers are 1-based gate addresses.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct RefreshRequest {
    /// First gate line (1-based)
    pub start_line: u16,
    /// Last gate line (1-based, inclusive)
    pub end_line: u16,
}

impl RefreshRequest {
    /// Create a request for an inclusive line range
    pub const fn new(start_line: u16, end_line: u16) -> Self {
        Self {
            start_line,
            end_line,
        }
    }

    /// Create a request for a single line
    pub const fn line(line: u16) -> Self {
        Self::new(line, line)
    }

    /// Create a request for the 0-based buffer rows `top..=bottom`
    pub const fn rows(top: u16, bottom: u16) -> Self {
        Self::new(top.saturating_add(1), bottom.saturating_add(1))
    }

    /// Clip the request to a panel with `height` lines
    ///
    /// `end_line` is clamped to `height` and a start of 0 is raised to 1.
    /// Returns `None` when nothing is left to send: reversed ranges and
    /// ranges starting below the panel.
    pub fn clip(self, height: u16) -> Option<Self> {
        if self.start_line > self.end_line || self.start_line > height {
            return None;
        }

        let start_line = self.start_line.max(1);
        let end_line = self.end_line.min(height);
        if start_line > end_line {
            return None;
        }

        Some(Self::new(start_line, end_line))
    }

    /// Lines covered by this request
    pub fn lines(&self) -> RangeInclusive<u16> {
        self.start_line..=self.end_line
    }
}

/// Check that `line` is a gate address on a panel with `height` lines
pub const fn validate_line(mode: AddressMode, height: u16, line: u16) -> Result<(), FrameError> {
    if line == 0 || line > height || line > mode.max_line() {
        return Err(FrameError::LineOutOfRange);
    }
    Ok(())
}

/// Encode a single-line frame into `buffer`
///
/// Returns the number of bytes written.
pub fn encode_line(
    mode: AddressMode,
    height: u16,
    line: u16,
    row: &[u8],
    buffer: &mut [u8],
) -> Result<usize, FrameError> {
    validate_line(mode, height, line)?;

    let frame_len = HEADER_SIZE + row.len() + TRAILER_SIZE;
    if buffer.len() < frame_len {
        return Err(FrameError::BufferTooSmall);
    }

    buffer[..HEADER_SIZE].copy_from_slice(&mode.header(line));
    buffer[HEADER_SIZE..HEADER_SIZE + row.len()].copy_from_slice(row);
    buffer[HEADER_SIZE + row.len()..frame_len].copy_from_slice(&TRAILER);

    Ok(frame_len)
}

/// Encode a single-line frame into a heapless Vec
pub fn encode_line_to_vec(
    mode: AddressMode,
    height: u16,
    line: u16,
    row: &[u8],
) -> Result<Vec<u8, MAX_LINE_FRAME_SIZE>, FrameError> {
    if row.len() > MAX_ROW_BYTES {
        return Err(FrameError::RowTooLarge);
    }

    let mut buffer = [0u8; MAX_LINE_FRAME_SIZE];
    let len = encode_line(mode, height, line, row, &mut buffer)?;
    let mut vec = Vec::new();
    vec.extend_from_slice(&buffer[..len])
        .map_err(|_| FrameError::BufferTooSmall)?;
    Ok(vec)
}

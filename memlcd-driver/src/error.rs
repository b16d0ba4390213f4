//! Driver errors
//!
//! The drawing API is permissive: every `draw_*`/`put_*` call has a
//! `try_*` twin that reports what went wrong, and the plain version logs
//! and drops the error so a bad call never halts the device.

use memlcd_core::{ConfigError, FrameBufferError};

/// Errors reported by the strict `try_*` API
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Error<E> {
    /// The transport failed mid-transaction
    Bus(E),
    /// Gate line is 0 or beyond the panel height
    LineOutOfRange,
    /// Refresh range is reversed or starts below the panel
    EmptyRange,
    /// Nothing of the shape lands on the panel
    OutOfBounds,
    /// Line thickness of zero
    ZeroThickness,
    /// Font has no glyph for the code point
    UnknownGlyph,
    /// Frame buffer storage is too small for the panel
    StorageTooSmall,
    /// Configuration failed validation
    InvalidConfig(ConfigError),
}

impl<E> Error<E> {
    /// Short description for logs
    pub fn as_str(&self) -> &'static str {
        match self {
            Error::Bus(_) => "bus error",
            Error::LineOutOfRange => "line out of range",
            Error::EmptyRange => "empty range",
            Error::OutOfBounds => "out of bounds",
            Error::ZeroThickness => "zero thickness",
            Error::UnknownGlyph => "unknown glyph",
            Error::StorageTooSmall => "storage too small",
            Error::InvalidConfig(_) => "invalid config",
        }
    }

    /// Check if the error came from the transport
    pub fn is_bus(&self) -> bool {
        matches!(self, Error::Bus(_))
    }
}

impl<E> From<FrameBufferError> for Error<E> {
    fn from(err: FrameBufferError) -> Self {
        match err {
            FrameBufferError::StorageTooSmall => Error::StorageTooSmall,
        }
    }
}

impl<E> From<ConfigError> for Error<E> {
    fn from(err: ConfigError) -> Self {
        Error::InvalidConfig(err)
    }
}

/// Drop the error of a permissive call after logging it
///
/// Bus errors are logged as warnings; everything else is an expected
/// no-op and only traced.
#[cfg_attr(not(feature = "defmt"), allow(unused_variables))]
pub(crate) fn discard<T, E>(result: Result<T, Error<E>>, operation: &'static str) -> Option<T> {
    match result {
        Ok(value) => Some(value),
        Err(err) => {
            #[cfg(feature = "defmt")]
            {
                if err.is_bus() {
                    defmt::warn!("{=str}: {=str}", operation, err.as_str());
                } else {
                    defmt::trace!("{=str} ignored: {=str}", operation, err.as_str());
                }
            }
            None
        }
    }
}

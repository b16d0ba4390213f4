//! Sharp Memory LCD driver
//!
//! This crate ties the pure pieces of `memlcd-core` and `memlcd-protocol`
//! to the collaborator traits of `memlcd-hal`:
//!
//! - [`Display`] - owned frame buffer plus transport, DISP pin, clock and
//!   EXTCOMIN pulse service
//! - Drawing: pixels, lines, rectangles, images and bitmap-font text, each
//!   followed by one refresh of the lines it touched
//! - Power sequencing (clear, DISP, EXTCOMIN)
//! - An `embedded-graphics` [`DrawTarget`](embedded_graphics::draw_target::DrawTarget)
//!
//! Every drawing call comes in two flavours. `try_*` returns a
//! `Result<_, Error<E>>`; the plain version never fails and treats bad
//! coordinates, empty ranges and unknown glyphs as no-ops.
//!
//! # Example
//!
//! ```ignore
//! let mut display = Display::new(spi, disp, clock, extcomin, storage, config)?;
//! display.power_on();
//! display.draw_hline(0, 399, 20, Color::Black, 2);
//! let width = display.put_text(4, 30, &FONT, "Hello", Color::Black, Color::White);
//! ```

#![cfg_attr(not(test), no_std)]
#![deny(unsafe_code)]

pub mod display;
pub mod error;
mod graphics;
mod image;
mod power;
mod shapes;
mod text;
pub mod transport;

#[cfg(test)]
mod mock;

pub use display::{spi_config, Display};
pub use error::Error;
pub use transport::Bus;

// Re-export the types callers need to draw
pub use memlcd_core::{
    Bpp, Color, DisplayConfig, Endianness, Font, Glyph, GlyphRange, Image, Model, PowerState,
};

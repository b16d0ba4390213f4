//! Board-agnostic core logic for Sharp Memory LCDs
//!
//! This crate contains everything that does not touch the bus:
//!
//! - Panel models and geometry
//! - The packed 1-bpp frame buffer
//! - Bitmap font decoding (1/2/4/8 bpp, either packing order)
//! - Monochrome image blitting
//! - The power state machine
//! - Configuration type definitions

#![cfg_attr(not(test), no_std)]
#![deny(unsafe_code)]

pub mod color;
pub mod config;
pub mod font;
pub mod framebuffer;
pub mod geometry;
pub mod image;
pub mod state;

pub use color::Color;
pub use config::{ConfigError, DisplayConfig, SpiSettings, Timing};
pub use font::{Bpp, Endianness, Font, Glyph, GlyphRange};
pub use framebuffer::{FrameBuffer, FrameBufferError};
pub use geometry::{Geometry, Model, UnknownModel};
pub use image::Image;
pub use state::{PowerEvent, PowerState};

//! embedded-hal 1.0 adapters for the memlcd HAL traits
//!
//! Boards that already have `embedded-hal` drivers for their SPI bus, GPIO
//! and delay provider can plug them straight into the display driver:
//!
//! - [`SpiTransport`] - `SpiBus` plus a chip-select pin as a [`Transport`]
//! - [`Pin`] - any `embedded_hal` output pin as an [`OutputPin`]
//! - [`DelayClock`] - `DelayNs` plus a millisecond counter as a [`Clock`]
//! - [`SoftPulse`] - software EXTCOMIN generator, shared with a timer interrupt
//!
//! [`Transport`]: memlcd_hal::Transport
//! [`OutputPin`]: memlcd_hal::OutputPin
//! [`Clock`]: memlcd_hal::Clock

#![cfg_attr(not(test), no_std)]
#![deny(unsafe_code)]

pub mod clock;
pub mod pins;
pub mod pulse;
pub mod spi;

pub use clock::DelayClock;
pub use pins::Pin;
pub use pulse::SoftPulse;
pub use spi::{SpiTransport, TransportError};

//! Sharp Memory LCD wire protocol
//!
//! This crate encodes the byte stream a Memory LCD expects on its SPI input.
//! It is pure: no bus access, no timing. The driver feeds these bytes to a
//! transport inside a chip-select transaction.
//!
//! # Protocol Overview
//!
//! Everything is shifted LSB first. A single-line update looks like:
//! ```text
//! ┌─────────┬─────────┬──────────────────────┬─────────┐
//! │ COMMAND │ ADDRESS │ ROW DATA             │ TRAILER │
//! │ 1B      │ 1B      │ ceil(W/8) B          │ 2B 0x00 │
//! └─────────┴─────────┴──────────────────────┴─────────┘
//! ```
//!
//! A multi-line update repeats COMMAND/ADDRESS/ROW DATA per line and sends
//! the trailer once, after the last line. Wide panels (more than 255 gate
//! lines) fold the two low address bits into the command byte.
//!
//! Pixel bit order inside ROW DATA is LSB first: pixel `x` lives in bit
//! `x % 8` of byte `x / 8`, and a set bit is a white pixel.

#![cfg_attr(not(test), no_std)]
#![deny(unsafe_code)]

pub mod address;
pub mod command;
pub mod frame;

pub use address::AddressMode;
pub use command::{ALL_CLEAR_FRAME, CMD_ALL_CLEAR, CMD_WRITE_LINE};
pub use frame::{
    encode_line, encode_line_to_vec, validate_line, FrameError, RefreshRequest, HEADER_SIZE,
    MAX_LINE_FRAME_SIZE, MAX_ROW_BYTES, TRAILER, TRAILER_SIZE,
};

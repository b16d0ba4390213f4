//! Command (mode select) byte values
//!
//! The first byte of every transaction carries the mode flags:
//! - M0 (bit 0): data update
//! - M1 (bit 1): software VCOM level, unused when EXTCOMIN is pin-driven
//! - M2 (bit 2): all clear

/// Data update mode (M0 = H, M2 = L)
pub const CMD_WRITE_LINE: u8 = 0x01;

/// Memory clear mode (M0 = L, M2 = H)
pub const CMD_ALL_CLEAR: u8 = 0x04;

/// Dummy byte padding the clear command
const DUMMY: u8 = 0x00;

/// Complete all-clear transaction payload
pub const ALL_CLEAR_FRAME: [u8; 2] = [CMD_ALL_CLEAR, DUMMY];

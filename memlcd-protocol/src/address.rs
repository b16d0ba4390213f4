//! Gate line addressing
//!
//! Line numbers are 1-based gate addresses. Panels with up to 255 lines send
//! the address as a plain byte after the command. Taller panels need ten
//! address bits (AG0..AG9): AG0/AG1 ride in the top of the command byte and
//! AG2..AG9 follow in the address byte.

use crate::command::CMD_WRITE_LINE;

/// How a panel encodes its gate line address
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum AddressMode {
    /// 8-bit address byte after the command byte
    #[default]
    Standard,
    /// 10-bit address split across the command and address bytes
    Wide,
}

impl AddressMode {
    /// Highest line number this mode can express
    pub const fn max_line(self) -> u16 {
        match self {
            AddressMode::Standard => 0xFF,
            AddressMode::Wide => 0x3FF,
        }
    }

    /// Encode the command + address header for a write of `line`
    ///
    /// Bits above the mode's range are dropped, the same way the controller
    /// would see them.
    pub const fn header(self, line: u16) -> [u8; 2] {
        match self {
            AddressMode::Standard => [CMD_WRITE_LINE, line as u8],
            AddressMode::Wide => [((line << 6) as u8) | CMD_WRITE_LINE, (line >> 2) as u8],
        }
    }

    /// Pick the mode needed for a panel with `height` gate lines
    pub const fn for_height(height: u16) -> Self {
        if height > AddressMode::Standard.max_line() {
            AddressMode::Wide
        } else {
            AddressMode::Standard
        }
    }
}

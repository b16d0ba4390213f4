//! Panel models and geometry

use core::str::FromStr;

use memlcd_protocol::AddressMode;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Panel dimensions and gate addressing
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Geometry {
    width: u16,
    height: u16,
    address_mode: AddressMode,
}

impl Geometry {
    /// Create a geometry, picking the address mode from the height
    pub const fn new(width: u16, height: u16) -> Self {
        Self {
            width,
            height,
            address_mode: AddressMode::for_height(height),
        }
    }

    /// Create a geometry with an explicit address mode
    pub const fn with_address_mode(width: u16, height: u16, address_mode: AddressMode) -> Self {
        Self {
            width,
            height,
            address_mode,
        }
    }

    /// Horizontal resolution in pixels
    pub const fn width(&self) -> u16 {
        self.width
    }

    /// Vertical resolution in lines
    pub const fn height(&self) -> u16 {
        self.height
    }

    /// Gate address encoding for this panel
    pub const fn address_mode(&self) -> AddressMode {
        self.address_mode
    }

    /// Bytes per buffer row, ceil(width / 8)
    pub const fn stride(&self) -> usize {
        (self.width as usize).div_ceil(8)
    }

    /// Total frame buffer size in bytes
    pub const fn buffer_len(&self) -> usize {
        self.stride() * self.height as usize
    }

    /// Check if a pixel coordinate is on the panel
    pub const fn contains(&self, x: u16, y: u16) -> bool {
        x < self.width && y < self.height
    }
}

/// Supported Sharp Memory LCD panels
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum Model {
    /// 2.7" 400x240
    #[default]
    Ls027b7dh01,
    /// 3.16" 336x536, 10-bit gate address
    Ls032b7dd02,
    /// 4.4" 320x240
    Ls044q7dh01,
    /// 0.56" 64x64, 3V
    Ls006b7dh03,
    /// 1.08" 160x68, 3V
    Ls011b7dh03,
}

impl Model {
    /// Every supported model
    pub const ALL: [Model; 5] = [
        Model::Ls027b7dh01,
        Model::Ls032b7dd02,
        Model::Ls044q7dh01,
        Model::Ls006b7dh03,
        Model::Ls011b7dh03,
    ];

    /// Panel geometry
    pub const fn geometry(self) -> Geometry {
        match self {
            Model::Ls027b7dh01 => Geometry::new(400, 240),
            Model::Ls032b7dd02 => Geometry::with_address_mode(336, 536, AddressMode::Wide),
            Model::Ls044q7dh01 => Geometry::new(320, 240),
            Model::Ls006b7dh03 => Geometry::new(64, 64),
            Model::Ls011b7dh03 => Geometry::new(160, 68),
        }
    }

    /// Frame buffer size for this model, usable as an array length
    pub const fn buffer_len(self) -> usize {
        self.geometry().buffer_len()
    }

    /// Sharp part number
    pub const fn part_number(self) -> &'static str {
        match self {
            Model::Ls027b7dh01 => "LS027B7DH01",
            Model::Ls032b7dd02 => "LS032B7DD02",
            Model::Ls044q7dh01 => "LS044Q7DH01",
            Model::Ls006b7dh03 => "LS006B7DH03",
            Model::Ls011b7dh03 => "LS011B7DH03",
        }
    }
}

/// Part number did not match any supported model
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct UnknownModel;

impl FromStr for Model {
    type Err = UnknownModel;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        Model::ALL
            .into_iter()
            .find(|model| model.part_number().eq_ignore_ascii_case(s))
            .ok_or(UnknownModel)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_model_geometry() {
        let g = Model::Ls027b7dh01.geometry();
        assert_eq!((g.width(), g.height()), (400, 240));
        assert_eq!(g.stride(), 50);
        assert_eq!(g.buffer_len(), 12_000);
        assert_eq!(g.address_mode(), AddressMode::Standard);

        let g = Model::Ls032b7dd02.geometry();
        assert_eq!(g.stride(), 42);
        assert_eq!(g.address_mode(), AddressMode::Wide);
    }

    #[test]
    fn test_stride_rounds_up() {
        assert_eq!(Geometry::new(1, 1).stride(), 1);
        assert_eq!(Geometry::new(9, 1).stride(), 2);
        assert_eq!(Geometry::new(16, 1).stride(), 2);
    }

    #[test]
    fn test_buffer_len_as_array_length() {
        let buffer = [0u8; Model::Ls006b7dh03.buffer_len()];
        assert_eq!(buffer.len(), 8 * 64);
    }

    #[test]
    fn test_parse_part_number() {
        assert_eq!("LS027B7DH01".parse(), Ok(Model::Ls027b7dh01));
        assert_eq!(" ls011b7dh03 ".parse(), Ok(Model::Ls011b7dh03));
        assert_eq!("LS999".parse::<Model>(), Err(UnknownModel));
    }

    #[test]
    fn test_contains() {
        let g = Model::Ls006b7dh03.geometry();
        assert!(g.contains(0, 0));
        assert!(g.contains(63, 63));
        assert!(!g.contains(64, 0));
        assert!(!g.contains(0, 64));
    }
}

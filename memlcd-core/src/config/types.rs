//! Configuration type definitions

use crate::geometry::{Geometry, Model};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Default EXTCOMIN inversion frequency (Hz)
pub const DEFAULT_EXTCOMIN_HZ: u8 = 1;

/// Default number of clear passes on power-on
pub const DEFAULT_CLEAR_PASSES: u8 = 2;

/// Fewest clear passes that reliably reach the panel's pixel memory
pub const MIN_CLEAR_PASSES: u8 = 2;

/// Default SPI clock (Hz)
pub const DEFAULT_SPI_FREQUENCY_HZ: u32 = 2_000_000;

/// Highest SPI clock the panels are rated for (Hz)
pub const MAX_SPI_FREQUENCY_HZ: u32 = 2_000_000;

/// Configuration validation errors
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum ConfigError {
    /// EXTCOMIN frequency is zero
    InvalidFrequency,
    /// Power-on must clear at least [`MIN_CLEAR_PASSES`] times
    InvalidClearPasses,
    /// SPI clock is zero or above the panel rating
    InvalidSpiFrequency,
}

/// Bus timing around a transaction
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Timing {
    /// SCS high to first clock (µs)
    pub setup_us: u32,
    /// Last clock to SCS low (µs)
    pub hold_us: u32,
    /// Wait after toggling DISP or EXTCOMIN (µs)
    pub settle_us: u32,
}

impl Default for Timing {
    fn default() -> Self {
        Self {
            setup_us: 3,
            hold_us: 1,
            settle_us: 30,
        }
    }
}

/// SPI bus settings
///
/// Mode 0 and LSB-first are fixed by the panel; only the clock varies.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct SpiSettings {
    /// SCLK frequency (Hz)
    pub frequency_hz: u32,
    /// Peripheral can only shift MSB first; bytes are reversed in software
    pub msb_first_only: bool,
}

impl Default for SpiSettings {
    fn default() -> Self {
        Self {
            frequency_hz: DEFAULT_SPI_FREQUENCY_HZ,
            msb_first_only: false,
        }
    }
}

/// Complete display configuration
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct DisplayConfig {
    /// Panel model
    pub model: Model,
    /// EXTCOMIN inversion frequency (Hz)
    pub extcomin_hz: u8,
    /// Bus timing
    pub timing: Timing,
    /// How many times power-on clears the panel
    ///
    /// A single clear does not always reach the controller's pixel memory,
    /// so values below [`MIN_CLEAR_PASSES`] are rejected.
    pub clear_passes: u8,
    /// SPI bus settings
    pub spi: SpiSettings,
}

impl Default for DisplayConfig {
    fn default() -> Self {
        Self::for_model(Model::default())
    }
}

impl DisplayConfig {
    /// Default configuration for a panel model
    pub fn for_model(model: Model) -> Self {
        Self {
            model,
            extcomin_hz: DEFAULT_EXTCOMIN_HZ,
            timing: Timing::default(),
            clear_passes: DEFAULT_CLEAR_PASSES,
            spi: SpiSettings::default(),
        }
    }

    /// Panel geometry of the configured model
    pub fn geometry(&self) -> Geometry {
        self.model.geometry()
    }

    /// Check the configuration for values the panel cannot work with
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.extcomin_hz == 0 {
            return Err(ConfigError::InvalidFrequency);
        }
        if self.clear_passes < MIN_CLEAR_PASSES {
            return Err(ConfigError::InvalidClearPasses);
        }
        if self.spi.frequency_hz == 0 || self.spi.frequency_hz > MAX_SPI_FREQUENCY_HZ {
            return Err(ConfigError::InvalidSpiFrequency);
        }
        Ok(())
    }
}

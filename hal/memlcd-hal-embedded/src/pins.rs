//! GPIO adapter
//!
//! `embedded_hal` pin writes are fallible and reading back the output
//! latch needs `&mut self`; the driver's [`OutputPin`] is neither. The
//! adapter remembers the last level it drove and drops write errors
//! (logged with defmt when enabled).

use embedded_hal::digital::OutputPin as HalOutputPin;
use memlcd_hal::OutputPin;

/// `embedded_hal` output pin as a memlcd [`OutputPin`]
pub struct Pin<P> {
    pin: P,
    high: bool,
}

impl<P: HalOutputPin> Pin<P> {
    /// Wrap `pin`, driving it low
    pub fn new(pin: P) -> Self {
        let mut pin = Self { pin, high: true };
        pin.set_low();
        pin
    }

    /// Give the pin back
    pub fn release(self) -> P {
        self.pin
    }
}

impl<P: HalOutputPin> OutputPin for Pin<P> {
    fn set_high(&mut self) {
        if self.pin.set_high().is_err() {
            #[cfg(feature = "defmt")]
            defmt::warn!("pin: set_high failed");
        }
        self.high = true;
    }

    fn set_low(&mut self) {
        if self.pin.set_low().is_err() {
            #[cfg(feature = "defmt")]
            defmt::warn!("pin: set_low failed");
        }
        self.high = false;
    }

    fn is_set_high(&self) -> bool {
        self.high
    }
}

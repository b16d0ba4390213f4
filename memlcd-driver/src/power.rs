//! Power sequencing
//!
//! ```text
//!            power_on            clears done
//!   Off ─────────────▶ Clearing ────────────▶ On
//!    ▲                    │                    │
//!    └────────────────────┴────────────────────┘
//!                      power_off
//! ```
//!
//! Power-on clears the panel memory `clear_passes` times (two by default,
//! one pass does not reliably reach the controller's pixel memory), raises
//! DISP and starts the EXTCOMIN pulse. Power-off clears once, drops DISP
//! and stops the pulse. Settling delays follow each pin change.

use memlcd_core::{PowerEvent, PowerState};
use memlcd_hal::{Clock, OutputPin, PulseService, Transport};

use crate::display::Display;
use crate::error::{discard, Error};

impl<T, P, C, S, B> Display<T, P, C, S, B>
where
    T: Transport,
    P: OutputPin,
    C: Clock,
    S: PulseService,
    B: AsRef<[u8]> + AsMut<[u8]>,
{
    /// Run the power-on sequence
    ///
    /// On a bus error the display stays in `Clearing` with DISP untouched.
    pub fn try_power_on(&mut self) -> Result<(), Error<T::Error>> {
        self.apply(PowerEvent::PowerOnRequested);

        for _pass in 0..self.config.clear_passes {
            #[cfg(feature = "defmt")]
            defmt::debug!("clear pass {}/{}", _pass + 1, self.config.clear_passes);
            self.try_all_clear()?;
        }

        let settle_us = self.config.timing.settle_us;
        self.disp.set_high();
        self.bus.clock_mut().delay_us(settle_us);
        self.pulse.start(self.config.extcomin_hz);
        self.bus.clock_mut().delay_us(settle_us);

        self.apply(PowerEvent::ClearComplete);
        Ok(())
    }

    /// Run the power-off sequence
    ///
    /// DISP and the pulse are shut down even if the final clear fails.
    pub fn try_power_off(&mut self) -> Result<(), Error<T::Error>> {
        let cleared = self.try_all_clear();

        self.disp.set_low();
        self.pulse.stop();
        self.bus.clock_mut().delay_us(self.config.timing.settle_us);

        self.apply(PowerEvent::PowerOffRequested);
        cleared
    }

    pub fn power_on(&mut self) {
        discard(self.try_power_on(), "power_on");
    }

    pub fn power_off(&mut self) {
        discard(self.try_power_off(), "power_off");
    }

    /// Raise DISP without any clearing or pulse handling
    pub fn display_on(&mut self) {
        self.disp.set_high();
    }

    /// Drop DISP; the panel keeps its memory
    pub fn display_off(&mut self) {
        self.disp.set_low();
    }

    /// Check if DISP is currently high
    pub fn is_display_on(&self) -> bool {
        self.disp.is_set_high()
    }

    /// Check if the EXTCOMIN pulse is running
    pub fn is_pulse_running(&self) -> bool {
        self.pulse.is_running()
    }

    fn apply(&mut self, event: PowerEvent) {
        let next = self.state.transition(event);
        if next != self.state {
            #[cfg(feature = "defmt")]
            defmt::info!("power {} -> {}", self.state, next);
            self.state = next;
        }
    }
}

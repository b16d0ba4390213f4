//! Power state definition

use super::events::PowerEvent;

/// Panel power states
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum PowerState {
    /// DISP low, inversion pulse stopped
    #[default]
    Off,
    /// Clear passes in progress
    Clearing,
    /// DISP high, inversion pulse running
    On,
}

impl PowerState {
    /// Process an event and return the next state
    pub fn transition(self, event: PowerEvent) -> Self {
        use PowerEvent::*;
        use PowerState::*;

        match (self, event) {
            (Off, PowerOnRequested) => Clearing,

            (Clearing, ClearComplete) => On,
            (Clearing, PowerOffRequested) => Off,

            (On, PowerOffRequested) => Off,
            // Re-running the power-on sequence while on clears again
            (On, PowerOnRequested) => Clearing,

            // Default: stay in current state
            _ => self,
        }
    }
}

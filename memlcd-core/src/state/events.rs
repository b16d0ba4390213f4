//! Events that trigger power state transitions

/// Events that can trigger power state transitions
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum PowerEvent {
    /// Caller asked for the panel to be powered on
    PowerOnRequested,
    /// All clear passes went out and DISP is high
    ClearComplete,
    /// Caller asked for the panel to be powered off
    PowerOffRequested,
}

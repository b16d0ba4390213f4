//! Polarity-inversion pulse service
//!
//! Memory LCD pixels hold their state in a bistable cell that must see its
//! common electrode polarity flipped periodically (EXTCOMIN), otherwise a DC
//! bias builds up and the image burns in. The pulse runs independently of
//! bus traffic, usually from a timer interrupt, and only ever touches its own
//! pin.

/// Periodic EXTCOMIN toggle generator
pub trait PulseService {
    /// Start toggling at `hz` full periods per second
    ///
    /// Restarting a running service changes its frequency.
    fn start(&mut self, hz: u8);

    /// Stop toggling and leave EXTCOMIN low
    fn stop(&mut self);

    /// Check if the service is currently toggling
    fn is_running(&self) -> bool;
}

impl<T: PulseService + ?Sized> PulseService for &mut T {
    fn start(&mut self, hz: u8) {
        T::start(self, hz)
    }

    fn stop(&mut self) {
        T::stop(self)
    }

    fn is_running(&self) -> bool {
        T::is_running(self)
    }
}

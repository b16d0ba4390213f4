//! Timing abstractions
//!
//! The refresh protocol needs short busy-wait delays around chip select
//! (SCS setup/hold) and the power sequence needs settling delays. The
//! millisecond counter only feeds the diagnostic test pattern.

/// Delay and time source
pub trait Clock {
    /// Busy-wait for at least `us` microseconds
    fn delay_us(&mut self, us: u32);

    /// Busy-wait for at least `ms` milliseconds
    fn delay_ms(&mut self, ms: u32) {
        for _ in 0..ms {
            self.delay_us(1_000);
        }
    }

    /// Milliseconds since an arbitrary epoch (wraps)
    fn now_ms(&self) -> u32;
}

impl<T: Clock + ?Sized> Clock for &mut T {
    fn delay_us(&mut self, us: u32) {
        T::delay_us(self, us)
    }

    fn delay_ms(&mut self, ms: u32) {
        T::delay_ms(self, ms)
    }

    fn now_ms(&self) -> u32 {
        T::now_ms(self)
    }
}

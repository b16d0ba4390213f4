//! Delay adapter

use embedded_hal::delay::DelayNs;
use memlcd_hal::Clock;

/// `DelayNs` provider plus a millisecond counter as a memlcd [`Clock`]
///
/// `now` is typically a closure reading a free-running timer, e.g.
/// `|| timer.get_counter().ticks() as u32 / 1_000`.
pub struct DelayClock<D, F> {
    delay: D,
    now: F,
}

impl<D, F> DelayClock<D, F>
where
    D: DelayNs,
    F: Fn() -> u32,
{
    /// Combine a delay provider and a millisecond source
    pub fn new(delay: D, now: F) -> Self {
        Self { delay, now }
    }

    /// Give the delay provider and counter back
    pub fn release(self) -> (D, F) {
        (self.delay, self.now)
    }
}

impl<D, F> Clock for DelayClock<D, F>
where
    D: DelayNs,
    F: Fn() -> u32,
{
    fn delay_us(&mut self, us: u32) {
        self.delay.delay_us(us);
    }

    fn delay_ms(&mut self, ms: u32) {
        self.delay.delay_ms(ms);
    }

    fn now_ms(&self) -> u32 {
        (self.now)()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use core::cell::Cell;

    #[derive(Default)]
    struct MockDelay {
        total_ns: u64,
    }

    impl DelayNs for MockDelay {
        fn delay_ns(&mut self, ns: u32) {
            self.total_ns += u64::from(ns);
        }
    }

    #[test]
    fn test_delays_forward() {
        let mut clock = DelayClock::new(MockDelay::default(), || 0);

        clock.delay_us(3);
        clock.delay_ms(2);

        let (delay, _) = clock.release();
        assert_eq!(delay.total_ns, 3_000 + 2_000_000);
    }

    #[test]
    fn test_now_reads_counter() {
        let ticks = Cell::new(41u32);
        let clock = DelayClock::new(MockDelay::default(), || ticks.get());

        assert_eq!(clock.now_ms(), 41);
        ticks.set(u32::MAX);
        assert_eq!(clock.now_ms(), u32::MAX);
    }
}

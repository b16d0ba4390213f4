//! Software EXTCOMIN generator
//!
//! For boards without a spare PWM channel. The driver owns a `&SoftPulse`
//! and starts or stops it during power sequencing; a periodic timer
//! interrupt holds another reference and calls [`SoftPulse::tick`] with the
//! microseconds elapsed since its last call. The pin flips every half
//! period, so the tick period only has to be well below the half period
//! (500 ms at 1 Hz).
//!
//! ```ignore
//! static PULSE: SoftPulse<Pin<Output<'static>>> = SoftPulse::new(...);
//!
//! let mut display = Display::new(bus, disp, clock, &PULSE, storage, config)?;
//!
//! #[interrupt]
//! fn TIMER_IRQ_0() {
//!     PULSE.tick(10_000);
//! }
//! ```

use core::cell::RefCell;
use core::sync::atomic::Ordering;

use critical_section::Mutex;
use memlcd_hal::{OutputPin, PulseService};
use portable_atomic::AtomicBool;

/// Microseconds in half a second
const HALF_SECOND_US: u32 = 500_000;

struct Phase<P> {
    pin: P,
    half_period_us: u32,
    elapsed_us: u32,
}

/// Timer-driven [`PulseService`], shareable between the driver and an ISR
pub struct SoftPulse<P> {
    phase: Mutex<RefCell<Phase<P>>>,
    running: AtomicBool,
}

impl<P> SoftPulse<P> {
    /// Wrap the EXTCOMIN pin
    ///
    /// The pin is left alone until the first [`start`](Self::start), so this
    /// can initialise a `static`.
    pub const fn new(pin: P) -> Self {
        Self {
            phase: Mutex::new(RefCell::new(Phase {
                pin,
                half_period_us: HALF_SECOND_US,
                elapsed_us: 0,
            })),
            running: AtomicBool::new(false),
        }
    }

    /// Give the pin back
    pub fn release(self) -> P {
        self.phase.into_inner().into_inner().pin
    }

    /// Microseconds between edges at the current frequency
    pub fn half_period_us(&self) -> u32 {
        critical_section::with(|cs| self.phase.borrow_ref(cs).half_period_us)
    }

    pub fn is_running(&self) -> bool {
        self.running.load(Ordering::Acquire)
    }
}

impl<P: OutputPin> SoftPulse<P> {
    /// Start toggling at `hz`, or retune a running generator
    ///
    /// Arming from idle drives the pin low and restarts the phase; a retune
    /// keeps the accumulated time.
    pub fn start(&self, hz: u8) {
        critical_section::with(|cs| {
            let mut phase = self.phase.borrow_ref_mut(cs);
            phase.half_period_us = HALF_SECOND_US / u32::from(hz.max(1));
            if !self.running.load(Ordering::Relaxed) {
                phase.elapsed_us = 0;
                phase.pin.set_low();
                self.running.store(true, Ordering::Release);
            }
        });
    }

    /// Stop toggling and leave the pin low
    pub fn stop(&self) {
        critical_section::with(|cs| {
            let mut phase = self.phase.borrow_ref_mut(cs);
            self.running.store(false, Ordering::Release);
            phase.elapsed_us = 0;
            phase.pin.set_low();
        });
    }

    /// Advance by `elapsed_us`, toggling on every half-period boundary
    pub fn tick(&self, elapsed_us: u32) {
        if !self.is_running() {
            return;
        }

        critical_section::with(|cs| {
            // stop() may have run since the check above
            if !self.running.load(Ordering::Relaxed) {
                return;
            }

            let mut phase = self.phase.borrow_ref_mut(cs);
            phase.elapsed_us = phase.elapsed_us.saturating_add(elapsed_us);
            while phase.elapsed_us >= phase.half_period_us {
                phase.elapsed_us -= phase.half_period_us;
                phase.pin.toggle();
            }
        });
    }
}

impl<P: OutputPin> PulseService for SoftPulse<P> {
    fn start(&mut self, hz: u8) {
        SoftPulse::start(self, hz);
    }

    fn stop(&mut self) {
        SoftPulse::stop(self);
    }

    fn is_running(&self) -> bool {
        SoftPulse::is_running(self)
    }
}

impl<P: OutputPin> PulseService for &SoftPulse<P> {
    fn start(&mut self, hz: u8) {
        SoftPulse::start(*self, hz);
    }

    fn stop(&mut self) {
        SoftPulse::stop(*self);
    }

    fn is_running(&self) -> bool {
        SoftPulse::is_running(*self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Default)]
    struct MockPin {
        high: bool,
        edges: u32,
    }

    impl OutputPin for MockPin {
        fn set_high(&mut self) {
            if !self.high {
                self.edges += 1;
            }
            self.high = true;
        }

        fn set_low(&mut self) {
            if self.high {
                self.edges += 1;
            }
            self.high = false;
        }

        fn is_set_high(&self) -> bool {
            self.high
        }
    }

    fn level(pulse: &SoftPulse<MockPin>) -> (bool, u32) {
        critical_section::with(|cs| {
            let phase = pulse.phase.borrow_ref(cs);
            (phase.pin.high, phase.pin.edges)
        })
    }

    fn drive<S: PulseService>(service: &mut S, hz: u8) {
        service.start(hz);
    }

    #[test]
    fn test_idle_until_started() {
        let pulse = SoftPulse::new(MockPin::default());
        pulse.tick(2_000_000);

        assert!(!pulse.is_running());
        assert_eq!(level(&pulse), (false, 0));
    }

    #[test]
    fn test_start_drives_pin_low() {
        let pulse = SoftPulse::new(MockPin {
            high: true,
            edges: 0,
        });
        pulse.start(1);

        assert!(pulse.is_running());
        assert_eq!(level(&pulse), (false, 1));
    }

    #[test]
    fn test_one_hz_toggles_every_half_second() {
        let pulse = SoftPulse::new(MockPin::default());
        pulse.start(1);
        assert_eq!(pulse.half_period_us(), 500_000);

        // 10 ms ticks
        for _ in 0..49 {
            pulse.tick(10_000);
        }
        assert!(!level(&pulse).0);

        pulse.tick(10_000);
        assert!(level(&pulse).0);

        for _ in 0..50 {
            pulse.tick(10_000);
        }
        assert_eq!(level(&pulse), (false, 2));
    }

    #[test]
    fn test_long_tick_catches_up() {
        let pulse = SoftPulse::new(MockPin::default());
        pulse.start(60);

        // 8333 us half period, three edges and some remainder
        pulse.tick(30_000);
        assert_eq!(level(&pulse), (true, 3));
    }

    #[test]
    fn test_stop_leaves_pin_low() {
        let pulse = SoftPulse::new(MockPin::default());
        pulse.start(1);
        pulse.tick(500_000);
        assert!(level(&pulse).0);

        pulse.stop();
        assert!(!pulse.is_running());
        assert!(!level(&pulse).0);

        pulse.tick(500_000);
        assert!(!level(&pulse).0);
    }

    #[test]
    fn test_restart_changes_frequency() {
        let pulse = SoftPulse::new(MockPin::default());
        pulse.start(1);
        pulse.tick(100_000);

        pulse.start(10);
        assert!(pulse.is_running());
        assert_eq!(pulse.half_period_us(), 50_000);

        // Accumulated time carries over
        pulse.tick(0);
        assert_eq!(level(&pulse).1, 2);
    }

    #[test]
    fn test_shared_handle_drives_same_pin() {
        let pulse = SoftPulse::new(MockPin::default());
        let mut handle = &pulse;

        drive(&mut handle, 1);
        assert!(PulseService::is_running(&handle));

        // Ticks arrive through the other reference
        pulse.tick(500_000);
        assert_eq!(level(&pulse), (true, 1));

        PulseService::stop(&mut handle);
        assert!(!pulse.is_running());
        assert_eq!(level(&pulse), (false, 2));
    }

    #[test]
    fn test_static_generator() {
        static PULSE: SoftPulse<MockPin> = SoftPulse::new(MockPin {
            high: false,
            edges: 0,
        });

        PULSE.start(2);
        PULSE.tick(250_000);
        assert_eq!(level(&PULSE), (true, 1));
        PULSE.stop();
    }

    #[test]
    fn test_release_returns_pin() {
        let pulse = SoftPulse::new(MockPin::default());
        pulse.start(1);
        pulse.tick(500_000);

        let pin = pulse.release();
        assert!(pin.high);
        assert_eq!(pin.edges, 1);
    }
}

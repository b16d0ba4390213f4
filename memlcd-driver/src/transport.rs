//! Refresh protocol sequencing
//!
//! Every public method here is exactly one SCS transaction:
//!
//! ```text
//! SCS ──┐ setup ┌─ bytes ─┐ hold ┌── SCS
//!       └───────┘         └──────┘
//! ```
//!
//! Line and block writes stream rows straight out of the frame buffer; no
//! frame is assembled in RAM. Range checking happens one level up in
//! [`crate::Display`], this layer trusts its arguments.

use memlcd_core::Timing;
use memlcd_hal::{Clock, Transport};
use memlcd_protocol::{AddressMode, RefreshRequest, ALL_CLEAR_FRAME, TRAILER};

/// Transport and clock bundled with the bus timing
pub struct Bus<T, C> {
    transport: T,
    clock: C,
    timing: Timing,
}

impl<T, C> Bus<T, C>
where
    T: Transport,
    C: Clock,
{
    pub fn new(transport: T, clock: C, timing: Timing) -> Self {
        Self {
            transport,
            clock,
            timing,
        }
    }

    /// Give back the transport and clock
    pub fn release(self) -> (T, C) {
        (self.transport, self.clock)
    }

    pub fn clock_mut(&mut self) -> &mut C {
        &mut self.clock
    }

    /// Run `body` between SCS assert and deassert
    ///
    /// SCS is released even when `body` fails; the first error wins.
    fn transaction<F>(&mut self, body: F) -> Result<(), T::Error>
    where
        F: FnOnce(&mut T, &mut C) -> Result<(), T::Error>,
    {
        self.transport.begin_transaction()?;
        self.clock.delay_us(self.timing.setup_us);

        let result = body(&mut self.transport, &mut self.clock);

        self.clock.delay_us(self.timing.hold_us);
        let end = self.transport.end_transaction();
        result.and(end)
    }

    /// Send one line: header, row bytes, trailer
    pub fn write_line(&mut self, mode: AddressMode, line: u16, row: &[u8]) -> Result<(), T::Error> {
        self.transaction(|transport, _| {
            transport.write(&mode.header(line))?;
            transport.write(row)?;
            transport.write(&TRAILER)
        })
    }

    /// Send the lines of `request` in one transaction
    ///
    /// `rows` holds the packed rows starting at `request.start_line`, `stride`
    /// bytes each. The trailer goes out once after the last line.
    pub fn write_block(
        &mut self,
        mode: AddressMode,
        request: RefreshRequest,
        rows: &[u8],
        stride: usize,
    ) -> Result<(), T::Error> {
        self.transaction(|transport, _| {
            for (line, row) in request.lines().zip(rows.chunks(stride)) {
                transport.write(&mode.header(line))?;
                transport.write(row)?;
            }
            transport.write(&TRAILER)
        })
    }

    /// Send the memory clear command
    pub fn all_clear(&mut self) -> Result<(), T::Error> {
        self.transaction(|transport, _| transport.write(&ALL_CLEAR_FRAME))
    }

    /// Fill every line with `pattern`, bypassing the frame buffer
    ///
    /// `at_midpoint` runs once right after line `height / 2` has been sent,
    /// while SCS is still high. Returns the elapsed milliseconds.
    pub fn test_pattern(
        &mut self,
        mode: AddressMode,
        height: u16,
        stride: usize,
        pattern: u8,
        mut at_midpoint: Option<&mut dyn FnMut()>,
    ) -> Result<u32, T::Error> {
        let started = self.clock.now_ms();

        self.transaction(|transport, _| {
            for line in 1..=height {
                transport.write(&mode.header(line))?;
                for _ in 0..stride {
                    transport.write_byte(pattern)?;
                }
                if line == height / 2 {
                    if let Some(at_midpoint) = at_midpoint.as_mut() {
                        at_midpoint();
                    }
                }
            }
            transport.write(&TRAILER)
        })?;

        Ok(self.clock.now_ms().wrapping_sub(started))
    }
}

//! The display object
//!
//! [`Display`] owns the frame buffer together with every collaborator the
//! panel needs: the bus transport, the DISP pin, a clock and the EXTCOMIN
//! pulse service. Nothing is global, and `&mut self` on every mutating call
//! is the single-owner discipline the shared buffer needs.
//!
//! Drawing lives in sibling modules as further `impl` blocks; this one has
//! construction, queries and the raw refresh API.

use memlcd_core::{DisplayConfig, FrameBuffer, Geometry, PowerState};
use memlcd_hal::{BitOrder, Clock, OutputPin, PulseService, SpiConfig, Transport};
use memlcd_protocol::{validate_line, RefreshRequest};

use crate::error::{discard, Error};
use crate::transport::Bus;

/// Sharp Memory LCD with its frame buffer
///
/// - `T`: bus [`Transport`]
/// - `P`: DISP [`OutputPin`]
/// - `C`: [`Clock`]
/// - `S`: EXTCOMIN [`PulseService`]
/// - `B`: frame buffer storage
pub struct Display<T, P, C, S, B> {
    pub(crate) bus: Bus<T, C>,
    pub(crate) disp: P,
    pub(crate) pulse: S,
    pub(crate) fb: FrameBuffer<B>,
    pub(crate) config: DisplayConfig,
    pub(crate) state: PowerState,
}

impl<T, P, C, S, B> Display<T, P, C, S, B>
where
    T: Transport,
    P: OutputPin,
    C: Clock,
    S: PulseService,
    B: AsRef<[u8]> + AsMut<[u8]>,
{
    /// Assemble a display
    ///
    /// `storage` must hold at least `config.model.buffer_len()` bytes. Its
    /// contents are left as they are; [`Display::power_on`] clears them.
    pub fn new(
        transport: T,
        disp: P,
        clock: C,
        pulse: S,
        storage: B,
        config: DisplayConfig,
    ) -> Result<Self, Error<T::Error>> {
        config.validate()?;
        let fb = FrameBuffer::new(storage, config.geometry())?;

        Ok(Self {
            bus: Bus::new(transport, clock, config.timing),
            disp,
            pulse,
            fb,
            config,
            state: PowerState::Off,
        })
    }

    /// Take the display apart
    pub fn release(self) -> (T, P, C, S, B) {
        let (transport, clock) = self.bus.release();
        (transport, self.disp, clock, self.pulse, self.fb.release())
    }

    pub fn config(&self) -> &DisplayConfig {
        &self.config
    }

    pub fn geometry(&self) -> Geometry {
        self.fb.geometry()
    }

    /// Horizontal resolution in pixels
    pub fn width(&self) -> u16 {
        self.geometry().width()
    }

    /// Vertical resolution in lines
    pub fn height(&self) -> u16 {
        self.geometry().height()
    }

    pub fn power_state(&self) -> PowerState {
        self.state
    }

    pub fn frame_buffer(&self) -> &FrameBuffer<B> {
        &self.fb
    }

    /// Mutable buffer access for batched drawing
    ///
    /// Nothing reaches the panel until [`Display::refresh`] or
    /// [`Display::refresh_all`] is called.
    pub fn frame_buffer_mut(&mut self) -> &mut FrameBuffer<B> {
        &mut self.fb
    }

    /// Push one buffer row to gate line `line` (1-based)
    pub fn try_write_line(&mut self, line: u16) -> Result<(), Error<T::Error>> {
        let geometry = self.geometry();
        validate_line(geometry.address_mode(), geometry.height(), line)
            .map_err(|_| Error::LineOutOfRange)?;

        let row = self.fb.row(line - 1).ok_or(Error::LineOutOfRange)?;
        self.bus
            .write_line(geometry.address_mode(), line, row)
            .map_err(Error::Bus)
    }

    /// Push gate lines `start_line..=end_line` (1-based) in one transaction
    ///
    /// `end_line` is clamped to the panel height. A reversed range or one
    /// starting below the panel sends nothing.
    pub fn try_refresh(&mut self, start_line: u16, end_line: u16) -> Result<(), Error<T::Error>> {
        let geometry = self.geometry();
        let Some(request) = RefreshRequest::new(start_line, end_line).clip(geometry.height())
        else {
            #[cfg(feature = "defmt")]
            defmt::trace!("refresh {}..={} rejected", start_line, end_line);
            return Err(Error::EmptyRange);
        };

        let rows = self
            .fb
            .rows(request.start_line - 1, request.end_line - 1);
        self.bus
            .write_block(geometry.address_mode(), request, rows, geometry.stride())
            .map_err(Error::Bus)
    }

    /// Push one buffer row, ignoring bad line numbers
    pub fn write_line(&mut self, line: u16) {
        discard(self.try_write_line(line), "write_line");
    }

    /// Push a line range, ignoring empty ranges
    pub fn refresh(&mut self, start_line: u16, end_line: u16) {
        discard(self.try_refresh(start_line, end_line), "refresh");
    }

    /// Push the whole buffer
    pub fn refresh_all(&mut self) {
        let height = self.height();
        self.refresh(1, height);
    }

    /// Push the 0-based buffer rows `top..=bottom`
    ///
    /// Rows entirely below the panel are a silent no-op.
    pub(crate) fn flush_rows(&mut self, top: u16, bottom: u16) -> Result<(), Error<T::Error>> {
        let request = RefreshRequest::rows(top, bottom);
        match self.try_refresh(request.start_line, request.end_line) {
            Err(Error::EmptyRange) => Ok(()),
            result => result,
        }
    }

    /// Send the memory clear command and whiten the buffer
    pub fn try_all_clear(&mut self) -> Result<(), Error<T::Error>> {
        self.bus.all_clear().map_err(Error::Bus)?;
        self.fb.clear();
        Ok(())
    }

    pub fn all_clear(&mut self) {
        discard(self.try_all_clear(), "all_clear");
    }

    /// Fill every line with `pattern`, bypassing the frame buffer
    ///
    /// `at_midpoint` runs once with SCS still high, right after the middle
    /// line, which makes it a good hook for sampling supply current. Returns
    /// the elapsed milliseconds.
    pub fn try_test_pattern(
        &mut self,
        pattern: u8,
        at_midpoint: Option<&mut dyn FnMut()>,
    ) -> Result<u32, Error<T::Error>> {
        let geometry = self.geometry();
        self.bus
            .test_pattern(
                geometry.address_mode(),
                geometry.height(),
                geometry.stride(),
                pattern,
                at_midpoint,
            )
            .map_err(Error::Bus)
    }

    /// Test pattern that reports 0 on bus failure
    pub fn test_pattern(&mut self, pattern: u8, at_midpoint: Option<&mut dyn FnMut()>) -> u32 {
        discard(self.try_test_pattern(pattern, at_midpoint), "test_pattern").unwrap_or(0)
    }
}

/// SPI peripheral settings for a display configuration
///
/// Mode 0 is fixed. A peripheral that cannot shift LSB first gets
/// `MsbFirst` here, and the transport must then reverse every byte.
pub fn spi_config(config: &DisplayConfig) -> SpiConfig {
    let bit_order = if config.spi.msb_first_only {
        BitOrder::MsbFirst
    } else {
        BitOrder::LsbFirst
    };
    SpiConfig::MEMORY_LCD
        .with_frequency(config.spi.frequency_hz)
        .with_bit_order(bit_order)
}

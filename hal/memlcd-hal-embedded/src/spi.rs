//! SPI bus adapter
//!
//! The Memory LCD chip select is active-high, the opposite of almost every
//! other SPI device, so `embedded_hal::spi::SpiDevice` (which asserts CS low)
//! cannot be used. The adapter drives the raw `SpiBus` and its own CS pin.

use embedded_hal::digital::OutputPin;
use embedded_hal::spi::SpiBus;
use memlcd_hal::{BitOrder, Transport};

/// Bytes reversed per bus write when the peripheral shifts MSB first
const CHUNK: usize = 16;

/// Bus or chip-select failure
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum TransportError<S, P> {
    /// The SPI peripheral reported an error
    Spi(S),
    /// The chip-select pin could not be driven
    Pin(P),
}

/// [`Transport`] over an `embedded_hal` SPI bus and an active-high CS pin
pub struct SpiTransport<SPI, CS> {
    spi: SPI,
    cs: CS,
    /// Peripheral shifts MSB first, so every byte is mirrored before writing
    reverse: bool,
}

impl<SPI, CS> SpiTransport<SPI, CS>
where
    SPI: SpiBus,
    CS: OutputPin,
{
    /// Wrap a bus whose hardware shift order is `bit_order`
    ///
    /// Pass [`BitOrder::LsbFirst`] if the peripheral was configured for LSB
    /// first; pass [`BitOrder::MsbFirst`] if it cannot be, and the adapter
    /// reverses each byte in software instead.
    pub fn new(
        spi: SPI,
        mut cs: CS,
        bit_order: BitOrder,
    ) -> Result<Self, TransportError<SPI::Error, CS::Error>> {
        cs.set_low().map_err(TransportError::Pin)?;
        Ok(Self {
            spi,
            cs,
            reverse: bit_order == BitOrder::MsbFirst,
        })
    }

    /// Give the bus and pin back
    pub fn release(self) -> (SPI, CS) {
        (self.spi, self.cs)
    }

    fn write_chunk(&mut self, data: &[u8]) -> Result<(), TransportError<SPI::Error, CS::Error>> {
        if !self.reverse {
            return self.spi.write(data).map_err(TransportError::Spi);
        }

        let mut buf = [0u8; CHUNK];
        for chunk in data.chunks(CHUNK) {
            for (dst, &src) in buf.iter_mut().zip(chunk) {
                *dst = src.reverse_bits();
            }
            self.spi.write(&buf[..chunk.len()]).map_err(TransportError::Spi)?;
        }
        Ok(())
    }
}

impl<SPI, CS> Transport for SpiTransport<SPI, CS>
where
    SPI: SpiBus,
    CS: OutputPin,
{
    type Error = TransportError<SPI::Error, CS::Error>;

    fn begin_transaction(&mut self) -> Result<(), Self::Error> {
        self.cs.set_high().map_err(TransportError::Pin)
    }

    fn write_byte(&mut self, byte: u8) -> Result<(), Self::Error> {
        self.write_chunk(&[byte])
    }

    fn write(&mut self, data: &[u8]) -> Result<(), Self::Error> {
        self.write_chunk(data)
    }

    fn end_transaction(&mut self) -> Result<(), Self::Error> {
        // CS must drop even when the flush fails
        let flushed = self.spi.flush().map_err(TransportError::Spi);
        self.cs.set_low().map_err(TransportError::Pin)?;
        flushed
    }
}

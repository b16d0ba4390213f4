//! embedded-graphics integration
//!
//! `BinaryColor::On` is ink (black), `Off` is paper (white). Each
//! `draw_iter` call ends with one block refresh over the rows it touched,
//! so a styled primitive costs one bus transaction.

use embedded_graphics::pixelcolor::BinaryColor;
use embedded_graphics::prelude::*;
use memlcd_core::Color;
use memlcd_hal::{Clock, OutputPin, PulseService, Transport};

use crate::display::Display;
use crate::error::Error;

fn to_color(color: BinaryColor) -> Color {
    match color {
        BinaryColor::On => Color::Black,
        BinaryColor::Off => Color::White,
    }
}

impl<T, P, C, S, B> OriginDimensions for Display<T, P, C, S, B>
where
    T: Transport,
    P: OutputPin,
    C: Clock,
    S: PulseService,
    B: AsRef<[u8]> + AsMut<[u8]>,
{
    fn size(&self) -> Size {
        Size::new(u32::from(self.width()), u32::from(self.height()))
    }
}

impl<T, P, C, S, B> DrawTarget for Display<T, P, C, S, B>
where
    T: Transport,
    P: OutputPin,
    C: Clock,
    S: PulseService,
    B: AsRef<[u8]> + AsMut<[u8]>,
{
    type Color = BinaryColor;
    type Error = Error<T::Error>;

    fn draw_iter<I>(&mut self, pixels: I) -> Result<(), Self::Error>
    where
        I: IntoIterator<Item = Pixel<Self::Color>>,
    {
        let geometry = self.geometry();
        let mut touched: Option<(u16, u16)> = None;

        for Pixel(point, color) in pixels {
            let (Ok(x), Ok(y)) = (u16::try_from(point.x), u16::try_from(point.y)) else {
                continue;
            };
            if !geometry.contains(x, y) {
                continue;
            }

            self.fb.set_pixel(x, y, to_color(color));
            touched = Some(match touched {
                Some((top, bottom)) => (top.min(y), bottom.max(y)),
                None => (y, y),
            });
        }

        match touched {
            Some((top, bottom)) => self.flush_rows(top, bottom),
            None => Ok(()),
        }
    }

    fn clear(&mut self, color: Self::Color) -> Result<(), Self::Error> {
        self.fb.fill(to_color(color));
        let height = self.height();
        self.try_refresh(1, height)
    }
}

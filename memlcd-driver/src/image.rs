//! Image blitting

use memlcd_core::Image;
use memlcd_hal::{Clock, OutputPin, PulseService, Transport};

use crate::display::Display;
use crate::error::{discard, Error};

impl<T, P, C, S, B> Display<T, P, C, S, B>
where
    T: Transport,
    P: OutputPin,
    C: Clock,
    S: PulseService,
    B: AsRef<[u8]> + AsMut<[u8]>,
{
    /// Copy `image` to `(left, top)` and send the lines it covers
    ///
    /// With `invert` set, white and black swap.
    pub fn try_put_image(
        &mut self,
        left: u16,
        top: u16,
        image: &Image<'_>,
        invert: bool,
    ) -> Result<(), Error<T::Error>> {
        if left >= self.width() || top >= self.height() {
            return Err(Error::OutOfBounds);
        }
        if image.width == 0 || image.height == 0 {
            return Ok(());
        }

        image.blit(&mut self.fb, left, top, invert);
        self.flush_rows(top, top.saturating_add(image.height - 1))
    }

    pub fn put_image(&mut self, left: u16, top: u16, image: &Image<'_>, invert: bool) {
        discard(self.try_put_image(left, top, image, invert), "put_image");
    }
}

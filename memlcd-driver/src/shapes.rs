//! Pixel, line and rectangle drawing
//!
//! Every call writes all of its pixels into the buffer first and then sends
//! the smallest contiguous run of lines it touched in a single transaction,
//! however many pixels that was. Coordinates are 0-based buffer positions;
//! start/end pairs may come in either order.

use memlcd_core::Color;
use memlcd_hal::{Clock, OutputPin, PulseService, Transport};

use crate::display::Display;
use crate::error::{discard, Error};

const fn ordered(a: u16, b: u16) -> (u16, u16) {
    if a > b {
        (b, a)
    } else {
        (a, b)
    }
}

impl<T, P, C, S, B> Display<T, P, C, S, B>
where
    T: Transport,
    P: OutputPin,
    C: Clock,
    S: PulseService,
    B: AsRef<[u8]> + AsMut<[u8]>,
{
    /// Set one pixel and send its line
    pub fn try_draw_pixel(&mut self, x: u16, y: u16, color: Color) -> Result<(), Error<T::Error>> {
        if !self.geometry().contains(x, y) {
            return Err(Error::OutOfBounds);
        }
        if color.is_transparent() {
            return Ok(());
        }

        self.fb.set_pixel(x, y, color);
        self.try_write_line(y + 1)
    }

    /// Horizontal line from `x1` to `x2` on row `y`, `thick` rows downwards
    pub fn try_draw_hline(
        &mut self,
        x1: u16,
        x2: u16,
        y: u16,
        color: Color,
        thick: u8,
    ) -> Result<(), Error<T::Error>> {
        if thick == 0 {
            return Err(Error::ZeroThickness);
        }
        let (left, right) = ordered(x1, x2);
        if left >= self.width() || y >= self.height() {
            return Err(Error::OutOfBounds);
        }

        let bottom = y.saturating_add(u16::from(thick) - 1);
        self.fill_area(left, y, right, bottom, color);
        self.flush_rows(y, bottom)
    }

    /// Vertical line from `y1` to `y2` at column `x`, `thick` columns rightwards
    pub fn try_draw_vline(
        &mut self,
        x: u16,
        y1: u16,
        y2: u16,
        color: Color,
        thick: u8,
    ) -> Result<(), Error<T::Error>> {
        if thick == 0 {
            return Err(Error::ZeroThickness);
        }
        let (top, bottom) = ordered(y1, y2);
        if x >= self.width() || top >= self.height() {
            return Err(Error::OutOfBounds);
        }

        let right = x.saturating_add(u16::from(thick) - 1);
        self.fill_area(x, top, right, bottom, color);
        self.flush_rows(top, bottom)
    }

    /// Filled rectangle between two corners, both inclusive
    pub fn try_draw_rect(
        &mut self,
        left: u16,
        top: u16,
        right: u16,
        bottom: u16,
        color: Color,
    ) -> Result<(), Error<T::Error>> {
        let (left, right) = ordered(left, right);
        let (top, bottom) = ordered(top, bottom);
        if left >= self.width() || top >= self.height() {
            return Err(Error::OutOfBounds);
        }

        self.fill_area(left, top, right, bottom, color);
        self.flush_rows(top, bottom)
    }

    pub fn draw_pixel(&mut self, x: u16, y: u16, color: Color) {
        discard(self.try_draw_pixel(x, y, color), "draw_pixel");
    }

    /// Horizontal line; zero thickness draws nothing
    pub fn draw_hline(&mut self, x1: u16, x2: u16, y: u16, color: Color, thick: u8) {
        discard(self.try_draw_hline(x1, x2, y, color, thick), "draw_hline");
    }

    /// Vertical line; zero thickness draws nothing
    pub fn draw_vline(&mut self, x: u16, y1: u16, y2: u16, color: Color, thick: u8) {
        discard(self.try_draw_vline(x, y1, y2, color, thick), "draw_vline");
    }

    pub fn draw_rect(&mut self, left: u16, top: u16, right: u16, bottom: u16, color: Color) {
        discard(
            self.try_draw_rect(left, top, right, bottom, color),
            "draw_rect",
        );
    }

    /// Set every pixel of an ordered, inclusive area, clipped to the panel
    fn fill_area(&mut self, left: u16, top: u16, right: u16, bottom: u16, color: Color) {
        let right = right.min(self.width().saturating_sub(1));
        let bottom = bottom.min(self.height().saturating_sub(1));
        for y in top..=bottom {
            for x in left..=right {
                self.fb.set_pixel(x, y, color);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::mock;

    /// (line, row bytes) pairs of a single block transaction
    fn block_lines(bytes: &[u8]) -> Vec<(u8, Vec<u8>)> {
        assert_eq!(&bytes[bytes.len() - 2..], &[0x00, 0x00]);
        bytes[..bytes.len() - 2]
            .chunks(10)
            .map(|frame| {
                assert_eq!(frame[0], 0x01);
                (frame[1], frame[2..].to_vec())
            })
            .collect()
    }

    #[test]
    fn test_pixel_sends_one_line() {
        let (mut display, log) = mock::display();
        display.draw_pixel(9, 4, Color::Black);

        let tx = mock::transactions(&mock::take(&log));
        assert_eq!(tx.len(), 1);
        assert_eq!(&tx[0][..3], &[0x01, 5, 0xFF]);
        assert_eq!(tx[0][3], 0xFD);
    }

    #[test]
    fn test_pixel_out_of_range_is_silent() {
        let (mut display, log) = mock::display();
        display.draw_pixel(64, 0, Color::Black);
        display.draw_pixel(0, 64, Color::Black);

        assert_eq!(
            display.try_draw_pixel(100, 100, Color::Black),
            Err(Error::OutOfBounds)
        );
        assert!(mock::take(&log).is_empty());
        assert!(display.frame_buffer().as_bytes().iter().all(|&b| b == 0xFF));
    }

    #[test]
    fn test_hline_black_then_white_restores_row() {
        let (mut display, log) = mock::display();
        let baseline = display.frame_buffer().row(20).unwrap().to_vec();

        display.draw_hline(5, 40, 20, Color::Black, 1);
        let row = display.frame_buffer().row(20).unwrap();
        assert_ne!(row, baseline.as_slice());
        assert_eq!(row[1], 0x00);

        display.draw_hline(40, 5, 20, Color::White, 1);
        assert_eq!(display.frame_buffer().row(20).unwrap(), baseline.as_slice());

        let tx = mock::transactions(&mock::take(&log));
        assert_eq!(tx.len(), 2);
        let lines = block_lines(&tx[1]);
        assert_eq!(lines, [(21, vec![0xFF; 8])]);
    }

    #[test]
    fn test_thick_hline_refreshes_its_rows() {
        let (mut display, log) = mock::display();
        display.draw_hline(0, 63, 10, Color::Black, 3);

        let tx = mock::transactions(&mock::take(&log));
        let lines = block_lines(&tx[0]);
        assert_eq!(
            lines.iter().map(|(line, _)| *line).collect::<Vec<_>>(),
            [11, 12, 13]
        );
        assert!(lines.iter().all(|(_, row)| row == &[0x00; 8]));
    }

    #[test]
    fn test_hline_clipped_at_bottom() {
        let (mut display, log) = mock::display();
        display.draw_hline(0, 7, 62, Color::Black, 5);

        let lines = block_lines(&mock::transactions(&mock::take(&log))[0]);
        assert_eq!(lines.len(), 2);
        assert_eq!(lines[1].0, 64);
    }

    #[test]
    fn test_zero_thickness_is_noop() {
        let (mut display, log) = mock::display();

        assert_eq!(
            display.try_draw_hline(0, 10, 5, Color::Black, 0),
            Err(Error::ZeroThickness)
        );
        display.draw_vline(3, 0, 10, Color::Black, 0);

        assert!(mock::take(&log).is_empty());
        assert!(display.frame_buffer().as_bytes().iter().all(|&b| b == 0xFF));
    }

    #[test]
    fn test_vline_thickness_extends_right() {
        let (mut display, log) = mock::display();
        display.draw_vline(8, 30, 20, Color::Black, 2);

        let fb = display.frame_buffer();
        assert_eq!(fb.pixel(8, 20), Some(Color::Black));
        assert_eq!(fb.pixel(9, 30), Some(Color::Black));
        assert_eq!(fb.pixel(10, 25), Some(Color::White));
        assert_eq!(fb.pixel(8, 31), Some(Color::White));

        let lines = block_lines(&mock::transactions(&mock::take(&log))[0]);
        let mut expected_row = vec![0xFF; 8];
        expected_row[1] = 0xFC;
        assert_eq!(lines.len(), 11);
        assert_eq!(lines[0], (21, expected_row));
        assert_eq!(lines[10].0, 31);
    }

    #[test]
    fn test_rect_normalizes_corners() {
        let (mut display, log) = mock::display();
        display.draw_rect(15, 7, 8, 4, Color::Black);

        let fb = display.frame_buffer();
        for y in 4..=7 {
            assert_eq!(fb.row(y).unwrap()[1], 0x00, "row {y}");
        }
        assert_eq!(fb.row(3).unwrap()[1], 0xFF);
        assert_eq!(fb.row(8).unwrap()[1], 0xFF);

        let lines = block_lines(&mock::transactions(&mock::take(&log))[0]);
        assert_eq!(
            lines.iter().map(|(line, _)| *line).collect::<Vec<_>>(),
            [5, 6, 7, 8]
        );
    }

    #[test]
    fn test_rect_off_panel() {
        let (mut display, log) = mock::display();
        assert_eq!(
            display.try_draw_rect(70, 0, 80, 5, Color::Black),
            Err(Error::OutOfBounds)
        );
        assert!(mock::take(&log).is_empty());
    }
}

//! 960x540 4-bit framebuffer and the panel flush seam.
//!
//! # Architecture
//!
//! The output path is split into two components:
//! - [`Frame`]: Implements `DrawTarget`, owns a packed 4bpp pixel buffer
//! - [`Panel`]: The display collaborator, receives one finished frame per flush
//!
//! A frame is created white, populated by replaying a
//! [`DisplayList`](crate::render::DisplayList), handed to the panel once, and
//! dropped. Frames are never reused or diffed.
//!
//! # Pixel Format
//!
//! Two pixels per byte, even column in the high nibble. Nibbles hold panel
//! levels (0 = white, 15 = black), the same numbering as
//! [`Shade`](crate::colors::Shade), so the buffer can be pushed to the panel
//! without conversion.

use core::convert::Infallible;

use embedded_graphics::pixelcolor::Gray4;
use embedded_graphics::prelude::*;
use embedded_graphics::primitives::{PointsIter, Rectangle};

use crate::colors::Shade;
use crate::config::{SCREEN_HEIGHT, SCREEN_WIDTH};

const WIDTH: usize = SCREEN_WIDTH as usize;
const HEIGHT: usize = SCREEN_HEIGHT as usize;
const BUFFER_SIZE: usize = WIDTH * HEIGHT / 2;

const _: () = assert!(WIDTH % 2 == 0);

/// E-paper waveform used for a panel update.
///
/// Every frame is a full 16-level refresh; partial waveforms are not used.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum UpdateMode {
    /// Full 16-level refresh with flashing.
    Gc16,
}

/// The display collaborator that pushes a finished frame to the panel.
pub trait Panel {
    type Error;

    /// Push `frame` to the panel using `mode`.
    fn flush(
        &mut self,
        frame: &Frame,
        mode: UpdateMode,
    ) -> Result<(), Self::Error>;
}

/// Full-screen 16-level framebuffer.
pub struct Frame {
    buffer: Box<[u8]>,
}

impl Frame {
    /// Create a white frame.
    pub fn new() -> Self {
        Self {
            buffer: vec![0u8; BUFFER_SIZE].into_boxed_slice(),
        }
    }

    /// Packed panel-level bytes, row-major, two pixels per byte.
    pub fn as_bytes(&self) -> &[u8] { &self.buffer }

    /// Panel level at `point`, or `None` outside the frame.
    pub fn level_at(
        &self,
        point: Point,
    ) -> Option<u8> {
        let idx = Self::index(point)?;
        let byte = self.buffer[idx / 2];
        Some(if idx % 2 == 0 { byte >> 4 } else { byte & 0x0F })
    }

    /// Every pixel with its panel level, row-major.
    pub fn pixels(&self) -> impl Iterator<Item = (Point, u8)> + '_ {
        self.buffer.iter().enumerate().flat_map(|(i, byte)| {
            let first = i * 2;
            let p0 = Point::new((first % WIDTH) as i32, (first / WIDTH) as i32);
            let p1 = Point::new(p0.x + 1, p0.y);
            [(p0, byte >> 4), (p1, byte & 0x0F)]
        })
    }

    /// Number of pixels at exactly `level` inside `area`.
    pub fn count_level(
        &self,
        area: &Rectangle,
        level: u8,
    ) -> usize {
        area.points()
            .filter(|p| self.level_at(*p) == Some(level))
            .count()
    }

    #[inline]
    fn index(point: Point) -> Option<usize> {
        if point.x >= 0 && (point.x as usize) < WIDTH && point.y >= 0 && (point.y as usize) < HEIGHT {
            Some(point.y as usize * WIDTH + point.x as usize)
        } else {
            None
        }
    }

    #[inline]
    fn set_level(
        &mut self,
        idx: usize,
        level: u8,
    ) {
        let byte = &mut self.buffer[idx / 2];
        if idx % 2 == 0 {
            *byte = (*byte & 0x0F) | (level << 4);
        } else {
            *byte = (*byte & 0xF0) | level;
        }
    }
}

impl Default for Frame {
    fn default() -> Self { Self::new() }
}

impl OriginDimensions for Frame {
    fn size(&self) -> Size { Size::new(SCREEN_WIDTH, SCREEN_HEIGHT) }
}

impl DrawTarget for Frame {
    type Color = Gray4;
    type Error = Infallible;

    fn draw_iter<I>(
        &mut self,
        pixels: I,
    ) -> Result<(), Self::Error>
    where
        I: IntoIterator<Item = Pixel<Self::Color>>,
    {
        for Pixel(point, color) in pixels {
            if let Some(idx) = Self::index(point) {
                self.set_level(idx, Shade::from_gray4(color).level());
            }
        }
        Ok(())
    }

    fn fill_solid(
        &mut self,
        area: &Rectangle,
        color: Self::Color,
    ) -> Result<(), Self::Error> {
        let drawable_area = area.intersection(&self.bounding_box());
        if drawable_area.size == Size::zero() {
            return Ok(());
        }

        let level = Shade::from_gray4(color).level();
        let x_start = drawable_area.top_left.x as usize;
        let width = drawable_area.size.width as usize;

        for y in drawable_area.rows() {
            let row_start = y as usize * WIDTH;
            for x in x_start..x_start + width {
                self.set_level(row_start + x, level);
            }
        }
        Ok(())
    }

    fn clear(
        &mut self,
        color: Self::Color,
    ) -> Result<(), Self::Error> {
        let level = Shade::from_gray4(color).level();
        self.buffer.fill((level << 4) | level);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::colors::{BLACK, DARK, WHITE};

    #[test]
    fn test_new_frame_is_white() {
        let frame = Frame::new();
        assert_eq!(frame.as_bytes().len(), BUFFER_SIZE);
        assert!(frame.as_bytes().iter().all(|&b| b == 0), "fresh frame should be panel white (level 0)");
    }

    #[test]
    fn test_black_pixel_reads_level_15() {
        let mut frame = Frame::new();
        Pixel(Point::new(3, 0), BLACK.to_gray4()).draw(&mut frame).ok();
        assert_eq!(frame.level_at(Point::new(3, 0)), Some(15));
        assert_eq!(frame.level_at(Point::new(2, 0)), Some(0), "neighbour in the same byte must be untouched");
        assert_eq!(frame.as_bytes()[1], 0x0F, "odd column lives in the low nibble");
    }

    #[test]
    fn test_out_of_bounds_is_ignored() {
        let mut frame = Frame::new();
        Pixel(Point::new(-1, 0), BLACK.to_gray4()).draw(&mut frame).ok();
        Pixel(Point::new(SCREEN_WIDTH as i32, 0), BLACK.to_gray4()).draw(&mut frame).ok();
        assert_eq!(frame.level_at(Point::new(-1, 0)), None);
        assert!(frame.as_bytes().iter().all(|&b| b == 0));
    }

    #[test]
    fn test_fill_solid_clips_and_counts() {
        let mut frame = Frame::new();
        let area = Rectangle::new(Point::new(955, 535), Size::new(20, 20));
        frame.fill_solid(&area, DARK.to_gray4()).ok();
        let visible = Rectangle::new(Point::new(955, 535), Size::new(5, 5));
        assert_eq!(frame.count_level(&visible, DARK.level()), 25, "clipped fill should cover the visible corner");
    }

    #[test]
    fn test_clear_sets_every_pixel() {
        let mut frame = Frame::new();
        frame.clear(BLACK.to_gray4()).ok();
        assert!(frame.pixels().all(|(_, level)| level == BLACK.level()));
        frame.clear(WHITE.to_gray4()).ok();
        assert!(frame.pixels().all(|(_, level)| level == WHITE.level()));
    }

    #[test]
    fn test_pixels_cover_frame() {
        let frame = Frame::new();
        assert_eq!(frame.pixels().count(), WIDTH * HEIGHT);
        let last = frame.pixels().last().map(|(p, _)| p);
        assert_eq!(last, Some(Point::new(WIDTH as i32 - 1, HEIGHT as i32 - 1)));
    }
}

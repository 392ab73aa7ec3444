//! Frame buffer
//!
//! Holds one full RGB565 frame in RAM so the home screen can be drawn
//! without touching the panel, then flushed row by row.

use core::convert::Infallible;

use embedded_graphics::pixelcolor::Rgb565;
use embedded_graphics::prelude::*;

/// Home screen width in pixels
pub const FRAME_WIDTH: usize = 160;

/// Home screen height in pixels
pub const FRAME_HEIGHT: usize = 120;

/// Frame buffer sized for the home screen
pub type HomeFrame = FrameBuffer<FRAME_WIDTH, FRAME_HEIGHT>;

/// RGB565 frame buffer
///
/// Pixels drawn outside the frame are dropped. The frame is dirty when its
/// content differs from what was last flushed, so redrawing an identical
/// frame does not require another flush.
#[derive(Clone)]
pub struct FrameBuffer<const W: usize, const H: usize> {
    /// Pixel rows, top to bottom
    rows: [[Rgb565; W]; H],
    /// Content at the last flush, `None` before the first one
    shown: Option<[[Rgb565; W]; H]>,
}

impl<const W: usize, const H: usize> Default for FrameBuffer<W, H> {
    fn default() -> Self {
        Self::new()
    }
}

impl<const W: usize, const H: usize> FrameBuffer<W, H> {
    /// Create a black frame
    pub const fn new() -> Self {
        Self {
            rows: [[Rgb565::BLACK; W]; H],
            shown: None,
        }
    }

    /// Get a pixel, or `None` outside the frame
    pub fn pixel(&self, x: usize, y: usize) -> Option<Rgb565> {
        self.rows.get(y).and_then(|row| row.get(x)).copied()
    }

    /// Get one row of pixels
    pub fn row(&self, y: usize) -> Option<&[Rgb565; W]> {
        self.rows.get(y)
    }

    /// Iterate over all rows, top to bottom
    pub fn rows(&self) -> impl Iterator<Item = &[Rgb565; W]> {
        self.rows.iter()
    }

    /// Check if the frame differs from the last flushed one
    pub fn is_dirty(&self) -> bool {
        self.shown.as_ref() != Some(&self.rows)
    }

    /// Mark the current content as flushed
    pub fn mark_clean(&mut self) {
        self.shown = Some(self.rows);
    }

    /// Count pixels of a given color (used to inspect rendered frames)
    pub fn count(&self, color: Rgb565) -> usize {
        self.rows
            .iter()
            .flat_map(|row| row.iter())
            .filter(|&&c| c == color)
            .count()
    }
}

/// Write `row` as big-endian RGB565 bytes, each pixel repeated `scale` times
///
/// Stops when `out` is full. Returns the number of bytes written.
pub fn scale_row_be(row: &[Rgb565], scale: usize, out: &mut [u8]) -> usize {
    if scale == 0 {
        return 0;
    }

    let mut written = 0;
    for (chunk, color) in out.chunks_exact_mut(2 * scale).zip(row) {
        let [hi, lo] = color.into_storage().to_be_bytes();
        for px in chunk.chunks_exact_mut(2) {
            px[0] = hi;
            px[1] = lo;
        }
        written += chunk.len();
    }
    written
}

impl<const W: usize, const H: usize> OriginDimensions for FrameBuffer<W, H> {
    fn size(&self) -> Size {
        Size::new(W as u32, H as u32)
    }
}

impl<const W: usize, const H: usize> DrawTarget for FrameBuffer<W, H> {
    type Color = Rgb565;
    type Error = Infallible;

    fn draw_iter<I>(&mut self, pixels: I) -> Result<(), Self::Error>
    where
        I: IntoIterator<Item = Pixel<Self::Color>>,
    {
        for Pixel(point, color) in pixels {
            if point.x < 0 || point.y < 0 {
                continue;
            }
            let (x, y) = (point.x as usize, point.y as usize);
            if x < W && y < H {
                self.rows[y][x] = color;
            }
        }
        Ok(())
    }

    fn clear(&mut self, color: Self::Color) -> Result<(), Self::Error> {
        for row in self.rows.iter_mut() {
            row.fill(color);
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use embedded_graphics::primitives::{PrimitiveStyle, Rectangle};

    #[test]
    fn test_new_frame_is_black_and_dirty() {
        let frame = HomeFrame::new();
        assert!(frame.is_dirty());
        assert_eq!(frame.count(Rgb565::BLACK), FRAME_WIDTH * FRAME_HEIGHT);
        assert_eq!(frame.size(), Size::new(160, 120));
    }

    #[test]
    fn test_clear_fills_frame() {
        let mut frame = FrameBuffer::<4, 3>::new();
        frame.mark_clean();
        frame.clear(Rgb565::RED).unwrap();
        assert!(frame.is_dirty());
        assert_eq!(frame.count(Rgb565::RED), 12);
    }

    #[test]
    fn test_out_of_bounds_pixels_dropped() {
        let mut frame = FrameBuffer::<4, 3>::new();
        frame.mark_clean();
        Rectangle::new(Point::new(-2, -2), Size::new(4, 4))
            .into_styled(PrimitiveStyle::with_fill(Rgb565::GREEN))
            .draw(&mut frame)
            .unwrap();

        // Only the 2x2 overlap with the frame is drawn
        assert_eq!(frame.count(Rgb565::GREEN), 4);
        assert_eq!(frame.pixel(1, 1), Some(Rgb565::GREEN));
        assert_eq!(frame.pixel(2, 1), Some(Rgb565::BLACK));
        assert_eq!(frame.pixel(4, 0), None);
    }

    #[test]
    fn test_redrawing_same_content_stays_clean() {
        let mut frame = FrameBuffer::<4, 3>::new();
        frame.clear(Rgb565::BLUE).unwrap();
        Pixel(Point::new(1, 1), Rgb565::RED).draw(&mut frame).unwrap();
        frame.mark_clean();

        // Clear then redraw: pixels change in between but end up the same
        frame.clear(Rgb565::BLUE).unwrap();
        assert!(frame.is_dirty());
        Pixel(Point::new(1, 1), Rgb565::RED).draw(&mut frame).unwrap();
        assert!(!frame.is_dirty());

        Pixel(Point::new(2, 1), Rgb565::RED).draw(&mut frame).unwrap();
        assert!(frame.is_dirty());
    }

    #[test]
    fn test_new_black_frame_dirty_until_flushed() {
        let mut frame = FrameBuffer::<2, 2>::new();
        frame.clear(Rgb565::BLACK).unwrap();
        assert!(frame.is_dirty());
        frame.mark_clean();
        assert!(!frame.is_dirty());
    }

    #[test]
    fn test_scale_row_doubles_pixels_big_endian() {
        let row = [Rgb565::RED, Rgb565::BLUE];
        let mut out = [0u8; 8];
        assert_eq!(scale_row_be(&row, 2, &mut out), 8);
        assert_eq!(out, [0xF8, 0x00, 0xF8, 0x00, 0x00, 0x1F, 0x00, 0x1F]);
    }

    #[test]
    fn test_scale_row_stops_at_buffer_end() {
        let row = [Rgb565::WHITE; 4];
        let mut out = [0u8; 6];
        // Room for one doubled pixel only
        assert_eq!(scale_row_be(&row, 2, &mut out), 4);
        assert_eq!(out, [0xFF, 0xFF, 0xFF, 0xFF, 0, 0]);
        assert_eq!(scale_row_be(&row, 0, &mut out), 0);
    }

    #[test]
    fn test_rows_iterate_top_to_bottom() {
        let mut frame = FrameBuffer::<2, 2>::new();
        Pixel(Point::new(1, 1), Rgb565::BLUE).draw(&mut frame).unwrap();
        let rows: [&[Rgb565; 2]; 2] = {
            let mut it = frame.rows();
            [it.next().unwrap(), it.next().unwrap()]
        };
        assert_eq!(rows[0], &[Rgb565::BLACK; 2]);
        assert_eq!(rows[1], &[Rgb565::BLACK, Rgb565::BLUE]);
    }
}

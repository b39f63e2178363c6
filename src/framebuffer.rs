//! Off-screen pixel storage.
//!
//! A `FrameBuffer` is a fixed-size, row-major array of ARGB4444 pixels. It is
//! allocated once (PSRAM on the board, heap on the host) and never resized.
//! Every coordinate-to-offset conversion goes through [`FrameBuffer::index`].

extern crate alloc;

use alloc::{boxed::Box, vec};

use embedded_graphics::{
    prelude::{OriginDimensions, Size},
    primitives::Rectangle,
    Pixel,
};

use crate::geometry::Coord;
use crate::pixel::Argb4444;

pub struct FrameBuffer {
    width: u16,
    height: u16,
    pixels: Box<[Argb4444]>,
}

impl FrameBuffer {
    /// Allocates a zeroed (transparent black) buffer.
    pub fn new(width: u16, height: u16) -> Self {
        let len = width as usize * height as usize;
        Self { width, height, pixels: vec![Argb4444::TRANSPARENT; len].into_boxed_slice() }
    }

    #[inline]
    pub fn width(&self) -> u16 {
        self.width
    }

    #[inline]
    pub fn height(&self) -> u16 {
        self.height
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.pixels.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.pixels.is_empty()
    }

    /// Offset of `p`, or `None` when it lies outside the panel.
    #[inline]
    pub fn index(&self, p: Coord) -> Option<usize> {
        if p.x < self.width && p.y < self.height {
            Some(p.x as usize + p.y as usize * self.width as usize)
        } else {
            None
        }
    }

    #[inline]
    pub fn get(&self, p: Coord) -> Option<Argb4444> {
        self.index(p).map(|i| self.pixels[i])
    }

    /// Writes one pixel. Out-of-panel writes are dropped.
    #[inline]
    pub fn put(&mut self, p: Coord, color: Argb4444) {
        if let Some(i) = self.index(p) {
            self.pixels[i] = color;
        }
    }

    /// Signed variant of [`put`](Self::put) for layout code that can run off
    /// the left or top edge.
    #[inline]
    pub fn put_signed(&mut self, x: i32, y: i32, color: Argb4444) {
        if (0..=u16::MAX as i32).contains(&x) && (0..=u16::MAX as i32).contains(&y) {
            self.put(Coord::new(x as u16, y as u16), color);
        }
    }

    pub fn fill(&mut self, color: Argb4444) {
        self.pixels.fill(color);
    }

    /// Fills `xs..=xe` on row `y`, clamped to the row.
    pub fn fill_span(&mut self, y: u16, xs: u16, xe: u16, color: Argb4444) {
        if y >= self.height || xs >= self.width || xs > xe {
            return;
        }
        let xe = xe.min(self.width - 1);
        let base = y as usize * self.width as usize;
        self.pixels[base + xs as usize..=base + xe as usize].fill(color);
    }

    pub fn row(&self, y: u16) -> &[Argb4444] {
        let w = self.width as usize;
        let base = y as usize * w;
        self.pixels.get(base..base + w).unwrap_or(&[])
    }

    #[inline]
    pub fn pixels(&self) -> &[Argb4444] {
        &self.pixels
    }

    #[inline]
    pub fn pixels_mut(&mut self) -> &mut [Argb4444] {
        &mut self.pixels
    }

    /// Raw little-endian pixel bytes, as the scanout engine reads them.
    pub fn as_bytes(&self) -> &[u8] {
        bytemuck::cast_slice(&self.pixels)
    }

    /// Address of pixel (0,0); what an address-based controller is programmed with.
    #[inline]
    pub fn base_address(&self) -> usize {
        self.pixels.as_ptr() as usize
    }

    /// Number of pixels equal to `color`.
    pub fn count(&self, color: Argb4444) -> usize {
        self.pixels.iter().filter(|&&px| px == color).count()
    }
}

impl core::fmt::Debug for FrameBuffer {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("FrameBuffer")
            .field("width", &self.width)
            .field("height", &self.height)
            .field("base", &format_args!("{:#x}", self.base_address()))
            .finish()
    }
}

// -------------------- embedded-graphics integration --------------------
impl OriginDimensions for FrameBuffer {
    fn size(&self) -> Size {
        Size::new(self.width as u32, self.height as u32)
    }
}

impl embedded_graphics::draw_target::DrawTarget for FrameBuffer {
    type Color = Argb4444;
    type Error = core::convert::Infallible;

    fn draw_iter<I>(&mut self, pixels: I) -> Result<(), Self::Error>
    where
        I: IntoIterator<Item = Pixel<Argb4444>>,
    {
        for Pixel(p, c) in pixels {
            self.put_signed(p.x, p.y, c);
        }
        Ok(())
    }

    fn fill_solid(&mut self, area: &Rectangle, color: Argb4444) -> Result<(), Self::Error> {
        let bounds = Rectangle::new(embedded_graphics::prelude::Point::zero(), self.size());
        let inter = area.intersection(&bounds);
        if inter.size.width == 0 || inter.size.height == 0 {
            return Ok(());
        }

        let x0 = inter.top_left.x as u16;
        let y0 = inter.top_left.y as u16;
        let x1 = x0 + (inter.size.width as u16) - 1;
        for y in y0..y0 + inter.size.height as u16 {
            self.fill_span(y, x0, x1, color);
        }
        Ok(())
    }

    fn clear(&mut self, color: Argb4444) -> Result<(), Self::Error> {
        self.fill(color);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use embedded_graphics::{
        prelude::*,
        primitives::{Circle, PrimitiveStyle},
    };

    #[test]
    fn index_is_row_major() {
        let fb = FrameBuffer::new(800, 480);
        assert_eq!(fb.len(), 800 * 480);
        assert_eq!(fb.index(Coord::new(0, 0)), Some(0));
        assert_eq!(fb.index(Coord::new(5, 2)), Some(5 + 2 * 800));
        assert_eq!(fb.index(Coord::new(799, 479)), Some(800 * 480 - 1));
        assert_eq!(fb.index(Coord::new(800, 0)), None);
        assert_eq!(fb.index(Coord::new(0, 480)), None);
    }

    #[test]
    fn out_of_panel_writes_are_dropped() {
        let mut fb = FrameBuffer::new(4, 4);
        fb.put(Coord::new(4, 0), Argb4444::WHITE);
        fb.put_signed(-1, 2, Argb4444::WHITE);
        assert_eq!(fb.count(Argb4444::WHITE), 0);
    }

    #[test]
    fn fill_span_clamps_to_row() {
        let mut fb = FrameBuffer::new(8, 2);
        fb.fill_span(1, 5, 200, Argb4444::RED);
        assert_eq!(fb.count(Argb4444::RED), 3);
        assert!(fb.row(0).iter().all(|&px| px == Argb4444::TRANSPARENT));
    }

    #[test]
    fn bytes_are_little_endian_pixels() {
        let mut fb = FrameBuffer::new(2, 1);
        fb.put(Coord::new(1, 0), Argb4444::new(0xF003));
        assert_eq!(fb.as_bytes(), &[0x00, 0x00, 0x03, 0xF0]);
    }

    #[test]
    fn embedded_graphics_primitives_render() {
        let mut fb = FrameBuffer::new(64, 64);
        fb.clear(Argb4444::BLACK).ok();
        Circle::new(Point::new(-10, -10), 30)
            .into_styled(PrimitiveStyle::with_fill(Argb4444::GREEN))
            .draw(&mut fb)
            .ok();
        assert!(fb.count(Argb4444::GREEN) > 0);
        assert_eq!(fb.get(Coord::new(63, 63)), Some(Argb4444::BLACK));

        Rectangle::new(Point::new(60, 60), Size::new(10, 10))
            .into_styled(PrimitiveStyle::with_fill(Argb4444::RED))
            .draw(&mut fb)
            .ok();
        assert_eq!(fb.count(Argb4444::RED), 16);
    }

    #[test]
    fn pixels_mut_writes_through() {
        let mut fb = FrameBuffer::new(4, 3);
        fb.pixels_mut()[4 + 2] = Argb4444::BLUE;
        assert_eq!(fb.get(Coord::new(2, 1)), Some(Argb4444::BLUE));
        assert_eq!(fb.count(Argb4444::BLUE), 1);
    }
}

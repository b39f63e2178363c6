//! ARGB4444 pixel type.
//!
//! One pixel is 16 bits: alpha in bits 15..12, red 11..8, green 7..4 and
//! blue 3..0. This is the layout the display controller scans out, so frame
//! buffers are plain arrays of this type.
//!
//! Alpha is stored and carried around but no drawing operation reads it.

use bytemuck::{Pod, Zeroable};
use embedded_graphics::pixelcolor::{
    raw::{RawData, RawU16},
    PixelColor, Rgb565, RgbColor,
};

/// Packed 16-bit ARGB4444 pixel.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash, Pod, Zeroable)]
#[repr(transparent)]
pub struct Argb4444(u16);

impl Argb4444 {
    pub const TRANSPARENT: Argb4444 = Argb4444(0x0000);
    pub const BLACK: Argb4444 = Argb4444(0xF000);
    pub const WHITE: Argb4444 = Argb4444(0xFFFF);
    pub const RED: Argb4444 = Argb4444(0xFF00);
    pub const GREEN: Argb4444 = Argb4444(0xF0F0);
    pub const BLUE: Argb4444 = Argb4444(0xF00F);

    /// Wraps a raw 16-bit pixel value.
    #[inline]
    pub const fn new(raw: u16) -> Self {
        Self(raw)
    }

    /// Builds a pixel from 4-bit components; upper bits of each are dropped.
    #[inline]
    pub const fn from_argb(a: u8, r: u8, g: u8, b: u8) -> Self {
        Self(
            ((a as u16 & 0x0F) << 12)
                | ((r as u16 & 0x0F) << 8)
                | ((g as u16 & 0x0F) << 4)
                | (b as u16 & 0x0F),
        )
    }

    #[inline]
    pub const fn raw(self) -> u16 {
        self.0
    }

    #[inline]
    pub fn set_raw(&mut self, raw: u16) {
        self.0 = raw;
    }

    #[inline]
    pub const fn a(self) -> u8 {
        ((self.0 & 0xF000) >> 12) as u8
    }

    #[inline]
    pub const fn r(self) -> u8 {
        ((self.0 & 0x0F00) >> 8) as u8
    }

    #[inline]
    pub const fn g(self) -> u8 {
        ((self.0 & 0x00F0) >> 4) as u8
    }

    #[inline]
    pub const fn b(self) -> u8 {
        (self.0 & 0x000F) as u8
    }

    #[inline]
    pub fn set_a(&mut self, a: u8) {
        self.0 = (self.0 & 0x0FFF) | ((a as u16 & 0x0F) << 12);
    }

    #[inline]
    pub fn set_r(&mut self, r: u8) {
        self.0 = (self.0 & 0xF0FF) | ((r as u16 & 0x0F) << 8);
    }

    #[inline]
    pub fn set_g(&mut self, g: u8) {
        self.0 = (self.0 & 0xFF0F) | ((g as u16 & 0x0F) << 4);
    }

    #[inline]
    pub fn set_b(&mut self, b: u8) {
        self.0 = (self.0 & 0xFFF0) | (b as u16 & 0x0F);
    }

    /// Expands to RGB565 by bit replication. Alpha is dropped.
    pub fn to_rgb565(self) -> Rgb565 {
        let (r, g, b) = (self.r(), self.g(), self.b());
        Rgb565::new((r << 1) | (r >> 3), (g << 2) | (g >> 2), (b << 1) | (b >> 3))
    }

    /// Big-endian RGB565 bytes, the order SPI panels expect on the wire.
    #[inline]
    pub fn to_rgb565_be(self) -> [u8; 2] {
        use embedded_graphics::prelude::IntoStorage;
        self.to_rgb565().into_storage().to_be_bytes()
    }
}

impl From<u16> for Argb4444 {
    fn from(raw: u16) -> Self {
        Self(raw)
    }
}

impl From<Argb4444> for u16 {
    fn from(px: Argb4444) -> Self {
        px.0
    }
}

/// Imported colors are always opaque.
impl From<Rgb565> for Argb4444 {
    fn from(c: Rgb565) -> Self {
        Self::from_argb(0x0F, c.r() >> 1, c.g() >> 2, c.b() >> 1)
    }
}

// -------------------- embedded-graphics integration --------------------
impl PixelColor for Argb4444 {
    type Raw = RawU16;
}

impl From<RawU16> for Argb4444 {
    fn from(raw: RawU16) -> Self {
        Self(raw.into_inner())
    }
}

impl From<Argb4444> for RawU16 {
    fn from(px: Argb4444) -> Self {
        RawU16::new(px.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn components_pack_into_nibbles() {
        let px = Argb4444::from_argb(0xF, 0x1, 0x2, 0x3);
        assert_eq!(px.raw(), 0xF123);
        assert_eq!((px.a(), px.r(), px.g(), px.b()), (0xF, 0x1, 0x2, 0x3));
    }

    #[test]
    fn setters_mask_to_four_bits() {
        let mut px = Argb4444::new(0x0000);
        px.set_a(0x1F);
        px.set_r(0xFA);
        px.set_g(0x25);
        px.set_b(0x3C);
        assert_eq!(px.raw(), 0xFA5C);

        px.set_g(0);
        assert_eq!(px.raw(), 0xFA0C);
    }

    #[test]
    fn equality_is_by_raw_value() {
        assert_eq!(Argb4444::from(0xF003), Argb4444::from_argb(0xF, 0, 0, 3));
        assert_ne!(Argb4444::from(0xF003), Argb4444::from(0x0003));
    }

    #[test]
    fn rgb565_expansion_replicates_bits() {
        assert_eq!(Argb4444::WHITE.to_rgb565(), Rgb565::WHITE);
        assert_eq!(Argb4444::BLACK.to_rgb565(), Rgb565::BLACK);
        assert_eq!(Argb4444::WHITE.to_rgb565_be(), [0xFF, 0xFF]);
        assert_eq!(Argb4444::RED.to_rgb565_be(), [0xF8, 0x00]);
    }

    #[test]
    fn rgb565_import_is_opaque() {
        let px = Argb4444::from_argb(0x0, 0x9, 0x4, 0xC);
        let back = Argb4444::from(px.to_rgb565());
        assert_eq!(back, Argb4444::from_argb(0xF, 0x9, 0x4, 0xC));
    }

    #[test]
    fn set_raw_replaces_every_channel() {
        let mut px = Argb4444::RED;
        px.set_raw(0x0A5C);
        assert_eq!((px.a(), px.r(), px.g(), px.b()), (0x0, 0xA, 0x5, 0xC));
    }
}

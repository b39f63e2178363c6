//! Screen coordinates.

use bytemuck::{Pod, Zeroable};
use embedded_graphics::prelude::Point;

/// Unsigned panel coordinate, (0,0) is the top-left corner.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash, Pod, Zeroable)]
#[repr(C)]
pub struct Coord {
    pub x: u16,
    pub y: u16,
}

impl Coord {
    pub const ORIGIN: Coord = Coord { x: 0, y: 0 };

    #[inline]
    pub const fn new(x: u16, y: u16) -> Self {
        Self { x, y }
    }

    /// 32-bit packed form, x in the low half.
    #[inline]
    pub const fn packed(self) -> u32 {
        ((self.y as u32) << 16) | self.x as u32
    }

    #[inline]
    pub const fn from_packed(v: u32) -> Self {
        Self { x: (v & 0xFFFF) as u16, y: (v >> 16) as u16 }
    }

    /// Component-wise min/max of two corners: (top-left, bottom-right).
    #[inline]
    pub fn normalize(a: Coord, b: Coord) -> (Coord, Coord) {
        (
            Coord::new(a.x.min(b.x), a.y.min(b.y)),
            Coord::new(a.x.max(b.x), a.y.max(b.y)),
        )
    }
}

impl From<(u16, u16)> for Coord {
    fn from((x, y): (u16, u16)) -> Self {
        Self { x, y }
    }
}

impl From<Coord> for Point {
    fn from(c: Coord) -> Self {
        Point::new(c.x as i32, c.y as i32)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn packed_round_trip() {
        let c = Coord::new(799, 479);
        assert_eq!(c.packed(), (479 << 16) | 799);
        assert_eq!(Coord::from_packed(c.packed()), c);
    }

    #[test]
    fn normalize_handles_any_diagonal() {
        let (tl, br) = Coord::normalize(Coord::new(30, 5), Coord::new(10, 20));
        assert_eq!(tl, Coord::new(10, 5));
        assert_eq!(br, Coord::new(30, 20));
    }
}

//! Primitive rasterizer.
//!
//! Stateless drawing routines over a caller-supplied [`FrameBuffer`] and draw
//! color. Everything is a scalar store; there is no blending and no clipping
//! beyond the buffer itself dropping writes that fall outside the panel.

use crate::framebuffer::FrameBuffer;
use crate::geometry::Coord;
use crate::pixel::Argb4444;

/// Overwrites every pixel of `buf`.
pub fn clear(buf: &mut FrameBuffer, color: Argb4444) {
    buf.fill(color);
}

pub fn draw_pixel(buf: &mut FrameBuffer, color: Argb4444, p: Coord) {
    buf.put(p, color);
}

/// Single pixel wide line between `a` and `b`, both endpoints included.
///
/// Axis-aligned lines take the cheap span paths; anything else goes through
/// Bresenham.
pub fn draw_line(buf: &mut FrameBuffer, color: Argb4444, a: Coord, b: Coord) {
    if a.x == b.x {
        draw_vline(buf, color, a, b);
    } else if a.y == b.y {
        draw_hline(buf, color, a, b);
    } else {
        draw_aline(buf, color, a, b);
    }
}

/// Horizontal line on row `a.y` between `a.x` and `b.x` in either order.
pub fn draw_hline(buf: &mut FrameBuffer, color: Argb4444, a: Coord, b: Coord) {
    let (xs, xe) = if a.x < b.x { (a.x, b.x) } else { (b.x, a.x) };
    buf.fill_span(a.y, xs, xe, color);
}

/// Vertical line on column `a.x` between `a.y` and `b.y` in either order.
pub fn draw_vline(buf: &mut FrameBuffer, color: Argb4444, a: Coord, b: Coord) {
    let (ys, ye) = if a.y < b.y { (a.y, b.y) } else { (b.y, a.y) };
    for y in ys..=ye {
        buf.put(Coord::new(a.x, y), color);
    }
}

/// Arbitrary line, integer Bresenham.
///
/// The axis with the larger delta is stepped every iteration. The other one
/// accumulates its delta into a numerator that starts at half the major delta
/// and steps once the numerator reaches the major delta. Exactly
/// `max(dx, dy) + 1` pixels are written.
///
/// Endpoints are first ordered along the major axis so that swapping `a` and
/// `b` produces the same pixels.
pub fn draw_aline(buf: &mut FrameBuffer, color: Argb4444, a: Coord, b: Coord) {
    let dx = (b.x as i32 - a.x as i32).abs();
    let dy = (b.y as i32 - a.y as i32).abs();

    let x_major = dx >= dy;
    let (start, end) = if (x_major && a.x > b.x) || (!x_major && a.y > b.y) { (b, a) } else { (a, b) };

    let sx = if end.x >= start.x { 1 } else { -1 };
    let sy = if end.y >= start.y { 1 } else { -1 };

    let (major_delta, minor_delta) = if x_major { (dx, dy) } else { (dy, dx) };

    let mut x = start.x as i32;
    let mut y = start.y as i32;
    let mut numerator = major_delta / 2;

    for _ in 0..=major_delta {
        buf.put_signed(x, y, color);

        numerator += minor_delta;
        if numerator >= major_delta {
            numerator -= major_delta;
            if x_major {
                y += sy;
            } else {
                x += sx;
            }
        }
        if x_major {
            x += sx;
        } else {
            y += sy;
        }
    }
}

/// Rectangle outline through the two opposite corners `c1` and `c2`.
pub fn draw_rect(buf: &mut FrameBuffer, color: Argb4444, c1: Coord, c2: Coord) {
    let (tl, br) = Coord::normalize(c1, c2);

    // top & bottom
    buf.fill_span(tl.y, tl.x, br.x, color);
    buf.fill_span(br.y, tl.x, br.x, color);

    // left & right, corners already written
    for y in tl.y.saturating_add(1)..br.y {
        buf.put(Coord::new(tl.x, y), color);
        buf.put(Coord::new(br.x, y), color);
    }
}

/// Filled rectangle, both corners inclusive.
pub fn draw_rect_fill(buf: &mut FrameBuffer, color: Argb4444, c1: Coord, c2: Coord) {
    let (tl, br) = Coord::normalize(c1, c2);
    for y in tl.y..=br.y {
        buf.fill_span(y, tl.x, br.x, color);
    }
}

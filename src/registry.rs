//! Font registry and text layout.
//!
//! Fonts are registered once at display init and addressed by registration
//! index or by name. The registry tracks the current font and a mirror of the
//! compositor's draw color; text calls receive the target buffer from the
//! compositor, which resolves it from the selected layer.
//!
//! Layout is single-line: glyph tops are aligned on `pos.y` (there is no
//! baseline), and the cursor advances by glyph width plus the font's
//! character gap.

use heapless::Vec;

use crate::error::RegistryFull;
use crate::font::{Font, Glyph, GlyphDescriptor};
use crate::framebuffer::FrameBuffer;
use crate::geometry::Coord;
use crate::pixel::Argb4444;

pub const MAX_FONTS: usize = 8;

/// Horizontal anchor of a string relative to its position.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub enum Alignment {
    /// `pos` is the upper-left corner.
    #[default]
    Left,
    /// `pos` is the upper-center point.
    Center,
    /// `pos` is the upper-right corner.
    Right,
}

pub struct FontRegistry {
    fonts: Vec<Font, MAX_FONTS>,
    current: Option<usize>,
    draw_color: Argb4444,
}

impl FontRegistry {
    pub const fn new() -> Self {
        Self { fonts: Vec::new(), current: None, draw_color: Argb4444::TRANSPARENT }
    }

    /// Drops every font and the current selection.
    pub fn clear(&mut self) {
        self.fonts.clear();
        self.current = None;
    }

    /// Registers an MSB-first font covering `'!'` onwards; returns its index.
    pub fn add(
        &mut self,
        name: &'static str,
        descriptors: &'static [GlyphDescriptor],
        bitmap: &'static [u8],
        height: u16,
        space_width: u16,
        char_gap: u16,
    ) -> Result<usize, RegistryFull> {
        self.add_font(Font::new(name, descriptors, bitmap, height, space_width, char_gap))
    }

    pub fn add_font(&mut self, font: Font) -> Result<usize, RegistryFull> {
        let idx = self.fonts.len();
        log::debug!("fonts: [{}] {} ({} px)", idx, font.name(), font.height());
        self.fonts.push(font).map_err(|_| RegistryFull)?;
        Ok(idx)
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.fonts.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.fonts.is_empty()
    }

    pub fn font(&self, idx: usize) -> Option<&Font> {
        self.fonts.get(idx)
    }

    pub fn fonts(&self) -> impl Iterator<Item = &Font> {
        self.fonts.iter()
    }

    pub fn position(&self, name: &str) -> Option<usize> {
        self.fonts.iter().position(|f| f.name() == name)
    }

    #[inline]
    pub fn current_index(&self) -> Option<usize> {
        self.current
    }

    pub fn current(&self) -> Option<&Font> {
        self.current.and_then(|i| self.fonts.get(i))
    }

    /// Selects font `idx`. Out-of-range indices keep the current selection.
    pub fn set_font_by_index(&mut self, idx: usize) -> bool {
        if idx < self.fonts.len() {
            self.current = Some(idx);
            true
        } else {
            false
        }
    }

    /// Selects the font called `name`. Unknown names keep the current
    /// selection; the return value says whether anything changed.
    pub fn set_font_by_name(&mut self, name: &str) -> bool {
        match self.position(name) {
            Some(idx) => {
                self.current = Some(idx);
                true
            }
            None => {
                log::debug!("fonts: no font named {:?}", name);
                false
            }
        }
    }

    pub fn set_draw_color(&mut self, color: Argb4444) {
        self.draw_color = color;
    }

    #[inline]
    pub fn draw_color(&self) -> Argb4444 {
        self.draw_color
    }

    /// Width of `ch` in the current font, 0 when it cannot be drawn.
    pub fn measure_char(&self, ch: char) -> u16 {
        self.current().and_then(|f| f.glyph(ch)).map_or(0, |g| g.width())
    }

    /// Width of `s`: glyph widths plus one gap between neighbours, no trailing
    /// gap. Characters the font cannot draw take no space at all.
    pub fn measure_str(&self, s: &str) -> u32 {
        let Some(font) = self.current() else {
            return 0;
        };
        let mut total = 0u32;
        let mut count = 0u32;
        for g in s.chars().filter_map(|ch| font.glyph(ch)) {
            total += g.width() as u32;
            count += 1;
        }
        total + count.saturating_sub(1) * font.char_gap() as u32
    }

    /// Mask-blits `ch` with its upper-left corner at `pos`. Set bits take the
    /// draw color, clear bits leave the buffer alone. Returns the glyph width.
    pub fn draw_char(&self, buf: &mut FrameBuffer, pos: Coord, ch: char) -> u16 {
        let Some(glyph) = self.current().and_then(|f| f.glyph(ch)) else {
            return 0;
        };
        blit(buf, self.draw_color, pos.x as i32, pos.y as i32, &glyph);
        glyph.width()
    }

    pub fn draw_str_l(&self, buf: &mut FrameBuffer, pos: Coord, s: &str) {
        self.draw_str(buf, pos, s, Alignment::Left);
    }

    pub fn draw_str_c(&self, buf: &mut FrameBuffer, pos: Coord, s: &str) {
        self.draw_str(buf, pos, s, Alignment::Center);
    }

    pub fn draw_str_r(&self, buf: &mut FrameBuffer, pos: Coord, s: &str) {
        self.draw_str(buf, pos, s, Alignment::Right);
    }

    pub fn draw_str(&self, buf: &mut FrameBuffer, pos: Coord, s: &str, align: Alignment) {
        let Some(font) = self.current() else {
            return;
        };

        let mut x = pos.x as i32;
        match align {
            Alignment::Left => {}
            Alignment::Center => x -= (self.measure_str(s) / 2) as i32,
            Alignment::Right => x -= self.measure_str(s) as i32,
        }

        let advance_gap = font.char_gap() as i32;
        for glyph in s.chars().filter_map(|ch| font.glyph(ch)) {
            blit(buf, self.draw_color, x, pos.y as i32, &glyph);
            x += glyph.width() as i32 + advance_gap;
        }
    }
}

impl Default for FontRegistry {
    fn default() -> Self {
        Self::new()
    }
}

fn blit(buf: &mut FrameBuffer, color: Argb4444, x0: i32, y0: i32, glyph: &Glyph<'_>) {
    let Glyph::Bitmap(bm) = glyph else {
        return;
    };
    for (col, row) in bm.set_pixels() {
        buf.put_signed(x0 + col as i32, y0 + row as i32, color);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fonts::segoe_ui_12pt;

    const INK: Argb4444 = Argb4444::new(0xF000);

    // 2x2 full block for '!' and 3x2 hollow for '"', MSB-first.
    static DESC: [GlyphDescriptor; 2] = [GlyphDescriptor::new(2, 0), GlyphDescriptor::new(3, 2)];
    static DATA: [u8; 4] = [0xC0, 0xC0, 0xA0, 0xE0];

    fn registry() -> FontRegistry {
        let mut reg = FontRegistry::new();
        reg.add("Blocks", &DESC, &DATA, 2, 4, 1).unwrap();
        reg.add_font(segoe_ui_12pt::FONT.clone()).unwrap();
        reg.set_draw_color(INK);
        reg
    }

    fn lit(buf: &FrameBuffer) -> std::collections::BTreeSet<(u16, u16)> {
        let mut out = std::collections::BTreeSet::new();
        for y in 0..buf.height() {
            for x in 0..buf.width() {
                if buf.get(Coord::new(x, y)) == Some(INK) {
                    out.insert((x, y));
                }
            }
        }
        out
    }

    #[test]
    fn add_returns_registration_index() {
        let reg = registry();
        assert_eq!(reg.len(), 2);
        assert_eq!(reg.position("SegoeUI12pt"), Some(1));
        assert_eq!(reg.current_index(), None);
    }

    #[test]
    fn registry_capacity() {
        let mut reg = FontRegistry::new();
        for _ in 0..MAX_FONTS {
            reg.add("Blocks", &DESC, &DATA, 2, 4, 1).unwrap();
        }
        assert_eq!(reg.add("Blocks", &DESC, &DATA, 2, 4, 1), Err(RegistryFull));
    }

    #[test]
    fn unknown_name_keeps_selection() {
        let mut reg = registry();
        assert!(reg.set_font_by_name("SegoeUI12pt"));
        assert!(!reg.set_font_by_name("Comic Sans"));
        assert_eq!(reg.current_index(), Some(1));
        assert!(!reg.set_font_by_index(7));
        assert_eq!(reg.current_index(), Some(1));
    }

    #[test]
    fn clear_drops_selection() {
        let mut reg = registry();
        reg.set_font_by_index(0);
        reg.clear();
        assert!(reg.is_empty());
        assert!(reg.current().is_none());
        assert_eq!(reg.measure_str("!!"), 0);
    }

    #[test]
    fn measuring() {
        let mut reg = registry();
        reg.set_font_by_index(0);
        assert_eq!(reg.measure_str(""), 0);
        assert_eq!(reg.measure_str("!"), 2);
        assert_eq!(reg.measure_str("\""), 3);
        // 2 + 1 + 4 + 1 + 3
        assert_eq!(reg.measure_str("! \""), 11);
        // unsupported characters take no room
        assert_eq!(reg.measure_str("!#é!"), 5);
        assert_eq!(reg.measure_char(' '), 4);
        assert_eq!(reg.measure_char('#'), 0);
    }

    #[test]
    fn measuring_segoe() {
        let mut reg = registry();
        reg.set_font_by_name("SegoeUI12pt");
        assert_eq!(reg.measure_str("A"), 10);
        // A(10) gap(2) space(3) gap(2) B(7)
        assert_eq!(reg.measure_str("A B"), 24);
    }

    #[test]
    fn no_font_means_no_ink() {
        let reg = registry();
        let mut buf = FrameBuffer::new(32, 8);
        assert_eq!(reg.draw_char(&mut buf, Coord::new(0, 0), '!'), 0);
        reg.draw_str_l(&mut buf, Coord::new(0, 0), "!!");
        assert_eq!(buf.count(INK), 0);
    }

    #[test]
    fn mask_blit_leaves_clear_bits() {
        let mut reg = registry();
        reg.set_font_by_index(0);
        let mut buf = FrameBuffer::new(16, 8);
        buf.fill(Argb4444::WHITE);
        reg.draw_char(&mut buf, Coord::new(4, 3), '"');
        let px = lit(&buf);
        assert_eq!(px.len(), 5);
        assert!(!px.contains(&(5, 3)));
        assert_eq!(buf.get(Coord::new(5, 3)), Some(Argb4444::WHITE));
    }

    #[test]
    fn left_layout_advances_by_width_and_gap() {
        let mut reg = registry();
        reg.set_font_by_index(0);
        let mut buf = FrameBuffer::new(32, 8);
        reg.draw_str_l(&mut buf, Coord::new(1, 2), "! !");
        let px = lit(&buf);
        // first block at x=1..=2, space 4 wide at x=4..=7, second block at x=9
        let expected: std::collections::BTreeSet<_> =
            [(1, 2), (2, 2), (1, 3), (2, 3), (9, 2), (10, 2), (9, 3), (10, 3)].into_iter().collect();
        assert_eq!(px, expected);
    }

    #[test]
    fn centered_matches_shifted_left() {
        let mut reg = registry();
        reg.set_font_by_name("SegoeUI12pt");
        let s = "Hello World!";
        let pos = Coord::new(200, 10);

        let mut centered = FrameBuffer::new(400, 40);
        reg.draw_str_c(&mut centered, pos, s);

        let mut shifted = FrameBuffer::new(400, 40);
        let x = pos.x - (reg.measure_str(s) / 2) as u16;
        reg.draw_str_l(&mut shifted, Coord::new(x, pos.y), s);

        assert!(centered.count(INK) > 0);
        assert_eq!(lit(&centered), lit(&shifted));
    }

    #[test]
    fn right_aligned_ends_at_pos() {
        let mut reg = registry();
        reg.set_font_by_index(0);
        let mut buf = FrameBuffer::new(32, 8);
        reg.draw_str_r(&mut buf, Coord::new(20, 0), "!!");
        // width 5: blocks at 15..=16 and 18..=19
        let xs: std::collections::BTreeSet<u16> = lit(&buf).into_iter().map(|(x, _)| x).collect();
        assert_eq!(xs, [15, 16, 18, 19].into_iter().collect());
    }

    #[test]
    fn text_running_off_the_left_edge_is_clipped() {
        let mut reg = registry();
        reg.set_font_by_index(0);
        let mut buf = FrameBuffer::new(32, 8);
        reg.draw_str_c(&mut buf, Coord::new(1, 0), "!!!");
        // width 8, starts at x=-3: first block off-panel, then 0..=1 and 3..=4
        let xs: std::collections::BTreeSet<u16> = lit(&buf).into_iter().map(|(x, _)| x).collect();
        assert_eq!(xs, [0, 1, 3, 4].into_iter().collect());
    }

    #[test]
    fn segoe_a_lands_at_top_left() {
        let mut reg = registry();
        reg.set_font_by_index(1);
        let mut buf = FrameBuffer::new(200, 200);
        reg.draw_str_l(&mut buf, Coord::new(100, 100), "A");

        let Some(Glyph::Bitmap(bm)) = segoe_ui_12pt::FONT.glyph('A') else { panic!() };
        let expected: std::collections::BTreeSet<_> =
            bm.set_pixels().map(|(c, r)| (100 + c, 100 + r)).collect();
        assert_eq!(bm.width(), 10);
        assert_eq!(lit(&buf), expected);
        // A's apex is on the 3rd row, columns 4 and 5
        assert!(expected.contains(&(104, 102)) && expected.contains(&(105, 102)));
    }
}

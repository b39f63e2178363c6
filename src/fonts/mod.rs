//! Compiled-in font assets.
//!
//! The tables are kept byte-for-byte identical to the firmware font assets so
//! the same data can be shared with other targets.

use crate::error::RegistryFull;
use crate::font::Font;
use crate::registry::FontRegistry;

pub mod segoe_ui_12pt;

/// Every compiled-in font, in registration order.
pub fn builtin() -> [&'static Font; 1] {
    [&segoe_ui_12pt::FONT]
}

/// Registers the compiled-in fonts; the first one lands at index 0.
pub fn register_builtin(registry: &mut FontRegistry) -> Result<(), RegistryFull> {
    for font in builtin() {
        registry.add_font(font.clone())?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::font::{BitOrder, Glyph};

    #[test]
    fn segoe_covers_printable_ascii() {
        let f = &segoe_ui_12pt::FONT;
        assert_eq!(f.first_char(), '!');
        assert_eq!(f.last_char(), Some('~'));
        assert_eq!(f.bit_order(), BitOrder::LsbFirst);
        for ch in '!'..='~' {
            assert!(f.supports(ch), "{:?}", ch);
        }
        assert!(!f.supports('\u{7f}'));
    }

    #[test]
    fn segoe_offsets_are_contiguous() {
        let f = &segoe_ui_12pt::FONT;
        let mut expected = 0u32;
        for ch in '!'..='~' {
            let d = f.descriptor(ch).unwrap();
            assert_eq!(d.offset, expected, "{:?}", ch);
            expected += (d.row_bytes() * f.height() as usize) as u32;
        }
        assert_eq!(expected as usize, segoe_ui_12pt::BITMAP.len());
    }

    #[test]
    fn segoe_exclamation_mark_shape() {
        let Some(Glyph::Bitmap(bm)) = segoe_ui_12pt::FONT.glyph('!') else { panic!() };
        let rows: Vec<u16> = bm.set_pixels().map(|(_, y)| y).collect();
        assert_eq!(rows, [2, 3, 4, 5, 6, 7, 8, 11, 12]);
    }

    #[test]
    fn builtin_registration_order() {
        let mut reg = FontRegistry::new();
        register_builtin(&mut reg).unwrap();
        assert_eq!(reg.len(), 1);
        assert_eq!(reg.font(0).map(|f| f.name()), Some(segoe_ui_12pt::NAME));
    }
}

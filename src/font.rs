//! Proportional 1-bpp bitmap fonts.
//!
//! A font covers one contiguous character range (usually `'!'..='~'`). Every
//! glyph has its own width and the font-wide height. Glyph rows are packed
//! into `ceil(width / 8)` bytes, rows follow each other, and glyphs follow each
//! other in the blob; a [`GlyphDescriptor`] gives each glyph's width and the
//! byte offset of its first row.
//!
//! Space is not stored: it is synthesized from the font's space width.

/// Width and bitmap offset of one glyph.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct GlyphDescriptor {
    pub width: u16,
    /// Byte offset of the first row within the bitmap blob.
    pub offset: u32,
}

impl GlyphDescriptor {
    pub const fn new(width: u16, offset: u32) -> Self {
        Self { width, offset }
    }

    /// Bytes used by one row.
    #[inline]
    pub const fn row_bytes(&self) -> usize {
        (self.width as usize).div_ceil(8)
    }
}

/// Which bit of a row byte holds the leftmost column.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub enum BitOrder {
    /// Bit 7 of byte 0 is column 0.
    #[default]
    MsbFirst,
    /// Bit 0 of byte 0 is column 0.
    LsbFirst,
}

/// One packed glyph row.
#[derive(Copy, Clone, Debug)]
pub struct GlyphRow<'a> {
    bytes: &'a [u8],
    width: u16,
    order: BitOrder,
}

impl<'a> GlyphRow<'a> {
    #[inline]
    pub fn width(&self) -> u16 {
        self.width
    }

    /// Whether column `col` is set. Columns past the width read as unset.
    #[inline]
    pub fn bit(&self, col: u16) -> bool {
        if col >= self.width {
            return false;
        }
        let byte = match self.bytes.get(col as usize / 8) {
            Some(b) => *b,
            None => return false,
        };
        let shift = col % 8;
        match self.order {
            BitOrder::MsbFirst => byte & (0x80 >> shift) != 0,
            BitOrder::LsbFirst => byte & (0x01 << shift) != 0,
        }
    }

    /// Columns that are set, left to right.
    pub fn set_columns(self) -> impl Iterator<Item = u16> + 'a {
        (0..self.width).filter(move |&c| self.bit(c))
    }
}

/// Bit-reader over one glyph's rows.
#[derive(Copy, Clone, Debug)]
pub struct GlyphBitmap<'a> {
    data: &'a [u8],
    width: u16,
    height: u16,
    order: BitOrder,
}

impl<'a> GlyphBitmap<'a> {
    #[inline]
    pub fn width(&self) -> u16 {
        self.width
    }

    #[inline]
    pub fn height(&self) -> u16 {
        self.height
    }

    pub fn row(&self, y: u16) -> Option<GlyphRow<'a>> {
        if y >= self.height {
            return None;
        }
        let stride = (self.width as usize).div_ceil(8);
        let start = y as usize * stride;
        let bytes = self.data.get(start..start + stride)?;
        Some(GlyphRow { bytes, width: self.width, order: self.order })
    }

    pub fn rows(self) -> impl Iterator<Item = GlyphRow<'a>> + 'a {
        (0..self.height).filter_map(move |y| self.row(y))
    }

    /// `(column, row)` of every set bit, row-major.
    pub fn set_pixels(self) -> impl Iterator<Item = (u16, u16)> + 'a {
        self.rows()
            .enumerate()
            .flat_map(|(y, row)| row.set_columns().map(move |x| (x, y as u16)))
    }
}

/// What a character resolves to in a font.
#[derive(Copy, Clone, Debug)]
pub enum Glyph<'a> {
    /// Synthesized blank advance.
    Space { width: u16 },
    Bitmap(GlyphBitmap<'a>),
}

impl Glyph<'_> {
    #[inline]
    pub fn width(&self) -> u16 {
        match self {
            Glyph::Space { width } => *width,
            Glyph::Bitmap(bm) => bm.width(),
        }
    }
}

/// An immutable bitmap font.
#[derive(Clone, Debug)]
pub struct Font {
    name: &'static str,
    height: u16,
    space_width: u16,
    char_gap: u16,
    first_char: char,
    descriptors: &'static [GlyphDescriptor],
    bitmap: &'static [u8],
    bit_order: BitOrder,
}

impl Font {
    /// Font covering `'!'` onwards, MSB-first rows.
    pub const fn new(
        name: &'static str,
        descriptors: &'static [GlyphDescriptor],
        bitmap: &'static [u8],
        height: u16,
        space_width: u16,
        char_gap: u16,
    ) -> Self {
        Self {
            name,
            height,
            space_width,
            char_gap,
            first_char: '!',
            descriptors,
            bitmap,
            bit_order: BitOrder::MsbFirst,
        }
    }

    pub const fn with_first_char(mut self, first: char) -> Self {
        self.first_char = first;
        self
    }

    pub const fn with_bit_order(mut self, order: BitOrder) -> Self {
        self.bit_order = order;
        self
    }

    #[inline]
    pub fn name(&self) -> &'static str {
        self.name
    }

    #[inline]
    pub fn height(&self) -> u16 {
        self.height
    }

    #[inline]
    pub fn space_width(&self) -> u16 {
        self.space_width
    }

    #[inline]
    pub fn char_gap(&self) -> u16 {
        self.char_gap
    }

    #[inline]
    pub fn first_char(&self) -> char {
        self.first_char
    }

    #[inline]
    pub fn bit_order(&self) -> BitOrder {
        self.bit_order
    }

    /// Last character with a stored bitmap.
    pub fn last_char(&self) -> Option<char> {
        let n = self.descriptors.len() as u32;
        if n == 0 {
            return None;
        }
        char::from_u32(self.first_char as u32 + n - 1)
    }

    pub fn descriptor(&self, ch: char) -> Option<&GlyphDescriptor> {
        let idx = (ch as u32).checked_sub(self.first_char as u32)?;
        self.descriptors.get(idx as usize)
    }

    /// Resolves `ch`. `None` for anything the font cannot draw, including
    /// glyphs whose rows would run past the end of the blob.
    pub fn glyph(&self, ch: char) -> Option<Glyph<'static>> {
        if ch == ' ' {
            return Some(Glyph::Space { width: self.space_width });
        }
        let desc = self.descriptor(ch)?;
        let start = desc.offset as usize;
        let len = desc.row_bytes() * self.height as usize;
        let data: &'static [u8] = self.bitmap.get(start..start.checked_add(len)?)?;
        Some(Glyph::Bitmap(GlyphBitmap {
            data,
            width: desc.width,
            height: self.height,
            order: self.bit_order,
        }))
    }

    pub fn supports(&self, ch: char) -> bool {
        self.glyph(ch).is_some()
    }
}

//! Segoe UI 12pt, `'!'..='~'`.
//!
//! 17 rows per glyph, LSB-first (bit 0 of the first byte is the leftmost
//! column). Space is 3 px, glyphs are separated by 2 px.

use crate::font::{BitOrder, Font, GlyphDescriptor};

pub const NAME: &str = "SegoeUI12pt";
pub const HEIGHT: u16 = 17;
pub const SPACE_WIDTH: u16 = 3;
pub const CHAR_GAP: u16 = 2;

pub static DESCRIPTORS: [GlyphDescriptor; 94] = [
    GlyphDescriptor::new(1, 0), // !
    GlyphDescriptor::new(4, 17), // "
    GlyphDescriptor::new(8, 34), // #
    GlyphDescriptor::new(7, 51), // $
    GlyphDescriptor::new(11, 68), // %
    GlyphDescriptor::new(11, 102), // &
    GlyphDescriptor::new(1, 136), // '
    GlyphDescriptor::new(4, 153), // (
    GlyphDescriptor::new(4, 170), // )
    GlyphDescriptor::new(5, 187), // *
    GlyphDescriptor::new(7, 204), // +
    GlyphDescriptor::new(2, 221), // ,
    GlyphDescriptor::new(4, 238), // -
    GlyphDescriptor::new(1, 255), // .
    GlyphDescriptor::new(6, 272), // /
    GlyphDescriptor::new(7, 289), // 0
    GlyphDescriptor::new(4, 306), // 1
    GlyphDescriptor::new(6, 323), // 2
    GlyphDescriptor::new(6, 340), // 3
    GlyphDescriptor::new(8, 357), // 4
    GlyphDescriptor::new(6, 374), // 5
    GlyphDescriptor::new(7, 391), // 6
    GlyphDescriptor::new(7, 408), // 7
    GlyphDescriptor::new(7, 425), // 8
    GlyphDescriptor::new(7, 442), // 9
    GlyphDescriptor::new(1, 459), // :
    GlyphDescriptor::new(2, 476), // ;
    GlyphDescriptor::new(7, 493), // <
    GlyphDescriptor::new(7, 510), // =
    GlyphDescriptor::new(7, 527), // >
    GlyphDescriptor::new(5, 544), // ?
    GlyphDescriptor::new(13, 561), // @
    GlyphDescriptor::new(10, 595), // A
    GlyphDescriptor::new(7, 629), // B
    GlyphDescriptor::new(8, 646), // C
    GlyphDescriptor::new(9, 663), // D
    GlyphDescriptor::new(6, 697), // E
    GlyphDescriptor::new(6, 714), // F
    GlyphDescriptor::new(9, 731), // G
    GlyphDescriptor::new(9, 765), // H
    GlyphDescriptor::new(1, 799), // I
    GlyphDescriptor::new(4, 816), // J
    GlyphDescriptor::new(7, 833), // K
    GlyphDescriptor::new(6, 850), // L
    GlyphDescriptor::new(12, 867), // M
    GlyphDescriptor::new(10, 901), // N
    GlyphDescriptor::new(10, 935), // O
    GlyphDescriptor::new(7, 969), // P
    GlyphDescriptor::new(11, 986), // Q
    GlyphDescriptor::new(8, 1020), // R
    GlyphDescriptor::new(7, 1037), // S
    GlyphDescriptor::new(7, 1054), // T
    GlyphDescriptor::new(9, 1071), // U
    GlyphDescriptor::new(10, 1105), // V
    GlyphDescriptor::new(15, 1139), // W
    GlyphDescriptor::new(9, 1173), // X
    GlyphDescriptor::new(9, 1207), // Y
    GlyphDescriptor::new(9, 1241), // Z
    GlyphDescriptor::new(3, 1275), // [
    GlyphDescriptor::new(6, 1292), // \
    GlyphDescriptor::new(3, 1309), // ]
    GlyphDescriptor::new(7, 1326), // ^
    GlyphDescriptor::new(7, 1343), // _
    GlyphDescriptor::new(3, 1360), // `
    GlyphDescriptor::new(6, 1377), // a
    GlyphDescriptor::new(7, 1394), // b
    GlyphDescriptor::new(5, 1411), // c
    GlyphDescriptor::new(7, 1428), // d
    GlyphDescriptor::new(6, 1445), // e
    GlyphDescriptor::new(4, 1462), // f
    GlyphDescriptor::new(7, 1479), // g
    GlyphDescriptor::new(7, 1496), // h
    GlyphDescriptor::new(1, 1513), // i
    GlyphDescriptor::new(4, 1530), // j
    GlyphDescriptor::new(6, 1547), // k
    GlyphDescriptor::new(1, 1564), // l
    GlyphDescriptor::new(11, 1581), // m
    GlyphDescriptor::new(7, 1615), // n
    GlyphDescriptor::new(7, 1632), // o
    GlyphDescriptor::new(7, 1649), // p
    GlyphDescriptor::new(7, 1666), // q
    GlyphDescriptor::new(4, 1683), // r
    GlyphDescriptor::new(5, 1700), // s
    GlyphDescriptor::new(4, 1717), // t
    GlyphDescriptor::new(7, 1734), // u
    GlyphDescriptor::new(8, 1751), // v
    GlyphDescriptor::new(12, 1768), // w
    GlyphDescriptor::new(7, 1802), // x
    GlyphDescriptor::new(8, 1819), // y
    GlyphDescriptor::new(7, 1836), // z
    GlyphDescriptor::new(3, 1853), // {
    GlyphDescriptor::new(1, 1870), // |
    GlyphDescriptor::new(3, 1887), // }
    GlyphDescriptor::new(8, 1904), // ~
];

#[rustfmt::skip]
pub static BITMAP: [u8; 1921] = [
    // !
    0x00, 0x00, 0x01, 0x01, 0x01, 0x01, 0x01, 0x01,
    0x01, 0x00, 0x00, 0x01, 0x01, 0x00, 0x00, 0x00,
    0x00,
    // "
    0x00, 0x00, 0x09, 0x09, 0x09, 0x00, 0x00, 0x00,
    0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00,
    0x00,
    // #
    0x00, 0x00, 0x48, 0x48, 0x48, 0xFE, 0x24, 0x24,
    0x7F, 0x12, 0x12, 0x12, 0x00, 0x00, 0x00, 0x00,
    0x00,
    // $
    0x00, 0x08, 0x3C, 0x4A, 0x09, 0x09, 0x0A, 0x1C,
    0x28, 0x48, 0x48, 0x29, 0x1E, 0x08, 0x08, 0x00,
    0x00,
    // %
    0x00, 0x00, 0x00, 0x00, 0x0E, 0x01, 0x91, 0x00,
    0x91, 0x00, 0x51, 0x00, 0x51, 0x00, 0xAE, 0x03,
    0x50, 0x04, 0x50, 0x04, 0x48, 0x04, 0x48, 0x04,
    0x84, 0x03, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00,
    0x00, 0x00,
    // &
    0x00, 0x00, 0x00, 0x00, 0x1C, 0x00, 0x22, 0x00,
    0x22, 0x00, 0x22, 0x02, 0x1C, 0x02, 0x22, 0x02,
    0x41, 0x01, 0x81, 0x00, 0x81, 0x00, 0x42, 0x01,
    0x3C, 0x06, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00,
    0x00, 0x00,
    // '
    0x00, 0x00, 0x01, 0x01, 0x01, 0x00, 0x00, 0x00,
    0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00,
    0x00,
    // (
    0x00, 0x00, 0x08, 0x04, 0x02, 0x02, 0x01, 0x01,
    0x01, 0x01, 0x01, 0x01, 0x02, 0x02, 0x04, 0x08,
    0x00,
    // )
    0x00, 0x00, 0x01, 0x02, 0x04, 0x04, 0x08, 0x08,
    0x08, 0x08, 0x08, 0x08, 0x04, 0x04, 0x02, 0x01,
    0x00,
    // *
    0x00, 0x00, 0x04, 0x15, 0x0E, 0x0E, 0x0A, 0x00,
    0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00,
    0x00,
    // +
    0x00, 0x00, 0x00, 0x00, 0x00, 0x08, 0x08, 0x08,
    0x7F, 0x08, 0x08, 0x08, 0x00, 0x00, 0x00, 0x00,
    0x00,
    // ,
    0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00,
    0x00, 0x00, 0x00, 0x02, 0x02, 0x01, 0x01, 0x00,
    0x00,
    // -
    0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00,
    0x0F, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00,
    0x00,
    // .
    0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00,
    0x00, 0x00, 0x00, 0x01, 0x01, 0x00, 0x00, 0x00,
    0x00,
    // /
    0x00, 0x00, 0x20, 0x10, 0x10, 0x10, 0x08, 0x08,
    0x04, 0x04, 0x04, 0x02, 0x02, 0x02, 0x01, 0x00,
    0x00,
    // 0
    0x00, 0x00, 0x1C, 0x22, 0x41, 0x41, 0x41, 0x41,
    0x41, 0x41, 0x41, 0x22, 0x1C, 0x00, 0x00, 0x00,
    0x00,
    // 1
    0x00, 0x00, 0x08, 0x0E, 0x0B, 0x08, 0x08, 0x08,
    0x08, 0x08, 0x08, 0x08, 0x08, 0x00, 0x00, 0x00,
    0x00,
    // 2
    0x00, 0x00, 0x1E, 0x31, 0x20, 0x20, 0x20, 0x10,
    0x08, 0x06, 0x03, 0x01, 0x3F, 0x00, 0x00, 0x00,
    0x00,
    // 3
    0x00, 0x00, 0x1E, 0x31, 0x20, 0x20, 0x10, 0x0E,
    0x30, 0x20, 0x20, 0x31, 0x0F, 0x00, 0x00, 0x00,
    0x00,
    // 4
    0x00, 0x00, 0x60, 0x60, 0x50, 0x48, 0x4C, 0x46,
    0x42, 0xFF, 0x40, 0x40, 0x40, 0x00, 0x00, 0x00,
    0x00,
    // 5
    0x00, 0x00, 0x1F, 0x01, 0x01, 0x01, 0x0F, 0x10,
    0x20, 0x20, 0x20, 0x11, 0x0F, 0x00, 0x00, 0x00,
    0x00,
    // 6
    0x00, 0x00, 0x38, 0x06, 0x02, 0x01, 0x3D, 0x63,
    0x41, 0x41, 0x41, 0x22, 0x1C, 0x00, 0x00, 0x00,
    0x00,
    // 7
    0x00, 0x00, 0x7F, 0x60, 0x20, 0x10, 0x10, 0x10,
    0x08, 0x08, 0x08, 0x04, 0x04, 0x00, 0x00, 0x00,
    0x00,
    // 8
    0x00, 0x00, 0x3E, 0x63, 0x41, 0x41, 0x22, 0x1C,
    0x63, 0x41, 0x41, 0x63, 0x3E, 0x00, 0x00, 0x00,
    0x00,
    // 9
    0x00, 0x00, 0x1C, 0x22, 0x41, 0x41, 0x41, 0x62,
    0x5C, 0x40, 0x20, 0x30, 0x1E, 0x00, 0x00, 0x00,
    0x00,
    // :
    0x00, 0x00, 0x00, 0x00, 0x00, 0x01, 0x01, 0x00,
    0x00, 0x00, 0x00, 0x01, 0x01, 0x00, 0x00, 0x00,
    0x00,
    // ;
    0x00, 0x00, 0x00, 0x00, 0x00, 0x02, 0x02, 0x00,
    0x00, 0x00, 0x00, 0x02, 0x02, 0x01, 0x01, 0x00,
    0x00,
    // <
    0x00, 0x00, 0x00, 0x00, 0x00, 0x40, 0x30, 0x0C,
    0x03, 0x0C, 0x30, 0x40, 0x00, 0x00, 0x00, 0x00,
    0x00,
    // =
    0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x7F, 0x00,
    0x00, 0x7F, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00,
    0x00,
    // >
    0x00, 0x00, 0x00, 0x00, 0x00, 0x01, 0x06, 0x18,
    0x60, 0x18, 0x06, 0x01, 0x00, 0x00, 0x00, 0x00,
    0x00,
    // ?
    0x00, 0x00, 0x0E, 0x11, 0x10, 0x10, 0x08, 0x04,
    0x04, 0x00, 0x00, 0x04, 0x04, 0x00, 0x00, 0x00,
    0x00,
    // @
    0x00, 0x00, 0x00, 0x00, 0xF0, 0x03, 0x0C, 0x04,
    0x02, 0x08, 0xE2, 0x11, 0x11, 0x11, 0x09, 0x11,
    0x09, 0x11, 0x89, 0x09, 0x72, 0x06, 0x02, 0x00,
    0x0C, 0x02, 0xF0, 0x01, 0x00, 0x00, 0x00, 0x00,
    0x00, 0x00,
    // A
    0x00, 0x00, 0x00, 0x00, 0x30, 0x00, 0x30, 0x00,
    0x48, 0x00, 0x48, 0x00, 0x48, 0x00, 0x84, 0x00,
    0x84, 0x00, 0xFE, 0x01, 0x02, 0x01, 0x01, 0x02,
    0x01, 0x02, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00,
    0x00, 0x00,
    // B
    0x00, 0x00, 0x1F, 0x21, 0x41, 0x41, 0x21, 0x1F,
    0x21, 0x41, 0x41, 0x21, 0x1F, 0x00, 0x00, 0x00,
    0x00,
    // C
    0x00, 0x00, 0x78, 0x84, 0x02, 0x01, 0x01, 0x01,
    0x01, 0x01, 0x02, 0x84, 0x78, 0x00, 0x00, 0x00,
    0x00,
    // D
    0x00, 0x00, 0x00, 0x00, 0x3F, 0x00, 0x41, 0x00,
    0x81, 0x00, 0x01, 0x01, 0x01, 0x01, 0x01, 0x01,
    0x01, 0x01, 0x01, 0x01, 0x81, 0x00, 0x41, 0x00,
    0x3F, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00,
    0x00, 0x00,
    // E
    0x00, 0x00, 0x3F, 0x01, 0x01, 0x01, 0x01, 0x1F,
    0x01, 0x01, 0x01, 0x01, 0x3F, 0x00, 0x00, 0x00,
    0x00,
    // F
    0x00, 0x00, 0x3F, 0x01, 0x01, 0x01, 0x01, 0x3F,
    0x01, 0x01, 0x01, 0x01, 0x01, 0x00, 0x00, 0x00,
    0x00,
    // G
    0x00, 0x00, 0x00, 0x00, 0xF8, 0x00, 0x04, 0x01,
    0x02, 0x00, 0x01, 0x00, 0x01, 0x00, 0xE1, 0x01,
    0x01, 0x01, 0x01, 0x01, 0x02, 0x01, 0x04, 0x01,
    0xF8, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00,
    0x00, 0x00,
    // H
    0x00, 0x00, 0x00, 0x00, 0x01, 0x01, 0x01, 0x01,
    0x01, 0x01, 0x01, 0x01, 0x01, 0x01, 0xFF, 0x01,
    0x01, 0x01, 0x01, 0x01, 0x01, 0x01, 0x01, 0x01,
    0x01, 0x01, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00,
    0x00, 0x00,
    // I
    0x00, 0x00, 0x01, 0x01, 0x01, 0x01, 0x01, 0x01,
    0x01, 0x01, 0x01, 0x01, 0x01, 0x00, 0x00, 0x00,
    0x00,
    // J
    0x00, 0x00, 0x08, 0x08, 0x08, 0x08, 0x08, 0x08,
    0x08, 0x08, 0x08, 0x08, 0x07, 0x00, 0x00, 0x00,
    0x00,
    // K
    0x00, 0x00, 0x41, 0x21, 0x11, 0x09, 0x05, 0x03,
    0x05, 0x09, 0x11, 0x21, 0x41, 0x00, 0x00, 0x00,
    0x00,
    // L
    0x00, 0x00, 0x01, 0x01, 0x01, 0x01, 0x01, 0x01,
    0x01, 0x01, 0x01, 0x01, 0x3F, 0x00, 0x00, 0x00,
    0x00,
    // M
    0x00, 0x00, 0x00, 0x00, 0x01, 0x08, 0x03, 0x0C,
    0x03, 0x0C, 0x05, 0x0A, 0x05, 0x0A, 0x09, 0x09,
    0x09, 0x09, 0x91, 0x08, 0x91, 0x08, 0x61, 0x08,
    0x61, 0x08, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00,
    0x00, 0x00,
    // N
    0x00, 0x00, 0x00, 0x00, 0x01, 0x02, 0x03, 0x02,
    0x05, 0x02, 0x09, 0x02, 0x11, 0x02, 0x21, 0x02,
    0x21, 0x02, 0x41, 0x02, 0x81, 0x02, 0x01, 0x03,
    0x01, 0x02, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00,
    0x00, 0x00,
    // O
    0x00, 0x00, 0x00, 0x00, 0x78, 0x00, 0x86, 0x01,
    0x02, 0x01, 0x01, 0x02, 0x01, 0x02, 0x01, 0x02,
    0x01, 0x02, 0x01, 0x02, 0x02, 0x01, 0x86, 0x01,
    0x78, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00,
    0x00, 0x00,
    // P
    0x00, 0x00, 0x1F, 0x21, 0x41, 0x41, 0x41, 0x21,
    0x1F, 0x01, 0x01, 0x01, 0x01, 0x00, 0x00, 0x00,
    0x00,
    // Q
    0x00, 0x00, 0x00, 0x00, 0xF8, 0x00, 0x86, 0x01,
    0x02, 0x03, 0x03, 0x02, 0x01, 0x02, 0x01, 0x02,
    0x01, 0x02, 0x03, 0x02, 0x02, 0x03, 0x86, 0x01,
    0xF8, 0x01, 0x00, 0x07, 0x00, 0x00, 0x00, 0x00,
    0x00, 0x00,
    // R
    0x00, 0x00, 0x1F, 0x21, 0x41, 0x41, 0x21, 0x1F,
    0x11, 0x21, 0x21, 0x41, 0x81, 0x00, 0x00, 0x00,
    0x00,
    // S
    0x00, 0x00, 0x3C, 0x42, 0x01, 0x01, 0x02, 0x1C,
    0x20, 0x40, 0x40, 0x21, 0x1E, 0x00, 0x00, 0x00,
    0x00,
    // T
    0x00, 0x00, 0x7F, 0x08, 0x08, 0x08, 0x08, 0x08,
    0x08, 0x08, 0x08, 0x08, 0x08, 0x00, 0x00, 0x00,
    0x00,
    // U
    0x00, 0x00, 0x00, 0x00, 0x01, 0x01, 0x01, 0x01,
    0x01, 0x01, 0x01, 0x01, 0x01, 0x01, 0x01, 0x01,
    0x01, 0x01, 0x01, 0x01, 0x01, 0x01, 0x82, 0x00,
    0x7C, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00,
    0x00, 0x00,
    // V
    0x00, 0x00, 0x00, 0x00, 0x01, 0x02, 0x02, 0x01,
    0x02, 0x01, 0x02, 0x01, 0x84, 0x00, 0x84, 0x00,
    0x48, 0x00, 0x48, 0x00, 0x48, 0x00, 0x30, 0x00,
    0x30, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00,
    0x00, 0x00,
    // W
    0x00, 0x00, 0x00, 0x00, 0x81, 0x40, 0x81, 0x40,
    0x42, 0x21, 0x42, 0x21, 0x42, 0x21, 0x24, 0x12,
    0x24, 0x12, 0x24, 0x12, 0x18, 0x0C, 0x18, 0x0C,
    0x18, 0x0C, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00,
    0x00, 0x00,
    // X
    0x00, 0x00, 0x00, 0x00, 0x01, 0x01, 0x82, 0x00,
    0x44, 0x00, 0x44, 0x00, 0x28, 0x00, 0x10, 0x00,
    0x28, 0x00, 0x44, 0x00, 0x44, 0x00, 0x82, 0x00,
    0x01, 0x01, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00,
    0x00, 0x00,
    // Y
    0x00, 0x00, 0x00, 0x00, 0x01, 0x01, 0x82, 0x00,
    0x82, 0x00, 0x44, 0x00, 0x28, 0x00, 0x28, 0x00,
    0x10, 0x00, 0x10, 0x00, 0x10, 0x00, 0x10, 0x00,
    0x10, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00,
    0x00, 0x00,
    // Z
    0x00, 0x00, 0x00, 0x00, 0xFE, 0x01, 0x80, 0x00,
    0x40, 0x00, 0x40, 0x00, 0x20, 0x00, 0x10, 0x00,
    0x08, 0x00, 0x04, 0x00, 0x04, 0x00, 0x02, 0x00,
    0xFF, 0x01, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00,
    0x00, 0x00,
    // [
    0x00, 0x00, 0x07, 0x01, 0x01, 0x01, 0x01, 0x01,
    0x01, 0x01, 0x01, 0x01, 0x01, 0x01, 0x01, 0x07,
    0x00,
    // \
    0x00, 0x00, 0x01, 0x02, 0x02, 0x02, 0x04, 0x04,
    0x08, 0x08, 0x08, 0x10, 0x10, 0x10, 0x20, 0x00,
    0x00,
    // ]
    0x00, 0x00, 0x07, 0x04, 0x04, 0x04, 0x04, 0x04,
    0x04, 0x04, 0x04, 0x04, 0x04, 0x04, 0x04, 0x07,
    0x00,
    // ^
    0x00, 0x00, 0x08, 0x08, 0x14, 0x22, 0x22, 0x41,
    0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00,
    0x00,
    // _
    0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00,
    0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x7F, 0x00,
    0x00,
    // `
    0x01, 0x02, 0x04, 0x00, 0x00, 0x00, 0x00, 0x00,
    0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00,
    0x00,
    // a
    0x00, 0x00, 0x00, 0x00, 0x00, 0x1C, 0x22, 0x20,
    0x3C, 0x22, 0x21, 0x31, 0x2E, 0x00, 0x00, 0x00,
    0x00,
    // b
    0x00, 0x01, 0x01, 0x01, 0x01, 0x1D, 0x23, 0x41,
    0x41, 0x41, 0x41, 0x23, 0x1D, 0x00, 0x00, 0x00,
    0x00,
    // c
    0x00, 0x00, 0x00, 0x00, 0x00, 0x1C, 0x02, 0x01,
    0x01, 0x01, 0x01, 0x02, 0x1C, 0x00, 0x00, 0x00,
    0x00,
    // d
    0x00, 0x40, 0x40, 0x40, 0x40, 0x5C, 0x62, 0x41,
    0x41, 0x41, 0x41, 0x62, 0x5C, 0x00, 0x00, 0x00,
    0x00,
    // e
    0x00, 0x00, 0x00, 0x00, 0x00, 0x1C, 0x22, 0x21,
    0x3F, 0x01, 0x01, 0x22, 0x1C, 0x00, 0x00, 0x00,
    0x00,
    // f
    0x00, 0x0C, 0x02, 0x02, 0x02, 0x0F, 0x02, 0x02,
    0x02, 0x02, 0x02, 0x02, 0x02, 0x00, 0x00, 0x00,
    0x00,
    // g
    0x00, 0x00, 0x00, 0x00, 0x00, 0x5C, 0x62, 0x41,
    0x41, 0x41, 0x41, 0x62, 0x5C, 0x40, 0x40, 0x22,
    0x1C,
    // h
    0x00, 0x01, 0x01, 0x01, 0x01, 0x1D, 0x23, 0x41,
    0x41, 0x41, 0x41, 0x41, 0x41, 0x00, 0x00, 0x00,
    0x00,
    // i
    0x00, 0x01, 0x01, 0x00, 0x00, 0x01, 0x01, 0x01,
    0x01, 0x01, 0x01, 0x01, 0x01, 0x00, 0x00, 0x00,
    0x00,
    // j
    0x00, 0x08, 0x08, 0x00, 0x00, 0x08, 0x08, 0x08,
    0x08, 0x08, 0x08, 0x08, 0x08, 0x08, 0x08, 0x04,
    0x03,
    // k
    0x00, 0x01, 0x01, 0x01, 0x01, 0x21, 0x19, 0x05,
    0x03, 0x05, 0x09, 0x11, 0x21, 0x00, 0x00, 0x00,
    0x00,
    // l
    0x00, 0x01, 0x01, 0x01, 0x01, 0x01, 0x01, 0x01,
    0x01, 0x01, 0x01, 0x01, 0x01, 0x00, 0x00, 0x00,
    0x00,
    // m
    0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00,
    0x00, 0x00, 0x9D, 0x03, 0x63, 0x04, 0x21, 0x04,
    0x21, 0x04, 0x21, 0x04, 0x21, 0x04, 0x21, 0x04,
    0x21, 0x04, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00,
    0x00, 0x00,
    // n
    0x00, 0x00, 0x00, 0x00, 0x00, 0x1D, 0x23, 0x41,
    0x41, 0x41, 0x41, 0x41, 0x41, 0x00, 0x00, 0x00,
    0x00,
    // o
    0x00, 0x00, 0x00, 0x00, 0x00, 0x1C, 0x22, 0x41,
    0x41, 0x41, 0x41, 0x22, 0x1C, 0x00, 0x00, 0x00,
    0x00,
    // p
    0x00, 0x00, 0x00, 0x00, 0x00, 0x1D, 0x23, 0x41,
    0x41, 0x41, 0x41, 0x23, 0x1D, 0x01, 0x01, 0x01,
    0x01,
    // q
    0x00, 0x00, 0x00, 0x00, 0x00, 0x5C, 0x62, 0x41,
    0x41, 0x41, 0x41, 0x62, 0x5C, 0x40, 0x40, 0x40,
    0x40,
    // r
    0x00, 0x00, 0x00, 0x00, 0x00, 0x0D, 0x03, 0x01,
    0x01, 0x01, 0x01, 0x01, 0x01, 0x00, 0x00, 0x00,
    0x00,
    // s
    0x00, 0x00, 0x00, 0x00, 0x00, 0x0E, 0x11, 0x01,
    0x06, 0x08, 0x10, 0x11, 0x0E, 0x00, 0x00, 0x00,
    0x00,
    // t
    0x00, 0x00, 0x00, 0x02, 0x02, 0x0F, 0x02, 0x02,
    0x02, 0x02, 0x02, 0x02, 0x0C, 0x00, 0x00, 0x00,
    0x00,
    // u
    0x00, 0x00, 0x00, 0x00, 0x00, 0x41, 0x41, 0x41,
    0x41, 0x41, 0x41, 0x62, 0x5C, 0x00, 0x00, 0x00,
    0x00,
    // v
    0x00, 0x00, 0x00, 0x00, 0x00, 0x81, 0x42, 0x42,
    0x24, 0x24, 0x24, 0x18, 0x18, 0x00, 0x00, 0x00,
    0x00,
    // w
    0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00,
    0x00, 0x00, 0x61, 0x08, 0x62, 0x04, 0x62, 0x04,
    0x92, 0x04, 0x94, 0x02, 0x94, 0x02, 0x08, 0x01,
    0x08, 0x01, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00,
    0x00, 0x00,
    // x
    0x00, 0x00, 0x00, 0x00, 0x00, 0x41, 0x22, 0x14,
    0x08, 0x08, 0x14, 0x22, 0x41, 0x00, 0x00, 0x00,
    0x00,
    // y
    0x00, 0x00, 0x00, 0x00, 0x00, 0x81, 0x42, 0x42,
    0x42, 0x24, 0x24, 0x18, 0x18, 0x08, 0x08, 0x04,
    0x03,
    // z
    0x00, 0x00, 0x00, 0x00, 0x00, 0x7F, 0x20, 0x10,
    0x08, 0x08, 0x04, 0x02, 0x7F, 0x00, 0x00, 0x00,
    0x00,
    // {
    0x00, 0x00, 0x04, 0x02, 0x02, 0x02, 0x02, 0x02,
    0x01, 0x02, 0x02, 0x02, 0x02, 0x02, 0x02, 0x04,
    0x00,
    // |
    0x00, 0x01, 0x01, 0x01, 0x01, 0x01, 0x01, 0x01,
    0x01, 0x01, 0x01, 0x01, 0x01, 0x01, 0x01, 0x01,
    0x01,
    // }
    0x00, 0x00, 0x01, 0x02, 0x02, 0x02, 0x02, 0x02,
    0x04, 0x02, 0x02, 0x02, 0x02, 0x02, 0x02, 0x01,
    0x00,
    // ~
    0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x8E,
    0x71, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00,
    0x00,
];

pub static FONT: Font = Font::new(NAME, &DESCRIPTORS, &BITMAP, HEIGHT, SPACE_WIDTH, CHAR_GAP)
    .with_bit_order(BitOrder::LsbFirst);

//! Shooter tiles and font
//!
//! The shooter runs with unsigned tile data (LCDC bit 4), so background and
//! objects share tile numbers:
//!
//! | Tiles     | Contents                 |
//! |-----------|--------------------------|
//! | 0x00      | Blank                    |
//! | 0x01-0x03 | Ship, left to right      |
//! | 0x04-0x05 | Enemy, left and right    |
//! | 0x06      | Bullet                   |
//! | 0x10-0x19 | Digits 0-9               |
//! | 0x20-0x26 | Letters for "GAME OVER"  |

use crate::tiles::{Tile, glyph, solid};

pub const BLANK_TILE: u8 = 0x00;
pub const SHIP_TILES: [u8; 3] = [0x01, 0x02, 0x03];
pub const ENEMY_TILES: [u8; 2] = [0x04, 0x05];
pub const BULLET_TILE: u8 = 0x06;
pub const DIGIT_FIRST: u8 = 0x10;
pub const LETTER_FIRST: u8 = 0x20;

/// Object tiles 0x00-0x06
pub const SPRITE_TILES: [Tile; 7] = [
    solid(0),
    glyph([0x00, 0x01, 0x03, 0x07, 0x0F, 0x3F, 0x7F, 0xFF], 3),
    glyph([0x18, 0x3C, 0x3C, 0x7E, 0xFF, 0xFF, 0xFF, 0xFF], 3),
    glyph([0x00, 0x80, 0xC0, 0xE0, 0xF0, 0xFC, 0xFE, 0xFF], 3),
    glyph([0xFF, 0x7F, 0x3F, 0x1C, 0x0F, 0x07, 0x03, 0x01], 2),
    glyph([0xFF, 0xFE, 0xFC, 0x38, 0xF0, 0xE0, 0xC0, 0x80], 2),
    glyph([0x00, 0x18, 0x18, 0x18, 0x18, 0x18, 0x00, 0x00], 3),
];

/// Digits 0-9
pub const DIGIT_TILES: [Tile; 10] = [
    glyph([0x3C, 0x66, 0x6E, 0x76, 0x66, 0x66, 0x3C, 0x00], 3),
    glyph([0x18, 0x38, 0x18, 0x18, 0x18, 0x18, 0x7E, 0x00], 3),
    glyph([0x3C, 0x66, 0x06, 0x0C, 0x30, 0x60, 0x7E, 0x00], 3),
    glyph([0x3C, 0x66, 0x06, 0x1C, 0x06, 0x66, 0x3C, 0x00], 3),
    glyph([0x0C, 0x1C, 0x3C, 0x6C, 0x7E, 0x0C, 0x0C, 0x00], 3),
    glyph([0x7E, 0x60, 0x7C, 0x06, 0x06, 0x66, 0x3C, 0x00], 3),
    glyph([0x3C, 0x60, 0x7C, 0x66, 0x66, 0x66, 0x3C, 0x00], 3),
    glyph([0x7E, 0x06, 0x0C, 0x18, 0x30, 0x30, 0x30, 0x00], 3),
    glyph([0x3C, 0x66, 0x66, 0x3C, 0x66, 0x66, 0x3C, 0x00], 3),
    glyph([0x3C, 0x66, 0x66, 0x3E, 0x06, 0x0C, 0x38, 0x00], 3),
];

/// Letters G, A, M, E, O, V, R
pub const LETTER_TILES: [Tile; 7] = [
    glyph([0x3C, 0x66, 0x60, 0x6E, 0x66, 0x66, 0x3E, 0x00], 3),
    glyph([0x18, 0x3C, 0x66, 0x66, 0x7E, 0x66, 0x66, 0x00], 3),
    glyph([0x63, 0x77, 0x7F, 0x6B, 0x63, 0x63, 0x63, 0x00], 3),
    glyph([0x7E, 0x60, 0x60, 0x7C, 0x60, 0x60, 0x7E, 0x00], 3),
    glyph([0x3C, 0x66, 0x66, 0x66, 0x66, 0x66, 0x3C, 0x00], 3),
    glyph([0x66, 0x66, 0x66, 0x66, 0x66, 0x3C, 0x18, 0x00], 3),
    glyph([0x7C, 0x66, 0x66, 0x7C, 0x78, 0x6C, 0x66, 0x00], 3),
];

const G: u8 = LETTER_FIRST;
const A: u8 = LETTER_FIRST + 1;
const M: u8 = LETTER_FIRST + 2;
const E: u8 = LETTER_FIRST + 3;
const O: u8 = LETTER_FIRST + 4;
const V: u8 = LETTER_FIRST + 5;
const R: u8 = LETTER_FIRST + 6;

/// "GAME OVER" as background tiles
pub const GAME_OVER_TEXT: [u8; 9] = [G, A, M, E, BLANK_TILE, O, V, E, R];

/// Blank row used to erase text
pub const BLANK_ROW: [u8; 32] = [BLANK_TILE; 32];

/// Tile for decimal digit `d`
#[inline]
pub const fn digit_tile(d: u8) -> u8 {
    DIGIT_FIRST + d % 10
}

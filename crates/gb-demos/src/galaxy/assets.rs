//! Galaxy tiles and maps
//!
//! Tile numbering follows the layout the demo boots with (LCDC = 0x67,
//! signed background/window tile data):
//!
//! | Tiles       | Contents                              |
//! |-------------|---------------------------------------|
//! | 0x00-0x2C   | Starfield background                  |
//! | 0x80-0x88   | Window frame border and fill          |
//! | 0x90-0x95   | Door panel and edge tiles             |
//! | 0xFC-0xFF   | Standard tiles, black to white        |
//! | obj 0-0x1B  | Earth sprite, seven 8x16 frame pairs  |

use crate::tiles::{self, Tile, glyph, solid};

/// First standard tile
pub const STD_FIRST: u8 = 0xFC;
/// Black, dark grey, light grey, white
pub const STD_TILES: [Tile; 4] = [solid(3), solid(2), solid(1), solid(0)];

/// Number of starfield tiles
pub const BKG_COUNT: usize = 0x2D;
pub const BKG_TILES: [Tile; BKG_COUNT] = tiles::speckle(0x5EED);

/// 8x8 block of background tile indices, repeated over the 32x32 map
pub const BKG_MAP: [u8; 64] = {
    let mut out = [0u8; 64];
    let mut i = 0;
    while i < 64 {
        out[i] = (tiles::hash8(i as u32, 0x2D) as usize % BKG_COUNT) as u8;
        i += 1;
    }
    out
};

/// First window tile
pub const WIN_FIRST: u8 = 0x80;
/// Number of window tiles uploaded from `WIN_FIRST`
pub const WIN_COUNT: usize = 0x21;

const FRAME_TL: u8 = 0x80;
const FRAME_TOP: u8 = 0x81;
const FRAME_TR: u8 = 0x82;
const FRAME_LEFT: u8 = 0x83;
const FRAME_FILL: u8 = 0x84;
const FRAME_RIGHT: u8 = 0x85;
const FRAME_BL: u8 = 0x86;
const FRAME_BOTTOM: u8 = 0x87;
const FRAME_BR: u8 = 0x88;
const DOOR_PANEL: u8 = 0x90;
const DOOR_EDGE: u8 = 0x92;

/// Tile shown where the door has slid away
pub const DOOR_GAP_TILE: u8 = STD_FIRST;

/// Window tiles 0x80-0xA0
pub const WIN_TILES: [Tile; WIN_COUNT] = {
    let mut out = [solid(0); WIN_COUNT];
    // Border, each drawn as a 2-pixel line on the relevant sides
    out[0x00] = glyph([0xFF, 0xFF, 0xC0, 0xC0, 0xC0, 0xC0, 0xC0, 0xC0], 3);
    out[0x01] = glyph([0xFF, 0xFF, 0, 0, 0, 0, 0, 0], 3);
    out[0x02] = glyph([0xFF, 0xFF, 0x03, 0x03, 0x03, 0x03, 0x03, 0x03], 3);
    out[0x03] = glyph([0xC0; 8], 3);
    out[0x04] = solid(1);
    out[0x05] = glyph([0x03; 8], 3);
    out[0x06] = glyph([0xC0, 0xC0, 0xC0, 0xC0, 0xC0, 0xC0, 0xFF, 0xFF], 3);
    out[0x07] = glyph([0, 0, 0, 0, 0, 0, 0xFF, 0xFF], 3);
    out[0x08] = glyph([0x03, 0x03, 0x03, 0x03, 0x03, 0x03, 0xFF, 0xFF], 3);
    // Door panel, two alternating planks
    out[0x10] = glyph([0xFE, 0x82, 0x82, 0x82, 0x82, 0x82, 0x82, 0xFE], 2);
    out[0x11] = glyph([0x7F, 0x41, 0x41, 0x41, 0x41, 0x41, 0x41, 0x7F], 2);
    // Bottom edge raised by 0, 2, 4 and 6 pixels
    out[0x12] = glyph([0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF], 2);
    out[0x13] = glyph([0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0, 0], 2);
    out[0x14] = glyph([0xFF, 0xFF, 0xFF, 0xFF, 0, 0, 0, 0], 2);
    out[0x15] = glyph([0xFF, 0xFF, 0, 0, 0, 0, 0, 0], 2);
    out
};

/// Window frame, 16x10 tiles
pub const FRAME_MAP: [u8; 16 * 10] = {
    let mut out = [FRAME_FILL; 160];
    let mut y = 0;
    while y < 10 {
        let mut x = 0;
        while x < 16 {
            let left = x == 0;
            let right = x == 15;
            out[y * 16 + x] = match (y, left, right) {
                (0, true, _) => FRAME_TL,
                (0, _, true) => FRAME_TR,
                (0, _, _) => FRAME_TOP,
                (9, true, _) => FRAME_BL,
                (9, _, true) => FRAME_BR,
                (9, _, _) => FRAME_BOTTOM,
                (_, true, _) => FRAME_LEFT,
                (_, _, true) => FRAME_RIGHT,
                _ => FRAME_FILL,
            };
            x += 1;
        }
        y += 1;
    }
    out
};

/// Door rows in each map; the rows below are gap
const DOOR_ROWS: usize = 6;

/// Four 12x12 door maps, one per sub-tile offset of the sliding door
///
/// Film frame `i` shows map `i % 4` starting at row `i / 4`.
pub const DOOR_MAPS: [[u8; 144]; 4] = {
    let mut out = [[DOOR_GAP_TILE; 144]; 4];
    let mut m = 0;
    while m < 4 {
        let mut row = 0;
        while row < DOOR_ROWS {
            let mut col = 0;
            while col < 12 {
                out[m][row * 12 + col] = if row == DOOR_ROWS - 1 {
                    DOOR_EDGE + m as u8
                } else {
                    DOOR_PANEL + (col % 2) as u8
                };
                col += 1;
            }
            row += 1;
        }
        m += 1;
    }
    out
};

/// Number of sprite tiles (8x16 objects use tile pairs)
pub const EARTH_COUNT: usize = 0x1C;

/// Earth sprite: a disc whose shading rotates across the frames
pub const EARTH_TILES: [Tile; EARTH_COUNT] = {
    let mut out = [[0u8; 16]; EARTH_COUNT];
    let mut t = 0;
    while t < EARTH_COUNT {
        let frame = t / 4;
        let right = (t / 2) % 2 == 1;
        let bottom = t % 2 == 1;
        let mut row = 0;
        while row < 8 {
            let y = if bottom { row + 8 } else { row };
            // Disc of radius 7 centred between the two 8x16 halves
            let dy = if y < 8 { 7 - y } else { y - 8 };
            let span = [7, 7, 7, 6, 6, 5, 4, 2][dy];
            let full: u16 = if span == 0 { 0 } else { ((1u32 << (span * 2)) - 1) as u16 };
            let disc = full << (8 - span);
            let half = if right { disc as u8 } else { (disc >> 8) as u8 };
            // Continents drift one column per frame
            let land = tiles::hash8((y as u32) + 16 * ((frame as u32 + if right { 1 } else { 0 }) % 7), 3)
                & half;
            out[t][row * 2] = half & !land;
            out[t][row * 2 + 1] = land | (half & 0x81);
            row += 1;
        }
        t += 1;
    }
    out
};

/// Sprite tile indices, two per animation frame
pub const EARTH_FRAME_TILES: [u8; 14] = [0, 2, 4, 6, 8, 10, 12, 14, 16, 18, 20, 22, 24, 26];

/// Background map block width/height in tiles
pub const BKG_BLOCK: u8 = 8;

//! Procedural tile patterns
//!
//! The demos ship no cartridge art; their tiles are generated at compile
//! time. A tile is 16 bytes of 2bpp data: for each of the 8 rows, a low
//! bit-plane byte followed by a high bit-plane byte.

use gb::lcd::TILE_BYTES;

/// One 8x8 2bpp tile
pub type Tile = [u8; TILE_BYTES];

/// A tile filled with one color (0 = white .. 3 = black)
pub const fn solid(color: u8) -> Tile {
    let lo = if color & 0x01 != 0 { 0xFF } else { 0x00 };
    let hi = if color & 0x02 != 0 { 0xFF } else { 0x00 };
    let mut out = [0u8; TILE_BYTES];
    let mut row = 0;
    while row < 8 {
        out[row * 2] = lo;
        out[row * 2 + 1] = hi;
        row += 1;
    }
    out
}

/// A tile drawing `rows` (one byte per row, MSB leftmost) in `color`
pub const fn glyph(rows: [u8; 8], color: u8) -> Tile {
    let mut out = [0u8; TILE_BYTES];
    let mut row = 0;
    while row < 8 {
        if color & 0x01 != 0 {
            out[row * 2] = rows[row];
        }
        if color & 0x02 != 0 {
            out[row * 2 + 1] = rows[row];
        }
        row += 1;
    }
    out
}

/// Cheap integer hash used to scatter pixels
pub const fn hash8(a: u32, b: u32) -> u8 {
    let mut h = a.wrapping_mul(0x9E37_79B1) ^ b.wrapping_mul(0x85EB_CA77);
    h ^= h >> 15;
    h = h.wrapping_mul(0xC2B2_AE3D);
    h ^= h >> 13;
    h as u8
}

/// `N` tiles of sparse pixels in shades 1-3, seeded by `seed`
pub const fn speckle<const N: usize>(seed: u32) -> [Tile; N] {
    let mut out = [[0u8; TILE_BYTES]; N];
    let mut t = 0;
    while t < N {
        let mut row = 0;
        while row < 8 {
            let h = hash8(seed.wrapping_add(t as u32), row as u32);
            // Keep roughly one pixel in eight lit
            let mask = h & hash8(row as u32, t as u32) & hash8(t as u32 ^ seed, row as u32 + 8);
            out[t][row * 2] = mask & h.rotate_left(3);
            out[t][row * 2 + 1] = mask;
            row += 1;
        }
        t += 1;
    }
    out
}

/// Flatten a tile array into the byte slice the display copies take
pub fn bytes<const N: usize>(tiles: &[Tile; N]) -> &[u8] {
    tiles.as_flattened()
}

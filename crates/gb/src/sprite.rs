//! Object (sprite) attribute memory
//!
//! The DMG holds 40 objects in OAM, four bytes each: Y, X, tile, flags.
//! Coordinates are offset so that (8, 16) is the top-left pixel of the
//! screen; an object at Y = 0 is fully hidden.

/// Number of OAM entries
pub const MAX_SPRITES: u8 = 40;

/// X offset of the screen's left edge in object coordinates
pub const OFFSET_X: u8 = 8;
/// Y offset of the screen's top edge in object coordinates
pub const OFFSET_Y: u8 = 16;

/// Object attribute flags
pub mod flags {
    /// Drawn behind background colors 1-3
    pub const PRIORITY: u8 = 0x80;
    /// Vertical flip
    pub const VFLIP: u8 = 0x40;
    /// Horizontal flip
    pub const HFLIP: u8 = 0x20;
    /// Use OBP1 instead of OBP0
    pub const PAL1: u8 = 0x10;
}

/// One OAM entry
#[derive(Clone, Copy, Default, Debug, PartialEq, Eq)]
pub struct OamEntry {
    /// Y position plus 16
    pub y: u8,
    /// X position plus 8
    pub x: u8,
    /// Tile index (bit 0 ignored in 8x16 mode)
    pub tile: u8,
    /// Attribute flags
    pub flags: u8,
}

impl OamEntry {
    /// Whether the object is on a visible scanline at all
    #[inline]
    pub const fn is_hidden(&self) -> bool {
        self.y == 0 || self.y >= 160
    }

    /// Serialize as the four OAM bytes
    #[inline]
    pub const fn to_bytes(self) -> [u8; 4] {
        [self.y, self.x, self.tile, self.flags]
    }

    /// Build from four OAM bytes
    #[inline]
    pub const fn from_bytes(bytes: [u8; 4]) -> Self {
        OamEntry {
            y: bytes[0],
            x: bytes[1],
            tile: bytes[2],
            flags: bytes[3],
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_hidden() {
        assert!(OamEntry::default().is_hidden());
        let visible = OamEntry { y: 16, x: 8, tile: 0, flags: 0 };
        assert!(!visible.is_hidden());
    }

    #[test]
    fn test_bytes_layout() {
        let e = OamEntry { y: 1, x: 2, tile: 3, flags: flags::HFLIP };
        assert_eq!(e.to_bytes(), [1, 2, 3, 0x20]);
        assert_eq!(OamEntry::from_bytes(e.to_bytes()), e);
    }
}

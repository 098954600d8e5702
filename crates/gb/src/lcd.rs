//! LCD controller registers and constants
//!
//! The DMG PPU draws three layers:
//! - A 256x256 scrolling background (32x32 tiles)
//! - A window overlay drawn from its own 32x32 map, positioned by WX/WY
//! - Up to 40 objects (sprites), 8x8 or 8x16
//!
//! All of it is controlled through the I/O registers at 0xFF40-0xFF4B.

/// LCD I/O registers
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
#[repr(u16)]
pub enum Reg {
    /// LCD control
    Lcdc = 0xFF40,
    /// LCD status
    Stat = 0xFF41,
    /// Background scroll Y
    Scy = 0xFF42,
    /// Background scroll X
    Scx = 0xFF43,
    /// Current scanline
    Ly = 0xFF44,
    /// Scanline compare
    Lyc = 0xFF45,
    /// Background palette
    Bgp = 0xFF47,
    /// Object palette 0
    Obp0 = 0xFF48,
    /// Object palette 1
    Obp1 = 0xFF49,
    /// Window Y position
    Wy = 0xFF4A,
    /// Window X position plus 7
    Wx = 0xFF4B,
}

impl Reg {
    /// Memory-mapped address
    #[inline]
    pub const fn addr(self) -> u16 {
        self as u16
    }

    /// Short uppercase name (`SCX`, `BGP`, ...)
    pub const fn name(self) -> &'static str {
        match self {
            Reg::Lcdc => "LCDC",
            Reg::Stat => "STAT",
            Reg::Scy => "SCY",
            Reg::Scx => "SCX",
            Reg::Ly => "LY",
            Reg::Lyc => "LYC",
            Reg::Bgp => "BGP",
            Reg::Obp0 => "OBP0",
            Reg::Obp1 => "OBP1",
            Reg::Wy => "WY",
            Reg::Wx => "WX",
        }
    }
}

/// LCDC bit flags
pub mod lcdc {
    /// LCD and PPU enabled
    pub const DISPLAY_ON: u8 = 0x80;
    /// Window tile map at 0x9C00 (clear: 0x9800)
    pub const WIN_MAP_9C00: u8 = 0x40;
    /// Window layer enabled
    pub const WIN_ON: u8 = 0x20;
    /// Background/window tile data at 0x8000 unsigned (clear: 0x8800 signed)
    pub const TILE_DATA_8000: u8 = 0x10;
    /// Background tile map at 0x9C00 (clear: 0x9800)
    pub const BG_MAP_9C00: u8 = 0x08;
    /// Objects are 8x16
    pub const OBJ_8X16: u8 = 0x04;
    /// Objects enabled
    pub const OBJ_ON: u8 = 0x02;
    /// Background enabled
    pub const BG_ON: u8 = 0x01;
}

/// Screen width in pixels
pub const SCREEN_WIDTH: u8 = 160;
/// Screen height in pixels
pub const SCREEN_HEIGHT: u8 = 144;

/// Smallest WX that shows the window's left edge
pub const MINWNDPOSX: u8 = 0x07;
/// Smallest WY
pub const MINWNDPOSY: u8 = 0x00;
/// Largest WX that keeps a window column on screen
pub const MAXWNDPOSX: u8 = 0xA6;
/// Largest WY that keeps a window row on screen
pub const MAXWNDPOSY: u8 = 0x8F;

/// Tile map dimension in tiles
pub const MAP_SIZE: u8 = 32;
/// Bytes per 2bpp tile
pub const TILE_BYTES: usize = 16;

/// 2-bit shade indices packed into a palette register
pub mod palette {
    /// Identity palette: shades 0..3 map to white..black
    pub const NORMAL: u8 = 0xE4;
    /// Lightest shade pulled to light grey
    pub const DIM: u8 = 0xF9;
    /// Nearly black
    pub const DARK: u8 = 0xFE;
    /// All black
    pub const BLACK: u8 = 0xFF;

    /// Shade (0 = white, 3 = black) a palette assigns to a color index
    #[inline]
    pub const fn shade(palette: u8, color: u8) -> u8 {
        (palette >> ((color & 0x03) * 2)) & 0x03
    }
}

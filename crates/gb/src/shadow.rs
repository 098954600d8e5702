//! In-memory image of the display hardware
//!
//! [`ShadowDisplay`] implements [`Display`] by updating a copy of the I/O
//! registers, VRAM and OAM, applying the same addressing rules the PPU uses:
//!
//! - LCDC bit 4 selects unsigned tile data at 0x8000 or signed tile data
//!   around 0x9000 for the background and window
//! - LCDC bit 3 / bit 6 select the 0x9800 or 0x9C00 map for the
//!   background / window
//! - Objects always take their patterns from 0x8000
//!
//! The host runner boots demos against it and inspects the result.

use crate::display::Display;
use crate::lcd::{MAP_SIZE, Reg, TILE_BYTES, lcdc};
use crate::sprite::{MAX_SPRITES, OamEntry};

/// First I/O register address
const IO_BASE: u16 = 0xFF00;
/// First VRAM address
const VRAM_BASE: u16 = 0x8000;
/// VRAM size in bytes
const VRAM_SIZE: usize = 0x2000;

/// Map base addresses
pub mod map {
    /// Low tile map
    pub const MAP_9800: u16 = 0x9800;
    /// High tile map
    pub const MAP_9C00: u16 = 0x9C00;
}

/// Register, VRAM and OAM state kept in memory
#[derive(Clone)]
pub struct ShadowDisplay {
    io: [u8; 0x80],
    vram: [u8; VRAM_SIZE],
    oam: [OamEntry; MAX_SPRITES as usize],
    vblanks: u32,
    reg_writes: u32,
}

impl ShadowDisplay {
    /// Hardware state as left by the boot ROM
    pub fn new() -> Self {
        let mut display = Self {
            io: [0; 0x80],
            vram: [0; VRAM_SIZE],
            oam: [OamEntry::default(); MAX_SPRITES as usize],
            vblanks: 0,
            reg_writes: 0,
        };
        display.io[Self::io_index(Reg::Lcdc)] = 0x91;
        display.io[Self::io_index(Reg::Bgp)] = 0xFC;
        display
    }

    #[inline]
    fn io_index(reg: Reg) -> usize {
        (reg.addr() - IO_BASE) as usize
    }

    /// Whether LCDC has the display enabled
    pub fn is_display_on(&self) -> bool {
        self.read_reg(Reg::Lcdc) & lcdc::DISPLAY_ON != 0
    }

    /// Number of completed vertical blanks
    pub fn vblanks(&self) -> u32 {
        self.vblanks
    }

    /// Number of register writes so far
    pub fn reg_writes(&self) -> u32 {
        self.reg_writes
    }

    /// OAM entry `index`; out-of-range indices read as a hidden entry
    pub fn oam(&self, index: u8) -> OamEntry {
        self.oam.get(index as usize).copied().unwrap_or_default()
    }

    /// All OAM entries
    pub fn oam_entries(&self) -> &[OamEntry] {
        &self.oam
    }

    /// Read one VRAM byte; addresses outside 0x8000-0x9FFF read as 0xFF
    pub fn vram_byte(&self, addr: u16) -> u8 {
        addr.checked_sub(VRAM_BASE)
            .and_then(|offset| self.vram.get(offset as usize))
            .copied()
            .unwrap_or(0xFF)
    }

    /// Address of background/window tile `tile` under the current LCDC
    pub fn tile_data_addr(&self, tile: u8) -> u16 {
        if self.read_reg(Reg::Lcdc) & lcdc::TILE_DATA_8000 != 0 {
            VRAM_BASE + tile as u16 * TILE_BYTES as u16
        } else {
            // Signed addressing: 0..=127 from 0x9000, 128..=255 from 0x8800
            (0x9000_i32 + (tile as i8) as i32 * TILE_BYTES as i32) as u16
        }
    }

    /// Address of object tile `tile`
    pub fn sprite_data_addr(&self, tile: u8) -> u16 {
        VRAM_BASE + tile as u16 * TILE_BYTES as u16
    }

    /// The 16 pattern bytes of background/window tile `tile`
    pub fn tile_pattern(&self, tile: u8) -> [u8; TILE_BYTES] {
        self.pattern_at(self.tile_data_addr(tile))
    }

    /// The 16 pattern bytes of object tile `tile`
    pub fn sprite_pattern(&self, tile: u8) -> [u8; TILE_BYTES] {
        self.pattern_at(self.sprite_data_addr(tile))
    }

    fn pattern_at(&self, addr: u16) -> [u8; TILE_BYTES] {
        let mut out = [0u8; TILE_BYTES];
        for (i, byte) in out.iter_mut().enumerate() {
            *byte = self.vram_byte(addr + i as u16);
        }
        out
    }

    /// Base address of the background map under the current LCDC
    pub fn bkg_map_base(&self) -> u16 {
        if self.read_reg(Reg::Lcdc) & lcdc::BG_MAP_9C00 != 0 {
            map::MAP_9C00
        } else {
            map::MAP_9800
        }
    }

    /// Base address of the window map under the current LCDC
    pub fn win_map_base(&self) -> u16 {
        if self.read_reg(Reg::Lcdc) & lcdc::WIN_MAP_9C00 != 0 {
            map::MAP_9C00
        } else {
            map::MAP_9800
        }
    }

    /// Background map entry at tile (`x`, `y`)
    pub fn bkg_tile(&self, x: u8, y: u8) -> u8 {
        self.map_entry(self.bkg_map_base(), x, y)
    }

    /// Window map entry at tile (`x`, `y`)
    pub fn win_tile(&self, x: u8, y: u8) -> u8 {
        self.map_entry(self.win_map_base(), x, y)
    }

    fn map_entry(&self, base: u16, x: u8, y: u8) -> u8 {
        if x >= MAP_SIZE || y >= MAP_SIZE {
            return 0xFF;
        }
        self.vram_byte(base + y as u16 * MAP_SIZE as u16 + x as u16)
    }

    fn write_vram(&mut self, addr: u16, value: u8) {
        if let Some(slot) = addr
            .checked_sub(VRAM_BASE)
            .and_then(|offset| self.vram.get_mut(offset as usize))
        {
            *slot = value;
        }
    }

    fn copy_patterns(&mut self, first: u8, data: &[u8], addr_of: fn(&Self, u8) -> u16) {
        for (i, chunk) in data.chunks(TILE_BYTES).enumerate() {
            let tile = first.wrapping_add(i as u8);
            let base = addr_of(self, tile);
            for (offset, &byte) in chunk.iter().enumerate() {
                self.write_vram(base + offset as u16, byte);
            }
        }
    }

    fn copy_rect(&mut self, base: u16, x: u8, y: u8, w: u8, h: u8, tiles: &[u8]) {
        if w == 0 {
            return;
        }
        for (i, &tile) in tiles.iter().take(w as usize * h as usize).enumerate() {
            let col = x as usize + i % w as usize;
            let row = y as usize + i / w as usize;
            if col >= MAP_SIZE as usize || row >= MAP_SIZE as usize {
                continue;
            }
            self.write_vram(base + (row * MAP_SIZE as usize + col) as u16, tile);
        }
    }
}

impl Default for ShadowDisplay {
    fn default() -> Self {
        Self::new()
    }
}

impl core::fmt::Debug for ShadowDisplay {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("ShadowDisplay")
            .field("lcdc", &self.read_reg(Reg::Lcdc))
            .field("scx", &self.read_reg(Reg::Scx))
            .field("scy", &self.read_reg(Reg::Scy))
            .field("wx", &self.read_reg(Reg::Wx))
            .field("wy", &self.read_reg(Reg::Wy))
            .field("bgp", &self.read_reg(Reg::Bgp))
            .field("vblanks", &self.vblanks)
            .finish_non_exhaustive()
    }
}

impl Display for ShadowDisplay {
    fn write_reg(&mut self, reg: Reg, value: u8) {
        log::trace!("{} <- {:#04x}", reg.name(), value);
        self.io[Self::io_index(reg)] = value;
        self.reg_writes += 1;
    }

    fn read_reg(&self, reg: Reg) -> u8 {
        self.io[Self::io_index(reg)]
    }

    fn set_bkg_data(&mut self, first: u8, data: &[u8]) {
        self.copy_patterns(first, data, Self::tile_data_addr);
    }

    fn set_sprite_data(&mut self, first: u8, data: &[u8]) {
        self.copy_patterns(first, data, Self::sprite_data_addr);
    }

    fn set_bkg_tiles(&mut self, x: u8, y: u8, w: u8, h: u8, tiles: &[u8]) {
        let base = self.bkg_map_base();
        self.copy_rect(base, x, y, w, h, tiles);
    }

    fn set_win_tiles(&mut self, x: u8, y: u8, w: u8, h: u8, tiles: &[u8]) {
        let base = self.win_map_base();
        self.copy_rect(base, x, y, w, h, tiles);
    }

    fn set_sprite_tile(&mut self, nb: u8, tile: u8) {
        if let Some(entry) = self.oam.get_mut(nb as usize) {
            entry.tile = tile;
        }
    }

    fn set_sprite_prop(&mut self, nb: u8, prop: u8) {
        if let Some(entry) = self.oam.get_mut(nb as usize) {
            entry.flags = prop;
        }
    }

    fn move_sprite(&mut self, nb: u8, x: u8, y: u8) {
        if let Some(entry) = self.oam.get_mut(nb as usize) {
            entry.x = x;
            entry.y = y;
        }
    }

    fn wait_vbl_done(&mut self) {
        self.vblanks = self.vblanks.wrapping_add(1);
    }
}

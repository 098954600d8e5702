//! The display seam demos write through
//!
//! [`Display`] mirrors the GBDK primitives the demos use: register writes,
//! bulk tile-data and tile-map copies, object updates and the vertical-blank
//! wait. None of these can fail; out-of-range requests are clipped by the
//! implementation.
//!
//! # Example
//!
//! ```
//! use gb::display::Display;
//! use gb::lcd::Reg;
//! use gb::shadow::ShadowDisplay;
//!
//! let mut display = ShadowDisplay::new();
//! display.write_reg(Reg::Scx, 12);
//! display.display_on();
//! assert_eq!(display.read_reg(Reg::Scx), 12);
//! assert!(display.is_display_on());
//! ```

use crate::lcd::{Reg, lcdc};

/// Target for all display output of a demo
pub trait Display {
    /// Write an LCD register
    fn write_reg(&mut self, reg: Reg, value: u8);

    /// Read back an LCD register
    fn read_reg(&self, reg: Reg) -> u8;

    /// Copy tile patterns (16 bytes per tile) for the background,
    /// starting at tile `first`
    fn set_bkg_data(&mut self, first: u8, data: &[u8]);

    /// Copy tile patterns for the window (shares the background data area)
    fn set_win_data(&mut self, first: u8, data: &[u8]) {
        self.set_bkg_data(first, data);
    }

    /// Copy object tile patterns, always from 0x8000
    fn set_sprite_data(&mut self, first: u8, data: &[u8]);

    /// Copy a `w`x`h` rectangle of tile indices into the background map
    fn set_bkg_tiles(&mut self, x: u8, y: u8, w: u8, h: u8, tiles: &[u8]);

    /// Copy a `w`x`h` rectangle of tile indices into the window map
    fn set_win_tiles(&mut self, x: u8, y: u8, w: u8, h: u8, tiles: &[u8]);

    /// Set the tile of object `nb`
    fn set_sprite_tile(&mut self, nb: u8, tile: u8);

    /// Set the attribute flags of object `nb`
    fn set_sprite_prop(&mut self, nb: u8, prop: u8);

    /// Move object `nb` to OAM coordinates (`x`, `y`)
    fn move_sprite(&mut self, nb: u8, x: u8, y: u8);

    /// Block until the next vertical blank has completed
    fn wait_vbl_done(&mut self);

    /// Move object `nb` off screen
    fn hide_sprite(&mut self, nb: u8) {
        self.move_sprite(nb, 0, 0);
    }

    /// Set the LCDC display-enable bit
    fn display_on(&mut self) {
        let value = self.read_reg(Reg::Lcdc) | lcdc::DISPLAY_ON;
        self.write_reg(Reg::Lcdc, value);
    }

    /// Clear the LCDC display-enable bit
    fn display_off(&mut self) {
        let value = self.read_reg(Reg::Lcdc) & !lcdc::DISPLAY_ON;
        self.write_reg(Reg::Lcdc, value);
    }
}

//! # GB - Game Boy display layer
//!
//! A small hardware layer for Game Boy (DMG) demo programs in Rust.
//!
//! ## Features
//!
//! - **Types**: 8.8 fixed-point scalar used for positions and velocities
//! - **LCD**: Register map, LCDC bits, window limits and palette values
//! - **Sprites**: Object attribute memory (OAM) entries
//! - **Input**: Joypad button set and the [`input::Joypad`] seam
//! - **Display**: The [`display::Display`] seam demos write through
//! - **Shadow**: [`shadow::ShadowDisplay`], an in-memory register/VRAM/OAM image
//!
//! ## Quick Start
//!
//! ```
//! use gb::prelude::*;
//!
//! let mut display = ShadowDisplay::new();
//! let mut pos = Fixed::from_parts(16, 0);
//! let vel = Fixed::from_raw(0x0040);
//!
//! for _ in 0..4 {
//!     display.wait_vbl_done();
//!     pos += vel;
//!     display.move_sprite(0, pos.whole(), 16);
//! }
//!
//! assert_eq!(display.oam(0).x, 17);
//! ```
//!
//! ## Modules
//!
//! - [`types`] - Fixed-point math
//! - [`lcd`] - LCD registers and constants
//! - [`sprite`] - Object attribute entries
//! - [`input`] - Joypad handling
//! - [`display`] - Display trait
//! - [`shadow`] - Host-side hardware image

#![cfg_attr(not(test), no_std)]

pub mod display;
pub mod input;
pub mod lcd;
pub mod shadow;
pub mod sprite;
pub mod types;

/// Convenient re-exports for common usage
///
/// Import everything you need with:
/// ```
/// use gb::prelude::*;
/// ```
pub mod prelude {
    pub use crate::display::Display;
    pub use crate::input::{Button, Buttons, Joypad};
    pub use crate::lcd::{self, Reg};
    pub use crate::shadow::ShadowDisplay;
    pub use crate::sprite::{self, OamEntry};
    pub use crate::types::*;
}


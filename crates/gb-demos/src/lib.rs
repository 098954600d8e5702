//! Game Boy layer demos
//!
//! Each demo is an explicit state struct advanced once per tick by pure
//! update functions, with all hardware output going through
//! [`gb::display::Display`]:
//!
//! - [`galaxy`] - scrolling background, bouncing window with an animated
//!   door, animated sprite and a palette fade
//! - [`shooter`] - a ship, falling enemies, bullets and a score
//!
//! ## Running a demo
//!
//! ```
//! use gb::input::Idle;
//! use gb::shadow::ShadowDisplay;
//! use gb_demos::galaxy::Galaxy;
//!
//! let mut display = ShadowDisplay::new();
//! let mut demo = Galaxy::default();
//! gb_demos::run_ticks(&mut demo, &mut display, &mut Idle, 8);
//! assert_eq!(display.vblanks(), 32);
//! ```

#![cfg_attr(not(test), no_std)]

pub mod galaxy;
pub mod shooter;
pub mod tiles;

use gb::display::Display;
use gb::input::Joypad;

/// A demo program driven one tick at a time
pub trait Demo {
    /// Short name (`galaxy`, `shooter`)
    fn name(&self) -> &'static str;

    /// Load tiles, set registers and draw the initial screen
    fn boot(&mut self, display: &mut dyn Display);

    /// Wait for the tick's vertical blanks, update and draw, then sample input
    fn tick(&mut self, display: &mut dyn Display, joypad: &mut dyn Joypad);

    /// Write a human-readable summary of the current state
    fn describe(&self, out: &mut dyn core::fmt::Write) -> core::fmt::Result;
}

/// Boot `demo` and run it for `ticks` ticks
pub fn run_ticks(
    demo: &mut dyn Demo,
    display: &mut dyn Display,
    joypad: &mut dyn Joypad,
    ticks: u32,
) {
    log::debug!("booting {}", demo.name());
    demo.boot(display);
    for _ in 0..ticks {
        demo.tick(display, joypad);
    }
    log::debug!("{} ran {} ticks", demo.name(), ticks);
}

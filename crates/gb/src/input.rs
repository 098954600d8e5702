//! Joypad input handling for the Game Boy
//!
//! The DMG has a single joypad: a d-pad, A, B, SELECT and START. Button
//! state is sampled once per frame through the [`Joypad`] trait and returned
//! as a [`Buttons`] set using the GBDK bit layout.
//!
//! # Example
//!
//! ```
//! use gb::input::{Button, Buttons};
//!
//! let held = Button::A | Button::UP;
//! assert!(held.contains(Button::A));
//! assert!(held.up());
//! assert!(!held.contains(Button::B));
//! ```

/// Button flags
///
/// These flags represent individual buttons on the joypad.
/// Use with [`Buttons`] type for type-safe button checking.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
#[repr(u8)]
pub enum Button {
    /// D-pad Right
    RIGHT = 0x01,
    /// D-pad Left
    LEFT = 0x02,
    /// D-pad Up
    UP = 0x04,
    /// D-pad Down
    DOWN = 0x08,
    /// A button
    A = 0x10,
    /// B button
    B = 0x20,
    /// Select button
    SELECT = 0x40,
    /// Start button
    START = 0x80,
}

impl Button {
    /// Every button, in bit order
    pub const ALL: [Button; 8] = [
        Button::RIGHT,
        Button::LEFT,
        Button::UP,
        Button::DOWN,
        Button::A,
        Button::B,
        Button::SELECT,
        Button::START,
    ];

    /// Lowercase name, as used by input scripts and reports
    pub const fn name(self) -> &'static str {
        match self {
            Button::RIGHT => "right",
            Button::LEFT => "left",
            Button::UP => "up",
            Button::DOWN => "down",
            Button::A => "a",
            Button::B => "b",
            Button::SELECT => "select",
            Button::START => "start",
        }
    }

    /// Look a button up by name, ignoring ASCII case
    pub fn from_name(name: &str) -> Option<Button> {
        Button::ALL
            .into_iter()
            .find(|b| b.name().eq_ignore_ascii_case(name))
    }
}

/// Container for button state
///
/// Holds the state of all buttons as a bitfield.
#[derive(Clone, Copy, Default, PartialEq, Eq, Debug)]
#[repr(transparent)]
pub struct Buttons(pub u8);

impl Buttons {
    /// No buttons pressed
    pub const NONE: Buttons = Buttons(0);

    /// Check if a specific button is pressed
    #[inline]
    pub const fn contains(self, button: Button) -> bool {
        (self.0 & button as u8) != 0
    }

    /// Check if any of the specified buttons are pressed
    #[inline]
    pub const fn contains_any(self, buttons: Buttons) -> bool {
        (self.0 & buttons.0) != 0
    }

    /// Check if all of the specified buttons are pressed
    #[inline]
    pub const fn contains_all(self, buttons: Buttons) -> bool {
        (self.0 & buttons.0) == buttons.0
    }

    /// Check if D-pad up is pressed
    #[inline]
    pub const fn up(self) -> bool {
        self.contains(Button::UP)
    }

    /// Check if D-pad down is pressed
    #[inline]
    pub const fn down(self) -> bool {
        self.contains(Button::DOWN)
    }

    /// Check if D-pad left is pressed
    #[inline]
    pub const fn left(self) -> bool {
        self.contains(Button::LEFT)
    }

    /// Check if D-pad right is pressed
    #[inline]
    pub const fn right(self) -> bool {
        self.contains(Button::RIGHT)
    }

    /// Buttons held now that were not held in `previous`
    #[inline]
    pub const fn pressed_since(self, previous: Buttons) -> Buttons {
        Buttons(self.0 & !previous.0)
    }

    /// Get raw button flags
    #[inline]
    pub const fn raw(self) -> u8 {
        self.0
    }

    /// Iterate the buttons in this set, in bit order
    pub fn iter(self) -> impl Iterator<Item = Button> {
        Button::ALL.into_iter().filter(move |b| self.contains(*b))
    }
}

impl core::ops::BitOr for Button {
    type Output = Buttons;
    fn bitor(self, other: Button) -> Buttons {
        Buttons(self as u8 | other as u8)
    }
}

impl core::ops::BitOr<Button> for Buttons {
    type Output = Buttons;
    fn bitor(self, other: Button) -> Buttons {
        Buttons(self.0 | other as u8)
    }
}

impl core::ops::BitOrAssign<Button> for Buttons {
    fn bitor_assign(&mut self, other: Button) {
        self.0 |= other as u8;
    }
}

impl From<Button> for Buttons {
    fn from(button: Button) -> Self {
        Buttons(button as u8)
    }
}

impl core::fmt::Display for Buttons {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        if self.0 == 0 {
            return f.write_str("none");
        }
        for (i, button) in self.iter().enumerate() {
            if i > 0 {
                f.write_str("+")?;
            }
            f.write_str(button.name())?;
        }
        Ok(())
    }
}

/// Source of joypad samples
///
/// Demos call [`Joypad::read`] once per tick.
pub trait Joypad {
    /// Sample the buttons currently held
    fn read(&mut self) -> Buttons;
}

/// A joypad with nothing pressed
#[derive(Debug, Default, Clone, Copy)]
pub struct Idle;

impl Joypad for Idle {
    fn read(&mut self) -> Buttons {
        Buttons::NONE
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_gbdk_bit_layout() {
        assert_eq!(Buttons::from(Button::RIGHT).raw(), 0x01);
        assert_eq!(Buttons::from(Button::START).raw(), 0x80);
        assert_eq!((Button::A | Button::B).raw(), 0x30);
    }

    #[test]
    fn test_from_name_case_insensitive() {
        assert_eq!(Button::from_name("Start"), Some(Button::START));
        assert_eq!(Button::from_name("UP"), Some(Button::UP));
        assert_eq!(Button::from_name("c"), None);
    }

    #[test]
    fn test_pressed_since() {
        let prev = Button::A | Button::LEFT;
        let now = Button::A | Button::B;
        assert_eq!(now.pressed_since(prev), Buttons::from(Button::B));
    }

    #[test]
    fn test_contains_all_any() {
        let held = Button::A | Button::UP | Button::LEFT;
        assert!(held.contains_all(Button::A | Button::UP));
        assert!(!held.contains_all(Button::A | Button::DOWN));
        assert!(held.contains_any(Button::B | Button::LEFT));
    }

    #[test]
    fn test_idle_joypad() {
        assert_eq!(Idle.read(), Buttons::NONE);
    }
}

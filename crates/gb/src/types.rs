//! Common type definitions for Game Boy development
//!
//! This module provides the 8.8 fixed-point scalar used for positions and
//! speeds, and a 2D pair of them.

/// Fixed-point 8.8 number
///
/// Upper 8 bits are the whole part, lower 8 bits are fractional. Arithmetic
/// wraps like the 16-bit word it is stored in, so a velocity of `0xFF00` is
/// -1.0 and adding it to a position moves one pixel back.
///
/// # Example
/// ```
/// use gb::types::Fixed;
///
/// let a = Fixed::from_parts(5, 0);      // 5.0
/// let b = Fixed::from_raw(0x0280);      // 2.5
/// let c = a + b;                        // 7.5
/// assert_eq!(c.whole(), 7);
/// assert_eq!(c.frac(), 0x80);
/// ```
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Default, Hash)]
#[repr(transparent)]
pub struct Fixed(pub u16);

impl Fixed {
    /// Zero value
    pub const ZERO: Fixed = Fixed(0);
    /// One (1.0)
    pub const ONE: Fixed = Fixed(0x0100);
    /// One half (0.5)
    pub const HALF: Fixed = Fixed(0x0080);

    /// Create from whole and fractional bytes
    #[inline]
    pub const fn from_parts(whole: u8, frac: u8) -> Self {
        Fixed(((whole as u16) << 8) | frac as u16)
    }

    /// Create from raw fixed-point value
    #[inline]
    pub const fn from_raw(raw: u16) -> Self {
        Fixed(raw)
    }

    /// Whole part, the byte written to hardware
    #[inline]
    pub const fn whole(self) -> u8 {
        (self.0 >> 8) as u8
    }

    /// Fractional part
    #[inline]
    pub const fn frac(self) -> u8 {
        self.0 as u8
    }

    /// Replace the whole part, keeping the fraction
    #[inline]
    pub const fn with_whole(self, whole: u8) -> Self {
        Fixed::from_parts(whole, self.frac())
    }

    /// Get raw fixed-point value
    #[inline]
    pub const fn to_raw(self) -> u16 {
        self.0
    }

    /// Value as a signed word (velocities)
    #[inline]
    pub const fn signed(self) -> i16 {
        self.0 as i16
    }

    /// True when the word, read as signed, is below zero
    #[inline]
    pub const fn is_negative(self) -> bool {
        self.signed() < 0
    }
}

impl core::ops::Add for Fixed {
    type Output = Fixed;
    #[inline]
    fn add(self, other: Fixed) -> Fixed {
        Fixed(self.0.wrapping_add(other.0))
    }
}

impl core::ops::Sub for Fixed {
    type Output = Fixed;
    #[inline]
    fn sub(self, other: Fixed) -> Fixed {
        Fixed(self.0.wrapping_sub(other.0))
    }
}

impl core::ops::AddAssign for Fixed {
    #[inline]
    fn add_assign(&mut self, other: Fixed) {
        self.0 = self.0.wrapping_add(other.0);
    }
}

impl core::ops::SubAssign for Fixed {
    #[inline]
    fn sub_assign(&mut self, other: Fixed) {
        self.0 = self.0.wrapping_sub(other.0);
    }
}

/// Two's-complement negation of the word
impl core::ops::Neg for Fixed {
    type Output = Fixed;
    #[inline]
    fn neg(self) -> Fixed {
        Fixed(self.0.wrapping_neg())
    }
}

impl core::fmt::Debug for Fixed {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write!(f, "Fixed({:#06x})", self.0)
    }
}

impl core::fmt::Display for Fixed {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write!(f, "{}.{:02x}", self.whole(), self.frac())
    }
}

/// 2D vector with Fixed components
#[derive(Clone, Copy, Default, Debug, PartialEq, Eq)]
pub struct Vec2 {
    pub x: Fixed,
    pub y: Fixed,
}

impl Vec2 {
    /// Zero vector
    pub const ZERO: Vec2 = Vec2 { x: Fixed::ZERO, y: Fixed::ZERO };

    /// Create new vector
    #[inline]
    pub const fn new(x: Fixed, y: Fixed) -> Self {
        Vec2 { x, y }
    }

    /// Create from raw words
    #[inline]
    pub const fn from_raw(x: u16, y: u16) -> Self {
        Vec2 {
            x: Fixed::from_raw(x),
            y: Fixed::from_raw(y),
        }
    }

    /// Create from whole-pixel coordinates
    #[inline]
    pub const fn from_wholes(x: u8, y: u8) -> Self {
        Vec2 {
            x: Fixed::from_parts(x, 0),
            y: Fixed::from_parts(y, 0),
        }
    }

    /// Whole parts as a pixel coordinate pair
    #[inline]
    pub const fn wholes(self) -> (u8, u8) {
        (self.x.whole(), self.y.whole())
    }
}

impl core::ops::Add for Vec2 {
    type Output = Vec2;
    #[inline]
    fn add(self, other: Vec2) -> Vec2 {
        Vec2 {
            x: self.x + other.x,
            y: self.y + other.y,
        }
    }
}

//! Fixed-point motion and the window's reflecting box

use gb::input::Buttons;
use gb::types::{Fixed, Vec2};

/// Position and velocity of one layer
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Motion {
    pub pos: Vec2,
    pub vel: Vec2,
}

impl Motion {
    pub const fn new(pos: Vec2, vel: Vec2) -> Self {
        Motion { pos, vel }
    }

    /// Advance position by one tick of velocity
    #[inline]
    pub fn step(self) -> Self {
        Motion {
            pos: self.pos + self.vel,
            vel: self.vel,
        }
    }

    /// Apply d-pad presses to the velocity, `amount` per direction held
    pub fn nudge(self, buttons: Buttons, amount: Fixed) -> Self {
        let mut vel = self.vel;
        if buttons.up() {
            vel.y -= amount;
        }
        if buttons.down() {
            vel.y += amount;
        }
        if buttons.left() {
            vel.x -= amount;
        }
        if buttons.right() {
            vel.x += amount;
        }
        Motion { pos: self.pos, vel }
    }
}

/// Inclusive bounds for the whole part of a position
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Bounds {
    pub min: u8,
    pub max: u8,
}

/// Clamp one axis into `bounds`, reversing `vel` when a bound is touched
///
/// Returns the new position, the new velocity and whether it bounced. The
/// fractional part of the position is kept when it is clamped.
pub fn bounce(pos: Fixed, vel: Fixed, bounds: Bounds) -> (Fixed, Fixed, bool) {
    let whole = pos.whole();
    if whole >= bounds.max {
        (pos.with_whole(bounds.max), -vel, true)
    } else if whole <= bounds.min {
        (pos.with_whole(bounds.min), -vel, true)
    } else {
        (pos, vel, false)
    }
}

/// The box the window origin is kept in
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct WindowBox {
    pub x: Bounds,
    pub y: Bounds,
}

impl WindowBox {
    /// Step `motion` and reflect it off the box, per axis
    pub fn step(&self, motion: Motion) -> (Motion, [bool; 2]) {
        let moved = motion.step();
        let (px, vx, bx) = bounce(moved.pos.x, moved.vel.x, self.x);
        let (py, vy, by) = bounce(moved.pos.y, moved.vel.y, self.y);
        (
            Motion::new(Vec2::new(px, py), Vec2::new(vx, vy)),
            [bx, by],
        )
    }

    /// Whether a whole-pixel position lies inside the box
    pub fn contains(&self, (x, y): (u8, u8)) -> bool {
        (self.x.min..=self.x.max).contains(&x) && (self.y.min..=self.y.max).contains(&y)
    }
}

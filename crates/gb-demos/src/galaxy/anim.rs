//! Earth sprite animation

use super::assets::EARTH_FRAME_TILES;

/// Number of animation frames
pub const SPRITE_FRAMES: u8 = 7;
/// The frame advances on ticks where `time & ANIM_MASK == 0`
pub const ANIM_MASK: u8 = 0x07;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct SpriteAnim {
    pub frame: u8,
}

impl SpriteAnim {
    /// Advance on every 8th value of `time`; returns the new frame if it moved
    pub fn step(self, time: u8) -> (SpriteAnim, Option<u8>) {
        if time & ANIM_MASK != 0 {
            return (self, None);
        }
        let frame = (self.frame + 1) % SPRITE_FRAMES;
        (SpriteAnim { frame }, Some(frame))
    }
}

/// Tiles of the two 8x16 objects showing `frame`
pub fn frame_tiles(frame: u8) -> (u8, u8) {
    let s = usize::from(frame % SPRITE_FRAMES) * 2;
    (EARTH_FRAME_TILES[s], EARTH_FRAME_TILES[s + 1])
}

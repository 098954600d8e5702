//! Palette fade: dim to black and back

use gb::lcd::palette;

/// Counter decrement per tick
pub const FADE_STEP: u8 = 0x10;
/// Counter value a fade starts from
pub const FADE_START: u8 = 6 * FADE_STEP;

/// Background palette written when the counter hits each value
const FADE_TABLE: [(u8, u8); 6] = [
    (FADE_START, palette::DIM),
    (FADE_START - FADE_STEP, palette::DARK),
    (FADE_START - 2 * FADE_STEP, palette::BLACK),
    (FADE_START - 3 * FADE_STEP, palette::DARK),
    (FADE_START - 4 * FADE_STEP, palette::DIM),
    (FADE_START - 5 * FADE_STEP, palette::NORMAL),
];

/// Palette for a counter value, if it is one of the fade thresholds
pub fn palette_for(counter: u8) -> Option<u8> {
    FADE_TABLE
        .iter()
        .find(|(at, _)| *at == counter)
        .map(|&(_, bgp)| bgp)
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Fade {
    pub counter: u8,
}

impl Fade {
    pub const IDLE: Fade = Fade { counter: 0 };

    /// (Re)start the fade from the top
    pub const fn start() -> Fade {
        Fade {
            counter: FADE_START,
        }
    }

    pub const fn is_active(self) -> bool {
        self.counter != 0
    }

    /// One tick of fading; returns the palette to write, if any
    pub fn step(self) -> (Fade, Option<u8>) {
        if !self.is_active() {
            return (self, None);
        }
        let bgp = palette_for(self.counter);
        (
            Fade {
                counter: self.counter.saturating_sub(FADE_STEP),
            },
            bgp,
        )
    }
}

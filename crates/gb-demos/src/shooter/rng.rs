//! 16-bit xorshift generator

/// Xorshift with shifts (7, 9, 8); period 65535 over nonzero states
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Rng(u16);

impl Rng {
    /// Seed the generator; a zero seed is replaced since it would stick
    pub const fn new(seed: u16) -> Self {
        Rng(if seed == 0 { 0xACE1 } else { seed })
    }

    /// Next 16-bit value
    pub fn next_u16(&mut self) -> u16 {
        let mut x = self.0;
        x ^= x << 7;
        x ^= x >> 9;
        x ^= x << 8;
        self.0 = x;
        x
    }

    /// Next value in `0..bound`; `bound` of 0 yields 0
    pub fn below(&mut self, bound: u8) -> u8 {
        if bound == 0 {
            return 0;
        }
        (self.next_u16() % u16::from(bound)) as u8
    }
}

//! Galaxy: background, window and animated sprite
//!
//! A starfield background scrolls, a framed window bounces around the lower
//! right part of the screen with a door drawn in it, and an 8x16 earth
//! sprite drifts over both. Positions and speeds are 8.8 fixed point so
//! motion can be slower than a pixel per tick.
//!
//! # Keys
//!
//! | Input          | Effect                                    |
//! |----------------|-------------------------------------------|
//! | D-pad          | Change the sprite's speed                 |
//! | D-pad + A      | Change the window's speed                 |
//! | D-pad + B      | Change the background's speed             |
//! | START          | Open/close the door                       |
//! | SELECT         | Fade the screen out and back in           |
//!
//! # Frame update
//!
//! Each tick is split into a pure state update and a separate present step:
//!
//! ```
//! use gb::input::Button;
//! use gb::shadow::ShadowDisplay;
//! use gb_demos::galaxy::{self, GalaxyState};
//!
//! let mut display = ShadowDisplay::new();
//! let (state, output) = galaxy::advance(GalaxyState::initial());
//! galaxy::present(&output, &mut display);
//! let state = galaxy::apply_input(state, Button::START.into());
//! assert!(state.door.state == galaxy::door::DoorState::Opening);
//! ```

pub mod anim;
pub mod assets;
pub mod door;
pub mod fade;
pub mod motion;

use gb::display::Display;
use gb::input::{Button, Buttons, Joypad};
use gb::lcd::{MAP_SIZE, MAXWNDPOSX, MAXWNDPOSY, Reg, lcdc, palette};
use gb::types::{Fixed, Vec2};

use crate::Demo;
use crate::tiles;
use anim::SpriteAnim;
use door::{DOOR_H, DOOR_W, DOOR_X, DOOR_Y, Door};
use fade::Fade;
use motion::{Bounds, Motion, WindowBox};

/// Size of the picture in the window
pub const WIN_SIZE_X: u8 = 0x80;
pub const WIN_SIZE_Y: u8 = 0x50;

/// Bounds of the window origin; the window stays in the lower right
pub const WINDOW_BOX: WindowBox = WindowBox {
    x: Bounds {
        min: MAXWNDPOSX - WIN_SIZE_X + 1,
        max: MAXWNDPOSX,
    },
    y: Bounds {
        min: MAXWNDPOSY - WIN_SIZE_Y + 1,
        max: MAXWNDPOSY,
    },
};

/// Velocity change per d-pad direction per tick
pub const SPEED_STEP: Fixed = Fixed::from_raw(0x0010);

/// LCDC at boot, before the display is switched on:
/// window map 0x9C00, window on, signed tile data, background map 0x9800,
/// 8x16 objects, objects on, background on
pub const BOOT_LCDC: u8 =
    lcdc::WIN_MAP_9C00 | lcdc::WIN_ON | lcdc::OBJ_8X16 | lcdc::OBJ_ON | lcdc::BG_ON;

/// Tunables of the galaxy loop
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GalaxyConfig {
    /// Vertical blanks waited per tick (slows the animation down)
    pub vbl_per_tick: u8,
}

impl Default for GalaxyConfig {
    fn default() -> Self {
        Self { vbl_per_tick: 4 }
    }
}

/// Everything the galaxy demo mutates
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct GalaxyState {
    /// Tick counter, wraps
    pub time: u8,
    pub background: Motion,
    pub window: Motion,
    pub sprite: Motion,
    pub door: Door,
    pub fade: Fade,
    pub anim: SpriteAnim,
}

impl GalaxyState {
    /// State right after boot
    pub const fn initial() -> Self {
        Self {
            time: 0,
            background: Motion::new(Vec2::ZERO, Vec2::from_raw(0xFF00, 0x0080)),
            window: Motion::new(
                Vec2::from_wholes(MAXWNDPOSX, MAXWNDPOSY),
                Vec2::from_raw(0xFF80, 0xFFC0),
            ),
            sprite: Motion::new(Vec2::from_raw(0x1000, 0x1000), Vec2::from_raw(0x0040, 0x0040)),
            door: Door::CLOSED,
            fade: Fade::IDLE,
            anim: SpriteAnim { frame: 0 },
        }
    }
}

impl Default for GalaxyState {
    fn default() -> Self {
        Self::initial()
    }
}

/// Hardware writes produced by one tick
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct FrameOutput {
    /// New background palette, when the fade hits a threshold
    pub palette: Option<u8>,
    /// SCX, SCY
    pub scroll: (u8, u8),
    /// WX, WY
    pub window: (u8, u8),
    /// Sprite OAM position
    pub sprite: (u8, u8),
    /// Door film frame to draw
    pub door_frame: Option<u8>,
    /// Sprite animation frame to upload
    pub sprite_frame: Option<u8>,
    /// Window bounced on the x / y axis
    pub bounced: [bool; 2],
}

/// Steps 1-4 of a tick: fade, scroll, door and sprite animation
pub fn advance(state: GalaxyState) -> (GalaxyState, FrameOutput) {
    let time = state.time.wrapping_add(1);
    let (fade, palette) = state.fade.step();
    let background = state.background.step();
    let (window, bounced) = WINDOW_BOX.step(state.window);
    let sprite = state.sprite.step();
    let (door, door_frame) = state.door.step();
    let (anim, sprite_frame) = state.anim.step(time);

    let next = GalaxyState {
        time,
        background,
        window,
        sprite,
        door,
        fade,
        anim,
    };
    let output = FrameOutput {
        palette,
        scroll: background.pos.wholes(),
        window: window.pos.wholes(),
        sprite: sprite.pos.wholes(),
        door_frame,
        sprite_frame,
        bounced,
    };
    (next, output)
}

/// Step 5 of a tick: react to the joypad
///
/// B selects the background, A the window, otherwise the d-pad steers the
/// sprite and SELECT / START trigger the fade and the door.
pub fn apply_input(state: GalaxyState, buttons: Buttons) -> GalaxyState {
    let mut next = state;
    if buttons.contains(Button::B) {
        next.background = state.background.nudge(buttons, SPEED_STEP);
    } else if buttons.contains(Button::A) {
        next.window = state.window.nudge(buttons, SPEED_STEP);
    } else {
        if buttons.contains(Button::SELECT) {
            next.fade = Fade::start();
        }
        if buttons.contains(Button::START) {
            next.door = state.door.toggle();
        }
        next.sprite = state.sprite.nudge(buttons, SPEED_STEP);
    }
    next
}

/// A full tick without the display: advance, then apply input
pub fn update(state: GalaxyState, buttons: Buttons) -> (GalaxyState, FrameOutput) {
    let (next, output) = advance(state);
    (apply_input(next, buttons), output)
}

/// Place the two earth objects side by side
fn place_sprite(display: &mut dyn Display, (x, y): (u8, u8)) {
    display.move_sprite(0, x, y);
    display.move_sprite(1, x.wrapping_add(8), y);
}

/// Point the two earth objects at the tiles of `frame`
fn tile_sprite(display: &mut dyn Display, frame: u8) {
    let (left, right) = anim::frame_tiles(frame);
    display.set_sprite_tile(0, left);
    display.set_sprite_tile(1, right);
}

/// Write one tick's output to the hardware
pub fn present(output: &FrameOutput, display: &mut dyn Display) {
    if let Some(bgp) = output.palette {
        display.write_reg(Reg::Bgp, bgp);
    }
    if let Some(frame) = output.door_frame {
        display.set_win_tiles(DOOR_X, DOOR_Y, DOOR_W, DOOR_H, door::film(frame));
    }
    display.write_reg(Reg::Scx, output.scroll.0);
    display.write_reg(Reg::Scy, output.scroll.1);
    display.write_reg(Reg::Wx, output.window.0);
    display.write_reg(Reg::Wy, output.window.1);
    place_sprite(display, output.sprite);
    if let Some(frame) = output.sprite_frame {
        tile_sprite(display, frame);
    }
}

/// Load tiles, draw the initial screen and switch the display on
pub fn boot(state: &GalaxyState, display: &mut dyn Display) {
    display.write_reg(Reg::Lcdc, BOOT_LCDC);

    display.write_reg(Reg::Bgp, palette::NORMAL);
    display.write_reg(Reg::Obp0, palette::NORMAL);
    display.write_reg(Reg::Obp1, palette::NORMAL);

    // Background: 0x100 x 0x100 pixels from a repeated 8x8 tile block
    display.set_bkg_data(assets::STD_FIRST, tiles::bytes(&assets::STD_TILES));
    display.set_bkg_data(0x00, tiles::bytes(&assets::BKG_TILES));
    for y in (0..MAP_SIZE).step_by(assets::BKG_BLOCK as usize) {
        for x in (0..MAP_SIZE).step_by(assets::BKG_BLOCK as usize) {
            display.set_bkg_tiles(x, y, assets::BKG_BLOCK, assets::BKG_BLOCK, &assets::BKG_MAP);
        }
    }
    let (scx, scy) = state.background.pos.wholes();
    display.write_reg(Reg::Scx, scx);
    display.write_reg(Reg::Scy, scy);

    // Window: 0x80 x 0x50 frame with the door in it
    display.set_win_data(assets::WIN_FIRST, tiles::bytes(&assets::WIN_TILES));
    display.set_win_tiles(0, 0, 16, 10, &assets::FRAME_MAP);
    display.set_win_tiles(DOOR_X, DOOR_Y, DOOR_W, DOOR_H, door::film(state.door.pos));
    let (wx, wy) = state.window.pos.wholes();
    display.write_reg(Reg::Wx, wx);
    display.write_reg(Reg::Wy, wy);

    // Sprite: two 8x16 objects
    display.set_sprite_data(0x00, tiles::bytes(&assets::EARTH_TILES));
    display.set_sprite_prop(0, 0x00);
    display.set_sprite_prop(1, 0x00);
    tile_sprite(display, state.anim.frame);
    place_sprite(display, state.sprite.pos.wholes());

    display.display_on();
}

/// The galaxy demo loop
#[derive(Debug, Clone, Default)]
pub struct Galaxy {
    config: GalaxyConfig,
    state: GalaxyState,
}

impl Galaxy {
    pub fn new(config: GalaxyConfig) -> Self {
        Self {
            config,
            state: GalaxyState::initial(),
        }
    }

    pub fn state(&self) -> &GalaxyState {
        &self.state
    }
}

impl Demo for Galaxy {
    fn name(&self) -> &'static str {
        "galaxy"
    }

    fn boot(&mut self, display: &mut dyn Display) {
        self.state = GalaxyState::initial();
        boot(&self.state, display);
    }

    fn tick(&mut self, display: &mut dyn Display, joypad: &mut dyn Joypad) {
        for _ in 0..self.config.vbl_per_tick {
            display.wait_vbl_done();
        }

        let before = self.state;
        let (next, output) = advance(before);
        present(&output, display);

        if output.bounced[0] || output.bounced[1] {
            log::trace!("window bounced at {:?}", output.window);
        }
        if before.fade.is_active() && !next.fade.is_active() {
            log::debug!("fade finished");
        }
        if before.door.state != next.door.state {
            log::debug!("door {:?} -> {:?}", before.door.state, next.door.state);
        }

        let buttons = joypad.read();
        let after = apply_input(next, buttons);
        if after.door.state != next.door.state {
            log::debug!("door {:?} -> {:?}", next.door.state, after.door.state);
        }
        if after.fade.counter > next.fade.counter {
            log::debug!("fade started");
        }
        self.state = after;
    }

    fn describe(&self, out: &mut dyn core::fmt::Write) -> core::fmt::Result {
        let s = &self.state;
        writeln!(out, "time        {}", s.time)?;
        writeln!(out, "background  pos {} {}  vel {:#06x} {:#06x}",
            s.background.pos.x, s.background.pos.y,
            s.background.vel.x.to_raw(), s.background.vel.y.to_raw())?;
        writeln!(out, "window      pos {} {}  vel {:#06x} {:#06x}",
            s.window.pos.x, s.window.pos.y,
            s.window.vel.x.to_raw(), s.window.vel.y.to_raw())?;
        writeln!(out, "sprite      pos {} {}  vel {:#06x} {:#06x}  frame {}",
            s.sprite.pos.x, s.sprite.pos.y,
            s.sprite.vel.x.to_raw(), s.sprite.vel.y.to_raw(), s.anim.frame)?;
        writeln!(out, "door        {:?} at {}", s.door.state, s.door.pos)?;
        let fading = if s.fade.is_active() { "active" } else { "idle" };
        writeln!(out, "fade        {} ({:#04x})", fading, s.fade.counter)
    }
}

#[cfg(test)]
mod tests {
    use super::door::DoorState;
    use super::*;
    use gb::input::Idle;
    use gb::shadow::ShadowDisplay;
    use pretty_assertions::assert_eq;
    use proptest::prelude::*;

    fn held(buttons: &[Button]) -> Buttons {
        buttons.iter().fold(Buttons::NONE, |acc, b| acc | *b)
    }

    #[test]
    fn test_window_box_constants() {
        assert_eq!(WINDOW_BOX.x, Bounds { min: 39, max: 166 });
        assert_eq!(WINDOW_BOX.y, Bounds { min: 64, max: 143 });
    }

    #[test]
    fn test_first_advance() {
        let (state, out) = advance(GalaxyState::initial());
        assert_eq!(state.time, 1);
        // Background: (0, 0) + (-1.0, +0.5)
        assert_eq!(state.background.pos, Vec2::from_raw(0xFF00, 0x0080));
        assert_eq!(out.scroll, (0xFF, 0x00));
        // Window: (166, 143) + (-0.5, -0.25)
        assert_eq!(out.window, (165, 142));
        assert_eq!(out.bounced, [false, false]);
        // Sprite: (16, 16) + (0.25, 0.25)
        assert_eq!(out.sprite, (16, 16));
        assert_eq!(out.palette, None);
        assert_eq!(out.door_frame, None);
        assert_eq!(out.sprite_frame, None);
    }

    #[test]
    fn test_b_steers_background_only() {
        let s = apply_input(GalaxyState::initial(), held(&[Button::B, Button::UP, Button::START]));
        assert_eq!(s.background.vel, Vec2::from_raw(0xFF00, 0x0070));
        assert_eq!(s.window, GalaxyState::initial().window);
        assert_eq!(s.sprite, GalaxyState::initial().sprite);
        assert_eq!(s.door, Door::CLOSED);
    }

    #[test]
    fn test_a_steers_window_only() {
        let s = apply_input(GalaxyState::initial(), held(&[Button::A, Button::RIGHT, Button::SELECT]));
        assert_eq!(s.window.vel, Vec2::from_raw(0xFF90, 0xFFC0));
        assert_eq!(s.sprite, GalaxyState::initial().sprite);
        assert_eq!(s.fade, Fade::IDLE);
    }

    #[test]
    fn test_b_wins_over_a() {
        let s = apply_input(GalaxyState::initial(), held(&[Button::A, Button::B, Button::LEFT]));
        assert_eq!(s.background.vel.x, Fixed::from_raw(0xFEF0));
        assert_eq!(s.window, GalaxyState::initial().window);
    }

    #[test]
    fn test_default_branch() {
        let s = apply_input(
            GalaxyState::initial(),
            held(&[Button::SELECT, Button::START, Button::DOWN, Button::LEFT]),
        );
        assert_eq!(s.fade, Fade::start());
        assert_eq!(s.door.state, DoorState::Opening);
        assert_eq!(s.sprite.vel, Vec2::from_raw(0x0030, 0x0050));
    }

    #[test]
    fn test_velocity_is_unbounded() {
        let mut s = GalaxyState::initial();
        for _ in 0..100 {
            s = apply_input(s, Button::RIGHT.into());
        }
        assert_eq!(s.sprite.vel.x, Fixed::from_raw(0x0040 + 100 * 0x10));
    }

    #[test]
    fn test_boot_writes_initial_screen() {
        let mut d = ShadowDisplay::new();
        boot(&GalaxyState::initial(), &mut d);
        assert_eq!(d.read_reg(Reg::Lcdc), BOOT_LCDC | lcdc::DISPLAY_ON);
        assert_eq!(d.read_reg(Reg::Bgp), palette::NORMAL);
        assert_eq!(d.read_reg(Reg::Obp1), palette::NORMAL);
        assert_eq!(d.read_reg(Reg::Wx), MAXWNDPOSX);
        assert_eq!(d.read_reg(Reg::Wy), MAXWNDPOSY);
        assert_eq!(d.read_reg(Reg::Scx), 0);
        // Background pattern repeats every 8 tiles
        assert_eq!(d.bkg_tile(3, 5), assets::BKG_MAP[5 * 8 + 3]);
        assert_eq!(d.bkg_tile(27, 13), assets::BKG_MAP[5 * 8 + 3]);
        // Window frame and closed door
        assert_eq!(d.win_tile(0, 0), 0x80);
        assert_eq!(d.win_tile(15, 9), 0x88);
        assert_eq!(d.win_tile(DOOR_X, DOOR_Y), door::film(0)[0]);
        // Standard tiles land in the shared 0x8800 block
        assert_eq!(d.tile_pattern(0xFC), [0xFF; 16]);
        assert_eq!(d.tile_pattern(0xFF), [0x00; 16]);
        // Sprite
        assert_eq!(d.oam(0).x, 16);
        assert_eq!(d.oam(1).x, 24);
        assert_eq!(d.oam(0).tile, 0);
        assert_eq!(d.oam(1).tile, 2);
        assert_eq!(d.sprite_pattern(5), assets::EARTH_TILES[5]);
    }

    #[test]
    fn test_door_opens_on_screen() {
        let mut d = ShadowDisplay::new();
        let mut demo = Galaxy::new(GalaxyConfig { vbl_per_tick: 1 });
        demo.boot(&mut d);

        struct StartOnce(bool);
        impl Joypad for StartOnce {
            fn read(&mut self) -> Buttons {
                let pressed = !self.0;
                self.0 = true;
                if pressed { Button::START.into() } else { Buttons::NONE }
            }
        }

        let mut pad = StartOnce(false);
        demo.tick(&mut d, &mut pad);
        assert_eq!(demo.state().door.state, DoorState::Opening);
        for _ in 0..door::DOOR_FRAMES {
            demo.tick(&mut d, &mut pad);
        }
        assert_eq!(demo.state().door, Door { state: DoorState::Opened, pos: door::DOOR_FRAMES });
        assert_eq!(d.win_tile(DOOR_X, DOOR_Y), assets::DOOR_GAP_TILE);
        assert_eq!(d.vblanks(), 1 + u32::from(door::DOOR_FRAMES));
    }

    #[test]
    fn test_fade_writes_palettes_then_restores() {
        let mut d = ShadowDisplay::new();
        let mut state = apply_input(GalaxyState::initial(), Button::SELECT.into());
        let mut seen = [0u8; 6];
        for slot in &mut seen {
            let (next, out) = update(state, Buttons::NONE);
            present(&out, &mut d);
            *slot = d.read_reg(Reg::Bgp);
            state = next;
        }
        assert_eq!(seen, [0xF9, 0xFE, 0xFF, 0xFE, 0xF9, 0xE4]);
        assert!(!state.fade.is_active());
    }

    #[test]
    fn test_sprite_tiles_reuploaded_every_eighth_tick() {
        let mut d = ShadowDisplay::new();
        let mut demo = Galaxy::new(GalaxyConfig { vbl_per_tick: 0 });
        demo.boot(&mut d);
        for _ in 0..7 {
            demo.tick(&mut d, &mut Idle);
        }
        assert_eq!(d.oam(0).tile, 0);
        demo.tick(&mut d, &mut Idle);
        assert_eq!(demo.state().anim.frame, 1);
        assert_eq!((d.oam(0).tile, d.oam(1).tile), (4, 6));
    }

    #[test]
    fn test_describe() {
        let demo = Galaxy::default();
        let mut text = String::new();
        demo.describe(&mut text).unwrap();
        assert!(text.contains("door        Closed at 0"));
        assert!(text.contains("fade        idle"));
    }

    fn arb_buttons() -> impl Strategy<Value = Buttons> {
        any::<u8>().prop_map(Buttons)
    }

    proptest! {
        #[test]
        fn prop_window_stays_in_box(inputs in prop::collection::vec(arb_buttons(), 1..400)) {
            let mut state = GalaxyState::initial();
            for buttons in inputs {
                let before = state.window;
                let (next, out) = update(state, buttons);
                prop_assert!(WINDOW_BOX.contains(out.window));
                prop_assert!(WINDOW_BOX.contains(next.window.pos.wholes()));

                // A bound is touched when the unclamped step reaches it
                let (x, y) = before.step().pos.wholes();
                let touched = [
                    x >= WINDOW_BOX.x.max || x <= WINDOW_BOX.x.min,
                    y >= WINDOW_BOX.y.max || y <= WINDOW_BOX.y.min,
                ];
                prop_assert_eq!(out.bounced, touched);

                let (moved, _) = WINDOW_BOX.step(before);
                let pairs = [(before.vel.x, moved.vel.x), (before.vel.y, moved.vel.y)];
                for (axis, (was, now)) in pairs.into_iter().enumerate() {
                    if touched[axis] {
                        prop_assert_eq!(now, -was);
                    } else {
                        prop_assert_eq!(now, was);
                    }
                }
                state = next;
            }
        }

        #[test]
        fn prop_door_index_bounded(inputs in prop::collection::vec(arb_buttons(), 1..400)) {
            let mut state = GalaxyState::initial();
            for buttons in inputs {
                let (next, _) = update(state, buttons);
                state = next;
                prop_assert!(state.door.pos <= door::DOOR_FRAMES);
                match state.door.state {
                    DoorState::Opened => prop_assert_eq!(state.door.pos, door::DOOR_FRAMES),
                    DoorState::Closed => prop_assert_eq!(state.door.pos, 0),
                    DoorState::Opening => prop_assert!(state.door.pos < door::DOOR_FRAMES),
                    DoorState::Closing => prop_assert!(state.door.pos > 0),
                }
            }
        }

        #[test]
        fn prop_sprite_frame_advances_once_per_eight(ticks in 1usize..600) {
            let mut state = GalaxyState::initial();
            let mut advances = 0usize;
            for _ in 0..ticks {
                let (next, out) = update(state, Buttons::NONE);
                if out.sprite_frame.is_some() {
                    advances += 1;
                }
                prop_assert!(next.anim.frame < anim::SPRITE_FRAMES);
                state = next;
            }
            prop_assert_eq!(advances, ticks / 8);
            prop_assert_eq!(usize::from(state.anim.frame), (ticks / 8) % 7);
        }
    }
}

//! Shooter: a ship, falling enemies and bullets
//!
//! The ship sits on a fixed row near the bottom of the screen. Enemies spawn
//! at random columns along the top and fall one pixel per tick; bullets rise
//! from the ship. Shooting an enemy scores a point, letting one reach the
//! ship's row ends the game.
//!
//! All positions are OAM coordinates (screen position + 8 / + 16).
//!
//! # Keys
//!
//! | Input       | Effect                        |
//! |-------------|-------------------------------|
//! | LEFT/RIGHT  | Move the ship                 |
//! | A           | Fire (one bullet per press)   |
//! | START       | Restart after game over       |
//!
//! # Objects
//!
//! | Objects | Use                              |
//! |---------|----------------------------------|
//! | 0-2     | Ship                             |
//! | 3-12    | Enemies, two objects each        |
//! | 13-15   | Bullets                          |

pub mod assets;
pub mod rng;

use gb::display::Display;
use gb::input::{Button, Buttons, Joypad};
use gb::lcd::{MAP_SIZE, Reg, SCREEN_WIDTH, lcdc, palette};
use gb::sprite::{OFFSET_X, OFFSET_Y};

use crate::Demo;
use crate::tiles;
use rng::Rng;

pub const NUM_ENEMIES: usize = 5;
pub const NUM_BULLETS: usize = 3;

pub const PLAYER_SPRITE: u8 = 0;
pub const FIRST_ENEMY_SPRITE: u8 = 3;
pub const FIRST_BULLET_SPRITE: u8 = 13;

/// Ship and enemy cell size in pixels
pub const CELL: u8 = 8;
/// Ship width in cells
pub const PLAYER_CELLS: u8 = 3;
/// Enemy width in cells
pub const ENEMY_CELLS: u8 = 2;

/// Row the ship moves along
pub const PLAYER_Y: u8 = 144;
pub const PLAYER_MIN_X: u8 = OFFSET_X;
pub const PLAYER_MAX_X: u8 = OFFSET_X + SCREEN_WIDTH - PLAYER_CELLS * CELL;
pub const PLAYER_SPEED: u8 = 2;

pub const BULLET_SPEED: u8 = 4;
/// A bullet at or above this row has left the screen
pub const BULLET_TOP: u8 = OFFSET_Y - CELL;

pub const ENEMY_SPEED: u8 = 1;
pub const ENEMY_SPAWN_Y: u8 = OFFSET_Y;
pub const ENEMY_MIN_X: u8 = OFFSET_X;
pub const ENEMY_MAX_X: u8 = OFFSET_X + SCREEN_WIDTH - ENEMY_CELLS * CELL;

/// Background tile position of the score
pub const SCORE_X: u8 = 1;
pub const SCORE_Y: u8 = 0;
pub const SCORE_DIGITS: usize = 5;

/// Background tile position of the "GAME OVER" text
pub const GAME_OVER_X: u8 = 5;
pub const GAME_OVER_Y: u8 = 8;

/// LCDC at boot: unsigned tile data shared by background and objects,
/// 8x8 objects, objects and background on
pub const BOOT_LCDC: u8 = lcdc::TILE_DATA_8000 | lcdc::OBJ_ON | lcdc::BG_ON;

/// Tunables of the shooter loop
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ShooterConfig {
    /// Seed of the spawn column generator
    pub seed: u16,
    /// Ticks between enemy spawns
    pub spawn_interval: u16,
    /// Vertical blanks waited per tick
    pub vbl_per_tick: u8,
}

impl Default for ShooterConfig {
    fn default() -> Self {
        Self {
            seed: 0x5A,
            spawn_interval: 32,
            vbl_per_tick: 1,
        }
    }
}

/// OAM position of an actor's top-left cell
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Pos {
    pub x: u8,
    pub y: u8,
}

impl Pos {
    pub const fn new(x: u8, y: u8) -> Self {
        Self { x, y }
    }
}

/// An enemy or bullet slot
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Actor {
    pub pos: Pos,
    pub enabled: bool,
}

impl Actor {
    pub const OFF: Actor = Actor {
        pos: Pos::new(0, 0),
        enabled: false,
    };

    pub const fn at(x: u8, y: u8) -> Self {
        Self {
            pos: Pos::new(x, y),
            enabled: true,
        }
    }
}

/// True when `a` and `b` are closer than `size` on both axes
pub fn is_collision(a: Pos, b: Pos, size: u8) -> bool {
    a.x.abs_diff(b.x) < size && a.y.abs_diff(b.y) < size
}

/// Everything the shooter mutates
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ShooterState {
    /// Tick counter, wraps
    pub time: u16,
    pub player_x: u8,
    pub enemies: [Actor; NUM_ENEMIES],
    pub bullets: [Actor; NUM_BULLETS],
    pub score: u16,
    pub game_over: bool,
    /// Buttons held on the previous tick
    pub held: Buttons,
    pub rng: Rng,
}

impl ShooterState {
    /// State right after boot
    pub const fn new(seed: u16) -> Self {
        Self::with_rng(Rng::new(seed))
    }

    const fn with_rng(rng: Rng) -> Self {
        Self {
            time: 0,
            player_x: (PLAYER_MIN_X + PLAYER_MAX_X) / 2,
            enemies: [Actor::OFF; NUM_ENEMIES],
            bullets: [Actor::OFF; NUM_BULLETS],
            score: 0,
            game_over: false,
            held: Buttons::NONE,
            rng,
        }
    }

    /// Fresh game that keeps the generator running
    pub fn restarted(self) -> Self {
        Self {
            held: self.held,
            ..Self::with_rng(self.rng)
        }
    }

    /// OAM position of ship cell `cell`
    pub fn player_cell(&self, cell: u8) -> Pos {
        Pos::new(self.player_x + cell * CELL, PLAYER_Y)
    }

    pub fn active_enemies(&self) -> usize {
        self.enemies.iter().filter(|e| e.enabled).count()
    }

    pub fn active_bullets(&self) -> usize {
        self.bullets.iter().filter(|b| b.enabled).count()
    }
}

/// What happened during one tick
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Events {
    /// Bullet slot fired
    pub fired: Option<usize>,
    /// Enemy slot spawned
    pub spawned: Option<usize>,
    /// Enemies shot down
    pub kills: u8,
    /// The game ended this tick
    pub game_over: bool,
    /// A new game started this tick
    pub restarted: bool,
}

fn steer(x: u8, buttons: Buttons) -> u8 {
    let mut x = x;
    if buttons.left() {
        x = x.saturating_sub(PLAYER_SPEED);
    }
    if buttons.right() {
        x = x.saturating_add(PLAYER_SPEED);
    }
    x.clamp(PLAYER_MIN_X, PLAYER_MAX_X)
}

/// Fire from the middle of the ship into the first free slot
fn fire(bullets: &mut [Actor; NUM_BULLETS], player_x: u8) -> Option<usize> {
    let slot = bullets.iter().position(|b| !b.enabled)?;
    bullets[slot] = Actor::at(player_x + CELL, PLAYER_Y - CELL);
    Some(slot)
}

fn move_bullets(bullets: &mut [Actor; NUM_BULLETS]) {
    for bullet in bullets.iter_mut().filter(|b| b.enabled) {
        bullet.pos.y = bullet.pos.y.saturating_sub(BULLET_SPEED);
        if bullet.pos.y <= BULLET_TOP {
            *bullet = Actor::OFF;
        }
    }
}

fn move_enemies(enemies: &mut [Actor; NUM_ENEMIES]) {
    for enemy in enemies.iter_mut().filter(|e| e.enabled) {
        enemy.pos.y = enemy.pos.y.saturating_add(ENEMY_SPEED);
    }
}

/// Spawn at a random column into the first free slot
fn spawn_enemy(enemies: &mut [Actor; NUM_ENEMIES], rng: &mut Rng) -> Option<usize> {
    let slot = enemies.iter().position(|e| !e.enabled)?;
    let x = ENEMY_MIN_X + rng.below(ENEMY_MAX_X - ENEMY_MIN_X + 1);
    enemies[slot] = Actor::at(x, ENEMY_SPAWN_Y);
    Some(slot)
}

fn enemy_hit_by(enemy: Pos, point: Pos) -> bool {
    (0..ENEMY_CELLS).any(|cell| is_collision(Pos::new(enemy.x + cell * CELL, enemy.y), point, CELL))
}

/// Disable every bullet/enemy pair that overlaps; returns the number of kills
fn resolve_hits(bullets: &mut [Actor; NUM_BULLETS], enemies: &mut [Actor; NUM_ENEMIES]) -> u8 {
    let mut kills = 0;
    for bullet in bullets.iter_mut().filter(|b| b.enabled) {
        let target = enemies
            .iter_mut()
            .find(|e| e.enabled && enemy_hit_by(e.pos, bullet.pos));
        if let Some(enemy) = target {
            *enemy = Actor::OFF;
            *bullet = Actor::OFF;
            kills += 1;
        }
    }
    kills
}

fn reaches_player(state: &ShooterState, enemy: Pos) -> bool {
    enemy.y >= PLAYER_Y
        || (0..PLAYER_CELLS).any(|cell| enemy_hit_by(enemy, state.player_cell(cell)))
}

/// One tick of the game
///
/// Order: ship, fire, bullets, enemies, spawn, hits, then the game-over
/// check. After game over only START (pressed this tick) has an effect.
pub fn update(state: ShooterState, buttons: Buttons, config: &ShooterConfig) -> (ShooterState, Events) {
    let pressed = buttons.pressed_since(state.held);
    let mut s = state;
    let mut events = Events::default();
    s.held = buttons;
    s.time = s.time.wrapping_add(1);

    if s.game_over {
        if pressed.contains(Button::START) {
            s = s.restarted();
            events.restarted = true;
        }
        return (s, events);
    }

    s.player_x = steer(s.player_x, buttons);
    if pressed.contains(Button::A) {
        events.fired = fire(&mut s.bullets, s.player_x);
    }
    move_bullets(&mut s.bullets);
    move_enemies(&mut s.enemies);
    if s.time % config.spawn_interval.max(1) == 0 {
        events.spawned = spawn_enemy(&mut s.enemies, &mut s.rng);
    }

    events.kills = resolve_hits(&mut s.bullets, &mut s.enemies);
    s.score = s.score.saturating_add(u16::from(events.kills));

    if s.enemies.iter().any(|e| e.enabled && reaches_player(&s, e.pos)) {
        s.game_over = true;
        s.enemies = [Actor::OFF; NUM_ENEMIES];
        s.bullets = [Actor::OFF; NUM_BULLETS];
        events.game_over = true;
    }
    (s, events)
}

/// Score as background tiles, most significant digit first
pub fn score_tiles(score: u16) -> [u8; SCORE_DIGITS] {
    let mut out = [assets::digit_tile(0); SCORE_DIGITS];
    let mut rest = score;
    for slot in out.iter_mut().rev() {
        *slot = assets::digit_tile((rest % 10) as u8);
        rest /= 10;
    }
    out
}

fn draw_score(display: &mut dyn Display, score: u16) {
    display.set_bkg_tiles(SCORE_X, SCORE_Y, SCORE_DIGITS as u8, 1, &score_tiles(score));
}

fn draw_game_over(display: &mut dyn Display) {
    let text = &assets::GAME_OVER_TEXT;
    display.set_bkg_tiles(GAME_OVER_X, GAME_OVER_Y, text.len() as u8, 1, text);
}

fn clear_game_over(display: &mut dyn Display) {
    display.set_bkg_tiles(0, GAME_OVER_Y, MAP_SIZE, 1, &assets::BLANK_ROW);
}

/// Move the `cells` objects from `first` to `actor`, or hide them
fn place_actor(display: &mut dyn Display, first: u8, cells: u8, actor: &Actor) {
    for cell in 0..cells {
        if actor.enabled {
            display.move_sprite(first + cell, actor.pos.x + cell * CELL, actor.pos.y);
        } else {
            display.hide_sprite(first + cell);
        }
    }
}

fn place_player(display: &mut dyn Display, state: &ShooterState) {
    for cell in 0..PLAYER_CELLS {
        let pos = state.player_cell(cell);
        display.move_sprite(PLAYER_SPRITE + cell, pos.x, pos.y);
    }
}

/// Write one tick's state to the hardware
pub fn present(state: &ShooterState, events: &Events, display: &mut dyn Display) {
    place_player(display, state);
    for (i, enemy) in state.enemies.iter().enumerate() {
        place_actor(display, FIRST_ENEMY_SPRITE + i as u8 * ENEMY_CELLS, ENEMY_CELLS, enemy);
    }
    for (i, bullet) in state.bullets.iter().enumerate() {
        place_actor(display, FIRST_BULLET_SPRITE + i as u8, 1, bullet);
    }

    if events.kills > 0 || events.restarted {
        draw_score(display, state.score);
    }
    if events.restarted {
        clear_game_over(display);
    }
    if events.game_over {
        draw_game_over(display);
    }
}

/// Load tiles, draw the initial screen and switch the display on
pub fn boot(state: &ShooterState, display: &mut dyn Display) {
    display.write_reg(Reg::Lcdc, BOOT_LCDC);
    display.write_reg(Reg::Bgp, palette::NORMAL);
    display.write_reg(Reg::Obp0, palette::NORMAL);
    display.write_reg(Reg::Scx, 0);
    display.write_reg(Reg::Scy, 0);

    display.set_sprite_data(0x00, tiles::bytes(&assets::SPRITE_TILES));
    display.set_bkg_data(assets::DIGIT_FIRST, tiles::bytes(&assets::DIGIT_TILES));
    display.set_bkg_data(assets::LETTER_FIRST, tiles::bytes(&assets::LETTER_TILES));
    for y in 0..MAP_SIZE {
        display.set_bkg_tiles(0, y, MAP_SIZE, 1, &assets::BLANK_ROW);
    }
    draw_score(display, state.score);

    for (cell, tile) in assets::SHIP_TILES.into_iter().enumerate() {
        display.set_sprite_tile(PLAYER_SPRITE + cell as u8, tile);
    }
    for i in 0..NUM_ENEMIES as u8 {
        for (cell, tile) in assets::ENEMY_TILES.into_iter().enumerate() {
            display.set_sprite_tile(FIRST_ENEMY_SPRITE + i * ENEMY_CELLS + cell as u8, tile);
        }
    }
    for i in 0..NUM_BULLETS as u8 {
        display.set_sprite_tile(FIRST_BULLET_SPRITE + i, assets::BULLET_TILE);
    }
    present(state, &Events::default(), display);

    display.display_on();
}

/// The shooter demo loop
#[derive(Debug, Clone)]
pub struct Shooter {
    config: ShooterConfig,
    state: ShooterState,
}

impl Default for Shooter {
    fn default() -> Self {
        Self::new(ShooterConfig::default())
    }
}

impl Shooter {
    pub fn new(config: ShooterConfig) -> Self {
        Self {
            config,
            state: ShooterState::new(config.seed),
        }
    }

    pub fn state(&self) -> &ShooterState {
        &self.state
    }
}

impl Demo for Shooter {
    fn name(&self) -> &'static str {
        "shooter"
    }

    fn boot(&mut self, display: &mut dyn Display) {
        self.state = ShooterState::new(self.config.seed);
        boot(&self.state, display);
    }

    fn tick(&mut self, display: &mut dyn Display, joypad: &mut dyn Joypad) {
        for _ in 0..self.config.vbl_per_tick {
            display.wait_vbl_done();
        }

        let buttons = joypad.read();
        let (next, events) = update(self.state, buttons, &self.config);
        present(&next, &events, display);

        if let Some(slot) = events.spawned {
            log::debug!("enemy {} spawned at x {}", slot, next.enemies[slot].pos.x);
        }
        if let Some(slot) = events.fired {
            log::trace!("bullet {} fired", slot);
        }
        if events.kills > 0 {
            log::debug!("{} enemies shot, score {}", events.kills, next.score);
        }
        if events.game_over {
            log::debug!("game over at tick {} with score {}", next.time, next.score);
        }
        if events.restarted {
            log::debug!("restarted");
        }
        self.state = next;
    }

    fn describe(&self, out: &mut dyn core::fmt::Write) -> core::fmt::Result {
        let s = &self.state;
        writeln!(out, "time        {}", s.time)?;
        writeln!(out, "status      {}", if s.game_over { "game over" } else { "playing" })?;
        writeln!(out, "score       {}", s.score)?;
        writeln!(out, "player      x {}", s.player_x)?;
        writeln!(out, "enemies     {}/{}", s.active_enemies(), NUM_ENEMIES)?;
        writeln!(out, "bullets     {}/{}", s.active_bullets(), NUM_BULLETS)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use gb::shadow::ShadowDisplay;
    use pretty_assertions::assert_eq;
    use proptest::prelude::*;

    /// Config that never spawns on its own within a test
    const QUIET: ShooterConfig = ShooterConfig {
        seed: 1,
        spawn_interval: u16::MAX,
        vbl_per_tick: 0,
    };

    #[test]
    fn test_is_collision() {
        assert!(is_collision(Pos::new(10, 10), Pos::new(17, 3), 8));
        assert!(!is_collision(Pos::new(10, 10), Pos::new(18, 10), 8));
        assert!(!is_collision(Pos::new(10, 10), Pos::new(10, 2), 8));
        assert!(is_collision(Pos::new(0, 0), Pos::new(0, 0), 1));
    }

    #[test]
    fn test_player_bounds() {
        assert_eq!(PLAYER_MIN_X, 8);
        assert_eq!(PLAYER_MAX_X, 144);
        assert_eq!(ENEMY_MAX_X, 152);
    }

    #[test]
    fn test_steer_clamps() {
        let mut s = ShooterState::new(1);
        for _ in 0..200 {
            s = update(s, Button::LEFT.into(), &QUIET).0;
        }
        assert_eq!(s.player_x, PLAYER_MIN_X);
        for _ in 0..200 {
            s = update(s, Button::RIGHT.into(), &QUIET).0;
        }
        assert_eq!(s.player_x, PLAYER_MAX_X);
    }

    #[test]
    fn test_fire_needs_a_fresh_press() {
        let s = ShooterState::new(1);
        let (s, events) = update(s, Button::A.into(), &QUIET);
        assert_eq!(events.fired, Some(0));
        let (s, events) = update(s, Button::A.into(), &QUIET);
        assert_eq!(events.fired, None);
        let (s, _) = update(s, Buttons::NONE, &QUIET);
        let (s, events) = update(s, Button::A.into(), &QUIET);
        assert_eq!(events.fired, Some(1));
        assert_eq!(s.active_bullets(), 2);
    }

    #[test]
    fn test_bullet_rises_from_ship_center() {
        let s = ShooterState::new(1);
        let (s, _) = update(s, Button::A.into(), &QUIET);
        assert_eq!(s.bullets[0], Actor::at(s.player_x + CELL, PLAYER_Y - CELL - BULLET_SPEED));
    }

    #[test]
    fn test_bullet_leaves_top() {
        let mut s = ShooterState::new(1);
        s.bullets[0] = Actor::at(50, BULLET_TOP + BULLET_SPEED + 1);
        let (s, _) = update(s, Buttons::NONE, &QUIET);
        assert!(s.bullets[0].enabled);
        let (s, _) = update(s, Buttons::NONE, &QUIET);
        assert_eq!(s.bullets[0], Actor::OFF);
    }

    #[test]
    fn test_at_most_three_bullets() {
        let mut s = ShooterState::new(1);
        for i in 0..10 {
            let buttons = if i % 2 == 0 { Button::A.into() } else { Buttons::NONE };
            s = update(s, buttons, &QUIET).0;
        }
        assert_eq!(s.active_bullets(), NUM_BULLETS);
    }

    #[test]
    fn test_spawn_interval() {
        let config = ShooterConfig { spawn_interval: 4, ..QUIET };
        let mut s = ShooterState::new(7);
        let mut spawns = 0;
        for _ in 0..12 {
            let (next, events) = update(s, Buttons::NONE, &config);
            if let Some(slot) = events.spawned {
                let enemy = next.enemies[slot];
                assert!((ENEMY_MIN_X..=ENEMY_MAX_X).contains(&enemy.pos.x));
                assert_eq!(enemy.pos.y, ENEMY_SPAWN_Y);
                spawns += 1;
            }
            s = next;
        }
        assert_eq!(spawns, 3);
        assert_eq!(s.active_enemies(), 3);
    }

    #[test]
    fn test_spawn_is_seeded() {
        let config = ShooterConfig { spawn_interval: 1, ..QUIET };
        let run = |seed| {
            let (s, _) = update(ShooterState::new(seed), Buttons::NONE, &config);
            s.enemies[0].pos.x
        };
        assert_eq!(run(0x5A), run(0x5A));
    }

    #[test]
    fn test_bullet_kills_enemy() {
        let mut s = ShooterState::new(1);
        s.enemies[2] = Actor::at(50, 60);
        s.bullets[1] = Actor::at(58, 66);
        let (s, events) = update(s, Buttons::NONE, &QUIET);
        assert_eq!(events.kills, 1);
        assert_eq!(s.score, 1);
        assert_eq!(s.enemies[2], Actor::OFF);
        assert_eq!(s.bullets[1], Actor::OFF);
    }

    #[test]
    fn test_enemy_reaching_row_ends_game() {
        let mut s = ShooterState::new(1);
        s.player_x = PLAYER_MIN_X;
        s.enemies[0] = Actor::at(ENEMY_MAX_X, PLAYER_Y - 1);
        s.bullets[0] = Actor::at(30, 30);
        let (s, events) = update(s, Buttons::NONE, &QUIET);
        assert!(events.game_over);
        assert!(s.game_over);
        assert_eq!(s.active_enemies(), 0);
        assert_eq!(s.active_bullets(), 0);
    }

    #[test]
    fn test_enemy_touching_ship_ends_game() {
        let mut s = ShooterState::new(1);
        s.enemies[0] = Actor::at(s.player_x + 4, PLAYER_Y - CELL);
        let (_, events) = update(s, Buttons::NONE, &QUIET);
        assert!(events.game_over);
    }

    #[test]
    fn test_game_over_ignores_input_until_start() {
        let mut s = ShooterState::new(1);
        s.game_over = true;
        s.score = 12;
        let x = s.player_x;
        let (s, events) = update(s, Button::LEFT | Button::A, &QUIET);
        assert_eq!(events, Events::default());
        assert_eq!(s.player_x, x);
        let (s, events) = update(s, Button::START.into(), &QUIET);
        assert!(events.restarted);
        assert!(!s.game_over);
        assert_eq!(s.score, 0);
    }

    #[test]
    fn test_score_tiles() {
        let d = |n| assets::digit_tile(n);
        assert_eq!(score_tiles(0), [d(0); 5]);
        assert_eq!(score_tiles(1203), [d(0), d(1), d(2), d(0), d(3)]);
        assert_eq!(score_tiles(u16::MAX), [d(6), d(5), d(5), d(3), d(5)]);
    }

    #[test]
    fn test_boot_screen() {
        let mut d = ShadowDisplay::new();
        let mut demo = Shooter::new(QUIET);
        demo.boot(&mut d);
        assert_eq!(d.read_reg(Reg::Lcdc), 0x93);
        assert_eq!(d.bkg_tile(SCORE_X, SCORE_Y), assets::digit_tile(0));
        assert_eq!(d.bkg_tile(SCORE_X + 4, SCORE_Y), assets::digit_tile(0));
        assert_eq!(d.bkg_tile(10, 10), assets::BLANK_TILE);
        // Background and objects share the 0x8000 block
        assert_eq!(d.tile_pattern(assets::DIGIT_FIRST + 3), assets::DIGIT_TILES[3]);
        assert_eq!(d.sprite_pattern(assets::BULLET_TILE), assets::SPRITE_TILES[6]);
        assert_eq!(d.oam(0).y, PLAYER_Y);
        assert_eq!(d.oam(1).tile, assets::SHIP_TILES[1]);
        assert_eq!(d.oam(FIRST_ENEMY_SPRITE + 1).tile, assets::ENEMY_TILES[1]);
        assert_eq!(d.oam(FIRST_ENEMY_SPRITE).y, 0);
        assert_eq!(d.oam(FIRST_BULLET_SPRITE + 2).y, 0);
    }

    #[test]
    fn test_present_score_and_game_over() {
        let mut d = ShadowDisplay::new();
        let mut s = ShooterState::new(1);
        boot(&s, &mut d);
        s.score = 42;
        present(&s, &Events { kills: 1, ..Events::default() }, &mut d);
        assert_eq!(d.bkg_tile(SCORE_X + 3, SCORE_Y), assets::digit_tile(4));
        assert_eq!(d.bkg_tile(SCORE_X + 4, SCORE_Y), assets::digit_tile(2));

        present(&s, &Events { game_over: true, ..Events::default() }, &mut d);
        assert_eq!(d.bkg_tile(GAME_OVER_X, GAME_OVER_Y), assets::GAME_OVER_TEXT[0]);
        assert_eq!(d.bkg_tile(GAME_OVER_X + 8, GAME_OVER_Y), assets::GAME_OVER_TEXT[8]);

        let s = s.restarted();
        present(&s, &Events { restarted: true, ..Events::default() }, &mut d);
        assert_eq!(d.bkg_tile(GAME_OVER_X, GAME_OVER_Y), assets::BLANK_TILE);
        assert_eq!(d.bkg_tile(SCORE_X + 4, SCORE_Y), assets::digit_tile(0));
    }

    #[test]
    fn test_describe() {
        let demo = Shooter::default();
        let mut text = String::new();
        demo.describe(&mut text).unwrap();
        assert!(text.contains("status      playing"));
        assert!(text.contains("enemies     0/5"));
    }

    fn arb_buttons() -> impl Strategy<Value = Buttons> {
        any::<u8>().prop_map(Buttons)
    }

    proptest! {
        #[test]
        fn prop_slots_and_score(
            seed in any::<u16>(),
            interval in 1u16..40,
            inputs in prop::collection::vec(arb_buttons(), 1..600),
        ) {
            let config = ShooterConfig { seed, spawn_interval: interval, vbl_per_tick: 0 };
            let mut d = ShadowDisplay::new();
            let mut state = ShooterState::new(seed);
            boot(&state, &mut d);
            for buttons in inputs {
                let (next, events) = update(state, buttons, &config);
                present(&next, &events, &mut d);

                prop_assert!(next.active_bullets() <= NUM_BULLETS);
                prop_assert!(next.active_enemies() <= NUM_ENEMIES);
                if !events.restarted {
                    prop_assert_eq!(next.score, state.score + u16::from(events.kills));
                }
                prop_assert!((PLAYER_MIN_X..=PLAYER_MAX_X).contains(&next.player_x));

                for (i, enemy) in next.enemies.iter().enumerate() {
                    let first = FIRST_ENEMY_SPRITE + i as u8 * ENEMY_CELLS;
                    for cell in 0..ENEMY_CELLS {
                        prop_assert_eq!(d.oam(first + cell).y == 0, !enemy.enabled);
                    }
                }
                for (i, bullet) in next.bullets.iter().enumerate() {
                    prop_assert_eq!(d.oam(FIRST_BULLET_SPRITE + i as u8).y == 0, !bullet.enabled);
                }
                state = next;
            }
        }
    }
}

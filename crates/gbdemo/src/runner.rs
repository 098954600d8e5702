//! Headless demo runs

use std::fmt;

use clap::ValueEnum;
use gb::display::Display;
use gb::input::{Buttons, Joypad};
use gb::lcd::{Reg, palette};
use gb::shadow::ShadowDisplay;
use gb::sprite::OamEntry;
use gb_demos::Demo;
use gb_demos::galaxy::{Galaxy, GalaxyConfig};
use gb_demos::shooter::{Shooter, ShooterConfig};

use crate::error::{HostError, HostResult};
use crate::script::Script;

/// Window map area included in a dump, in tiles
pub const WINDOW_DUMP_W: u8 = 20;
pub const WINDOW_DUMP_H: u8 = 18;

/// Demo program to run
#[derive(Debug, Clone, Copy, ValueEnum, PartialEq, Eq, Default)]
pub enum DemoKind {
    /// Background, window and sprite layers
    #[default]
    Galaxy,
    /// Ship, enemies, bullets and score
    Shooter,
}

/// Settings of one run
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RunConfig {
    pub demo: DemoKind,
    /// Ticks to run after boot
    pub ticks: u32,
    /// Vertical blanks per tick
    pub vbl_per_tick: u8,
    /// Shooter spawn seed
    pub seed: u16,
    pub dump_window: bool,
    pub dump_oam: bool,
}

impl Default for RunConfig {
    fn default() -> Self {
        Self {
            demo: DemoKind::Galaxy,
            ticks: 600,
            vbl_per_tick: 4,
            seed: 0x5A,
            dump_window: false,
            dump_oam: false,
        }
    }
}

impl RunConfig {
    pub fn validate(&self) -> HostResult<()> {
        if self.ticks == 0 {
            return Err(HostError::config("ticks must be at least 1"));
        }
        if self.dump_window && self.demo == DemoKind::Shooter {
            return Err(HostError::config("the shooter does not use the window layer"));
        }
        Ok(())
    }

    /// Build the configured demo
    pub fn demo(&self) -> Box<dyn Demo> {
        match self.demo {
            DemoKind::Galaxy => Box::new(Galaxy::new(GalaxyConfig {
                vbl_per_tick: self.vbl_per_tick,
            })),
            DemoKind::Shooter => Box::new(Shooter::new(ShooterConfig {
                seed: self.seed,
                vbl_per_tick: self.vbl_per_tick,
                ..ShooterConfig::default()
            })),
        }
    }
}

/// Joypad that plays back a script, then reports no buttons
#[derive(Debug, Clone, Default)]
pub struct ScriptedJoypad {
    script: Script,
    step: usize,
    used: u32,
    reads: u64,
}

impl ScriptedJoypad {
    pub fn new(script: Script) -> Self {
        Self {
            script,
            ..Self::default()
        }
    }

    /// Samples taken so far
    pub fn reads(&self) -> u64 {
        self.reads
    }

    /// Whether every scripted sample has been consumed
    pub fn is_exhausted(&self) -> bool {
        self.step >= self.script.steps.len()
    }
}

impl Joypad for ScriptedJoypad {
    fn read(&mut self) -> Buttons {
        self.reads += 1;
        let Some(step) = self.script.steps.get(self.step) else {
            return Buttons::NONE;
        };
        self.used += 1;
        if self.used >= step.count {
            self.step += 1;
            self.used = 0;
        }
        step.buttons
    }
}

/// Final hardware state after a run
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Report {
    pub demo: &'static str,
    pub ticks: u32,
    pub vblanks: u32,
    pub lcdc: u8,
    pub scx: u8,
    pub scy: u8,
    pub wx: u8,
    pub wy: u8,
    pub bgp: u8,
    /// The demo's own state summary
    pub summary: String,
    /// Window map rows, when requested
    pub window: Option<Vec<Vec<u8>>>,
    /// OAM entries that are on screen, with their index, when requested
    pub oam: Option<Vec<(u8, OamEntry)>>,
}

impl Report {
    fn capture(config: &RunConfig, demo: &dyn Demo, display: &ShadowDisplay) -> HostResult<Self> {
        let mut summary = String::new();
        demo.describe(&mut summary)?;

        let window = config.dump_window.then(|| {
            (0..WINDOW_DUMP_H)
                .map(|y| (0..WINDOW_DUMP_W).map(|x| display.win_tile(x, y)).collect())
                .collect()
        });
        let oam = config.dump_oam.then(|| {
            display
                .oam_entries()
                .iter()
                .enumerate()
                .filter(|(_, e)| !e.is_hidden())
                .map(|(i, e)| (i as u8, *e))
                .collect()
        });

        Ok(Self {
            demo: demo.name(),
            ticks: config.ticks,
            vblanks: display.vblanks(),
            lcdc: display.read_reg(Reg::Lcdc),
            scx: display.read_reg(Reg::Scx),
            scy: display.read_reg(Reg::Scy),
            wx: display.read_reg(Reg::Wx),
            wy: display.read_reg(Reg::Wy),
            bgp: display.read_reg(Reg::Bgp),
            summary,
            window,
            oam,
        })
    }
}

impl fmt::Display for Report {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "demo        {}", self.demo)?;
        writeln!(f, "ticks       {}", self.ticks)?;
        writeln!(f, "vblanks     {}", self.vblanks)?;
        writeln!(f, "lcdc        {:#04x}", self.lcdc)?;
        writeln!(f, "scroll      {} {}", self.scx, self.scy)?;
        writeln!(f, "window      {} {}", self.wx, self.wy)?;
        write!(f, "bgp         {:#04x} (shades", self.bgp)?;
        for color in 0..4 {
            write!(f, " {}", palette::shade(self.bgp, color))?;
        }
        writeln!(f, ")")?;
        write!(f, "{}", self.summary)?;

        if let Some(rows) = &self.window {
            writeln!(f, "window map")?;
            for row in rows {
                let line: Vec<String> = row.iter().map(|t| format!("{t:02x}")).collect();
                writeln!(f, "  {}", line.join(" "))?;
            }
        }
        if let Some(entries) = &self.oam {
            writeln!(f, "oam")?;
            for (index, e) in entries {
                writeln!(
                    f,
                    "  {index:2}  x {:3}  y {:3}  tile {:#04x}  flags {:#04x}",
                    e.x, e.y, e.tile, e.flags
                )?;
            }
        }
        Ok(())
    }
}

/// Boot the configured demo and run it for `config.ticks` ticks
pub fn run(config: &RunConfig, joypad: &mut dyn Joypad) -> HostResult<Report> {
    config.validate()?;
    let mut display = ShadowDisplay::new();
    let mut demo = config.demo();
    log::info!("running {} for {} ticks", demo.name(), config.ticks);
    gb_demos::run_ticks(demo.as_mut(), &mut display, joypad, config.ticks);
    log::debug!("{} register writes", display.reg_writes());
    Report::capture(config, demo.as_ref(), &display)
}

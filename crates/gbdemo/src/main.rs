//! gbdemo - run a Game Boy demo headless and report the display state
//!
//! Usage: gbdemo <galaxy|shooter> [OPTIONS]

use std::fs;
use std::path::{Path, PathBuf};
use std::process;

use anyhow::Context;
use clap::Parser;
use gbdemo_host::DiagnosticReporter;
use gbdemo_host::runner::{self, DemoKind, RunConfig, ScriptedJoypad};
use gbdemo_host::script;

#[derive(Parser, Debug)]
#[command(name = "gbdemo")]
#[command(author = "GB Demos Team")]
#[command(version)]
#[command(about = "Run a Game Boy layer demo against an in-memory display", long_about = None)]
struct Args {
    /// Demo to run
    #[arg(value_enum)]
    demo: DemoKind,

    /// Joypad input script (.inp)
    #[arg(short, long)]
    script: Option<PathBuf>,

    /// Ticks to run after boot
    #[arg(short, long, default_value_t = RunConfig::default().ticks)]
    ticks: u32,

    /// Vertical blanks per tick
    #[arg(long, default_value_t = RunConfig::default().vbl_per_tick)]
    vbl_per_tick: u8,

    /// Seed for the shooter's enemy columns
    #[arg(long, default_value_t = RunConfig::default().seed)]
    seed: u16,

    /// Print the visible part of the window map
    #[arg(long)]
    dump_window: bool,

    /// Print the on-screen OAM entries
    #[arg(long)]
    dump_oam: bool,

    /// Verbose output
    #[arg(short, long)]
    verbose: bool,
}

/// `RUST_LOG` wins over the default filter
fn init_logging(verbose: bool) {
    let filter = if verbose {
        "gb=debug,gb_demos=debug,gbdemo_host=debug,gbdemo=debug,info"
    } else {
        "info"
    };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(filter))
        .format_timestamp(None)
        .init();
}

/// Read and parse a script, printing a source diagnostic on parse errors
fn load_script(path: &Path) -> anyhow::Result<ScriptedJoypad> {
    let source = fs::read_to_string(path)
        .with_context(|| format!("cannot read script {}", path.display()))?;
    match script::parse(&source) {
        Ok(script) => {
            log::debug!("{}: {} steps, {} ticks", path.display(), script.steps.len(), script.len_ticks());
            Ok(ScriptedJoypad::new(script))
        }
        Err(err) => {
            let mut reporter = DiagnosticReporter::new();
            let file_id = reporter.add_file(path.display().to_string(), source);
            reporter.report_error(file_id, &err);
            process::exit(1);
        }
    }
}

fn main() -> anyhow::Result<()> {
    let args = Args::parse();
    init_logging(args.verbose);

    let config = RunConfig {
        demo: args.demo,
        ticks: args.ticks,
        vbl_per_tick: args.vbl_per_tick,
        seed: args.seed,
        dump_window: args.dump_window,
        dump_oam: args.dump_oam,
    };

    let mut joypad = match &args.script {
        Some(path) => load_script(path)?,
        None => ScriptedJoypad::default(),
    };

    let report = runner::run(&config, &mut joypad)?;
    if !joypad.is_exhausted() {
        log::warn!("script not finished after {} ticks", config.ticks);
    }
    print!("{report}");
    Ok(())
}

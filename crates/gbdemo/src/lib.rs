//! Host side of the Game Boy demos
//!
//! Boots a demo against [`gb::shadow::ShadowDisplay`], feeds it joypad
//! samples from an input script and reports the resulting hardware state.
//!
//! ```
//! use gbdemo_host::runner::{self, DemoKind, RunConfig, ScriptedJoypad};
//! use gbdemo_host::script;
//!
//! let script = script::parse("2 start\n").unwrap();
//! let config = RunConfig { demo: DemoKind::Galaxy, ticks: 10, ..RunConfig::default() };
//! let report = runner::run(&config, &mut ScriptedJoypad::new(script)).unwrap();
//! assert_eq!(report.ticks, 10);
//! ```

pub mod error;
pub mod runner;
pub mod script;

pub use error::{DiagnosticReporter, HostError, HostResult, Span};

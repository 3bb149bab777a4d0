//! Core library for the brew pour-over recipe timer.
//!
//! This crate holds everything except the terminal: the editable recipe
//! [`Schedule`] and its derived aggregates, the [`TimerEngine`] state machine
//! that walks a snapshot of the schedule second by second, the audio
//! [`cue`] contract, configuration loading and error handling.
//!
//! # Display Architecture
//!
//! - **Domain Types** ([`models`], [`Schedule`], [`TimerSnapshot`]):
//!   Implement [`std::fmt::Display`] for direct formatting
//! - **Display Wrappers** ([`display`]): Edit results and status messages
//! - **Terminal Rendering**: Rich markdown output via the CLI's terminal
//!   renderer
//!
//! # Quick Start
//!
//! ```rust
//! use brew_core::{cue::RecordingEmitter, Cue, Schedule, StepCreate, TimerEngine};
//!
//! // Build a recipe
//! let mut schedule = Schedule::new(15.0, 16.0)?;
//! schedule.add_step(&StepCreate {
//!     water: Some(240),
//!     time: Some(2),
//!     ..Default::default()
//! });
//! assert_eq!(schedule.target_water(), 240);
//!
//! // Brew it without the preparation countdown
//! let mut engine = TimerEngine::new(schedule, RecordingEmitter::new());
//! assert_eq!(engine.skip_preparation(), vec![Cue::Start]);
//! assert_eq!(engine.tick(), vec![Cue::PreCue]);
//! assert_eq!(engine.tick(), vec![Cue::Finished]);
//! # Ok::<(), brew_core::BrewError>(())
//! ```

pub mod config;
pub mod cue;
pub mod display;
pub mod error;
pub mod models;
pub mod params;
pub mod schedule;
pub mod session;
pub mod timer;

// Re-export commonly used types
pub use config::Config;
pub use cue::{Cue, SilentEmitter, Tone, ToneEmitter};
pub use display::{CreateResult, DeleteResult, MinSec, OperationStatus, UpdateResult};
pub use error::{BrewError, Result};
pub use models::{Aggregates, RecipeDocument, RecipeStep, Step, StepKind};
pub use params::{Id, StepCreate, UpdateStep};
pub use schedule::Schedule;
pub use session::{Session, SessionBuilder};
pub use timer::{
    run_timer, Phase, TimerCommand, TimerEngine, TimerExit, TimerSnapshot, DEFAULT_VOLUME,
};

//! Display formatting for schedules, timer snapshots and edit results.
//!
//! Domain types implement [`std::fmt::Display`] directly and produce
//! markdown; the CLI hands that markdown to its terminal renderer, which
//! either styles it or prints it as plain text.
//!
//! ```text
//! ┌──────────────────┐    ┌─────────────────┐    ┌─────────────────┐
//! │  Domain Types    │    │ Result Wrappers │    │   Formatted     │
//! │ (Schedule, Step) │───▶│ & Status Lines  │───▶│    Output       │
//! └──────────────────┘    └─────────────────┘    └─────────────────┘
//! ```
//!
//! ## Module Organization
//!
//! - [`models`]: Display implementations for steps, schedules and snapshots
//! - [`results`]: Edit result types (CreateResult, UpdateResult, DeleteResult)
//! - [`status`]: One-line confirmations (OperationStatus)
//! - [`duration`]: `m:ss` formatting
//!
//! ## Usage Examples
//!
//! ```rust
//! use brew_core::{display::MinSec, Schedule};
//!
//! let schedule = Schedule::default();
//! let listing = schedule.to_string();
//! assert!(listing.contains("Target water: 240 ml"));
//! assert_eq!(MinSec(schedule.total_time()).to_string(), "1:45");
//! ```

pub mod duration;
pub mod models;
pub mod results;
pub mod status;

pub use duration::MinSec;
pub use results::{CreateResult, DeleteResult, UpdateResult};
pub use status::OperationStatus;

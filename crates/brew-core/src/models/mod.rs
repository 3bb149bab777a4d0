//! Data models for brew schedules.
//!
//! Display implementations for these models live in
//! [`crate::display::models`], keeping data structures apart from
//! presentation.
//!
//! # Examples
//!
//! ```rust
//! use brew_core::models::{Step, StepKind};
//!
//! let step = Step {
//!     id: 1,
//!     kind: StepKind::Bloom,
//!     name: "Bloom".to_string(),
//!     water: 30,
//!     time: 30,
//!     description: None,
//! };
//! println!("{}", step);
//! ```

pub mod kind;
pub mod recipe;
pub mod step;
pub mod summary;


pub use kind::StepKind;
pub use recipe::{RecipeDocument, RecipeStep};
pub use step::Step;
pub use summary::Aggregates;

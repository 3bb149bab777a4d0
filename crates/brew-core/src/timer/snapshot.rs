//! Read-only view of a timer session for the presentation layer.

use serde::Serialize;

use super::Phase;
use crate::models::Step;

/// Everything a view reads from the engine, captured at one instant.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TimerSnapshot {
    pub phase: Phase,
    pub elapsed_brew_seconds: u32,
    pub countdown_seconds: u32,
    /// Index of the active step; equals `step_count` once finished
    pub active_step_index: usize,
    pub step_count: usize,
    /// Progress through the countdown or the active step, in `[0, 1]`
    pub progress_fraction: f64,
    /// Seconds left in the active step
    pub remaining_seconds: u32,
    /// Cumulative water the user should have poured by the end of the
    /// active step
    pub target_pour: u32,
    pub volume: f32,
    /// The active step, absent once finished
    pub active_step: Option<Step>,
}

impl TimerSnapshot {
    pub fn is_finished(&self) -> bool {
        self.phase == Phase::Finished
    }

    /// True while the preparation countdown still has seconds left.
    pub fn in_preparation(&self) -> bool {
        matches!(self.phase, Phase::Preparing | Phase::Paused) && self.countdown_seconds > 0
    }
}

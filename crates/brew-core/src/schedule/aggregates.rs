//! Derived values of a schedule.
//!
//! Every function here is pure and walks the step sequence. Step counts are
//! single digits to low tens, so an O(steps) walk per call is cheaper than
//! keeping cached totals in sync with every edit.

use super::Schedule;
use crate::models::Aggregates;

impl Schedule {
    /// Water the dose and ratio call for: `round(coffee_grams * ratio)`.
    pub fn target_water(&self) -> u32 {
        let target = (self.coffee_grams * self.ratio).round();
        if target <= 0.0 {
            0
        } else if target >= f64::from(u32::MAX) {
            u32::MAX
        } else {
            target as u32
        }
    }

    /// Sum of `water` over all steps, saturating at `u32::MAX`.
    pub fn total_water(&self) -> u32 {
        self.cumulative_water_before(self.steps.len())
    }

    /// Sum of `time` over all steps in seconds, saturating at `u32::MAX`.
    pub fn total_time(&self) -> u32 {
        self.cumulative_time_before(self.steps.len())
    }

    /// Target water together with both schedule totals.
    pub fn aggregates(&self) -> Aggregates {
        Aggregates {
            target_water: self.target_water(),
            total_water_scheduled: self.total_water(),
            total_time_scheduled: self.total_time(),
        }
    }

    /// Water poured by steps `[0, index)`.
    ///
    /// An index past the end sums every step.
    pub fn cumulative_water_before(&self, index: usize) -> u32 {
        self.steps
            .iter()
            .take(index)
            .map(|step| step.water)
            .fold(0, u32::saturating_add)
    }

    /// Seconds spent in steps `[0, index)`.
    ///
    /// An index past the end sums every step.
    pub fn cumulative_time_before(&self, index: usize) -> u32 {
        self.steps
            .iter()
            .take(index)
            .map(|step| step.time)
            .fold(0, u32::saturating_add)
    }

    /// Water poured by the end of step `index`, i.e. the target pour shown
    /// while that step is active.
    pub fn cumulative_water_through(&self, index: usize) -> u32 {
        self.cumulative_water_before(index.saturating_add(1))
    }

    /// Elapsed brew seconds at which step `index` ends.
    pub fn cumulative_time_through(&self, index: usize) -> u32 {
        self.cumulative_time_before(index.saturating_add(1))
    }

    /// Index of the step active at `elapsed` brew seconds.
    ///
    /// Scans in order for the first step whose interval
    /// `[time_before, time_before + time)` contains `elapsed`. Zero-length
    /// steps have empty intervals and are never returned, although their
    /// water still counts toward cumulative totals. Returns `None` once
    /// `elapsed` is at or past the end of the schedule.
    pub fn step_index_at(&self, elapsed: u32) -> Option<usize> {
        let mut start = 0u32;
        for (index, step) in self.steps.iter().enumerate() {
            let end = start.saturating_add(step.time);
            if start <= elapsed && elapsed < end {
                return Some(index);
            }
            start = end;
        }
        None
    }
}

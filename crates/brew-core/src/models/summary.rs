//! Derived schedule aggregates.

use serde::Serialize;

/// Totals derived from a schedule. Never stored; recomputed from the step
/// sequence on demand.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Aggregates {
    /// `round(coffee_grams * ratio)`, in millilitres
    pub target_water: u32,
    /// Sum of `water` over all steps
    pub total_water_scheduled: u32,
    /// Sum of `time` over all steps, in seconds
    pub total_time_scheduled: u32,
}

impl Aggregates {
    /// Fraction of the target water the schedule pours, capped at 1.
    ///
    /// A zero target yields 0 rather than dividing by zero.
    pub fn water_fill(&self) -> f64 {
        if self.target_water == 0 {
            return 0.0;
        }
        (f64::from(self.total_water_scheduled) / f64::from(self.target_water)).min(1.0)
    }

    /// True when the steps pour more water than the ratio calls for.
    pub fn is_overfilled(&self) -> bool {
        self.total_water_scheduled > self.target_water
    }
}

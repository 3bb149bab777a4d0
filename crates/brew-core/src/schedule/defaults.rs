//! The built-in recipe restored by [`Schedule::reset_to_default`].

use super::Schedule;
use crate::models::{Step, StepKind};

/// Default dose of ground coffee, in grams.
pub const DEFAULT_COFFEE_GRAMS: f64 = 15.0;

/// Default water-to-coffee ratio (1:16).
pub const DEFAULT_RATIO: f64 = 16.0;

/// Water poured by a freshly added step.
pub const NEW_STEP_WATER: u32 = 50;

/// Duration of a freshly added step, in seconds.
pub const NEW_STEP_TIME: u32 = 30;

fn default_steps() -> Vec<Step> {
    vec![
        Step {
            id: 1,
            kind: StepKind::Bloom,
            name: "Bloom".to_string(),
            water: 30,
            time: 30,
            description: Some("Wet all the grounds and let the gas escape".to_string()),
        },
        Step {
            id: 2,
            kind: StepKind::Pour,
            name: "Pour 1".to_string(),
            water: 90,
            time: 30,
            description: Some("Pour in circles from the centre".to_string()),
        },
        Step {
            id: 3,
            kind: StepKind::Pour,
            name: "Pour 2".to_string(),
            water: 120,
            time: 45,
            description: Some("Keep the water level steady".to_string()),
        },
    ]
}

impl Schedule {
    /// Replaces grams, ratio and every step with the built-in recipe.
    ///
    /// Ids restart at 1, so ids handed out before the reset no longer refer
    /// to the same step.
    pub fn reset_to_default(&mut self) {
        self.coffee_grams = DEFAULT_COFFEE_GRAMS;
        self.ratio = DEFAULT_RATIO;
        self.steps = default_steps();
        self.next_id = self.steps.iter().map(|step| step.id).max().unwrap_or(0) + 1;
        log::debug!("Schedule reset to the default recipe");
    }
}

impl Default for Schedule {
    fn default() -> Self {
        let mut schedule = Schedule::empty(DEFAULT_COFFEE_GRAMS, DEFAULT_RATIO);
        schedule.reset_to_default();
        schedule
    }
}

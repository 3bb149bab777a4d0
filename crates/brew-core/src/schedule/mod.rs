//! The schedule model: an ordered list of brew steps plus dose and ratio.
//!
//! Order is significant. It defines the pour order and maps elapsed brew time
//! onto steps. Ids are stable handles for lookup, replacement and removal and
//! play no part in ordering.
//!
//! All mutations happen in memory; nothing is persisted. Derived values
//! (totals, cumulative water and time) are never stored and are recomputed
//! from the step sequence on every call; see [`aggregates`].
//!
//! # Examples
//!
//! ```rust
//! use brew_core::{params::{StepCreate, UpdateStep}, Schedule};
//!
//! let mut schedule = Schedule::default();
//! assert_eq!(schedule.aggregates().target_water, 240);
//!
//! let step = schedule.add_step(&StepCreate::default()).clone();
//! assert_eq!(step.name, "Pour 3");
//!
//! schedule.update_step(&UpdateStep {
//!     id: step.id,
//!     water: Some(20),
//!     ..Default::default()
//! });
//! schedule.remove_step(step.id);
//! assert_eq!(schedule.len(), 3);
//! ```

pub mod aggregates;
pub mod defaults;


use serde::Serialize;

use crate::{
    models::{RecipeDocument, Step, StepKind},
    params::{validate_positive, StepCreate, UpdateStep},
    Result,
};

pub use defaults::{DEFAULT_COFFEE_GRAMS, DEFAULT_RATIO, NEW_STEP_TIME, NEW_STEP_WATER};

/// Ordered brew steps with the two scalar settings the target water derives
/// from.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Schedule {
    coffee_grams: f64,
    ratio: f64,
    steps: Vec<Step>,
    #[serde(skip)]
    next_id: u64,
}

impl Schedule {
    /// Creates a schedule with no steps.
    ///
    /// # Errors
    ///
    /// Returns `BrewError::InvalidInput` if either setting is not a positive
    /// finite number.
    pub fn new(coffee_grams: f64, ratio: f64) -> Result<Self> {
        let coffee_grams = validate_positive("coffee_grams", coffee_grams)?;
        let ratio = validate_positive("ratio", ratio)?;
        Ok(Self::empty(coffee_grams, ratio))
    }

    pub(crate) fn empty(coffee_grams: f64, ratio: f64) -> Self {
        Self {
            coffee_grams,
            ratio,
            steps: Vec::new(),
            next_id: 1,
        }
    }

    /// Builds a schedule from a recipe document, assigning fresh ids in
    /// document order.
    ///
    /// # Errors
    ///
    /// Returns `BrewError::InvalidInput` if the dose or ratio is not positive.
    pub fn from_recipe(recipe: &RecipeDocument) -> Result<Self> {
        let mut schedule = Self::new(recipe.coffee_grams, recipe.ratio)?;
        for step in &recipe.steps {
            schedule.push(
                step.kind,
                step.name.clone(),
                step.water,
                step.time,
                step.description.clone(),
            );
        }
        Ok(schedule)
    }

    /// Exports the schedule as a recipe document. Ids are dropped.
    pub fn to_recipe(&self) -> RecipeDocument {
        RecipeDocument {
            coffee_grams: self.coffee_grams,
            ratio: self.ratio,
            steps: self
                .steps
                .iter()
                .map(|step| crate::models::RecipeStep {
                    kind: step.kind,
                    name: step.name.clone(),
                    water: step.water,
                    time: step.time,
                    description: step.description.clone(),
                })
                .collect(),
        }
    }

    /// Dose of ground coffee, in grams.
    pub fn coffee_grams(&self) -> f64 {
        self.coffee_grams
    }

    /// Water-to-coffee multiplier.
    pub fn ratio(&self) -> f64 {
        self.ratio
    }

    /// Sets the coffee dose.
    ///
    /// # Errors
    ///
    /// Returns `BrewError::InvalidInput` for zero, negative or non-finite
    /// values; the schedule is left unchanged.
    pub fn set_coffee_grams(&mut self, grams: f64) -> Result<()> {
        self.coffee_grams = validate_positive("coffee_grams", grams)?;
        Ok(())
    }

    /// Sets the brew ratio.
    ///
    /// # Errors
    ///
    /// Returns `BrewError::InvalidInput` for zero, negative or non-finite
    /// values; the schedule is left unchanged.
    pub fn set_ratio(&mut self, ratio: f64) -> Result<()> {
        self.ratio = validate_positive("ratio", ratio)?;
        Ok(())
    }

    /// The steps in brewing order.
    pub fn steps(&self) -> &[Step] {
        &self.steps
    }

    /// Number of steps.
    pub fn len(&self) -> usize {
        self.steps.len()
    }

    /// True when the schedule has no steps.
    pub fn is_empty(&self) -> bool {
        self.steps.is_empty()
    }

    /// Looks a step up by id.
    pub fn get_step(&self, id: u64) -> Option<&Step> {
        self.steps.iter().find(|step| step.id == id)
    }

    /// Current index of the step with the given id.
    pub fn position(&self, id: u64) -> Option<usize> {
        self.steps.iter().position(|step| step.id == id)
    }

    /// Appends a step with a freshly generated id.
    ///
    /// Missing fields take the values of a new pour: kind `pour`, name
    /// `Pour N` where N is one more than the number of pour steps, 50 ml and
    /// 30 seconds.
    pub fn add_step(&mut self, params: &StepCreate) -> &Step {
        let kind = params.kind.unwrap_or_default();
        let name = params.name.clone().unwrap_or_else(|| self.next_pour_name());
        let water = params.water.unwrap_or(NEW_STEP_WATER);
        let time = params.time.unwrap_or(NEW_STEP_TIME);
        let description = params.description.clone().filter(|d| !d.is_empty());

        self.push(kind, name, water, time, description)
    }

    fn push(
        &mut self,
        kind: StepKind,
        name: String,
        water: u32,
        time: u32,
        description: Option<String>,
    ) -> &Step {
        let id = self.next_id;
        self.next_id += 1;
        log::debug!("Adding step {id} '{name}' ({water} ml, {time} s)");

        let index = self.steps.len();
        self.steps.push(Step {
            id,
            kind,
            name,
            water,
            time,
            description,
        });
        &self.steps[index]
    }

    fn next_pour_name(&self) -> String {
        let pours = self
            .steps
            .iter()
            .filter(|step| step.kind == StepKind::Pour)
            .count();
        format!("Pour {}", pours + 1)
    }

    /// Applies a partial update to the step with the given id.
    ///
    /// Returns the updated step, or `None` without touching anything when no
    /// step has that id.
    pub fn update_step(&mut self, params: &UpdateStep) -> Option<&Step> {
        let Some(step) = self.steps.iter_mut().find(|step| step.id == params.id) else {
            log::debug!("Update ignored, no step with id {}", params.id);
            return None;
        };

        if let Some(kind) = params.kind {
            step.kind = kind;
        }
        if let Some(name) = &params.name {
            step.name.clone_from(name);
        }
        if let Some(water) = params.water {
            step.water = water;
        }
        if let Some(time) = params.time {
            step.time = time;
        }
        if let Some(description) = &params.description {
            step.description = if description.is_empty() {
                None
            } else {
                Some(description.clone())
            };
        }

        Some(&*step)
    }

    /// Removes the step with the given id. Later steps shift down by one.
    ///
    /// Removing an id that is not present is a no-op and returns `None`.
    pub fn remove_step(&mut self, id: u64) -> Option<Step> {
        let index = self.position(id)?;
        let removed = self.steps.remove(index);
        log::debug!("Removed step {id} '{}'", removed.name);
        Some(removed)
    }
}

//! Recipe documents used to seed a schedule from a JSON file.

use serde::{Deserialize, Serialize};

use super::StepKind;

/// A whole recipe as read from disk. Steps carry no ids; the schedule assigns
/// fresh ones when the document is loaded.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct RecipeDocument {
    /// Dose of ground coffee, in grams
    pub coffee_grams: f64,
    /// Water-to-coffee multiplier
    pub ratio: f64,
    /// Pour schedule in brewing order
    #[serde(default)]
    pub steps: Vec<RecipeStep>,
}

/// One step of a [`RecipeDocument`].
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct RecipeStep {
    #[serde(default)]
    pub kind: StepKind,
    pub name: String,
    #[serde(default)]
    pub water: u32,
    #[serde(default)]
    pub time: u32,
    #[serde(default)]
    pub description: Option<String>,
}

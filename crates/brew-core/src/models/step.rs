//! Step model definition and related functionality.

use serde::{Deserialize, Serialize};

use super::StepKind;

/// Represents one segment of a brew: a volume of water poured over a span of
/// seconds.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Step {
    /// Unique identifier of the step within its schedule. Never used for
    /// ordering.
    pub id: u64,

    /// Bloom or pour; informational only
    #[serde(default)]
    pub kind: StepKind,

    /// Display label of the step
    pub name: String,

    /// Water poured during this step, in millilitres
    pub water: u32,

    /// Duration of the step, in seconds
    pub time: u32,

    /// Free-form note shown alongside the step
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

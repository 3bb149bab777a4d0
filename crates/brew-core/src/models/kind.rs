//! Step kind enumeration.

use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// Type-safe enumeration of step kinds.
///
/// The kind is a label for the user. The timer engine never looks at it.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum StepKind {
    /// Initial low-volume pour that saturates the grounds
    Bloom,

    /// Regular extraction pour
    #[default]
    Pour,
}

impl FromStr for StepKind {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "bloom" => Ok(StepKind::Bloom),
            "pour" => Ok(StepKind::Pour),
            _ => Err(format!("Invalid step kind: {s}")),
        }
    }
}

impl StepKind {
    /// String representation used in listings and recipe files.
    pub fn as_str(&self) -> &'static str {
        match self {
            StepKind::Bloom => "bloom",
            StepKind::Pour => "pour",
        }
    }
}

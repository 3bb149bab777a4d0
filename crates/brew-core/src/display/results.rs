//! Result wrapper types for displaying edit outcomes.
//!
//! This module provides wrapper types that format the results of adding,
//! editing and removing steps with consistent messaging.

use std::fmt;

use crate::{models::Step, params::UpdateStep};

/// Wrapper type for displaying the result of adding a step.
///
/// # Examples
///
/// ```rust
/// use brew_core::{display::CreateResult, Schedule, StepCreate};
///
/// let mut schedule = Schedule::default();
/// let step = schedule.add_step(&StepCreate::default()).clone();
///
/// let output = CreateResult::new(step).to_string();
/// assert!(output.starts_with("Added step with ID: 4"));
/// ```
pub struct CreateResult<T> {
    pub resource: T,
}

impl<T> CreateResult<T> {
    /// Create a new CreateResult wrapper.
    pub fn new(resource: T) -> Self {
        Self { resource }
    }
}

impl fmt::Display for CreateResult<Step> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Added step with ID: {}", self.resource.id)?;
        writeln!(f)?;
        write!(f, "{}", self.resource)
    }
}

/// Wrapper type for displaying the result of editing a step.
///
/// Lists the fields that were changed ahead of the updated step.
pub struct UpdateResult<T> {
    pub resource: T,
    pub changes: Vec<String>,
}

impl<T> UpdateResult<T> {
    /// Create a new UpdateResult wrapper.
    pub fn new(resource: T) -> Self {
        Self {
            resource,
            changes: Vec::new(),
        }
    }

    /// Create an UpdateResult with a list of changes made.
    pub fn with_changes(resource: T, changes: Vec<String>) -> Self {
        Self { resource, changes }
    }
}

impl UpdateResult<Step> {
    /// Describes every field `params` set, using the updated values.
    pub fn from_update(resource: Step, params: &UpdateStep) -> Self {
        let mut changes = Vec::new();
        if params.kind.is_some() {
            changes.push(format!("Kind set to {}", resource.kind));
        }
        if params.name.is_some() {
            changes.push(format!("Renamed to '{}'", resource.name));
        }
        if params.water.is_some() {
            changes.push(format!("Water set to {} ml", resource.water));
        }
        if params.time.is_some() {
            changes.push(format!("Time set to {} s", resource.time));
        }
        match (&params.description, &resource.description) {
            (None, _) => {}
            (Some(_), Some(_)) => changes.push("Updated description".to_string()),
            (Some(_), None) => changes.push("Cleared description".to_string()),
        }
        Self::with_changes(resource, changes)
    }
}

impl fmt::Display for UpdateResult<Step> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Updated step with ID: {}", self.resource.id)?;

        if !self.changes.is_empty() {
            writeln!(f)?;
            writeln!(f, "Changes made:")?;
            for change in &self.changes {
                writeln!(f, "- {change}")?;
            }
        }

        writeln!(f)?;
        write!(f, "{}", self.resource)
    }
}

/// Wrapper type for displaying the result of removing a step.
pub struct DeleteResult<T> {
    pub resource: T,
}

impl<T> DeleteResult<T> {
    /// Create a new DeleteResult wrapper.
    pub fn new(resource: T) -> Self {
        Self { resource }
    }
}

impl fmt::Display for DeleteResult<Step> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(
            f,
            "Removed step '{}' (ID: {})",
            self.resource.name, self.resource.id
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::StepKind;

    fn step() -> Step {
        Step {
            id: 2,
            kind: StepKind::Pour,
            name: "Center pour".to_string(),
            water: 100,
            time: 30,
            description: None,
        }
    }

    #[test]
    fn test_update_result_lists_changes() {
        let params = UpdateStep {
            id: 2,
            name: Some("Center pour".to_string()),
            water: Some(100),
            description: Some(String::new()),
            ..Default::default()
        };
        let output = UpdateResult::from_update(step(), &params).to_string();
        assert!(output.starts_with("Updated step with ID: 2"));
        assert!(output.contains("- Renamed to 'Center pour'"));
        assert!(output.contains("- Water set to 100 ml"));
        assert!(output.contains("- Cleared description"));
        assert!(!output.contains("Time set"));
    }

    #[test]
    fn test_update_result_without_changes() {
        let output = UpdateResult::new(step()).to_string();
        assert!(!output.contains("Changes made:"));
    }

    #[test]
    fn test_delete_result() {
        let output = DeleteResult::new(step()).to_string();
        assert_eq!(output, "Removed step 'Center pour' (ID: 2)\n");
    }
}

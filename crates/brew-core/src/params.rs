//! Parameter structures for brew operations
//!
//! These structures carry requests from an interface (the terminal builder,
//! recipe files, tests) into the schedule model without pulling any framework
//! derives into the core. Interfaces wrap them in their own argument types
//! and convert with `From`.
//!
//! ```text
//! ┌─────────────────┐    ┌─────────────────┐    ┌─────────────────┐
//! │   CLI Args      │    │  Core Params    │    │    Schedule     │
//! │  (clap derives) │───▶│ (minimal deps)  │───▶│   (in memory)   │
//! └─────────────────┘    └─────────────────┘    └─────────────────┘
//! ```
//!
//! The module also owns the numeric boundary of the editing surface: every
//! water amount and duration typed by a user goes through [`parse_water`] or
//! [`parse_seconds`] before it can reach a [`crate::Schedule`].

use serde::{Deserialize, Serialize};

use crate::{error::BrewError, models::StepKind, Result};

/// Generic parameters for operations requiring just a step id.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize)]
pub struct Id {
    /// The id of the step to operate on
    pub id: u64,
}

/// Parameters for appending a new step.
///
/// Every field is optional; missing fields take the values of a fresh pour
/// (see [`crate::Schedule::add_step`]).
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct StepCreate {
    /// Bloom or pour, defaults to pour
    pub kind: Option<StepKind>,
    /// Display label, defaults to `Pour N`
    pub name: Option<String>,
    /// Water in millilitres, defaults to 50
    pub water: Option<u32>,
    /// Duration in seconds, defaults to 30
    pub time: Option<u32>,
    /// Optional free text
    pub description: Option<String>,
}

/// Partial update of an existing step.
///
/// `None` leaves a field untouched. An empty description string clears the
/// description.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct UpdateStep {
    /// Step id to update (required)
    pub id: u64,
    pub kind: Option<StepKind>,
    pub name: Option<String>,
    pub water: Option<u32>,
    pub time: Option<u32>,
    pub description: Option<String>,
}

impl UpdateStep {
    /// True when the update would not change anything.
    pub fn is_empty(&self) -> bool {
        self.kind.is_none()
            && self.name.is_none()
            && self.water.is_none()
            && self.time.is_none()
            && self.description.is_none()
    }
}

/// Parses a water amount typed by the user.
///
/// Empty input coerces to 0, negative values clamp to 0 and fractions round
/// to the nearest millilitre. Anything that is not a number is rejected.
///
/// # Examples
///
/// ```rust
/// use brew_core::params::parse_water;
///
/// assert_eq!(parse_water("90").unwrap(), 90);
/// assert_eq!(parse_water("").unwrap(), 0);
/// assert_eq!(parse_water("-4").unwrap(), 0);
/// assert!(parse_water("lots").is_err());
/// ```
pub fn parse_water(input: &str) -> Result<u32> {
    parse_non_negative("water", input)
}

/// Parses a step duration in seconds, with the same coercion rules as
/// [`parse_water`].
pub fn parse_seconds(input: &str) -> Result<u32> {
    parse_non_negative("time", input)
}

fn parse_non_negative(field: &str, input: &str) -> Result<u32> {
    let trimmed = input.trim();
    if trimmed.is_empty() {
        return Ok(0);
    }

    let value: f64 = trimmed.parse().map_err(|_| {
        BrewError::invalid_input(field).with_reason(format!("not a number: {trimmed}"))
    })?;

    if !value.is_finite() {
        return Err(BrewError::invalid_input(field).with_reason("must be a finite number"));
    }
    if value <= 0.0 {
        return Ok(0);
    }

    let rounded = value.round();
    if rounded > f64::from(u32::MAX) {
        return Err(BrewError::invalid_input(field).with_reason(format!("too large: {trimmed}")));
    }
    Ok(rounded as u32)
}

/// Parses a positive setting such as the coffee dose or the brew ratio.
pub fn parse_positive(field: &str, input: &str) -> Result<f64> {
    let trimmed = input.trim();
    let value: f64 = trimmed.parse().map_err(|_| {
        BrewError::invalid_input(field).with_reason(format!("not a number: {trimmed}"))
    })?;
    validate_positive(field, value)
}

/// Rejects zero, negative and non-finite settings.
pub fn validate_positive(field: &str, value: f64) -> Result<f64> {
    if value.is_finite() && value > 0.0 {
        Ok(value)
    } else {
        Err(BrewError::invalid_input(field).with_reason(format!("must be positive, got {value}")))
    }
}

/// Parses a cue volume, which must lie in `[0, 1]`.
pub fn parse_volume(input: &str) -> Result<f32> {
    let trimmed = input.trim();
    let value: f32 = trimmed.parse().map_err(|_| {
        BrewError::invalid_input("volume").with_reason(format!("not a number: {trimmed}"))
    })?;
    validate_volume(value)
}

/// Rejects volumes outside `[0, 1]`.
pub fn validate_volume(value: f32) -> Result<f32> {
    if (0.0..=1.0).contains(&value) {
        Ok(value)
    } else {
        Err(BrewError::invalid_input("volume")
            .with_reason(format!("must be between 0 and 1, got {value}")))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_water_plain_number() {
        assert_eq!(parse_water("120").unwrap(), 120);
        assert_eq!(parse_water("  45 ").unwrap(), 45);
    }

    #[test]
    fn test_parse_water_empty_coerces_to_zero() {
        assert_eq!(parse_water("").unwrap(), 0);
        assert_eq!(parse_water("   ").unwrap(), 0);
    }

    #[test]
    fn test_parse_water_negative_clamps_to_zero() {
        assert_eq!(parse_water("-30").unwrap(), 0);
    }

    #[test]
    fn test_parse_water_rounds_fractions() {
        assert_eq!(parse_water("30.4").unwrap(), 30);
        assert_eq!(parse_water("30.5").unwrap(), 31);
    }

    #[test]
    fn test_parse_water_rejects_text() {
        let err = parse_water("abc").unwrap_err();
        match err {
            BrewError::InvalidInput { field, reason } => {
                assert_eq!(field, "water");
                assert!(reason.contains("abc"));
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn test_parse_seconds_rejects_infinity_and_nan() {
        assert!(parse_seconds("inf").is_err());
        assert!(parse_seconds("NaN").is_err());
    }

    #[test]
    fn test_parse_seconds_rejects_overflow() {
        assert!(parse_seconds("1e12").is_err());
    }

    #[test]
    fn test_parse_positive() {
        assert_eq!(parse_positive("grams", "15").unwrap(), 15.0);
        assert_eq!(parse_positive("ratio", "16.5").unwrap(), 16.5);
        assert!(parse_positive("ratio", "0").is_err());
        assert!(parse_positive("ratio", "-1").is_err());
        assert!(parse_positive("ratio", "x").is_err());
    }

    #[test]
    fn test_parse_volume_bounds() {
        assert_eq!(parse_volume("0").unwrap(), 0.0);
        assert_eq!(parse_volume("1").unwrap(), 1.0);
        assert_eq!(parse_volume("0.25").unwrap(), 0.25);
        assert!(parse_volume("1.5").is_err());
        assert!(parse_volume("-0.1").is_err());
    }

    #[test]
    fn test_update_step_is_empty() {
        let update = UpdateStep {
            id: 3,
            ..Default::default()
        };
        assert!(update.is_empty());

        let update = UpdateStep {
            id: 3,
            time: Some(0),
            ..Default::default()
        };
        assert!(!update.is_empty());
    }
}

//! Display implementations for domain types.
//!
//! Listings are markdown so the terminal renderer can style them; status
//! lines are plain text meant to be reprinted every second.

use std::fmt;

use super::duration::MinSec;
use crate::{
    models::{Aggregates, Step, StepKind},
    timer::{Phase, TimerSnapshot},
    Schedule,
};

/// Width of the text progress bar in a timer status line.
const PROGRESS_BAR_WIDTH: usize = 10;

impl fmt::Display for StepKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl fmt::Display for Phase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl fmt::Display for Step {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "### {}. {} ({})", self.id, self.name, self.kind)?;
        writeln!(f)?;
        writeln!(f, "- Water: {} ml", self.water)?;
        writeln!(f, "- Time: {} s", self.time)?;

        if let Some(desc) = &self.description {
            writeln!(f)?;
            writeln!(f, "{desc}")?;
        }
        writeln!(f)
    }
}

impl fmt::Display for Aggregates {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "- Target water: {} ml", self.target_water)?;
        write!(
            f,
            "- Scheduled: {} ml ({:.0}%)",
            self.total_water_scheduled,
            self.water_fill() * 100.0
        )?;
        if self.is_overfilled() {
            write!(
                f,
                " **over by {} ml**",
                self.total_water_scheduled - self.target_water
            )?;
        }
        writeln!(f)?;
        writeln!(f, "- Total time: {}", MinSec(self.total_time_scheduled))
    }
}

impl fmt::Display for Schedule {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "# Recipe")?;
        writeln!(f)?;
        writeln!(f, "- Coffee: {} g", self.coffee_grams())?;
        writeln!(f, "- Ratio: 1:{}", self.ratio())?;
        write!(f, "{}", self.aggregates())?;

        if self.is_empty() {
            writeln!(f, "\nNo steps in this recipe.")?;
            return Ok(());
        }

        writeln!(f, "\n## Steps")?;
        writeln!(f)?;
        for (index, step) in self.steps().iter().enumerate() {
            // Position in the sequence, then the stable id used by edit/remove.
            write!(
                f,
                "{}. `#{}` **{}** ({}): {} ml, {} s",
                index + 1,
                step.id,
                step.name,
                step.kind,
                step.water,
                step.time
            )?;
            writeln!(
                f,
                " (to {} ml by {})",
                self.cumulative_water_through(index),
                MinSec(self.cumulative_time_through(index))
            )?;
            if let Some(desc) = &step.description {
                writeln!(f, "   *{desc}*")?;
            }
        }
        Ok(())
    }
}

/// Text bar such as `[####------]` for a fraction in `[0, 1]`.
fn progress_bar(fraction: f64) -> String {
    let filled = (fraction.clamp(0.0, 1.0) * PROGRESS_BAR_WIDTH as f64).round() as usize;
    format!(
        "[{}{}]",
        "#".repeat(filled),
        "-".repeat(PROGRESS_BAR_WIDTH - filled)
    )
}

impl fmt::Display for TimerSnapshot {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}] {} ", self.phase, progress_bar(self.progress_fraction))?;

        if self.in_preparation() {
            write!(f, "Get ready: {} s", self.countdown_seconds)?;
        } else if self.is_finished() {
            write!(
                f,
                "Done! {} ml in {}",
                self.target_pour,
                MinSec(self.elapsed_brew_seconds)
            )?;
        } else if let Some(step) = &self.active_step {
            write!(
                f,
                "Step {}/{} {}: {} s left, pour to {} ml ({} ml) | Total {}",
                self.active_step_index + 1,
                self.step_count,
                step.name,
                self.remaining_seconds,
                self.target_pour,
                step.water,
                MinSec(self.elapsed_brew_seconds)
            )?;
        } else {
            write!(f, "No steps")?;
        }

        if self.volume == 0.0 {
            write!(f, " | muted")
        } else {
            write!(f, " | vol {:.0}%", self.volume * 100.0)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{cue::SilentEmitter, params::StepCreate, timer::TimerEngine};

    #[test]
    fn test_step_display() {
        let step = Step {
            id: 3,
            kind: StepKind::Bloom,
            name: "Bloom".to_string(),
            water: 30,
            time: 30,
            description: Some("Wet everything".to_string()),
        };
        let output = step.to_string();
        assert!(output.starts_with("### 3. Bloom (bloom)"));
        assert!(output.contains("- Water: 30 ml"));
        assert!(output.contains("Wet everything"));
    }

    #[test]
    fn test_schedule_listing_shows_end_water_and_totals() {
        let output = Schedule::default().to_string();
        assert!(output.contains("- Coffee: 15 g"));
        assert!(output.contains("- Ratio: 1:16"));
        assert!(output.contains("- Target water: 240 ml"));
        assert!(output.contains("- Scheduled: 240 ml (100%)"));
        assert!(output.contains("- Total time: 1:45"));
        assert!(output.contains("**Pour 1** (pour): 90 ml, 30 s (to 120 ml by 1:00)"));
        assert!(output.contains("(to 240 ml by 1:45)"));
        assert!(!output.contains("over by"));
    }

    #[test]
    fn test_schedule_listing_flags_overfill() {
        let mut schedule = Schedule::default();
        schedule.add_step(&StepCreate::default());
        let output = schedule.to_string();
        assert!(output.contains("- Scheduled: 290 ml (100%) **over by 50 ml**"));
    }

    #[test]
    fn test_empty_schedule_listing() {
        let schedule = Schedule::new(10.0, 15.0).unwrap();
        let output = schedule.to_string();
        assert!(output.contains("- Target water: 150 ml"));
        assert!(output.contains("No steps in this recipe."));
    }

    #[test]
    fn test_progress_bar() {
        assert_eq!(progress_bar(0.0), "[----------]");
        assert_eq!(progress_bar(0.5), "[#####-----]");
        assert_eq!(progress_bar(1.0), "[##########]");
        assert_eq!(progress_bar(7.0), "[##########]");
    }

    #[test]
    fn test_status_line_during_preparation() {
        let mut engine = TimerEngine::new(Schedule::default(), SilentEmitter);
        engine.start();
        engine.tick();
        let line = engine.snapshot().to_string();
        assert!(line.starts_with("[preparing] [#---------] Get ready: 9 s"));
        assert!(line.ends_with("| vol 80%"));
    }

    #[test]
    fn test_status_line_while_running() {
        let mut engine = TimerEngine::new(Schedule::default(), SilentEmitter);
        engine.skip_preparation();
        for _ in 0..35 {
            engine.tick();
        }
        let line = engine.snapshot().to_string();
        assert!(line.contains(
            "Step 2/3 Pour 1: 25 s left, pour to 120 ml (90 ml) | Total 0:35"
        ));
    }

    #[test]
    fn test_status_line_when_finished_and_muted() {
        let mut engine = TimerEngine::new(Schedule::default(), SilentEmitter);
        engine.toggle_mute();
        engine.skip_preparation();
        for _ in 0..105 {
            engine.tick();
        }
        let line = engine.snapshot().to_string();
        assert!(line.starts_with("[finished] [##########] Done! 240 ml in 1:45"));
        assert!(line.ends_with("| muted"));
    }
}

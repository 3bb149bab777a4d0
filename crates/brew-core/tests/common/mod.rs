use brew_core::{params::StepCreate, Schedule};

/// Builds a schedule at 15 g / 1:16 from `(water, time)` pairs.
pub fn schedule_of(steps: &[(u32, u32)]) -> Schedule {
    let mut schedule = Schedule::new(15.0, 16.0).expect("valid settings");
    for &(water, time) in steps {
        schedule.add_step(&StepCreate {
            water: Some(water),
            time: Some(time),
            ..Default::default()
        });
    }
    schedule
}

/// The three-step schedule used throughout: 30/30, 90/30, 120/45.
#[allow(dead_code)]
pub fn three_step_schedule() -> Schedule {
    schedule_of(&[(30, 30), (90, 30), (120, 45)])
}

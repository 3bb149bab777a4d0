mod common;

use std::fs;

use brew_core::{
    cue::{Cue, RecordingEmitter},
    timer::Phase,
    Schedule, SessionBuilder, StepCreate, TimerEngine, UpdateStep,
};
use common::{schedule_of, three_step_schedule};
use tempfile::TempDir;

/// Ticks until the engine stops, collecting every cue.
fn brew_to_end(engine: &mut TimerEngine<&RecordingEmitter>) -> Vec<Cue> {
    let mut cues = Vec::new();
    while engine.is_ticking() {
        cues.extend(engine.tick());
    }
    cues
}

#[test]
fn test_default_recipe_full_brew() {
    let emitter = RecordingEmitter::new();
    let mut engine = TimerEngine::new(Schedule::default(), &emitter);

    let mut cues = engine.start();
    cues.extend(brew_to_end(&mut engine));

    assert_eq!(engine.phase(), Phase::Finished);
    assert_eq!(engine.elapsed(), 105);
    assert_eq!(engine.target_pour(), 240);
    assert_eq!(engine.progress(), 1.0);

    let count = |cue: Cue| cues.iter().filter(|&&c| c == cue).count();
    // Ten during preparation, ten before the end of each step.
    assert_eq!(count(Cue::PreCue), 40);
    assert_eq!(count(Cue::Start), 1);
    assert_eq!(count(Cue::StepTransition), 2);
    assert_eq!(count(Cue::Finished), 1);
    assert_eq!(cues.last(), Some(&Cue::Finished));
    assert_eq!(emitter.calls().len(), cues.len());
}

#[test]
fn test_edits_after_session_start_do_not_reach_it() {
    let mut schedule = three_step_schedule();
    let emitter = RecordingEmitter::new();
    let mut engine = TimerEngine::new(schedule.clone(), &emitter);
    engine.skip_preparation();

    let first = schedule.steps()[0].id;
    schedule.update_step(&UpdateStep {
        id: first,
        time: Some(5),
        ..Default::default()
    });
    schedule.add_step(&StepCreate::default());

    brew_to_end(&mut engine);
    assert_eq!(engine.elapsed(), 105);
    assert_eq!(engine.schedule().len(), 3);
}

#[test]
fn test_schedule_of_only_zero_length_steps() {
    let emitter = RecordingEmitter::new();
    let mut engine = TimerEngine::new(schedule_of(&[(50, 0), (50, 0)]), &emitter);

    let cues = engine.skip_preparation();
    assert_eq!(cues, vec![Cue::Start, Cue::Finished]);
    assert_eq!(engine.phase(), Phase::Finished);
    assert_eq!(engine.progress(), 0.0);
    assert_eq!(engine.target_pour(), 100);
}

#[test]
fn test_session_from_recipe_file_brews() {
    let dir = TempDir::new().unwrap();
    let config = dir.path().join("config.json");
    fs::write(&config, r#"{"volume": 0.4, "preparation_cues": false}"#).unwrap();
    let recipe = dir.path().join("recipe.json");
    fs::write(
        &recipe,
        r#"{"coffee_grams": 10, "ratio": 10, "steps": [{"name": "All in", "water": 100, "time": 3}]}"#,
    )
    .unwrap();

    let session = SessionBuilder::new()
        .with_config_path(Some(&config))
        .with_recipe_path(Some(&recipe))
        .build()
        .unwrap();

    let emitter = RecordingEmitter::new();
    let mut engine = session.timer(&emitter);
    let mut cues = engine.start();
    cues.extend(brew_to_end(&mut engine));

    assert_eq!(
        cues,
        vec![Cue::Start, Cue::PreCue, Cue::PreCue, Cue::Finished]
    );
    assert!(emitter.calls().iter().all(|&(_, volume)| volume == 0.4));
}

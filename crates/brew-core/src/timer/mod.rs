//! The brew timer engine.
//!
//! A [`TimerEngine`] is a single-threaded state machine advanced by one call
//! to [`TimerEngine::tick`] per second while it is preparing or running. It
//! owns its own copy of the [`Schedule`] taken when the session was created;
//! edits made to the builder's schedule afterwards do not reach a running
//! session, and the engine never mutates steps.
//!
//! Every tick it:
//!
//! 1. advances either the preparation countdown or the elapsed brew time,
//! 2. resolves the active step with a linear scan of the schedule
//!    ([`Schedule::step_index_at`]),
//! 3. decides which cues fire and hands their tones to the [`ToneEmitter`].
//!
//! The scan is O(steps) per tick. Schedules hold a handful of steps, so this
//! stays a plain scan rather than an interval index.
//!
//! # Cue rules
//!
//! - Preparation: a pre-cue for each displayed countdown value from 10 down
//!   to 1 (the first one when preparation begins), then a start cue when
//!   the countdown reaches 0.
//! - Running: after advancing, if the step that was active before the tick
//!   ended exactly now, a step-transition cue fires, followed by a pre-cue
//!   if the newly active step has between 1 and 10 seconds left. When the
//!   last step ends only the finished cue fires.
//! - Zero-length steps are never active, so they never get a cue of their
//!   own.
//!
//! The async driver that feeds ticks and commands lives in [`driver`].

pub mod driver;
pub mod phase;
pub mod snapshot;


use log::{debug, info};

use crate::{
    cue::{Cue, ToneEmitter},
    Schedule,
};

pub use driver::{run_timer, TimerCommand, TimerExit};
pub use phase::Phase;
pub use snapshot::TimerSnapshot;

/// Length of the preparation countdown, in seconds.
pub const PREPARATION_SECONDS: u32 = 10;

/// Pre-cues fire while this many seconds or fewer remain.
pub const PRE_CUE_WINDOW: u32 = 10;

/// Default cue volume.
pub const DEFAULT_VOLUME: f32 = 0.8;

/// Timer session state plus the emitter its cues go to.
pub struct TimerEngine<E> {
    schedule: Schedule,
    emitter: E,
    phase: Phase,
    elapsed: u32,
    countdown: u32,
    active: usize,
    volume: f32,
    unmuted_volume: Option<f32>,
    preparation_cues: bool,
}

impl<E: ToneEmitter> TimerEngine<E> {
    /// Starts a fresh session over a snapshot of `schedule`.
    pub fn new(schedule: Schedule, emitter: E) -> Self {
        Self {
            schedule,
            emitter,
            phase: Phase::Idle,
            elapsed: 0,
            countdown: PREPARATION_SECONDS,
            active: 0,
            volume: DEFAULT_VOLUME,
            unmuted_volume: None,
            preparation_cues: true,
        }
    }

    /// Sets the initial cue volume, clamped to `[0, 1]`.
    pub fn with_volume(mut self, volume: f32) -> Self {
        self.set_volume(volume);
        self
    }

    /// Starts the session muted. [`Self::toggle_mute`] brings the volume back.
    pub fn with_muted(mut self, muted: bool) -> Self {
        if muted && !self.is_muted() {
            self.toggle_mute();
        }
        self
    }

    /// Turns the preparation countdown pre-cues on or off. The start cue
    /// always fires.
    pub fn with_preparation_cues(mut self, enabled: bool) -> Self {
        self.preparation_cues = enabled;
        self
    }

    pub fn schedule(&self) -> &Schedule {
        &self.schedule
    }

    pub fn emitter(&self) -> &E {
        &self.emitter
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    pub fn elapsed(&self) -> u32 {
        self.elapsed
    }

    pub fn countdown(&self) -> u32 {
        self.countdown
    }

    /// Index of the active step, or the step count once finished.
    pub fn active_step_index(&self) -> usize {
        self.active
    }

    pub fn volume(&self) -> f32 {
        self.volume
    }

    /// True while the one-second clock should be driving [`Self::tick`].
    pub fn is_ticking(&self) -> bool {
        self.phase.is_ticking()
    }

    /// Starts the session or resumes it from a pause.
    ///
    /// From `Idle` this enters the preparation countdown. Resuming returns to
    /// preparing or running depending on whether the countdown had finished.
    /// Starting a session that is already ticking or finished does nothing.
    pub fn start(&mut self) -> Vec<Cue> {
        let mut cues = Vec::new();
        match self.phase {
            Phase::Idle => {
                if self.countdown > 0 {
                    info!("Preparation started ({} s)", self.countdown);
                    self.phase = Phase::Preparing;
                    if self.preparation_cues && self.countdown <= PRE_CUE_WINDOW {
                        self.emit(Cue::PreCue, &mut cues);
                    }
                } else {
                    self.enter_running(&mut cues);
                }
            }
            Phase::Paused => {
                self.phase = if self.countdown > 0 {
                    Phase::Preparing
                } else {
                    Phase::Running
                };
                info!("Resumed ({})", self.phase.as_str());
            }
            Phase::Preparing | Phase::Running | Phase::Finished => {}
        }
        cues
    }

    /// Stops the clock without touching any counter.
    pub fn pause(&mut self) {
        if self.phase.is_ticking() {
            info!(
                "Paused at {} s elapsed, countdown {}",
                self.elapsed, self.countdown
            );
            self.phase = Phase::Paused;
        }
    }

    /// The single play/pause control: pauses while ticking, otherwise starts.
    pub fn toggle(&mut self) -> Vec<Cue> {
        if self.phase.is_ticking() {
            self.pause();
            Vec::new()
        } else {
            self.start()
        }
    }

    /// Drops the rest of the preparation countdown and starts brew time now.
    ///
    /// Only meaningful before brew time has started; otherwise does nothing.
    pub fn skip_preparation(&mut self) -> Vec<Cue> {
        let mut cues = Vec::new();
        let before_brew = match self.phase {
            Phase::Idle | Phase::Preparing => true,
            Phase::Paused => self.countdown > 0,
            Phase::Running | Phase::Finished => false,
        };
        if before_brew {
            info!("Preparation skipped with {} s left", self.countdown);
            self.enter_running(&mut cues);
        }
        cues
    }

    /// Returns the session to its pre-start state. Volume is kept.
    pub fn reset(&mut self) {
        if self.phase != Phase::Idle || self.elapsed != 0 {
            info!("Timer reset");
        }
        self.phase = Phase::Idle;
        self.elapsed = 0;
        self.countdown = PREPARATION_SECONDS;
        self.active = 0;
    }

    /// Sets the cue volume, clamped to `[0, 1]`. NaN mutes.
    pub fn set_volume(&mut self, volume: f32) {
        self.volume = if volume.is_nan() {
            0.0
        } else {
            volume.clamp(0.0, 1.0)
        };
        self.unmuted_volume = None;
    }

    /// Mutes, or restores the volume that was set before muting. Unmuting a
    /// session that was already silent restores [`DEFAULT_VOLUME`].
    pub fn toggle_mute(&mut self) {
        match self.unmuted_volume.take() {
            Some(previous) if previous > 0.0 => self.volume = previous,
            Some(_) => self.volume = DEFAULT_VOLUME,
            None => {
                self.unmuted_volume = Some(self.volume);
                self.volume = 0.0;
            }
        }
    }

    /// True after [`Self::toggle_mute`] silenced the cues.
    pub fn is_muted(&self) -> bool {
        self.unmuted_volume.is_some()
    }

    /// Advances the session by one second and returns the cues emitted, in
    /// order. Does nothing unless preparing or running.
    pub fn tick(&mut self) -> Vec<Cue> {
        let mut cues = Vec::new();
        match self.phase {
            Phase::Preparing => self.tick_preparation(&mut cues),
            Phase::Running => self.tick_running(&mut cues),
            Phase::Idle | Phase::Paused | Phase::Finished => {}
        }
        cues
    }

    fn tick_preparation(&mut self, cues: &mut Vec<Cue>) {
        self.countdown = self.countdown.saturating_sub(1);
        debug!("Preparation countdown {}", self.countdown);

        if self.countdown == 0 {
            self.enter_running(cues);
        } else if self.preparation_cues && self.countdown <= PRE_CUE_WINDOW {
            self.emit(Cue::PreCue, cues);
        }
    }

    fn tick_running(&mut self, cues: &mut Vec<Cue>) {
        let previous = self.active;
        self.elapsed = self.elapsed.saturating_add(1);

        let Some(index) = self.schedule.step_index_at(self.elapsed) else {
            self.finish(cues);
            return;
        };

        // The previous step covered elapsed - 1, so a new index means it
        // ended exactly now.
        if index != previous {
            debug!(
                "Step {} ended at {} s, step {} active",
                previous, self.elapsed, index
            );
            self.active = index;
            self.emit(Cue::StepTransition, cues);
        }

        let remaining = self.remaining_seconds();
        debug!(
            "Elapsed {} s, step {} has {} s left",
            self.elapsed, self.active, remaining
        );
        if remaining > 0 && remaining <= PRE_CUE_WINDOW {
            self.emit(Cue::PreCue, cues);
        }
    }

    fn enter_running(&mut self, cues: &mut Vec<Cue>) {
        self.countdown = 0;
        self.phase = Phase::Running;
        info!("Brew started");
        self.emit(Cue::Start, cues);

        // An empty or all-zero schedule is over before the first tick.
        match self.schedule.step_index_at(self.elapsed) {
            Some(index) => self.active = index,
            None => self.finish(cues),
        }
    }

    fn finish(&mut self, cues: &mut Vec<Cue>) {
        self.active = self.schedule.len();
        self.phase = Phase::Finished;
        info!("Brew finished at {} s", self.elapsed);
        self.emit(Cue::Finished, cues);
    }

    fn emit(&self, cue: Cue, cues: &mut Vec<Cue>) {
        debug!("Cue {cue} at volume {:.2}", self.volume);
        self.emitter.emit_tone(cue.tone(), self.volume);
        cues.push(cue);
    }

    /// Seconds left in the active step; 0 once finished.
    pub fn remaining_seconds(&self) -> u32 {
        if self.active >= self.schedule.len() {
            return 0;
        }
        self.schedule
            .cumulative_time_through(self.active)
            .saturating_sub(self.elapsed)
    }

    /// Cumulative water the user should have poured by the end of the active
    /// step. Once finished this is the schedule's total water.
    pub fn target_pour(&self) -> u32 {
        self.schedule.cumulative_water_through(self.active)
    }

    /// Progress fraction for the countdown ring, in `[0, 1]`.
    ///
    /// During preparation this is the share of the countdown already spent.
    /// During brew time it is the share of the active step already spent; a
    /// zero-length step reports 0 instead of dividing by zero. A finished
    /// session reports 1, or 0 if the schedule had no brew time at all.
    pub fn progress(&self) -> f64 {
        match self.phase {
            Phase::Idle => 0.0,
            Phase::Finished => {
                if self.schedule.total_time() > 0 {
                    1.0
                } else {
                    0.0
                }
            }
            Phase::Preparing | Phase::Paused if self.countdown > 0 => {
                let spent = PREPARATION_SECONDS.saturating_sub(self.countdown);
                (f64::from(spent) / f64::from(PREPARATION_SECONDS)).clamp(0.0, 1.0)
            }
            Phase::Preparing | Phase::Running | Phase::Paused => {
                let Some(step) = self.schedule.steps().get(self.active) else {
                    return 0.0;
                };
                if step.time == 0 {
                    return 0.0;
                }
                let spent = step.time.saturating_sub(self.remaining_seconds());
                (f64::from(spent) / f64::from(step.time)).clamp(0.0, 1.0)
            }
        }
    }

    /// Captures everything the presentation layer displays.
    pub fn snapshot(&self) -> TimerSnapshot {
        TimerSnapshot {
            phase: self.phase,
            elapsed_brew_seconds: self.elapsed,
            countdown_seconds: self.countdown,
            active_step_index: self.active,
            step_count: self.schedule.len(),
            progress_fraction: self.progress(),
            remaining_seconds: self.remaining_seconds(),
            target_pour: self.target_pour(),
            volume: self.volume,
            active_step: self.schedule.steps().get(self.active).cloned(),
        }
    }
}

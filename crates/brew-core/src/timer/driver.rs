//! Async driver pairing a one-second clock with user commands.
//!
//! [`run_timer`] is the only place a timer session is mutated. It runs on
//! whatever task awaits it, selects between the tick interval and the command
//! channel, and returns when the user leaves timer mode or the command sender
//! goes away. The interval lives inside the call, so returning stops the
//! clock; no tick can outlive the session.

use std::time::Duration;

use log::{debug, info};
use tokio::{
    sync::mpsc,
    time::{self, Instant, MissedTickBehavior},
};

use super::{TimerEngine, TimerSnapshot};
use crate::cue::{Cue, ToneEmitter};

/// Cadence of the brew clock.
pub const TICK_INTERVAL: Duration = Duration::from_secs(1);

/// Commands the timer view sends to a running session.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum TimerCommand {
    Start,
    Pause,
    /// Play/pause button
    Toggle,
    Reset,
    SkipPreparation,
    SetVolume(f32),
    ToggleMute,
    /// Leave timer mode
    Leave,
}

/// Why [`run_timer`] returned.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TimerExit {
    /// The user asked to leave timer mode
    Left,
    /// Every command sender was dropped
    Disconnected,
}

/// Drives `engine` until the user leaves.
///
/// `on_update` is called once up front, after every tick, and after every
/// command, with the fresh snapshot and the cues emitted by that step.
/// Ticks only happen while the engine is preparing or running. Starting or
/// resuming restarts the interval, so the first tick lands one full second
/// after the command.
pub async fn run_timer<E, F>(
    engine: &mut TimerEngine<E>,
    commands: &mut mpsc::Receiver<TimerCommand>,
    mut on_update: F,
) -> TimerExit
where
    E: ToneEmitter,
    F: FnMut(&TimerSnapshot, &[Cue]),
{
    let mut ticker = time::interval_at(Instant::now() + TICK_INTERVAL, TICK_INTERVAL);
    ticker.set_missed_tick_behavior(MissedTickBehavior::Delay);

    info!("Timer session opened");
    on_update(&engine.snapshot(), &[]);

    loop {
        tokio::select! {
            command = commands.recv() => {
                let Some(command) = command else {
                    info!("Timer command channel closed");
                    return TimerExit::Disconnected;
                };
                debug!("Timer command {command:?}");

                let was_ticking = engine.is_ticking();
                let cues = match command {
                    TimerCommand::Start => engine.start(),
                    TimerCommand::Pause => {
                        engine.pause();
                        Vec::new()
                    }
                    TimerCommand::Toggle => engine.toggle(),
                    TimerCommand::Reset => {
                        engine.reset();
                        Vec::new()
                    }
                    TimerCommand::SkipPreparation => engine.skip_preparation(),
                    TimerCommand::SetVolume(volume) => {
                        engine.set_volume(volume);
                        Vec::new()
                    }
                    TimerCommand::ToggleMute => {
                        engine.toggle_mute();
                        Vec::new()
                    }
                    TimerCommand::Leave => {
                        info!("Leaving timer mode");
                        return TimerExit::Left;
                    }
                };

                if engine.is_ticking() && !was_ticking {
                    ticker.reset();
                }
                on_update(&engine.snapshot(), &cues);
            }
            _ = ticker.tick(), if engine.is_ticking() => {
                let cues = engine.tick();
                on_update(&engine.snapshot(), &cues);
            }
        }
    }
}

//! Timer mode: keyboard commands in, one status line per second out.
//!
//! Input lines are read on the same task as the timer loop. Both run inside
//! one `select!`; whichever side finishes first decides the outcome, and the
//! timer's interval is dropped with it, so nothing keeps ticking once the
//! user is back in the builder.

use anyhow::{Context, Result};
use brew_core::{
    params::parse_volume, run_timer, Cue, Session, TimerCommand, TimerExit, ToneEmitter,
};
use log::{debug, info, warn};
use tokio::{
    io::{AsyncBufRead, Lines},
    signal,
    sync::mpsc,
};

use crate::renderer::TerminalRenderer;

pub const TIMER_HELP: &str = "\
Timer keys (press Enter after each):
  <Enter> or p   start / pause
  s              skip the preparation countdown
  r              reset
  v <0..1>       set volume
  m              mute / unmute
  q              back to the recipe
";

/// How a timer session ended, from the caller's point of view.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TimerOutcome {
    /// The user asked to go back to the builder
    Back,
    /// Standard input closed
    EndOfInput,
    /// Ctrl-C
    Interrupted,
}

/// Parses one line typed in timer mode.
pub fn parse_timer_line(line: &str) -> Result<TimerCommand, String> {
    let mut words = line.split_whitespace();
    let command = match words.next() {
        None | Some("p") => TimerCommand::Toggle,
        Some("s") => TimerCommand::SkipPreparation,
        Some("r") => TimerCommand::Reset,
        Some("m") => TimerCommand::ToggleMute,
        Some("q") => TimerCommand::Leave,
        Some("v") => {
            let value = words
                .next()
                .ok_or_else(|| "usage: v <0..1>".to_string())?;
            let volume = parse_volume(value).map_err(|e| e.to_string())?;
            TimerCommand::SetVolume(volume)
        }
        Some(other) => return Err(format!("unknown timer key '{other}'")),
    };
    if let Some(extra) = words.next() {
        return Err(format!("unexpected '{extra}'"));
    }
    Ok(command)
}

/// Runs one fresh timer session over the session's current schedule.
pub async fn run<E, R>(
    session: &Session,
    emitter: E,
    renderer: &TerminalRenderer,
    lines: &mut Lines<R>,
) -> Result<TimerOutcome>
where
    E: ToneEmitter,
    R: AsyncBufRead + Unpin,
{
    let mut engine = session.timer(emitter);
    let (tx, mut rx) = mpsc::channel(16);

    renderer.render(TIMER_HELP)?;

    let mut render_error = None;
    let outcome = {
        let timer = run_timer(&mut engine, &mut rx, |snapshot, cues: &[Cue]| {
            if !cues.is_empty() {
                debug!("Cues: {cues:?}");
            }
            if let Err(e) = renderer.status(snapshot) {
                render_error.get_or_insert(e);
            }
        });
        tokio::pin!(timer);

        tokio::select! {
            exit = &mut timer => match exit {
                TimerExit::Left => TimerOutcome::Back,
                TimerExit::Disconnected => TimerOutcome::EndOfInput,
            },
            input = forward_commands(lines, tx, renderer) => {
                let input = input?;
                // Let the loop drain what was already sent, including Leave.
                timer.await;
                input
            }
        }
    };

    if let Some(e) = render_error {
        return Err(e).context("Failed to print timer status");
    }
    info!("Timer mode closed: {outcome:?}");
    Ok(outcome)
}

/// Reads lines and sends the matching commands until the user leaves,
/// input ends or Ctrl-C arrives. Dropping `tx` on return disconnects the
/// timer loop once it has drained the channel.
async fn forward_commands<R>(
    lines: &mut Lines<R>,
    tx: mpsc::Sender<TimerCommand>,
    renderer: &TerminalRenderer,
) -> Result<TimerOutcome>
where
    R: AsyncBufRead + Unpin,
{
    loop {
        let line = tokio::select! {
            line = lines.next_line() => line.context("Failed to read input")?,
            _ = signal::ctrl_c() => {
                info!("Interrupted in timer mode");
                // The loop may already be gone; nothing to stop then.
                let _ = tx.send(TimerCommand::Leave).await;
                return Ok(TimerOutcome::Interrupted);
            }
        };
        let Some(line) = line else {
            return Ok(TimerOutcome::EndOfInput);
        };

        match parse_timer_line(&line) {
            Ok(command) => {
                if tx.send(command).await.is_err() {
                    return Ok(TimerOutcome::Back);
                }
                if command == TimerCommand::Leave {
                    return Ok(TimerOutcome::Back);
                }
            }
            Err(message) => {
                warn!("Rejected timer input: {line}");
                renderer.render(&format!("{message}\n{TIMER_HELP}"))?;
            }
        }
    }
}

//! Interactive recipe builder.
//!
//! Reads one command per line, applies it to the session's schedule and
//! prints the outcome. `timer` hands the current schedule to a fresh timer
//! session; edits made afterwards only affect the next one.

use anyhow::{Context, Result};
use brew_core::{
    display::{CreateResult, DeleteResult, OperationStatus, UpdateResult},
    params::{Id, StepCreate, UpdateStep},
    Session,
};
use clap::Parser;
use log::{debug, info};
use tokio::{
    io::{AsyncBufRead, Lines},
    signal,
};

use crate::{
    audio::RodioEmitter,
    cli::{split_line, BuilderCommand, BuilderLine},
    renderer::TerminalRenderer,
    timer_view::{self, TimerOutcome},
};

const PROMPT: &str = "brew>";

/// Whether the read loop keeps going after a command.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Flow {
    Continue,
    Quit,
}

/// The builder's state: the session being edited and the terminal it talks
/// to. The audio device is opened by the first audible cue.
pub struct Builder {
    session: Session,
    renderer: TerminalRenderer,
    emitter: RodioEmitter,
}

impl Builder {
    pub fn new(session: Session, renderer: TerminalRenderer) -> Self {
        Self {
            session,
            renderer,
            emitter: RodioEmitter::new(),
        }
    }

    /// Prints the recipe listing.
    pub fn list(&self) -> Result<()> {
        self.renderer.render(&self.session.schedule.to_string())
    }

    /// Runs the read loop until `quit`, end of input or Ctrl-C.
    pub async fn run<R>(&mut self, lines: &mut Lines<R>) -> Result<()>
    where
        R: AsyncBufRead + Unpin,
    {
        self.list()?;
        loop {
            self.renderer.prompt(PROMPT)?;
            let line = tokio::select! {
                line = lines.next_line() => line.context("Failed to read input")?,
                _ = signal::ctrl_c() => {
                    info!("Interrupted in builder");
                    return Ok(());
                }
            };
            let Some(line) = line else {
                debug!("End of input");
                return Ok(());
            };

            if self.handle_line(&line, lines).await? == Flow::Quit {
                return Ok(());
            }
        }
    }

    /// Enters timer mode with the current schedule.
    pub async fn timer<R>(&self, lines: &mut Lines<R>) -> Result<TimerOutcome>
    where
        R: AsyncBufRead + Unpin,
    {
        timer_view::run(&self.session, &self.emitter, &self.renderer, lines).await
    }

    async fn handle_line<R>(&mut self, line: &str, lines: &mut Lines<R>) -> Result<Flow>
    where
        R: AsyncBufRead + Unpin,
    {
        let words = match split_line(line) {
            Ok(words) if words.is_empty() => return Ok(Flow::Continue),
            Ok(words) => words,
            Err(message) => {
                self.renderer
                    .render(&OperationStatus::failure(message).to_string())?;
                return Ok(Flow::Continue);
            }
        };

        let command = match BuilderLine::try_parse_from(words) {
            Ok(parsed) => parsed.command,
            Err(e) => {
                // Covers `help` as well as real parse errors.
                self.renderer.render(&e.to_string())?;
                return Ok(Flow::Continue);
            }
        };
        debug!("Builder command {command:?}");

        match command {
            BuilderCommand::Add(args) => self.add_step(&args.into())?,
            BuilderCommand::Edit(args) => self.edit_step(&args.into())?,
            BuilderCommand::Remove(args) => self.remove_step(args.into())?,
            BuilderCommand::Show(args) => self.show_step(args.into())?,
            BuilderCommand::Grams(args) => {
                let status = match self.session.schedule.set_coffee_grams(args.grams) {
                    Ok(()) => OperationStatus::success(format!(
                        "Coffee set to {} g, target {} ml",
                        args.grams,
                        self.session.schedule.target_water()
                    )),
                    Err(e) => OperationStatus::failure(e.to_string()),
                };
                self.renderer.render(&status.to_string())?;
            }
            BuilderCommand::Ratio(args) => {
                let status = match self.session.schedule.set_ratio(args.ratio) {
                    Ok(()) => OperationStatus::success(format!(
                        "Ratio set to 1:{}, target {} ml",
                        args.ratio,
                        self.session.schedule.target_water()
                    )),
                    Err(e) => OperationStatus::failure(e.to_string()),
                };
                self.renderer.render(&status.to_string())?;
            }
            BuilderCommand::Default => {
                self.session.schedule.reset_to_default();
                info!("Recipe reset to default");
                self.list()?;
            }
            BuilderCommand::List => self.list()?,
            BuilderCommand::Timer => {
                if self.timer(lines).await? != TimerOutcome::Back {
                    return Ok(Flow::Quit);
                }
                self.list()?;
            }
            BuilderCommand::Quit => return Ok(Flow::Quit),
        }
        Ok(Flow::Continue)
    }

    fn add_step(&mut self, params: &StepCreate) -> Result<()> {
        let step = self.session.schedule.add_step(params).clone();
        info!("Added step {} ({})", step.id, step.name);
        self.renderer.render(&CreateResult::new(step).to_string())?;
        self.render_totals()
    }

    fn edit_step(&mut self, params: &UpdateStep) -> Result<()> {
        if params.is_empty() {
            let status = OperationStatus::failure("Nothing to change".to_string());
            return self.renderer.render(&status.to_string());
        }
        match self.session.schedule.update_step(params).cloned() {
            Some(step) => {
                info!("Updated step {}", step.id);
                let result = UpdateResult::from_update(step, params);
                self.renderer.render(&result.to_string())?;
                self.render_totals()
            }
            None => self.render_missing(params.id),
        }
    }

    fn remove_step(&mut self, Id { id }: Id) -> Result<()> {
        match self.session.schedule.remove_step(id) {
            Some(step) => {
                info!("Removed step {}", step.id);
                self.renderer.render(&DeleteResult::new(step).to_string())?;
                self.render_totals()
            }
            None => self.render_missing(id),
        }
    }

    fn show_step(&self, Id { id }: Id) -> Result<()> {
        match self.session.schedule.get_step(id) {
            Some(step) => self.renderer.render(&step.to_string()),
            None => self.render_missing(id),
        }
    }

    fn render_totals(&self) -> Result<()> {
        self.renderer
            .render(&self.session.schedule.aggregates().to_string())
    }

    fn render_missing(&self, id: u64) -> Result<()> {
        let status = OperationStatus::failure(format!("No step with ID {id}"));
        self.renderer.render(&status.to_string())
    }
}

//! Brew CLI Application
//!
//! Command-line recipe builder and brew timer for pour-over coffee.

mod args;
mod audio;
mod builder;
mod cli;
mod renderer;
mod timer_view;

use anyhow::{Context, Result};
use args::{Args, Commands};
use brew_core::SessionBuilder;
use builder::Builder;
use clap::Parser;
use log::info;
use renderer::TerminalRenderer;
use timer_view::TimerOutcome;
use tokio::io::{self, AsyncBufReadExt, BufReader};
use Commands::*;

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<()> {
    env_logger::init();

    let Args {
        config,
        recipe,
        volume,
        mute,
        no_color,
        command,
    } = Args::parse();

    let session = SessionBuilder::new()
        .with_config_path(config)
        .with_recipe_path(recipe)
        .with_volume(volume)
        .muted(mute)
        .no_color(no_color)
        .build()
        .context("Failed to initialize session")?;

    let renderer = TerminalRenderer::new(session.config.color);

    info!("Brew started");

    let mut lines = BufReader::new(io::stdin()).lines();
    match command.unwrap_or(Build) {
        Show => renderer.render(&session.schedule.to_string()),
        Build => Builder::new(session, renderer).run(&mut lines).await,
        Timer => {
            let mut builder = Builder::new(session, renderer);
            match builder.timer(&mut lines).await? {
                TimerOutcome::Back => builder.run(&mut lines).await,
                TimerOutcome::EndOfInput | TimerOutcome::Interrupted => Ok(()),
            }
        }
    }
}

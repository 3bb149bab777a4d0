use std::path::PathBuf;

use brew_core::params::parse_volume;
use clap::{Parser, Subcommand};

/// Pour-over recipe builder and brew timer
///
/// Build a pour schedule from a coffee dose and a brew ratio, then brew it
/// with an audible timer: a ten second preparation countdown, ticks during
/// the last ten seconds of every step and a tone at every step change.
#[derive(Parser)]
#[command(version, about, name = "brew")]
pub struct Args {
    /// Path to the configuration file. Defaults to
    /// $XDG_CONFIG_HOME/brew/config.json
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    /// Recipe JSON file to start from instead of the built-in recipe
    #[arg(long, global = true)]
    pub recipe: Option<PathBuf>,

    /// Cue volume between 0 and 1
    #[arg(long, global = true, value_parser = parse_volume)]
    pub volume: Option<f32>,

    /// Start every timer session muted
    #[arg(long, global = true)]
    pub mute: bool,

    /// Disable colored output and use plain text
    #[arg(long, global = true)]
    pub no_color: bool,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

/// Top-level modes of the brew CLI
#[derive(Subcommand, Clone, Copy, PartialEq, Eq, Debug)]
pub enum Commands {
    /// Edit the recipe interactively (default)
    #[command(alias = "b")]
    Build,
    /// Go straight to the timer with the starting recipe
    #[command(alias = "t")]
    Timer,
    /// Print the recipe and exit
    #[command(alias = "s")]
    Show,
}
